// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for numeral conversion and the batch driver.
//!
//! Two layers. [`NumeralError`] covers a single token: it never aborts a run
//! on its own. [`BatchError`] covers the framing around the tokens (the count
//! line, I/O, truncated input) and strict-mode aborts.

use std::fmt;
use std::io;

use thiserror::Error;

/// Which vocabulary a digit name was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    /// Units digit, values 0-12.
    Low,
    /// Multiples-of-13 digit, values 1-12.
    High,
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Low => f.write_str("low"),
            Place::High => f.write_str("high"),
        }
    }
}

/// Failure converting a single token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("invalid decimal digit {found:?} at position {position} in {token:?}")]
    InvalidDecimalDigit {
        token: String,
        position: usize,
        found: char,
    },

    #[error("unknown {place} digit name {name:?}")]
    UnknownDigitName { name: String, place: Place },

    #[error("malformed named numeral {token:?}: {reason}")]
    MalformedNamedNumeral { token: String, reason: &'static str },

    #[error("line is not valid UTF-8 (first bad byte at {position})")]
    InvalidUtf8 { position: usize },

    #[error("empty token")]
    EmptyToken,

    #[error("decimal {token:?} does not fit in 32 bits")]
    DecimalOverflow { token: String },

    #[error("value {value} exceeds the largest two-digit numeral ({max})")]
    ValueOutOfRange { value: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, NumeralError>;

/// Failure of a whole batch run.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid line count {0:?}")]
    InvalidLineCount(String),

    #[error("input ended after {got} of {expected} lines")]
    TruncatedInput { expected: usize, got: usize },

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: NumeralError,
    },
}

pub type BatchResult<T> = std::result::Result<T, BatchError>;
