// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! Conversion in both directions, plus the classifier that picks one.
//!
//! Both directions use the same convention: most significant digit first,
//! digit names separated by a single space. `decimal_to_named` followed by
//! `named_to_decimal` is the identity on `0..=168`.

use std::fmt;

use crate::contracts;
use crate::decimal::parse_decimal;
use crate::error::{NumeralError, Result};
use crate::numeral::NamedNumeral;

/// What a token looks like, judged by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Decimal,
    Named,
}

/// Classify a token by its first non-whitespace character.
///
/// Only the first character is inspected; the converter for the chosen kind
/// reports anything wrong further in.
pub fn classify(token: &str) -> Result<TokenKind> {
    let first = token
        .trim()
        .chars()
        .next()
        .ok_or(NumeralError::EmptyToken)?;
    if first.is_ascii_digit() {
        Ok(TokenKind::Decimal)
    } else {
        Ok(TokenKind::Named)
    }
}

/// Canonical named spelling of a value.
pub fn to_named(value: u32) -> Result<String> {
    let numeral = NamedNumeral::from_value(value)?;
    contracts::check_round_trip(value, &numeral);
    Ok(numeral.to_string())
}

/// Convert a decimal numeral to its canonical named spelling.
///
/// ```
/// assert_eq!(marsnum::decimal_to_named("13").unwrap(), "tam tret");
/// ```
pub fn decimal_to_named(token: &str) -> Result<String> {
    to_named(parse_decimal(token)?)
}

/// Convert a named numeral to its value.
///
/// ```
/// assert_eq!(marsnum::named_to_decimal("hel jan").unwrap(), 27);
/// assert_eq!(marsnum::named_to_decimal("tam").unwrap(), 13);
/// ```
pub fn named_to_decimal(token: &str) -> Result<u32> {
    let numeral: NamedNumeral = token.parse()?;
    contracts::check_numeral_well_formed(&numeral);
    Ok(numeral.value())
}

/// Result of converting one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converted {
    /// A decimal input, now spelled with digit names.
    Named(String),
    /// A named input, now a number.
    Decimal(u32),
}

impl fmt::Display for Converted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Converted::Named(spelling) => f.write_str(spelling),
            Converted::Decimal(value) => write!(f, "{value}"),
        }
    }
}

/// Classify a token and convert it to the other representation.
pub fn convert(token: &str) -> Result<Converted> {
    let token = token.trim();
    let kind = classify(token)?;
    tracing::debug!(token, ?kind, "converting");
    match kind {
        TokenKind::Decimal => decimal_to_named(token).map(Converted::Named),
        TokenKind::Named => named_to_decimal(token).map(Converted::Decimal),
    }
}
