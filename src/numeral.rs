// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! The named numeral value type.
//!
//! A named numeral is one or two digit names, most significant first:
//!
//! ```text
//! "may"       Units     5
//! "tam"       BareHigh  1 * 13        = 13
//! "hel jan"   Full      2 * 13 + 1    = 27
//! ```
//!
//! `BareHigh` is the shorthand where a zero units digit is left out. It is
//! accepted on input but never produced: the canonical spelling of 13 is
//! `tam tret`.

use std::fmt;
use std::str::FromStr;

use crate::digits::{self, MAX_VALUE, RADIX};
use crate::error::{NumeralError, Place, Result};

/// How a numeral was spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A single units digit.
    Units,
    /// A single high digit standing for `high * 13`.
    BareHigh,
    /// A high digit followed by a units digit.
    Full,
}

/// A validated named numeral.
///
/// Fields are private so every instance holds digits inside the tables:
/// `high` in 1..=12, `low` in 0..=12, and at least one of them present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedNumeral {
    high: Option<u8>,
    low: Option<u8>,
}

impl NamedNumeral {
    /// Canonical numeral for `value`.
    ///
    /// Values under 13 get a single units digit; everything else up to
    /// [`MAX_VALUE`] gets both digits, including a `tret` units digit for
    /// exact multiples of 13.
    pub fn from_value(value: u32) -> Result<Self> {
        if value > MAX_VALUE {
            return Err(NumeralError::ValueOutOfRange {
                value,
                max: MAX_VALUE,
            });
        }
        let numeral = if value < RADIX {
            Self {
                high: None,
                low: Some(value as u8),
            }
        } else {
            Self {
                high: Some((value / RADIX) as u8),
                low: Some((value % RADIX) as u8),
            }
        };
        Ok(numeral)
    }

    pub fn shape(&self) -> Shape {
        match (self.high, self.low) {
            (Some(_), Some(_)) => Shape::Full,
            (Some(_), None) => Shape::BareHigh,
            _ => Shape::Units,
        }
    }

    /// High digit value, if spelled.
    pub fn high(&self) -> Option<u8> {
        self.high
    }

    /// Units digit value, if spelled.
    pub fn low(&self) -> Option<u8> {
        self.low
    }

    /// Decimal value.
    pub fn value(&self) -> u32 {
        u32::from(self.high.unwrap_or(0)) * RADIX + u32::from(self.low.unwrap_or(0))
    }

    /// Same value, spelled the canonical way.
    pub fn canonical(self) -> Self {
        match self.shape() {
            Shape::BareHigh => Self {
                high: self.high,
                low: Some(0),
            },
            _ => self,
        }
    }

    pub fn is_canonical(&self) -> bool {
        self.shape() != Shape::BareHigh
    }

    fn parse_single(name: &str) -> Result<Self> {
        if let Some(low) = digits::low_value(name) {
            return Ok(Self {
                high: None,
                low: Some(low),
            });
        }
        if let Some(high) = digits::high_value(name) {
            tracing::debug!(name, value = u32::from(high) * RADIX, "bare high digit");
            return Ok(Self {
                high: Some(high),
                low: None,
            });
        }
        Err(NumeralError::UnknownDigitName {
            name: name.to_string(),
            place: Place::Low,
        })
    }

    fn parse_pair(token: &str, high: &str, low: &str) -> Result<Self> {
        let high = digits::high_value(high).ok_or_else(|| {
            if digits::low_value(high).is_some() {
                malformed(token, "units digit in the high place")
            } else {
                NumeralError::UnknownDigitName {
                    name: high.to_string(),
                    place: Place::High,
                }
            }
        })?;
        let low = digits::low_value(low).ok_or_else(|| {
            if digits::high_value(low).is_some() {
                malformed(token, "high digit in the units place")
            } else {
                NumeralError::UnknownDigitName {
                    name: low.to_string(),
                    place: Place::Low,
                }
            }
        })?;
        Ok(Self {
            high: Some(high),
            low: Some(low),
        })
    }
}

fn malformed(token: &str, reason: &'static str) -> NumeralError {
    NumeralError::MalformedNamedNumeral {
        token: token.to_string(),
        reason,
    }
}

impl FromStr for NamedNumeral {
    type Err = NumeralError;

    /// Parse one or two whitespace-separated digit names.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_ascii_whitespace();
        let first = parts.next().ok_or(NumeralError::EmptyToken)?;
        let second = parts.next();
        if parts.next().is_some() {
            return Err(malformed(s, "more than two digit names"));
        }

        match second {
            None => Self::parse_single(first),
            Some(low) => Self::parse_pair(s, first, low),
        }
    }
}

impl fmt::Display for NamedNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let high = self.high.and_then(digits::high_name);
        let low = self.low.and_then(digits::low_name);
        match (high, low) {
            (Some(high), Some(low)) => write!(f, "{high} {low}"),
            (Some(name), None) | (None, Some(name)) => f.write_str(name),
            (None, None) => Ok(()),
        }
    }
}
