// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! Decimal numeral parsing.

use crate::error::{NumeralError, Result};

/// Parse a string of ASCII digits into an integer.
///
/// Accumulates left to right. No sign, no whitespace, no separators: every
/// character must be `'0'..='9'`. Leading zeros are allowed.
pub fn parse_decimal(token: &str) -> Result<u32> {
    if token.is_empty() {
        return Err(NumeralError::EmptyToken);
    }

    let mut acc: u32 = 0;
    for (position, c) in token.chars().enumerate() {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| NumeralError::InvalidDecimalDigit {
                token: token.to_string(),
                position,
                found: c,
            })?;

        acc = acc
            .checked_mul(10)
            .and_then(|a| a.checked_add(digit))
            .ok_or_else(|| NumeralError::DecimalOverflow {
                token: token.to_string(),
            })?;
    }
    Ok(acc)
}
