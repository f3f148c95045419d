// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! Digit vocabularies for named base-13 numerals.
//!
//! Two tables. LOW names the units digit (0-12). HIGH names the
//! multiples-of-13 digit (1-12); there is no HIGH name for zero, a number
//! under 13 simply has no high digit. Reverse lookups are built once on
//! first use and never change.
//!
//! ```text
//! value  0    1    2    3    4    5    6    7    8    9    10   11   12
//! LOW    tret jan  feb  mar  apr  may  jun  jly  aug  sep  oct  nov  dec
//! HIGH   -    tam  hel  maa  huh  tou  kes  hei  elo  syy  lok  mer  jou
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::Place;

/// Radix of the numeral system.
pub const RADIX: u32 = 13;

/// Largest value with a two-digit spelling: `jou dec` = 12 * 13 + 12.
pub const MAX_VALUE: u32 = (RADIX - 1) * RADIX + (RADIX - 1);

/// Units-digit names, index = value.
pub const LOW: [&str; 13] = [
    "tret", "jan", "feb", "mar", "apr", "may", "jun", "jly", "aug", "sep", "oct", "nov", "dec",
];

/// High-digit names, index = value - 1.
pub const HIGH: [&str; 12] = [
    "tam", "hel", "maa", "huh", "tou", "kes", "hei", "elo", "syy", "lok", "mer", "jou",
];

static LOW_LOOKUP: LazyLock<HashMap<&'static str, u8>> = LazyLock::new(|| {
    LOW.iter()
        .enumerate()
        .map(|(value, &name)| (name, value as u8))
        .collect()
});

static HIGH_LOOKUP: LazyLock<HashMap<&'static str, u8>> = LazyLock::new(|| {
    HIGH.iter()
        .enumerate()
        .map(|(index, &name)| (name, index as u8 + 1))
        .collect()
});

/// Name of a units digit, `None` above 12.
#[inline]
pub fn low_name(value: u8) -> Option<&'static str> {
    LOW.get(value as usize).copied()
}

/// Name of a high digit, `None` for 0 or above 12.
#[inline]
pub fn high_name(value: u8) -> Option<&'static str> {
    let index = (value as usize).checked_sub(1)?;
    HIGH.get(index).copied()
}

/// Value of a units-digit name. ASCII case is ignored.
pub fn low_value(name: &str) -> Option<u8> {
    lookup(&LOW_LOOKUP, name)
}

/// Value of a high-digit name. ASCII case is ignored.
pub fn high_value(name: &str) -> Option<u8> {
    lookup(&HIGH_LOOKUP, name)
}

/// Which table a name belongs to, if any.
///
/// The vocabularies are disjoint, so at most one place matches.
pub fn place_of(name: &str) -> Option<Place> {
    if low_value(name).is_some() {
        Some(Place::Low)
    } else if high_value(name).is_some() {
        Some(Place::High)
    } else {
        None
    }
}

fn lookup(table: &HashMap<&'static str, u8>, name: &str) -> Option<u8> {
    if let Some(&value) = table.get(name) {
        return Some(value);
    }
    // Slow path only when the name is not already lowercase.
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        return table.get(name.to_ascii_lowercase().as_str()).copied();
    }
    None
}
