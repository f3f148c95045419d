// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the digit tables and conversions.
//!
//! Debug-mode assertions that catch a broken table or a conversion that does
//! not invert. They compile to nothing in release builds.
//!
//! | Contract Function              | Property                                  |
//! |--------------------------------|-------------------------------------------|
//! | `check_tables_disjoint`        | No name appears in both vocabularies      |
//! | `check_tables_unique`          | No name appears twice in one vocabulary   |
//! | `check_numeral_well_formed`    | Digits lie inside their tables            |
//! | `check_round_trip`             | Canonical spelling parses back to value   |
//!
//! # Usage
//!
//! ```ignore
//! use marsnum::contracts::*;
//!
//! // In debug builds, this panics if the tables overlap
//! check_tables_disjoint();
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // One units name per value 0..RADIX, one high name per value 1..RADIX.
    assert!(LOW.len() == RADIX as usize);
    assert!(HIGH.len() == RADIX as usize - 1);

    // Largest two-digit numeral is jou dec.
    assert!(MAX_VALUE == 12 * 13 + 12);
};

use crate::digits::{self, HIGH, LOW, MAX_VALUE, RADIX};
use crate::numeral::NamedNumeral;

// ============================================================================
// TABLE CONTRACTS
// ============================================================================

/// Check that no digit name belongs to both tables.
///
/// Single-token parsing tries LOW first, so an overlap would silently make a
/// high digit unreachable.
///
/// # Panics (debug builds only)
/// Panics naming the first shared entry.
#[inline]
pub fn check_tables_disjoint() {
    for name in HIGH {
        debug_assert!(
            !LOW.contains(&name),
            "Contract violation: tables disjoint - {:?} is both a units and a high digit",
            name
        );
    }
}

/// Check that each table names every value once.
#[inline]
pub fn check_tables_unique() {
    for (i, name) in LOW.iter().enumerate() {
        debug_assert!(
            !LOW[..i].contains(name),
            "Contract violation: LOW[{}] {:?} is a duplicate",
            i,
            name
        );
    }
    for (i, name) in HIGH.iter().enumerate() {
        debug_assert!(
            !HIGH[..i].contains(name),
            "Contract violation: HIGH[{}] {:?} is a duplicate",
            i,
            name
        );
    }
}

// ============================================================================
// NUMERAL CONTRACTS
// ============================================================================

/// Check that a numeral's digits are inside their tables.
///
/// # Panics (debug builds only)
/// Panics if a digit has no name or the value exceeds [`MAX_VALUE`].
#[inline]
pub fn check_numeral_well_formed(numeral: &NamedNumeral) {
    debug_assert!(
        numeral.high().is_some() || numeral.low().is_some(),
        "Contract violation: numeral has no digits"
    );
    if let Some(high) = numeral.high() {
        debug_assert!(
            digits::high_name(high).is_some(),
            "Contract violation: high digit {} outside 1..{}",
            high,
            RADIX
        );
    }
    if let Some(low) = numeral.low() {
        debug_assert!(
            digits::low_name(low).is_some(),
            "Contract violation: units digit {} outside 0..{}",
            low,
            RADIX
        );
    }
    debug_assert!(
        numeral.value() <= MAX_VALUE,
        "Contract violation: value {} > {}",
        numeral.value(),
        MAX_VALUE
    );
}

/// Check that a canonical numeral spells `value` and parses back to it.
///
/// # Panics (debug builds only)
/// Panics if the spelling is not canonical or the round trip disagrees.
#[inline]
pub fn check_round_trip(value: u32, numeral: &NamedNumeral) {
    check_numeral_well_formed(numeral);
    debug_assert!(
        numeral.is_canonical(),
        "Contract violation: {:?} is not a canonical spelling",
        numeral
    );
    debug_assert_eq!(
        numeral.value(),
        value,
        "Contract violation: numeral {:?} does not spell {}",
        numeral,
        value
    );
    debug_assert_eq!(
        numeral.to_string().parse::<NamedNumeral>().ok(),
        Some(*numeral),
        "Contract violation: round trip - {:?} does not parse back",
        numeral.to_string()
    );
}
