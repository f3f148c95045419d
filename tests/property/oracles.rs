//! Reference oracle for differential testing.
//!
//! Enumerates every spelling the vocabularies allow and records its value by
//! plain arithmetic. Slow but obviously correct; the real parser and
//! formatter must agree with it everywhere.

use std::collections::HashMap;

use marsnum::digits::{HIGH, LOW};
use marsnum::{named_to_decimal, to_named, MAX_VALUE};
use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Every accepted spelling and its value, canonical or not.
pub fn oracle_spellings() -> HashMap<String, u32> {
    let mut spellings = HashMap::new();
    for (low, low_name) in LOW.iter().enumerate() {
        spellings.insert(low_name.to_string(), low as u32);
    }
    for (index, high_name) in HIGH.iter().enumerate() {
        let high = index as u32 + 1;
        spellings.insert(high_name.to_string(), high * 13);
        for (low, low_name) in LOW.iter().enumerate() {
            spellings.insert(format!("{high_name} {low_name}"), high * 13 + low as u32);
        }
    }
    spellings
}

/// Canonical spelling by digit extraction.
pub fn oracle_canonical(value: u32) -> Option<String> {
    match value {
        0..=12 => Some(LOW[value as usize].to_string()),
        13..=168 => Some(format!(
            "{} {}",
            HIGH[(value / 13) as usize - 1],
            LOW[(value % 13) as usize]
        )),
        _ => None,
    }
}

// =============================================================================
// DIFFERENTIAL TESTS
// =============================================================================

#[test]
fn oracle_covers_every_spelling() {
    // 13 units + 12 bare highs + 12 * 13 pairs
    assert_eq!(oracle_spellings().len(), 13 + 12 + 12 * 13);
}

#[test]
fn parser_agrees_with_oracle_on_every_spelling() {
    for (spelling, value) in oracle_spellings() {
        assert_eq!(named_to_decimal(&spelling), Ok(value), "{spelling}");
    }
}

#[test]
fn formatter_agrees_with_oracle_on_whole_range() {
    for value in 0..=MAX_VALUE {
        assert_eq!(to_named(value).ok(), oracle_canonical(value), "{value}");
    }
}

proptest! {
    #[test]
    fn formatter_agrees_with_oracle(value in 0u32..1000) {
        prop_assert_eq!(to_named(value).ok(), oracle_canonical(value));
    }

    #[test]
    fn parser_rejects_what_oracle_does_not_know(token in "[a-z]{1,5}( [a-z]{1,5})?") {
        let spellings = oracle_spellings();
        match spellings.get(&token) {
            Some(&value) => prop_assert_eq!(named_to_decimal(&token), Ok(value)),
            None => prop_assert!(named_to_decimal(&token).is_err()),
        }
    }
}
