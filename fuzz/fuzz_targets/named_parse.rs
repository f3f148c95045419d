// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for named numeral parsing.
//!
//! The parser sees whatever a user types. It should return Err on garbage,
//! never panic, and anything it accepts must survive a canonical round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use marsnum::{NamedNumeral, MAX_VALUE};

fuzz_target!(|data: &str| {
    // Property 1: parsing never panics
    if let Ok(numeral) = data.parse::<NamedNumeral>() {
        // Property 2: accepted values are in range
        assert!(numeral.value() <= MAX_VALUE);

        // Property 3: canonical spelling parses back to the same value
        let canonical = numeral.canonical();
        let reparsed: NamedNumeral = canonical
            .to_string()
            .parse()
            .expect("canonical spelling should always parse");
        assert_eq!(reparsed, canonical);
        assert_eq!(reparsed.value(), numeral.value());
    }
});
