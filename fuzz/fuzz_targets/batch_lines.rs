// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the batch driver.
//!
//! Arbitrary tokens framed with a correct count must produce exactly one
//! output line each, whatever the tokens contain.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use marsnum::{run_batch, BatchOptions, OutputFormat};

#[derive(Debug, Arbitrary)]
struct Input {
    tokens: Vec<String>,
    json: bool,
}

fuzz_target!(|input: Input| {
    // Newlines inside a token would split it into several lines.
    let tokens: Vec<String> = input
        .tokens
        .into_iter()
        .map(|t| t.replace(['\n', '\r'], " "))
        .collect();

    let mut batch = format!("{}\n", tokens.len());
    for token in &tokens {
        batch.push_str(token);
        batch.push('\n');
    }

    let options = BatchOptions {
        strict: false,
        format: if input.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };

    let mut out = Vec::new();
    let summary = run_batch(batch.as_bytes(), &mut out, &options).expect("framed batch");
    assert_eq!(summary.lines(), tokens.len());

    let out = String::from_utf8(out).expect("output is UTF-8");
    assert_eq!(out.lines().count(), tokens.len());
});
