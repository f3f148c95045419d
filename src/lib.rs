// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! Conversion between decimal and named base-13 ("Martian") numerals.
//!
//! A named numeral spells a number in base 13 with one or two digit names,
//! most significant first: `may` is 5, `tam tret` is 13, `jou dec` is 168.
//! The crate converts in both directions and drives count-framed batches
//! from any reader.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  digits.rs  │────▶│  numeral.rs  │────▶│ convert.rs  │
//! │ (LOW, HIGH, │     │(NamedNumeral,│     │ (classify,  │
//! │  lookups)   │     │   Shape)     │     │  convert)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        │            ┌──────────────┐     ┌─────────────┐
//!        └───────────▶│ contracts.rs │     │  batch.rs   │
//!                     │ (debug-mode  │     │ (run_batch, │
//!                     │  invariants) │     │ convert_all)│
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use marsnum::{convert, Converted};
//!
//! assert_eq!(convert("27").unwrap(), Converted::Named("hel jan".into()));
//! assert_eq!(convert("hel jan").unwrap(), Converted::Decimal(27));
//! ```

pub mod batch;
pub mod contracts;
mod convert;
mod decimal;
pub mod digits;
pub mod error;
mod numeral;

pub use batch::{convert_all, run_batch, BatchOptions, BatchSummary, OutputFormat};
pub use convert::{
    classify, convert, decimal_to_named, named_to_decimal, to_named, Converted, TokenKind,
};
pub use decimal::parse_decimal;
pub use digits::{MAX_VALUE, RADIX};
pub use error::{BatchError, BatchResult, NumeralError, Place, Result};
pub use numeral::{NamedNumeral, Shape};

/// Install the stderr log subscriber.
///
/// Filter comes from `MARSNUM_LOG` (EnvFilter syntax), default `warn`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("MARSNUM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
