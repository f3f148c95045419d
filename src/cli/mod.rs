// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the marsnum command-line interface.
//!
//! With no subcommand the tool reads a count-framed batch from stdin (or
//! `--input`). `convert` takes tokens as arguments instead, and `table`
//! prints the digit vocabularies.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use marsnum::{BatchOptions, OutputFormat};

#[derive(Parser)]
#[command(
    name = "marsnum",
    about = "Convert between decimal and named base-13 numerals",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read the batch from a file instead of stdin
    #[arg(short, long, global = true)]
    pub input: Option<String>,

    /// Stop at the first token that fails to convert (exit 1)
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: Format,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert tokens given on the command line, one result per line
    Convert {
        /// Decimal or named numerals; quote two-digit names ("hel jan")
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Print the digit name tables
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            strict: self.strict,
            format: self.format.into(),
        }
    }
}
