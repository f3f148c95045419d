// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use marsnum::{convert_all, run_batch, BatchSummary};

mod cli;
use cli::{display, Cli, Commands, Format};

fn main() {
    marsnum::init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.batch_options();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let summary = match &cli.command {
        Some(Commands::Table) => {
            let rendered = match cli.format {
                Format::Json => display::render_table_json().context("encoding table")?,
                Format::Text => display::render_table(display::use_colors()),
            };
            out.write_all(rendered.as_bytes())?;
            out.flush()?;
            return Ok(());
        }
        Some(Commands::Convert { tokens }) => convert_all(tokens, &mut out, &options)?,
        None => match &cli.input {
            Some(path) => {
                let file = File::open(path).with_context(|| format!("opening {path}"))?;
                run_batch(BufReader::new(file), &mut out, &options)
                    .with_context(|| format!("reading {path}"))?
            }
            None => run_batch(io::stdin().lock(), &mut out, &options)?,
        },
    };

    report(&summary);
    Ok(())
}

fn report(summary: &BatchSummary) {
    if summary.failed > 0 {
        tracing::warn!(
            converted = summary.converted,
            failed = summary.failed,
            "some lines could not be converted"
        );
    }
}
