// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! Line-count framed batch driver.
//!
//! Input is a count line followed by that many tokens, one per line. Each
//! token is converted independently and its result written straight away,
//! so output order always matches input order.
//!
//! A bad token does not stop the run unless `strict` is set: its slot gets
//! an `error: ...` marker instead and the next line is processed. Framing
//! problems (unreadable count, missing lines, I/O) always end the run.
//!
//! ```text
//! stdin               stdout
//! ─────               ──────
//! 4
//! 29          ──▶     hel mar
//! elo nov     ──▶     115
//! xyz         ──▶     error: unknown low digit name "xyz"
//! 13          ──▶     tam tret
//! ```

use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::contracts;
use crate::convert::{convert, Converted};
use crate::decimal::parse_decimal;
use crate::error::{BatchError, BatchResult, NumeralError};

/// How results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One converted value (or error marker) per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Abort on the first token that fails to convert.
    pub strict: bool,
    pub format: OutputFormat,
}

/// Per-run tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn lines(&self) -> usize {
        self.converted + self.failed
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonOutput<'a> {
    Named(&'a str),
    Decimal(u32),
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<JsonOutput<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Write one result in the chosen format.
fn write_record<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    input: &str,
    result: &Result<Converted, NumeralError>,
) -> BatchResult<()> {
    match format {
        OutputFormat::Text => match result {
            Ok(converted) => writeln!(writer, "{converted}")?,
            Err(err) => writeln!(writer, "error: {err}")?,
        },
        OutputFormat::Json => {
            let record = JsonRecord {
                input,
                output: result.as_ref().ok().map(|converted| match converted {
                    Converted::Named(spelling) => JsonOutput::Named(spelling),
                    Converted::Decimal(value) => JsonOutput::Decimal(*value),
                }),
                error: result.as_ref().err().map(ToString::to_string),
            };
            serde_json::to_writer(&mut *writer, &record).map_err(io::Error::from)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Convert one line, write its result, and update the tallies.
fn process_line<W: Write>(
    writer: &mut W,
    options: &BatchOptions,
    summary: &mut BatchSummary,
    line_no: usize,
    line: &str,
) -> BatchResult<()> {
    let input = line.trim();
    record(writer, options, summary, line_no, input, convert(input))
}

/// Tally and write one result; in strict mode a failure ends the run.
fn record<W: Write>(
    writer: &mut W,
    options: &BatchOptions,
    summary: &mut BatchSummary,
    line_no: usize,
    input: &str,
    result: Result<Converted, NumeralError>,
) -> BatchResult<()> {
    match &result {
        Ok(_) => summary.converted += 1,
        Err(err) => {
            tracing::warn!(line = line_no, input, %err, "conversion failed");
            if options.strict {
                writer.flush()?;
                return Err(BatchError::Line {
                    line: line_no,
                    source: err.clone(),
                });
            }
            summary.failed += 1;
        }
    }

    write_record(writer, options.format, input, &result)
}

/// Read one line as raw bytes, without its `\n` or `\r\n` terminator.
///
/// Returns `Ok(None)` at end of input. Bad UTF-8 is a property of the line,
/// not of the stream, so it comes back as the inner `Err`.
fn read_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<Option<Result<String, NumeralError>>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    let line = std::str::from_utf8(buf)
        .map(str::to_owned)
        .map_err(|err| NumeralError::InvalidUtf8 {
            position: err.valid_up_to(),
        });
    Ok(Some(line))
}

fn parse_count(line: &str) -> BatchResult<usize> {
    parse_decimal(line.trim())
        .map(|count| count as usize)
        .map_err(|_| BatchError::InvalidLineCount(line.to_string()))
}

/// Run a count-framed batch from `reader`, writing results to `writer`.
///
/// Reads exactly as many lines as the count line announces; anything after
/// that is left unread.
pub fn run_batch<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    options: &BatchOptions,
) -> BatchResult<BatchSummary> {
    contracts::check_tables_disjoint();
    contracts::check_tables_unique();

    let mut buf = Vec::new();
    let count_line = match read_line(&mut reader, &mut buf)? {
        Some(Ok(line)) => line,
        Some(Err(_)) => {
            return Err(BatchError::InvalidLineCount(
                String::from_utf8_lossy(&buf).into_owned(),
            ))
        }
        None => return Err(BatchError::InvalidLineCount(String::new())),
    };
    let expected = parse_count(&count_line)?;
    tracing::debug!(expected, "batch start");

    let mut summary = BatchSummary::default();
    for line_no in 1..=expected {
        let Some(line) = read_line(&mut reader, &mut buf)? else {
            writer.flush()?;
            return Err(BatchError::TruncatedInput {
                expected,
                got: line_no - 1,
            });
        };
        match line {
            Ok(line) => process_line(writer, options, &mut summary, line_no, &line)?,
            Err(err) => {
                let input = String::from_utf8_lossy(&buf);
                record(writer, options, &mut summary, line_no, input.trim(), Err(err))?;
            }
        }
    }

    writer.flush()?;
    tracing::debug!(
        converted = summary.converted,
        failed = summary.failed,
        "batch done"
    );
    Ok(summary)
}

/// Convert tokens given directly, without a count line.
pub fn convert_all<I, S, W>(
    tokens: I,
    writer: &mut W,
    options: &BatchOptions,
) -> BatchResult<BatchSummary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut summary = BatchSummary::default();
    for (i, token) in tokens.into_iter().enumerate() {
        process_line(writer, options, &mut summary, i + 1, token.as_ref())?;
    }
    writer.flush()?;
    Ok(summary)
}
