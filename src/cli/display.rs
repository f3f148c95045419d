// Copyright 2025-present The marsnum Authors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the `table` subcommand.
//!
//! Boxed, colored output when stdout is a terminal; plain columns when piped
//! or when `NO_COLOR` is set. `--format json` skips all of that and emits
//! one object per digit.

use serde::Serialize;

use marsnum::digits::{self, HIGH, LOW};
use marsnum::Place;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 34;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap text in styles and a trailing reset
fn styled(styles: &[&str], text: &str) -> String {
    format!("{}{}{}", styles.join(""), text, RESET)
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

fn boxed_row(out: &mut String, content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    out.push_str(&format!(
        "{GRAY}│{RESET}{}{}{GRAY}│{RESET}\n",
        content,
        " ".repeat(pad)
    ));
}

fn table_rows() -> impl Iterator<Item = (u8, &'static str, Option<&'static str>)> {
    (0..LOW.len() as u8).map(|value| (value, LOW[value as usize], digits::high_name(value)))
}

/// Render both tables, one value per row.
///
/// `boxed` draws borders and colors for a terminal; otherwise columns are
/// tab-separated so the output pipes cleanly into `cut` or `awk`.
pub fn render_table(boxed: bool) -> String {
    let mut out = String::new();

    if !boxed {
        out.push_str("value\tlow\thigh\n");
        for (value, low, high) in table_rows() {
            out.push_str(&format!("{}\t{}\t{}\n", value, low, high.unwrap_or("-")));
        }
        return out;
    }

    let title = styled(&[BOLD, CYAN], " named base-13 digits ");
    let dashes = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&title) + 1));
    out.push_str(&format!("{GRAY}┌─{RESET}{title}{GRAY}{dashes}┐{RESET}\n"));

    let header = format!(
        " {}",
        styled(&[DIM], &format!("{:>5}   {:<8}  {:<8}", "value", "low", "high"))
    );
    boxed_row(&mut out, &header);
    for (value, low, high) in table_rows() {
        let high = high.unwrap_or("-");
        boxed_row(
            &mut out,
            &format!(" {:>5}   {:<8}  {:<8}", value, low, high),
        );
    }

    out.push_str(&format!("{GRAY}└{}┘{RESET}\n", "─".repeat(BOX_WIDTH)));
    out
}

#[derive(Serialize)]
struct DigitEntry {
    place: Place,
    value: u8,
    name: &'static str,
}

/// Render both tables as JSON lines, LOW first.
pub fn render_table_json() -> serde_json::Result<String> {
    let low = LOW.iter().enumerate().map(|(value, &name)| DigitEntry {
        place: Place::Low,
        value: value as u8,
        name,
    });
    let high = HIGH.iter().enumerate().map(|(index, &name)| DigitEntry {
        place: Place::High,
        value: index as u8 + 1,
        name,
    });

    let mut out = String::new();
    for entry in low.chain(high) {
        out.push_str(&serde_json::to_string(&entry)?);
        out.push('\n');
    }
    Ok(out)
}
