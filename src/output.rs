//! Output formatting for query results
//!
//! Human-readable rendering goes through termcolor; `--json` callers
//! serialize the same report structs with serde instead.

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Occurrence listing for one pattern
#[derive(Debug, Serialize)]
pub struct OccurrencesReport {
    pub pattern: String,
    pub count: usize,
    /// Suffix start indices, sorted ascending
    pub positions: Vec<usize>,
}

/// Occurrence count for one pattern
#[derive(Debug, Serialize)]
pub struct CountReport {
    pub pattern: String,
    pub count: usize,
}

/// Longest repeated substring result
#[derive(Debug, Serialize)]
pub struct RepeatsReport {
    /// Minimum number of occurrences requested
    pub min_repetitions: usize,
    /// The repeated substring itself; empty when nothing repeats
    pub substring: String,
    pub positions: Vec<usize>,
}

/// Longest common prefix of two suffixes
#[derive(Debug, Serialize)]
pub struct LcpReport {
    pub i: usize,
    pub j: usize,
    pub length: usize,
    pub prefix: String,
}

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

fn write_heading(out: &mut StandardStream, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Print an occurrence listing: pattern, count, then one position per line
pub fn print_occurrences(report: &OccurrencesReport, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_heading(&mut out, &report.pattern)?;
    writeln!(out, ": {} occurrence(s)", report.count)?;
    for &position in &report.positions {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", position)?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print a bare occurrence count
pub fn print_count(report: &CountReport, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_heading(&mut out, &report.pattern)?;
    writeln!(out, ": {}", report.count)?;
    Ok(())
}

/// Print the longest repeated substring and where it occurs
pub fn print_repeats(report: &RepeatsReport, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    if report.substring.is_empty() {
        writeln!(
            out,
            "no substring occurs {} or more times",
            report.min_repetitions
        )?;
        return Ok(());
    }
    write_heading(&mut out, &report.substring)?;
    writeln!(
        out,
        " ({} chars, >= {} repetitions)",
        report.substring.chars().count(),
        report.min_repetitions
    )?;
    for &position in &report.positions {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", position)?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print an LCP answer with the shared prefix itself
pub fn print_lcp(report: &LcpReport, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    writeln!(
        out,
        "lcp({}, {}) = {}",
        report.i, report.j, report.length
    )?;
    if !report.prefix.is_empty() {
        write_heading(&mut out, &report.prefix)?;
        writeln!(out)?;
    }
    Ok(())
}
