//! Display functions for generation output

use super::formatters::status_line;
use crate::core::GenerateConfig;
use crate::generator::Phrase;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// Write one phrase followed by a newline
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_phrase<W: Write>(out: &mut W, phrase: &Phrase<'_>) -> io::Result<()> {
    writeln!(out, "{phrase}")
}

/// Print the status line to stderr
pub fn print_status(config: &GenerateConfig) {
    eprintln!("{}", status_line(config).bright_black());
}

/// Print a terminal error to stderr
pub fn print_error(error: &dyn Display) {
    eprintln!("{}", format!("{error}").red().bold());
}
