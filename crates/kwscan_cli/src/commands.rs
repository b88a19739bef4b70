//! `scan` and `check` command implementations.

use std::io::{self, Read};

use kwscan::{parse_all, render, EmptyInput, ScanError, Token};
use tracing::debug;

use crate::config::{CliConfig, InputSource, OutputFormat};
use crate::error::CliError;

/// Reference input scanned by `kwscan check`.
pub const SELF_CHECK_INPUT: &str = r#""hello" | '"world"' | "'gol|a'ng""#;

/// Tokens `kwscan check` must produce.
pub const SELF_CHECK_EXPECTED: [&str; 3] = ["hello", "\"world\"", "'gol|a'ng"];

/// Exit code for malformed input.
pub const EXIT_SCAN_FAILED: i32 = 1;

/// Exit code for usage and I/O errors.
pub const EXIT_USAGE: i32 = 2;

/// Scan the configured input and print its tokens. Returns the exit code.
pub fn run_scan(config: &CliConfig) -> i32 {
    let text = match config.input.as_ref().map(load_input) {
        Some(Ok(text)) => text,
        Some(Err(e)) => {
            eprintln!("error: {e}");
            return EXIT_USAGE;
        }
        None => {
            eprintln!("error: {}", CliError::MissingInput);
            return EXIT_USAGE;
        }
    };

    match scan_text(&text, config.format) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            0
        }
        Err(ScanFailure::Empty(e)) => {
            eprintln!("error: {}", CliError::from(e));
            EXIT_USAGE
        }
        Err(ScanFailure::Invalid(e)) => {
            eprintln!("{}", e.render(&text));
            EXIT_SCAN_FAILED
        }
    }
}

/// Scan the reference input and compare it with the expected tokens.
pub fn run_check() -> i32 {
    match parse_all(SELF_CHECK_INPUT) {
        Ok(tokens) => {
            let texts: Vec<&str> = tokens.iter().map(Token::text).collect();
            println!("tokens: {texts:?}");
            if texts == SELF_CHECK_EXPECTED {
                0
            } else {
                eprintln!("error: expected {SELF_CHECK_EXPECTED:?}");
                EXIT_SCAN_FAILED
            }
        }
        Err(e) => {
            eprintln!("error: parse failed");
            eprintln!("{}", e.render(SELF_CHECK_INPUT));
            EXIT_SCAN_FAILED
        }
    }
}

/// Why [`scan_text`] produced no output.
#[derive(Debug, PartialEq, Eq)]
pub enum ScanFailure {
    Empty(EmptyInput),
    Invalid(ScanError),
}

/// Scan `text` and format its tokens.
pub fn scan_text(text: &str, format: OutputFormat) -> Result<String, ScanFailure> {
    if text.is_empty() {
        return Err(ScanFailure::Empty(EmptyInput));
    }
    let tokens = parse_all(text).map_err(ScanFailure::Invalid)?;
    Ok(format_tokens(&tokens, format))
}

pub fn format_tokens(tokens: &[Token<'_>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Lines => tokens
            .iter()
            .map(Token::text)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Debug => {
            let texts: Vec<&str> = tokens.iter().map(Token::text).collect();
            format!("{texts:?}")
        }
        OutputFormat::Source => render(tokens),
    }
}

fn load_input(source: &InputSource) -> Result<String, CliError> {
    let text = match source {
        InputSource::Text(text) => return Ok(text.clone()),
        InputSource::File(path) => {
            std::fs::read_to_string(path).map_err(|e| CliError::from_read(path.clone(), e))?
        }
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            buf
        }
    };
    debug!(bytes = text.len(), "loaded input");
    Ok(strip_trailing_newline(text))
}

/// Drop one trailing `\n` or `\r\n`, as left by editors and `echo`.
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests;
