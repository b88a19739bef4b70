//! Driver that scans a whole input into a token list.

use tracing::debug;

use crate::error::ScanError;
use crate::observer::{TokenObserver, TracingObserver};
use crate::scanner::{Scanner, Token};

/// Separator used when rendering tokens back into source form.
pub const RENDER_SEPARATOR: &str = " | ";

/// Scan `text` into its tokens, logging each one at `debug` level.
///
/// Leading spaces are skipped. The first malformed segment aborts the scan
/// and no partial result is returned.
///
/// # Panics
///
/// Panics if `text` is empty.
pub fn parse_all(text: &str) -> Result<Vec<Token<'_>>, ScanError> {
    parse_all_with(text, TracingObserver)
}

/// Scan `text`, reporting each accepted token to `observer`.
///
/// # Panics
///
/// Panics if `text` is empty.
pub fn parse_all_with<O>(text: &str, mut observer: O) -> Result<Vec<Token<'_>>, ScanError>
where
    O: TokenObserver,
{
    let mut scanner = Scanner::new(text);
    scanner.skip_leading_spaces();

    let mut tokens = Vec::new();
    for token in scanner {
        let token = token?;
        observer.on_token(tokens.len(), &token);
        tokens.push(token);
    }

    debug!(count = tokens.len(), "scan complete");
    Ok(tokens)
}

/// Scan `text` silently and return only the token contents.
///
/// # Panics
///
/// Panics if `text` is empty.
pub fn parse_texts(text: &str) -> Result<Vec<&str>, ScanError> {
    let tokens = parse_all_with(text, ())?;
    Ok(tokens.iter().map(Token::text).collect())
}

/// Render tokens back into source form: each re-wrapped in its own quote,
/// joined by [`RENDER_SEPARATOR`].
///
/// Scanning the result yields the same tokens as long as no token contains
/// its own quotation mark.
pub fn render(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(Token::to_source)
        .collect::<Vec<_>>()
        .join(RENDER_SEPARATOR)
}
