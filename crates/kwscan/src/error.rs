//! Scanner error types.
//!
//! Every malformed input is reported as [`ScanError::InvalidToken`]. The
//! error carries WHERE (`pos`, the byte the scanner was looking at) and WHAT
//! (an [`InvalidTokenReason`] naming the expected and found bytes), which is
//! enough to render a caret diagnostic against the original input.
//!
//! Empty input is not a scan error. It is a broken caller contract and is
//! reported separately as [`EmptyInput`].

use std::fmt;

use crate::quote::{Quote, DELIMITER};
use crate::span::Span;

/// A failed scan.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ScanError {
    /// The input is not a well-formed, delimiter-separated list of quoted
    /// segments.
    #[error("invalid token at byte {pos}: {reason}")]
    InvalidToken {
        /// Byte offset the scanner was looking at.
        pos: usize,
        /// What was expected there and what was found instead.
        reason: InvalidTokenReason,
    },
}

/// Why a token was rejected.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum InvalidTokenReason {
    /// A token must start with a quotation mark.
    NotAQuote { found: u8 },
    /// The segment opened at `open` was never closed by the same mark.
    Unterminated { quote: Quote, open: usize },
    /// A closing quote was followed by something other than the delimiter
    /// or the end of input.
    UnexpectedAfterClose { quote: Quote, found: u8 },
    /// The scanner already produced its last token.
    Exhausted,
}

impl ScanError {
    #[cold]
    pub fn not_a_quote(pos: usize, found: u8) -> Self {
        ScanError::InvalidToken {
            pos,
            reason: InvalidTokenReason::NotAQuote { found },
        }
    }

    #[cold]
    pub fn unterminated(pos: usize, quote: Quote, open: usize) -> Self {
        ScanError::InvalidToken {
            pos,
            reason: InvalidTokenReason::Unterminated { quote, open },
        }
    }

    #[cold]
    pub fn unexpected_after_close(pos: usize, quote: Quote, found: u8) -> Self {
        ScanError::InvalidToken {
            pos,
            reason: InvalidTokenReason::UnexpectedAfterClose { quote, found },
        }
    }

    #[cold]
    pub fn exhausted(pos: usize) -> Self {
        ScanError::InvalidToken {
            pos,
            reason: InvalidTokenReason::Exhausted,
        }
    }

    /// Byte offset the scanner was looking at when it failed.
    pub fn pos(&self) -> usize {
        match self {
            ScanError::InvalidToken { pos, .. } => *pos,
        }
    }

    pub fn reason(&self) -> &InvalidTokenReason {
        match self {
            ScanError::InvalidToken { reason, .. } => reason,
        }
    }

    /// Source region to underline.
    ///
    /// An unterminated segment covers everything from its opening quote to
    /// the end of input; every other failure points at a single byte.
    pub fn span(&self) -> Span {
        match self.reason() {
            InvalidTokenReason::Unterminated { open, .. } => Span::new(*open, self.pos() + 1),
            InvalidTokenReason::Exhausted => Span::point(self.pos()),
            InvalidTokenReason::NotAQuote { .. }
            | InvalidTokenReason::UnexpectedAfterClose { .. } => {
                Span::new(self.pos(), self.pos() + 1)
            }
        }
    }

    /// Render the error with the offending line and a caret marker.
    ///
    /// ```text
    /// error: invalid token at byte 5: expected `|` or end of input after closing double quote `"`, found `x`
    ///   |
    ///   | "abc"x
    ///   |      ^
    /// ```
    pub fn render(&self, source: &str) -> String {
        let span = self.span();
        let mut start = span.start.min(source.len());
        while !source.is_char_boundary(start) {
            start -= 1;
        }
        let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[line_start..]
            .find('\n')
            .map_or(source.len(), |i| line_start + i);
        let line = &source[line_start..line_end];

        let column = chars_before(line, start - line_start);
        let width = chars_before(line, span.end.min(line_end) - line_start)
            .saturating_sub(column)
            .max(1);

        format!(
            "error: {self}\n  |\n  | {line}\n  | {}{}",
            " ".repeat(column),
            "^".repeat(width)
        )
    }
}

/// Number of characters that start before byte offset `offset` in `line`.
fn chars_before(line: &str, offset: usize) -> usize {
    line.char_indices().take_while(|(i, _)| *i < offset).count()
}

impl fmt::Display for InvalidTokenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTokenReason::NotAQuote { found } => write!(
                f,
                "expected a quotation mark (`\"`, `'` or `` ` ``), found {}",
                ByteDisplay(*found)
            ),
            InvalidTokenReason::Unterminated { quote, open } => {
                write!(f, "{quote} opened at byte {open} is never closed")
            }
            InvalidTokenReason::UnexpectedAfterClose { quote, found } => write!(
                f,
                "expected `{}` or end of input after closing {quote}, found {}",
                DELIMITER as char,
                ByteDisplay(*found)
            ),
            InvalidTokenReason::Exhausted => f.write_str("no tokens left to scan"),
        }
    }
}

/// Prints printable ASCII as `` `c` `` and anything else as a hex byte.
struct ByteDisplay(u8);

impl fmt::Display for ByteDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            b'`' => f.write_str("`` ` ``"),
            b if b.is_ascii_graphic() || b == b' ' => write!(f, "`{}`", b as char),
            b => write!(f, "byte {b:#04x}"),
        }
    }
}

/// Attempted to scan an empty string.
///
/// This is a caller bug, not malformed input: there is no byte for the
/// cursor to rest on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("cannot scan empty input")]
pub struct EmptyInput;
