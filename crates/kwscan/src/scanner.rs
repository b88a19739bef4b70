//! Single-pass scanner for `|`-separated quoted segments.
//!
//! ```text
//!  "hello" | '"world"' | "'gol|a'ng"
//!  ^^^^^^^   ^^^^^^^^^   ^^^^^^^^^^^
//!  token 0   token 1     token 2
//! ```
//!
//! Each call to [`Scanner::next_token`] walks one segment through the
//! states below and returns to `AwaitingOpenQuote` (or finishes):
//!
//! ```text
//! AwaitingOpenQuote --quote--> ScanningInsideQuote --same quote--> AwaitingDelimiterOrEnd
//!        ^                            |                                 |       |
//!        |                      end of input                          `|`     end
//!        |                            v                                 |       v
//!        +------------------------- Failed <--- anything else ----------+     Done
//! ```
//!
//! Inside a segment only the opening mark is significant: the other two
//! quotation marks and the delimiter are plain content.

use std::iter::FusedIterator;

use tracing::trace;

use crate::cursor::Cursor;
use crate::error::{EmptyInput, ScanError};
use crate::quote::{Quote, DELIMITER};
use crate::span::Span;

/// The unquoted content of one segment.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    text: &'src str,
    quote: Quote,
    span: Span,
}

impl<'src> Token<'src> {
    /// Content between the quotes, borrowed from the input.
    #[inline]
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// The mark that opened and closed this segment.
    #[inline]
    pub fn quote(&self) -> Quote {
        self.quote
    }

    /// Byte range of the content, excluding the quotes.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Re-wrap the content in its quotation mark.
    pub fn to_source(&self) -> String {
        let quote = self.quote.as_char();
        format!("{quote}{}{quote}", self.text)
    }
}

/// One extracted token plus whether the input is now exhausted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Scanned<'src> {
    pub token: Token<'src>,
    /// `true` when no further token can follow.
    pub at_end: bool,
}

/// Observable scanner phase between calls to [`Scanner::next_token`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScanState {
    /// Positioned where the next token must start.
    AwaitingOpenQuote,
    /// The last token has been produced.
    Done,
    /// A token was rejected; the error is sticky.
    Failed,
}

#[derive(Clone, Debug)]
enum State {
    AwaitingOpenQuote,
    Done,
    Failed(ScanError),
}

/// Scanner over one input string.
///
/// Created once per input and driven to completion by a single owner,
/// either through [`next_token`](Self::next_token) or as an [`Iterator`].
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    state: State,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned on the first byte of `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text` is empty. Use [`try_new`](Self::try_new) when the
    /// input has not been checked.
    pub fn new(text: &'src str) -> Self {
        Self::try_new(text).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Create a scanner, rejecting empty input.
    pub fn try_new(text: &'src str) -> Result<Self, EmptyInput> {
        let cursor = Cursor::new(text).ok_or(EmptyInput)?;
        Ok(Self {
            cursor,
            state: State::AwaitingOpenQuote,
        })
    }

    pub fn state(&self) -> ScanState {
        match self.state {
            State::AwaitingOpenQuote => ScanState::AwaitingOpenQuote,
            State::Done => ScanState::Done,
            State::Failed(_) => ScanState::Failed,
        }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// The scanned input.
    pub fn text(&self) -> &'src str {
        self.cursor.text()
    }

    /// Move past spaces to the next byte; returns `true` on the final byte.
    ///
    /// See [`Cursor::advance`]. Idempotent once the final byte is reached.
    pub fn advance(&mut self) -> bool {
        self.cursor.advance()
    }

    /// Returns `true` when the cursor rests on the final byte.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Step over spaces that precede the first token.
    ///
    /// [`next_token`](Self::next_token) expects a quote under the cursor and
    /// never skips the byte it starts on.
    pub fn skip_leading_spaces(&mut self) {
        if self.cursor.current() == b' ' {
            self.cursor.advance();
        }
    }

    /// Extract the next quoted token.
    ///
    /// Once a call fails, every later call returns the same error. Calling
    /// this after the final token was produced reports
    /// [`InvalidTokenReason::Exhausted`](crate::InvalidTokenReason::Exhausted).
    pub fn next_token(&mut self) -> Result<Scanned<'src>, ScanError> {
        match &self.state {
            State::AwaitingOpenQuote => {}
            State::Done => return Err(ScanError::exhausted(self.cursor.pos())),
            State::Failed(err) => return Err(err.clone()),
        }

        match self.scan_segment() {
            Ok(scanned) => {
                trace!(
                    start = scanned.token.span.start,
                    end = scanned.token.span.end,
                    quote = scanned.token.quote.name(),
                    at_end = scanned.at_end,
                    "token"
                );
                if scanned.at_end {
                    self.state = State::Done;
                }
                Ok(scanned)
            }
            Err(err) => {
                trace!(pos = err.pos(), error = %err, "rejected");
                self.state = State::Failed(err.clone());
                Err(err)
            }
        }
    }

    fn scan_segment(&mut self) -> Result<Scanned<'src>, ScanError> {
        let begin = self.cursor.pos();
        let Some(quote) = Quote::from_byte(self.cursor.current()) else {
            return Err(ScanError::not_a_quote(begin, self.cursor.current()));
        };

        let Some(end) = self.cursor.eat_until(quote.as_byte()) else {
            return Err(ScanError::unterminated(self.cursor.pos(), quote, begin));
        };

        let token = Token {
            text: self.cursor.slice(begin + 1, end),
            quote,
            span: Span::new(begin + 1, end),
        };
        let at_end = self.after_close(quote)?;
        Ok(Scanned { token, at_end })
    }

    /// Consume what follows a closing quote: end of input, or a delimiter
    /// and the spaces after it.
    fn after_close(&mut self, quote: Quote) -> Result<bool, ScanError> {
        if self.cursor.is_at_end() {
            return Ok(true);
        }

        let at_end = self.cursor.advance();
        match self.cursor.current() {
            // Only reachable on the final byte: advance stops on non-spaces.
            b' ' if at_end => Ok(true),
            DELIMITER if at_end => Ok(true),
            DELIMITER => {
                let at_end = self.cursor.advance();
                // A byte left on the final position still has to be scanned.
                Ok(at_end && self.cursor.current() == b' ')
            }
            found => Err(ScanError::unexpected_after_close(
                self.cursor.pos(),
                quote,
                found,
            )),
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>, ScanError>;

    /// Yields tokens until the input is exhausted, or the first error once.
    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::AwaitingOpenQuote => Some(self.next_token().map(|scanned| scanned.token)),
            State::Done | State::Failed(_) => None,
        }
    }
}

impl FusedIterator for Scanner<'_> {}
