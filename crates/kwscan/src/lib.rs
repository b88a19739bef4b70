//! Scanner for `|`-separated lists of quoted keywords.
//!
//! Input is a sequence of segments, each wrapped in a backtick, double quote
//! or single quote, separated by `|`:
//!
//! ```
//! let tokens = kwscan::parse_texts(r#""hello" | '"world"' | "'gol|a'ng""#);
//! assert_eq!(tokens, Ok(vec!["hello", "\"world\"", "'gol|a'ng"]));
//! ```
//!
//! A segment closes only on the mark that opened it, so the other two marks
//! and the delimiter are ordinary content inside it. Spaces around segments
//! and delimiters are ignored. Scanning is byte-oriented and single pass;
//! tokens borrow from the input.
//!
//! # Layers
//!
//! - [`Scanner`] walks the input one segment at a time
//!   ([`Scanner::next_token`]) or as an iterator of tokens.
//! - [`parse_all`] / [`parse_all_with`] drive a scanner to completion,
//!   reporting each token to a [`TokenObserver`].
//! - [`render`] turns tokens back into normalized source.

mod cursor;
mod error;
pub mod observer;
mod parse;
mod quote;
mod scanner;
mod span;

pub use cursor::Cursor;
pub use error::{EmptyInput, InvalidTokenReason, ScanError};
pub use observer::{TokenObserver, TracingObserver};
pub use parse::{parse_all, parse_all_with, parse_texts, render, RENDER_SEPARATOR};
pub use quote::{Quote, DELIMITER};
pub use scanner::{ScanState, Scanned, Scanner, Token};
pub use span::Span;
