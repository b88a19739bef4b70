//! Quotation marks recognized by the scanner.

use std::fmt;

/// Byte separating consecutive quoted segments at the top level.
pub const DELIMITER: u8 = b'|';

/// One of the three quotation marks that may open a segment.
///
/// A segment must be closed by the same mark that opened it; the other two
/// marks are ordinary content inside it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Quote {
    /// `` ` ``
    Backtick,
    /// `"`
    Double,
    /// `'`
    Single,
}

impl Quote {
    /// All quotation marks, in the order the scanner checks them.
    pub const ALL: [Quote; 3] = [Quote::Backtick, Quote::Double, Quote::Single];

    /// Classify a byte as a quotation mark.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Quote> {
        match byte {
            b'`' => Some(Quote::Backtick),
            b'"' => Some(Quote::Double),
            b'\'' => Some(Quote::Single),
            _ => None,
        }
    }

    /// The byte that opens and closes this kind of segment.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        match self {
            Quote::Backtick => b'`',
            Quote::Double => b'"',
            Quote::Single => b'\'',
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }

    /// Human-readable name, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Quote::Backtick => "backtick",
            Quote::Double => "double quote",
            Quote::Single => "single quote",
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.name(), self.as_char())
    }
}

#[cfg(test)]
mod tests;
