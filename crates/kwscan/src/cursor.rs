//! Space-skipping cursor over a non-empty input.
//!
//! The cursor never leaves the input: its position is always a valid index,
//! and the last index doubles as the end-of-input marker. Advancing from the
//! last index is a no-op, which makes the end check idempotent.
//!
//! Only ASCII space (`0x20`) is skipped. Tabs and newlines are ordinary bytes
//! and will be rejected by the scanner wherever a quote or delimiter is
//! expected.

/// Cursor over a borrowed, non-empty input.
///
/// Created by [`Scanner`](crate::Scanner). The cursor is [`Copy`], so a
/// snapshot can be taken before a speculative move.
///
/// # Invariant
///
/// `pos < bytes.len()` and `current == bytes[pos]` after every method call.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    current: u8,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// Returns `None` for empty input: there is no byte to sit on.
    pub(crate) fn new(text: &'a str) -> Option<Self> {
        let current = *text.as_bytes().first()?;
        Some(Self {
            text,
            pos: 0,
            current,
        })
    }

    /// The byte under the cursor.
    #[inline]
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Current byte offset in the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Index of the final byte of the input.
    #[inline]
    pub fn last(&self) -> usize {
        self.text.len() - 1
    }

    /// Returns `true` when the cursor sits on the final byte.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.last()
    }

    /// Step forward, skipping spaces, until a non-space byte or the final byte.
    ///
    /// Returns `true` exactly when the cursor ends on the final byte. Calling
    /// this at the final byte leaves the cursor where it is.
    pub fn advance(&mut self) -> bool {
        let bytes = self.text.as_bytes();
        while self.pos < self.last() {
            self.pos += 1;
            self.current = bytes[self.pos];
            if self.current != b' ' {
                break;
            }
        }
        self.is_at_end()
    }

    /// Move forward to the next occurrence of `byte` strictly after the
    /// current position.
    ///
    /// Returns the position found. If `byte` does not occur, the cursor is
    /// left on the final byte and `None` is returned. Equivalent to calling
    /// [`advance`](Self::advance) until `current() == byte` as long as `byte`
    /// is not a space.
    pub fn eat_until(&mut self, byte: u8) -> Option<usize> {
        debug_assert!(byte != b' ', "eat_until cannot search for a space");
        let rest = &self.text.as_bytes()[self.pos + 1..];
        match memchr::memchr(byte, rest) {
            Some(offset) => {
                self.seek(self.pos + 1 + offset);
                Some(self.pos)
            }
            None => {
                self.seek(self.last());
                None
            }
        }
    }

    /// Extract input text between two byte offsets.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the input and on character boundaries.
    /// The scanner only slices directly inside ASCII quote bytes, which are
    /// always boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.text[start..end]
    }

    /// The whole input.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    fn seek(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor cannot move backwards");
        self.pos = pos;
        self.current = self.text.as_bytes()[pos];
    }
}
