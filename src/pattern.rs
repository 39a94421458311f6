//! Cache-defeating access pattern.
//!
//! Offsets advance by a fixed stride of 17 cache lines and wrap around the
//! buffer. The sequence is deterministic: for a buffer of `len` bytes the
//! k-th offset is `(STRIDE * k) % len`, starting at 0.

use std::num::NonZeroUsize;

/// Assumed cache line size in bytes.
pub const CACHE_LINE: usize = 64;

/// Distance between consecutive accesses, in bytes.
pub const STRIDE: usize = 17 * CACHE_LINE;

/// A single offset into a buffer of fixed length.
#[derive(Debug, Clone)]
pub struct AccessCursor {
    pos: usize,
    len: usize,
}

impl AccessCursor {
    /// Create a cursor at offset 0.
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            pos: 0,
            len: len.get(),
        }
    }

    /// Current offset, always `< len`.
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Move to the next offset.
    ///
    /// Wraps by subtraction instead of `%`; this keeps a division out of the
    /// timed loop. The inner loop runs more than once only for buffers
    /// shorter than [`STRIDE`].
    #[inline(always)]
    pub fn advance(&mut self) {
        self.pos += STRIDE;
        while self.pos >= self.len {
            self.pos -= self.len;
        }
    }
}

/// Infinite iterator over the offsets visited by an [`AccessCursor`].
#[derive(Debug, Clone)]
pub struct AccessPattern {
    cursor: AccessCursor,
}

impl AccessPattern {
    /// Start a pattern at offset 0.
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            cursor: AccessCursor::new(len),
        }
    }
}

impl Iterator for AccessPattern {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let offset = self.cursor.offset();
        self.cursor.advance();
        Some(offset)
    }
}

/// Closed form of the k-th offset for a buffer of `len` bytes.
pub fn offset_at(k: u64, len: NonZeroUsize) -> usize {
    let product = u128::from(k) * STRIDE as u128;
    (product % len.get() as u128) as usize
}
