//! Sentinel-terminated double input buffer.
//!
//! Two halves of `capacity` bytes are filled alternately from a [`Read`]
//! source. Each half is followed by one extra slot holding [`SENTINEL`], so the
//! hot path of [`DoubleBuffer::next_char`] is a single comparison against the
//! byte just loaded. Only when that comparison fails does the buffer work out
//! whether it hit the end of a half, the end of the input, or a byte outside
//! the 7-bit range.
//!
//! # Layout
//!
//! ```text
//! half 0: [b0 b1 ... b(B-1) | 0x80]     half 1: [bB ... b(2B-1) | 0x80]
//!                             ^                                   ^
//!                        boundary slot                       boundary slot
//! ```
//!
//! A fill that returns fewer than `B` bytes means the source is exhausted; the
//! sentinel is then written right after the last byte and marks end of input.
//!
//! # Lexemes
//!
//! `lexeme_start` marks where the in-progress lexeme began. When scanning runs
//! off the end of a half, the other half is refilled and `crossed` records that
//! the start now lives in the inactive half. A lexeme may therefore span at
//! most two halves; running off the end of the second half while `crossed` is
//! set would overwrite the start, and is reported as
//! [`BufferError::LexemeTooLong`].

use std::borrow::Cow;
use std::io::{ErrorKind, Read};

use tracing::{debug, trace};

/// Boundary and end-of-input marker. Never a valid input byte.
pub const SENTINEL: u8 = 0x80;

/// Capacity of each half when the caller does not choose one.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Errors raised while buffering input.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    /// A half must hold at least one byte.
    #[error("buffer capacity must be at least 1 byte")]
    ZeroCapacity,
    /// The source failed with something other than end-of-stream.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// A lexeme did not fit in two halves.
    #[error("lexeme does not fit in two {capacity}-byte buffers")]
    LexemeTooLong { capacity: usize },
    /// A byte at or above [`SENTINEL`]; only 7-bit input can be scanned.
    #[error("non-ASCII byte 0x{byte:02X} at offset {offset}")]
    NonAscii { byte: u8, offset: u64 },
}

/// Result of reading one character.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Scan {
    Char(u8),
    /// The source is exhausted. Returned again on every later call.
    Eof,
}

/// Two alternately refilled input halves with one character of pushback.
pub struct DoubleBuffer<R> {
    /// Each half is `capacity + 1` bytes; the last slot is always [`SENTINEL`].
    halves: [Box<[u8]>; 2],
    /// Real bytes loaded into each half.
    lens: [usize; 2],
    capacity: usize,
    /// Half supplying `forward`.
    active: usize,
    /// Start of the in-progress lexeme; in the inactive half iff `crossed`.
    lexeme_start: usize,
    /// Next unread position in the active half.
    forward: usize,
    crossed: bool,
    /// The inactive half already holds the bytes after the active one.
    preloaded: bool,
    /// The source has returned end-of-stream; never read it again.
    exhausted: bool,
    /// Stream offset of `lexeme_start`.
    consumed: u64,
    source: R,
}

impl<R: Read> DoubleBuffer<R> {
    /// Allocate both halves and load the first one from `source`.
    pub fn new(capacity: usize, source: R) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }

        let half = || vec![SENTINEL; capacity + 1].into_boxed_slice();
        let mut buffer = DoubleBuffer {
            halves: [half(), half()],
            lens: [0, 0],
            capacity,
            active: 0,
            lexeme_start: 0,
            forward: 0,
            crossed: false,
            preloaded: false,
            exhausted: false,
            consumed: 0,
            source,
        };
        buffer.fill(0)?;
        debug!(capacity, loaded = buffer.lens[0], "double buffer ready");
        Ok(buffer)
    }

    /// Read the next character, refilling the other half at a boundary.
    ///
    /// Returns [`Scan::Eof`] without advancing once the input is exhausted.
    #[inline]
    pub fn next_char(&mut self) -> Result<Scan, BufferError> {
        loop {
            let b = self.halves[self.active][self.forward];
            if b < SENTINEL {
                self.forward += 1;
                return Ok(Scan::Char(b));
            }
            if b == SENTINEL {
                if self.forward == self.capacity {
                    self.cross_forward()?;
                    continue;
                }
                if self.forward == self.lens[self.active] {
                    return Ok(Scan::Eof);
                }
            }
            return Err(BufferError::NonAscii {
                byte: b,
                offset: self.forward_offset(),
            });
        }
    }

    /// Undo the most recent [`next_char`](Self::next_char) that returned a
    /// character.
    ///
    /// # Contract
    ///
    /// Must not move before the start of the in-progress lexeme, and must not
    /// follow a [`Scan::Eof`] (which consumed nothing).
    pub fn push_back(&mut self) {
        if self.crossed {
            if self.forward > 0 {
                self.forward -= 1;
            } else {
                // Back over the boundary: the half we leave stays loaded.
                self.active = 1 - self.active;
                self.forward = self.capacity - 1;
                self.crossed = false;
                self.preloaded = true;
                trace!(half = self.active, "pushed back across buffer boundary");
            }
        } else {
            debug_assert!(
                self.forward > self.lexeme_start,
                "push_back before lexeme start {} (forward {})",
                self.lexeme_start,
                self.forward
            );
            self.forward = self.forward.saturating_sub(1);
        }
    }

    /// Extract the bytes from the lexeme start up to (excluding) the cursor,
    /// and start the next lexeme at the cursor.
    ///
    /// Borrows from the active half unless the lexeme straddles the boundary,
    /// in which case the two pieces are copied into one string.
    pub fn take_lexeme(&mut self) -> Cow<'_, str> {
        let len = self.lexeme_len();
        let start = self.lexeme_start;
        let end = self.forward;
        let crossed = self.crossed;

        self.consumed += len as u64;
        self.lexeme_start = self.forward;
        self.crossed = false;

        if crossed {
            let tail = &self.halves[1 - self.active][start..self.capacity];
            let head = &self.halves[self.active][..end];
            let mut text = String::with_capacity(len);
            // Every byte passed the `< SENTINEL` check, so each is one char.
            text.extend(tail.iter().chain(head).map(|&b| char::from(b)));
            Cow::Owned(text)
        } else {
            String::from_utf8_lossy(&self.halves[self.active][start..end])
        }
    }

    /// Bytes consumed since the lexeme start.
    pub fn lexeme_len(&self) -> usize {
        if self.crossed {
            self.capacity - self.lexeme_start + self.forward
        } else {
            self.forward - self.lexeme_start
        }
    }

    /// Stream offset of the in-progress lexeme's first byte.
    pub fn lexeme_offset(&self) -> u64 {
        self.consumed
    }

    /// Capacity of one half in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stream offset of the byte under the cursor.
    fn forward_offset(&self) -> u64 {
        self.consumed + self.lexeme_len() as u64
    }

    /// Switch to the other half at a boundary, loading it unless a pushback
    /// left it loaded.
    fn cross_forward(&mut self) -> Result<(), BufferError> {
        if self.crossed {
            return Err(BufferError::LexemeTooLong {
                capacity: self.capacity,
            });
        }

        let next = 1 - self.active;
        if self.preloaded {
            self.preloaded = false;
        } else {
            self.fill(next)?;
        }
        self.active = next;
        self.forward = 0;

        // A lexeme that has not consumed anything yet simply starts over in the
        // new half; only a lexeme with bytes behind the boundary is crossed.
        if self.lexeme_start < self.capacity {
            self.crossed = true;
        } else {
            self.lexeme_start = 0;
        }
        trace!(half = next, crossed = self.crossed, "crossed buffer boundary");
        Ok(())
    }

    /// Load `half` from the source until it is full or the source ends.
    fn fill(&mut self, half: usize) -> Result<(), BufferError> {
        let capacity = self.capacity;
        let buf = &mut self.halves[half];
        let mut len = 0;
        while len < capacity && !self.exhausted {
            match self.source.read(&mut buf[len..capacity]) {
                Ok(0) => self.exhausted = true,
                Ok(n) => len += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        buf[len] = SENTINEL;
        self.lens[half] = len;
        trace!(half, bytes = len, exhausted = self.exhausted, "filled buffer");
        Ok(())
    }
}

impl<R> std::fmt::Debug for DoubleBuffer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoubleBuffer")
            .field("capacity", &self.capacity)
            .field("active", &self.active)
            .field("lexeme_start", &self.lexeme_start)
            .field("forward", &self.forward)
            .field("crossed", &self.crossed)
            .field("lens", &self.lens)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
