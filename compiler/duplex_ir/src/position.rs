//! Stream positions.
//!
//! The scanner never holds the whole input, so positions are tracked
//! incrementally: each consumed lexeme advances the running position.

use std::fmt;

/// Location of a byte in the input stream.
///
/// `offset` is 0-based; `line` and `column` are 1-based for display.
/// Only `\n` starts a new line. Every other byte, `\t` and `\r` included,
/// counts as one column.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub offset: u64,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first byte of a stream.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Move past `text`, which must be the bytes that follow `self`.
    pub fn advance_over(&mut self, text: &[u8]) {
        for &b in text {
            if b == b'\n' {
                self.line = self.line.saturating_add(1);
                self.column = 1;
            } else {
                self.column = self.column.saturating_add(1);
            }
        }
        self.offset += text.len() as u64;
    }

    /// Position `n` bytes further along the same line.
    #[must_use]
    pub fn shifted(self, n: usize) -> Position {
        let n32 = u32::try_from(n).unwrap_or(u32::MAX);
        Position {
            offset: self.offset + n as u64,
            line: self.line,
            column: self.column.saturating_add(n32),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
