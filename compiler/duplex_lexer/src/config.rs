//! Lexer configuration.

use duplex_lexer_core::DEFAULT_CAPACITY;

/// Tunables for a [`Lexer`](crate::Lexer).
///
/// The keyword set is fixed and not part of the configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LexerConfig {
    /// Bytes per buffer half. Words and numbers of up to this many bytes
    /// always scan; longer ones may fail with `LexemeTooLong`. Whitespace runs
    /// are unbounded.
    pub buffer_capacity: usize,
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use halves of `capacity` bytes. Zero is rejected when the lexer is
    /// built.
    #[must_use]
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_CAPACITY,
        }
    }
}
