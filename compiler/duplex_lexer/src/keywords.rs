//! Keyword and identifier resolution.
//!
//! The word table is a [`StringInterner`] seeded with the six reserved words,
//! so a keyword is simply a name below [`Keyword::ALL`]`.len()`. Resolving a
//! lexeme interns it (first occurrence wins) and tags the result.
//!
//! Every word the lexer has seen stays in the table for the lexer's lifetime.

use duplex_ir::{InternError, Keyword, Name, StringInterner, Word};
use tracing::trace;

/// Interning table mapping word lexemes to [`Word`]s.
#[derive(Debug, Default)]
pub struct WordTable {
    interner: StringInterner,
}

impl WordTable {
    /// Table holding only the reserved words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `lexeme` to its word, interning it if it is new.
    pub fn resolve(&mut self, lexeme: &str) -> Result<Word, InternError> {
        let before = self.interner.len();
        let name = self.interner.try_intern(lexeme)?;
        if self.interner.len() > before {
            trace!(lexeme, ?name, "new identifier");
        }
        Ok(Word::new(name))
    }

    /// Reserved word spelled `lexeme`, without touching the table.
    #[inline]
    pub fn keyword(&self, lexeme: &str) -> Option<Keyword> {
        self.interner.get(lexeme).and_then(Keyword::from_name)
    }

    /// Text of a word resolved by this table.
    pub fn text(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Number of distinct words seen, keywords included.
    pub fn len(&self) -> usize {
        self.interner.len()
    }

    /// Never true: the reserved words are always present.
    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    /// The underlying interner, for rendering tokens.
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
