//! Lexer error types.
//!
//! Lexical errors carry the same shape:
//! - WHERE: `position` of the offending character (or of end of input)
//! - WHAT: the character found, or its absence
//! - WHY: `context` naming the part of the grammar being matched
//! - HOW: `expected`, what would have let the automaton continue
//!
//! Buffer failures (I/O, overlong lexemes, non-ASCII bytes) pass through
//! unchanged as [`LexError::Buffer`].

use std::fmt;

use duplex_ir::{InternError, Position};
use duplex_lexer_core::BufferError;

/// A fatal lexing error.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// The input buffer failed.
    #[error(transparent)]
    Buffer(#[from] BufferError),
    /// The word table is full.
    #[error(transparent)]
    Intern(#[from] InternError),
    /// A character with no transition from the current state.
    #[error("{position}: unexpected {found:?} {context}, expected {expected}")]
    UnexpectedChar {
        found: char,
        expected: &'static str,
        context: LexContext,
        position: Position,
    },
    /// Input ended before a mandatory character.
    #[error("{position}: unexpected end of input {context}, expected {expected}")]
    UnexpectedEof {
        expected: &'static str,
        context: LexContext,
        position: Position,
    },
    /// A previous call already failed.
    #[error("lexer already failed; no further tokens")]
    Poisoned,
}

impl LexError {
    /// Where the error was detected, if it is a lexical error.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::UnexpectedChar { position, .. } | LexError::UnexpectedEof { position, .. } => {
                Some(*position)
            }
            LexError::Buffer(_) | LexError::Intern(_) | LexError::Poisoned => None,
        }
    }
}

/// What the lexer was matching when it failed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexContext {
    /// Looking for the first character of a token.
    #[default]
    TopLevel,
    /// After the `.` of a number.
    Fraction,
    /// After the `E` of a number, or its sign.
    Exponent,
}

impl fmt::Display for LexContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LexContext::TopLevel => "at start of token",
            LexContext::Fraction => "in fractional part of number",
            LexContext::Exponent => "in exponent of number",
        })
    }
}

#[cfg(test)]
mod tests;
