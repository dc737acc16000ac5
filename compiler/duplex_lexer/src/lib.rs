//! Streaming lexer for duplex.
//!
//! Pulls characters from a [`duplex_lexer_core::DoubleBuffer`] and runs one of
//! four small automata per token:
//!
//! - identifiers and keywords (`[A-Za-z][A-Za-z0-9]*`)
//! - numbers (`digit+ ('.' digit+)? ('E' ('+'|'-')? digit+)?`)
//! - relational operators (`<`, `<=`, `<>`, `=`, `>`, `>=`)
//! - whitespace runs (space, tab, newline, carriage return)
//!
//! Each automaton reads one character past the end of its lexeme and pushes
//! it back, so every token is the longest match at its position.
//!
//! Lexing is fatal on the first error. There is no recovery mode: once a
//! [`LexError`] is returned the lexer only ever answers [`LexError::Poisoned`].

mod config;
mod keywords;
mod lex_error;
mod lexer;

pub use config::LexerConfig;
pub use keywords::WordTable;
pub use lex_error::{LexContext, LexError};
pub use lexer::{Lexer, Spanned};
