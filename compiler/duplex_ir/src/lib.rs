//! Duplex IR - shared scanner data types
//!
//! This crate contains the data structures that flow out of the scanner:
//! - `Position` for stream locations
//! - `Name` for interned words
//! - `StringInterner`, the word table seeded with the reserved keywords
//! - `Token`, `Word`, `Keyword` and `RelOp`
//!
//! # Design Philosophy
//!
//! - **Intern Words**: identifier text → `Name(u32)`, compared by handle
//! - **Closed Tokens**: one enum, matched exhaustively, no runtime type tests

mod interner;
mod name;
mod position;
mod token;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use position::Position;
pub use token::{Keyword, RelOp, Token, TokenDisplay, Word};
