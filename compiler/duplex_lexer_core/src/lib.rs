//! Low-level input buffering for the duplex scanner.
//!
//! Presents an unbounded byte stream as a sequence of characters using two
//! fixed-size halves that are refilled alternately. Memory use is bounded by
//! the configured capacity no matter how long the input is.
//!
//! This crate knows nothing about tokens. The automata live in `duplex_lexer`.

mod double_buffer;

pub use double_buffer::{BufferError, DoubleBuffer, Scan, DEFAULT_CAPACITY, SENTINEL};
