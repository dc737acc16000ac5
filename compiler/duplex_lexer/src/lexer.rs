//! Token automata over a double input buffer.
//!
//! [`Lexer::next_token`] reads one character and dispatches on its class.
//! Each arm runs one automaton to completion, reading a character past the
//! lexeme when the grammar needs to see it and pushing it back before the
//! lexeme is taken. End of input inside an accepting state ends the lexeme
//! the same way a non-member character does.
//!
//! The lexer tracks the [`Position`] of the next token by advancing over every
//! lexeme it takes, so positions stay correct without keeping the input.

use std::io::Read;

use duplex_ir::{Position, RelOp, StringInterner, Token};
use duplex_lexer_core::{DoubleBuffer, Scan};
use tracing::{debug, trace};

use crate::{LexContext, LexError, LexerConfig, WordTable};

/// A token and where it starts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub start: Position,
}

/// States of the number automaton. Every state that does not end in `Start`
/// or `Sign` is accepting.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum NumberState {
    /// `digit+`
    Integer,
    /// `digit+ '.'`
    FractionStart,
    /// `digit+ '.' digit+`
    Fraction,
    /// `... 'E'`
    ExponentStart,
    /// `... 'E' ('+'|'-')`
    ExponentSign,
    /// `... 'E' ('+'|'-')? digit+`
    Exponent,
}

impl NumberState {
    /// Context and hint for a state that still needs a digit (or sign).
    fn expectation(self) -> (LexContext, &'static str) {
        match self {
            NumberState::FractionStart => (LexContext::Fraction, "a digit after '.'"),
            NumberState::ExponentStart => (LexContext::Exponent, "a digit or sign after 'E'"),
            _ => (LexContext::Exponent, "a digit in the exponent"),
        }
    }
}

/// Pull-based lexer over any byte source.
///
/// Produces one [`Token`] per call, `Token::Eof` forever once the input is
/// exhausted. The first error poisons the lexer.
pub struct Lexer<R> {
    buffer: DoubleBuffer<R>,
    words: WordTable,
    /// Start of the next token.
    position: Position,
    poisoned: bool,
}

impl<R: Read> Lexer<R> {
    /// Lexer with the default configuration.
    pub fn new(source: R) -> Result<Self, LexError> {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: R, config: LexerConfig) -> Result<Self, LexError> {
        let buffer = DoubleBuffer::new(config.buffer_capacity, source)?;
        debug!(capacity = config.buffer_capacity, "lexer ready");
        Ok(Lexer {
            buffer,
            words: WordTable::new(),
            position: Position::START,
            poisoned: false,
        })
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.next_spanned().map(|spanned| spanned.token)
    }

    /// Scan the next token along with its start position.
    pub fn next_spanned(&mut self) -> Result<Spanned, LexError> {
        if self.poisoned {
            return Err(LexError::Poisoned);
        }
        let start = self.position;
        debug_assert_eq!(start.offset, self.buffer.lexeme_offset());
        match self.scan(start) {
            Ok(token) => {
                trace!(token = ?token, %start, "token");
                Ok(Spanned { token, start })
            }
            Err(err) => {
                debug!(error = %err, %start, "lexing failed");
                self.poisoned = true;
                Err(err)
            }
        }
    }

    /// Start of the next token.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Words seen so far.
    pub fn words(&self) -> &WordTable {
        &self.words
    }

    /// Interner resolving the names in [`Token::Word`]s from this lexer.
    pub fn interner(&self) -> &StringInterner {
        self.words.interner()
    }

    #[inline]
    fn scan(&mut self, start: Position) -> Result<Token, LexError> {
        let b = match self.buffer.next_char()? {
            Scan::Char(b) => b,
            Scan::Eof => return Ok(Token::Eof),
        };
        match b {
            b'a'..=b'z' | b'A'..=b'Z' => self.identifier(),
            b'0'..=b'9' => self.number(start),
            b'<' => self.less(),
            b'=' => Ok(self.relop(RelOp::Eq)),
            b'>' => self.greater(),
            b' ' | b'\t' | b'\n' | b'\r' => self.whitespace(),
            _ => Err(LexError::UnexpectedChar {
                found: char::from(b),
                expected: "a letter, digit, relational operator or whitespace",
                context: LexContext::TopLevel,
                position: start,
            }),
        }
    }

    /// Take the finished lexeme and move past it.
    fn skip_lexeme(&mut self) {
        let lexeme = self.buffer.take_lexeme();
        self.position.advance_over(lexeme.as_bytes());
    }

    // ─── Identifiers ─────────────────────────────────────────────────

    fn identifier(&mut self) -> Result<Token, LexError> {
        loop {
            match self.buffer.next_char()? {
                Scan::Char(b) if b.is_ascii_alphanumeric() => {}
                Scan::Char(_) => {
                    self.buffer.push_back();
                    break;
                }
                Scan::Eof => break,
            }
        }
        let lexeme = self.buffer.take_lexeme();
        self.position.advance_over(lexeme.as_bytes());
        let word = self.words.resolve(&lexeme)?;
        Ok(Token::Word(word))
    }

    // ─── Numbers ─────────────────────────────────────────────────────

    fn number(&mut self, start: Position) -> Result<Token, LexError> {
        use NumberState::{Exponent, ExponentSign, ExponentStart, Fraction, FractionStart, Integer};

        let mut state = Integer;
        loop {
            let scan = self.buffer.next_char()?;
            state = match (state, scan) {
                (Integer, Scan::Char(b'0'..=b'9')) => Integer,
                (Integer, Scan::Char(b'.')) => FractionStart,
                (FractionStart | Fraction, Scan::Char(b'0'..=b'9')) => Fraction,
                (Integer | Fraction, Scan::Char(b'E')) => ExponentStart,
                (ExponentStart, Scan::Char(b'+' | b'-')) => ExponentSign,
                (ExponentStart | ExponentSign | Exponent, Scan::Char(b'0'..=b'9')) => Exponent,
                (Integer | Fraction | Exponent, Scan::Char(_)) => {
                    self.buffer.push_back();
                    break;
                }
                (Integer | Fraction | Exponent, Scan::Eof) => break,
                (FractionStart | ExponentStart | ExponentSign, Scan::Char(b)) => {
                    let (context, expected) = state.expectation();
                    // The offending byte is the last one consumed.
                    let consumed = self.buffer.lexeme_len() - 1;
                    return Err(LexError::UnexpectedChar {
                        found: char::from(b),
                        expected,
                        context,
                        position: start.shifted(consumed),
                    });
                }
                (FractionStart | ExponentStart | ExponentSign, Scan::Eof) => {
                    let (context, expected) = state.expectation();
                    return Err(LexError::UnexpectedEof {
                        expected,
                        context,
                        position: start.shifted(self.buffer.lexeme_len()),
                    });
                }
            };
        }
        let lexeme = self.buffer.take_lexeme();
        self.position.advance_over(lexeme.as_bytes());
        Ok(Token::Number(lexeme.into()))
    }

    // ─── Relational Operators ────────────────────────────────────────

    /// After `<`: `<=`, `<>` or `<`.
    fn less(&mut self) -> Result<Token, LexError> {
        let op = match self.buffer.next_char()? {
            Scan::Char(b'=') => RelOp::Le,
            Scan::Char(b'>') => RelOp::Ne,
            Scan::Char(_) => {
                self.buffer.push_back();
                RelOp::Lt
            }
            Scan::Eof => RelOp::Lt,
        };
        Ok(self.relop(op))
    }

    /// After `>`: `>=` or `>`.
    fn greater(&mut self) -> Result<Token, LexError> {
        let op = match self.buffer.next_char()? {
            Scan::Char(b'=') => RelOp::Ge,
            Scan::Char(_) => {
                self.buffer.push_back();
                RelOp::Gt
            }
            Scan::Eof => RelOp::Gt,
        };
        Ok(self.relop(op))
    }

    fn relop(&mut self, op: RelOp) -> Token {
        debug_assert_eq!(self.buffer.lexeme_len(), op.as_str().len());
        self.skip_lexeme();
        Token::RelOp(op)
    }

    // ─── Whitespace ──────────────────────────────────────────────────

    fn whitespace(&mut self) -> Result<Token, LexError> {
        loop {
            // A run has no text to keep, so flush it before the next read can
            // outgrow the buffer.
            if self.buffer.lexeme_len() >= self.buffer.capacity() {
                self.skip_lexeme();
            }
            match self.buffer.next_char()? {
                Scan::Char(b' ' | b'\t' | b'\n' | b'\r') => {}
                Scan::Char(_) => {
                    self.buffer.push_back();
                    break;
                }
                Scan::Eof => break,
            }
        }
        self.skip_lexeme();
        Ok(Token::Whitespace)
    }
}

/// Yields tokens up to (not including) `Token::Eof`, or up to and including
/// the first error.
impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned {
            return None;
        }
        match self.next_token() {
            Ok(Token::Eof) => None,
            result => Some(result),
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Lexer<R> {}

impl<R> std::fmt::Debug for Lexer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("buffer", &self.buffer)
            .field("words", &self.words.len())
            .field("position", &self.position)
            .field("poisoned", &self.poisoned)
            .finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
