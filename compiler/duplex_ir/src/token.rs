//! Token types produced by the scanner.
//!
//! Every token class is a variant of the closed [`Token`] enum. Words carry an
//! interned [`Name`]; numbers carry their raw text; relational operators carry
//! only their attribute, since the attribute fixes the lexeme.

use std::fmt;

use crate::{Name, StringInterner};

/// Reserved words of the scanned language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    If,
    Then,
    Else,
    While,
    Do,
    For,
}

impl Keyword {
    /// All keywords, in the order the word table seeds them.
    pub const ALL: [Keyword; 6] = [
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::While,
        Keyword::Do,
        Keyword::For,
    ];

    /// Source text of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::For => "for",
        }
    }

    /// Resolve the keyword for a name from a seeded [`StringInterner`].
    ///
    /// Keywords are pre-interned first, so their names are exactly the indices
    /// of [`Keyword::ALL`].
    #[inline]
    pub fn from_name(name: Name) -> Option<Keyword> {
        Self::ALL.get(name.index()).copied()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identifier or keyword.
///
/// Two words for the same lexeme share one table entry, so comparing words
/// compares their names and never their text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Word {
    pub name: Name,
    /// Reserved tag; `None` for a plain identifier.
    pub keyword: Option<Keyword>,
}

impl Word {
    /// Word for an interned name, with its keyword tag resolved.
    pub fn new(name: Name) -> Self {
        Word {
            name,
            keyword: Keyword::from_name(name),
        }
    }

    pub fn is_keyword(self) -> bool {
        self.keyword.is_some()
    }
}

/// Relational operator attribute.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RelOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `=`
    Eq,
    /// `<>`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl RelOp {
    /// The lexeme this attribute was scanned from.
    pub const fn as_str(self) -> &'static str {
        match self {
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Eq => "=",
            RelOp::Ne => "<>",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
        }
    }

    /// Upper-case attribute mnemonic (`LT`, `LE`, ...).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            RelOp::Lt => "LT",
            RelOp::Le => "LE",
            RelOp::Eq => "EQ",
            RelOp::Ne => "NE",
            RelOp::Gt => "GT",
            RelOp::Ge => "GE",
        }
    }
}

/// A classified lexeme.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Token {
    /// Identifier or keyword.
    Word(Word),
    /// Integer or floating literal, kept as the matched text.
    Number(Box<str>),
    /// `<`, `<=`, `=`, `<>`, `>`, `>=`.
    RelOp(RelOp),
    /// A run of spaces, tabs, newlines and carriage returns.
    Whitespace,
    /// The input is exhausted.
    Eof,
}

impl Token {
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    /// Whitespace tokens are recognized but carry nothing for a parser.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// The lexeme text, or `None` for `Whitespace` and `Eof`.
    pub fn lexeme<'a>(&'a self, interner: &'a StringInterner) -> Option<&'a str> {
        match self {
            Token::Word(word) => Some(interner.lookup(word.name)),
            Token::Number(text) => Some(&**text),
            Token::RelOp(op) => Some(op.as_str()),
            Token::Whitespace | Token::Eof => None,
        }
    }

    /// Render the token with word text resolved through `interner`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> TokenDisplay<'a> {
        TokenDisplay {
            token: self,
            interner,
        }
    }
}

/// [`Display`](fmt::Display) adapter returned by [`Token::display`].
pub struct TokenDisplay<'a> {
    token: &'a Token,
    interner: &'a StringInterner,
}

impl fmt::Display for TokenDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token {
            Token::Word(word) => {
                let text = self.interner.lookup(word.name);
                if word.is_keyword() {
                    write!(f, "Keyword({text})")
                } else {
                    write!(f, "Ident({text})")
                }
            }
            Token::Number(text) => write!(f, "Number({text})"),
            Token::RelOp(op) => write!(f, "RelOp({}, {})", op.as_str(), op.mnemonic()),
            Token::Whitespace => f.write_str("Whitespace"),
            Token::Eof => f.write_str("Eof"),
        }
    }
}
