use super::*;
use pretty_assertions::assert_eq;
use std::io;

#[test]
fn unexpected_char_message() {
    let err = LexError::UnexpectedChar {
        found: 'x',
        expected: "a digit after '.'",
        context: LexContext::Fraction,
        position: Position {
            offset: 3,
            line: 1,
            column: 4,
        },
    };
    assert_eq!(
        err.to_string(),
        "1:4: unexpected 'x' in fractional part of number, expected a digit after '.'"
    );
}

#[test]
fn unexpected_eof_message() {
    let err = LexError::UnexpectedEof {
        expected: "a digit",
        context: LexContext::Exponent,
        position: Position {
            offset: 2,
            line: 2,
            column: 1,
        },
    };
    assert_eq!(
        err.to_string(),
        "2:1: unexpected end of input in exponent of number, expected a digit"
    );
}

#[test]
fn control_characters_are_escaped() {
    let err = LexError::UnexpectedChar {
        found: '\u{7}',
        expected: "a token",
        context: LexContext::TopLevel,
        position: Position::START,
    };
    assert_eq!(
        err.to_string(),
        "1:1: unexpected '\\u{7}' at start of token, expected a token"
    );
}

#[test]
fn buffer_errors_are_transparent() {
    let err = LexError::from(BufferError::LexemeTooLong { capacity: 8 });
    assert_eq!(err.to_string(), "lexeme does not fit in two 8-byte buffers");
    assert_eq!(err.position(), None);

    let err = LexError::from(BufferError::from(io::Error::other("disk gone")));
    assert_eq!(err.to_string(), "failed to read input: disk gone");
}

#[test]
fn lexical_errors_report_position() {
    let position = Position {
        offset: 10,
        line: 3,
        column: 2,
    };
    let err = LexError::UnexpectedEof {
        expected: "a digit",
        context: LexContext::Fraction,
        position,
    };
    assert_eq!(err.position(), Some(position));
    assert_eq!(LexError::Poisoned.position(), None);
}

#[test]
fn default_context_is_top_level() {
    assert_eq!(LexContext::default(), LexContext::TopLevel);
}
