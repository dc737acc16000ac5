use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn run(input: &str, options: &LexOptions) -> (Result<LexSummary, LexCommandError>, String) {
    let mut out = Vec::new();
    let result = lex_stream(input.as_bytes(), "test", options, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn no_options_is_default() {
    assert_eq!(parse_lex_options(&[]).unwrap(), LexOptions::default());
}

#[test]
fn parses_buffer_size_and_whitespace_flag() {
    let options = parse_lex_options(&args(&["--buffer-size=16", "--show-whitespace"])).unwrap();
    assert_eq!(options.config.buffer_capacity, 16);
    assert!(options.show_whitespace);
}

#[test]
fn rejects_bad_buffer_sizes() {
    assert!(parse_lex_options(&args(&["--buffer-size=0"])).is_err());
    assert!(parse_lex_options(&args(&["--buffer-size=big"])).is_err());
    assert!(parse_lex_options(&args(&["--buffer-size=-4"])).is_err());
}

#[test]
fn rejects_unknown_options() {
    let err = parse_lex_options(&args(&["--verbose"])).unwrap_err();
    assert_eq!(err, "unknown option '--verbose'");
}

#[test]
fn prints_tokens_with_positions() {
    let (result, out) = run("if x >= 10\nthen y", &LexOptions::default());
    assert_eq!(
        result.unwrap(),
        LexSummary {
            printed: 6,
            scanned: 11
        }
    );
    assert_eq!(
        out,
        "Tokens for 'test':\n\
         \x20 Keyword(if) @ 1:1\n\
         \x20 Ident(x) @ 1:4\n\
         \x20 RelOp(>=, GE) @ 1:6\n\
         \x20 Number(10) @ 1:9\n\
         \x20 Keyword(then) @ 2:1\n\
         \x20 Ident(y) @ 2:6\n\
         (6 tokens)\n"
    );
}

#[test]
fn whitespace_shown_on_request() {
    let options = LexOptions {
        show_whitespace: true,
        ..LexOptions::default()
    };
    let (result, out) = run("a  b", &options);
    assert_eq!(result.unwrap().printed, 3);
    assert!(out.contains("  Whitespace @ 1:2\n"));
}

#[test]
fn empty_input_prints_no_tokens() {
    let (result, out) = run("", &LexOptions::default());
    assert_eq!(result.unwrap(), LexSummary::default());
    assert_eq!(out, "Tokens for 'test':\n(0 tokens)\n");
}

#[test]
fn lex_error_keeps_earlier_output() {
    let (result, out) = run("a = 12.", &LexOptions::default());
    let err = result.unwrap_err();
    assert!(matches!(err, LexCommandError::Lex(_)));
    assert_eq!(
        err.to_string(),
        "1:8: unexpected end of input in fractional part of number, expected a digit after '.'"
    );
    assert!(out.ends_with("  RelOp(=, EQ) @ 1:3\n"));
}

#[test]
fn small_buffer_gives_same_output() {
    let program = "while counter <> 100 do total = 3.5E+2";
    let (_, expected) = run(program, &LexOptions::default());
    let options = LexOptions {
        config: LexerConfig::new().with_buffer_capacity(13),
        ..LexOptions::default()
    };
    let (result, out) = run(program, &options);
    assert!(result.is_ok());
    assert_eq!(out, expected);
}
