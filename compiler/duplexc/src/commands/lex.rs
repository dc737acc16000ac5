//! `duplex lex`: print the token stream of a file or stdin.

use std::io::{self, Read, Write};

use duplex_lexer::{LexError, Lexer, LexerConfig};
use tracing::debug;

use super::open_file;

/// Options accepted after `duplex lex <path>`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOptions {
    pub config: LexerConfig,
    /// Print `Whitespace` tokens too.
    pub show_whitespace: bool,
}

/// Counts reported after a successful run.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LexSummary {
    /// Tokens printed.
    pub printed: usize,
    /// Tokens scanned, whitespace included, `Eof` excluded.
    pub scanned: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LexCommandError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("error reading '{path}': {source}")]
    Open { path: String, source: io::Error },
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("failed to write tokens: {0}")]
    Write(#[source] io::Error),
}

/// Parse `--buffer-size=N` and `--show-whitespace`.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();
    for arg in args {
        if let Some(size) = arg.strip_prefix("--buffer-size=") {
            let capacity = size
                .parse::<usize>()
                .map_err(|e| format!("invalid --buffer-size '{size}': {e}"))?;
            if capacity == 0 {
                return Err("--buffer-size must be at least 1".to_string());
            }
            options.config = options.config.with_buffer_capacity(capacity);
        } else if arg == "--show-whitespace" {
            options.show_whitespace = true;
        } else {
            return Err(format!("unknown option '{arg}'"));
        }
    }
    Ok(options)
}

/// Lex `source` and write one line per token to `out`.
///
/// Tokens are written as they are scanned, so on error everything before the
/// failing token has already been written.
pub fn lex_stream<R: Read, W: Write>(
    source: R,
    label: &str,
    options: &LexOptions,
    out: &mut W,
) -> Result<LexSummary, LexCommandError> {
    let mut lexer = Lexer::with_config(source, options.config)?;
    let mut summary = LexSummary::default();

    writeln!(out, "Tokens for '{label}':").map_err(LexCommandError::Write)?;
    loop {
        let spanned = lexer.next_spanned()?;
        if spanned.token.is_eof() {
            break;
        }
        summary.scanned += 1;
        if spanned.token.is_trivia() && !options.show_whitespace {
            continue;
        }
        summary.printed += 1;
        writeln!(
            out,
            "  {} @ {}",
            spanned.token.display(lexer.interner()),
            spanned.start
        )
        .map_err(LexCommandError::Write)?;
    }
    writeln!(out, "({} tokens)", summary.printed).map_err(LexCommandError::Write)?;

    debug!(
        label,
        scanned = summary.scanned,
        words = lexer.words().len(),
        "lexed input"
    );
    Ok(summary)
}

/// Lex a file (or stdin for `-`) and print the token stream.
pub fn lex_file(path: &str, options: &LexOptions) {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if path == "-" {
        lex_stream(io::stdin().lock(), "<stdin>", options, &mut out)
    } else {
        open_file(path).and_then(|file| lex_stream(file, path, options, &mut out))
    };
    let flushed = out.flush();

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
    if let Err(err) = flushed {
        eprintln!("error: failed to write tokens: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
