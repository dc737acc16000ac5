//! Command handlers for the duplex CLI.
//!
//! Each submodule implements one CLI command. Opening inputs is shared and
//! lives here in the module root.

use std::fs::File;
use std::io;

mod lex;

pub use lex::{lex_file, lex_stream, parse_lex_options, LexCommandError, LexOptions, LexSummary};

/// Open `path` for streaming, with a readable message for the common failures.
pub fn open_file(path: &str) -> Result<File, LexCommandError> {
    File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LexCommandError::NotFound {
            path: path.to_string(),
        },
        io::ErrorKind::PermissionDenied => LexCommandError::PermissionDenied {
            path: path.to_string(),
        },
        _ => LexCommandError::Open {
            path: path.to_string(),
            source,
        },
    })
}
