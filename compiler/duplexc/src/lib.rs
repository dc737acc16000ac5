//! Duplex command-line driver.
//!
//! Streams a file (or stdin) through [`duplex_lexer::Lexer`] and prints the
//! token stream. The input is never loaded whole; memory use is bounded by the
//! lexer's buffer capacity.
//!
//! ```text
//! path / stdin ──► DoubleBuffer ──► Lexer ──► token lines on stdout
//! ```

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=duplex_lexer=trace` or `RUST_LOG=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
