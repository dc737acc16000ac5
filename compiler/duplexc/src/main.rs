//! Duplex CLI
//!
//! Streaming lexer driver.

use duplexc::commands::{lex_file, parse_lex_options};

fn main() {
    duplexc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: duplex lex <file|-> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --buffer-size=<n>   Bytes per input buffer half (default: 4096)");
                eprintln!("  --show-whitespace   Also print whitespace tokens");
                std::process::exit(1);
            }

            let options = match parse_lex_options(&args[3..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };

            lex_file(&args[2], &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("duplex {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("error: unknown command '{command}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Duplex streaming lexer");
    println!();
    println!("Usage: duplex <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file|->         Tokenize a file (or stdin) and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --buffer-size=<n>    Bytes per input buffer half (default: 4096)");
    println!("  --show-whitespace    Also print whitespace tokens");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=duplex_lexer=trace   Trace every token and buffer refill");
}
