//! Streaming lexer benchmarks.
//!
//! Measures throughput of the full token automata, and of the bare double
//! buffer underneath them, across buffer capacities. Small capacities stress
//! refills and boundary crossings; large ones approach the in-memory case.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use duplex_ir::Token;
use duplex_lexer::{Lexer, LexerConfig};
use duplex_lexer_core::{DoubleBuffer, Scan};

/// Generate N lines of loop-and-branch source.
fn generate_n_lines(n: usize) -> String {
    (0..n)
        .map(|i| format!("while count{i} <> {i} do if total >= {i}.5E+3 then x{i} = 0\n"))
        .collect()
}

const CAPACITIES: [usize; 5] = [16, 64, 512, 4096, 65536];

/// Tokens per second at each buffer capacity.
fn bench_lexer_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/stream/capacity");
    let source = generate_n_lines(2000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    for capacity in CAPACITIES {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &source, |b, src| {
            b.iter(|| {
                let config = LexerConfig::new().with_buffer_capacity(capacity);
                let Ok(mut lexer) = Lexer::with_config(src.as_bytes(), config) else {
                    return;
                };
                while let Ok(token) = lexer.next_token() {
                    if token == Token::Eof {
                        break;
                    }
                    black_box(token);
                }
            });
        });
    }

    group.finish();
}

/// Raw `next_char` throughput, no automata.
fn bench_buffer_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/buffer/capacity");
    let source = generate_n_lines(2000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    for capacity in CAPACITIES {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &source, |b, src| {
            b.iter(|| {
                let Ok(mut buffer) = DoubleBuffer::new(capacity, src.as_bytes()) else {
                    return;
                };
                while let Ok(Scan::Char(byte)) = buffer.next_char() {
                    black_box(byte);
                    if byte == b' ' || byte == b'\n' {
                        black_box(buffer.take_lexeme());
                    }
                }
            });
        });
    }

    group.finish();
}

/// Scaling with input size at the default capacity.
fn bench_lexer_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/stream/scaling");

    for lines in [10, 100, 1000, 10000] {
        let source = generate_n_lines(lines);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &source, |b, src| {
            b.iter(|| {
                let tokens = Lexer::new(src.as_bytes())
                    .map(|lexer| lexer.filter(Result::is_ok).count())
                    .unwrap_or(0);
                black_box(tokens);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_capacity,
    bench_buffer_capacity,
    bench_lexer_scaling
);
criterion_main!(benches);
