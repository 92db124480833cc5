//! Command-line search for valid plaintext moduli.
//!
//! Prints every prime `p` in `[--min, --max)` with `(p - 1)` divisible by
//! the ring dimension `--ring-dim`, together with the cofactor
//! `k = (p - 1) / m`.  Matches are written as soon as they are found, so
//! partial results survive an interrupted run over a wide range.

use std::env;
use std::io::{self, Write};

use moduli_scan::{scan, ScanError, ScanParams};
use num_bigint::BigInt;

const DEFAULT_RING_DIM: i64 = 16_384;
const DEFAULT_MIN: i64 = 100_000_123;
const DEFAULT_MAX: i64 = 300_000_000;

fn fatal(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn print_help() {
    println!("Usage: findmoduli [--ring-dim <m>] [--min <n>] [--max <n>]");
    println!("  --ring-dim <m>  subgroup order the prime must support (default {DEFAULT_RING_DIM})");
    println!("  --min <n>       lower bound of the search range, inclusive (default {DEFAULT_MIN})");
    println!("  --max <n>       upper bound of the search range, exclusive (default {DEFAULT_MAX})");
}

fn parse_int(flag: &'static str, value: String) -> BigInt {
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => fatal(&ScanError::NotAnInteger { flag, value }.to_string()),
    }
}

fn main() {
    let mut ring_dim = BigInt::from(DEFAULT_RING_DIM);
    let mut min = BigInt::from(DEFAULT_MIN);
    let mut max = BigInt::from(DEFAULT_MAX);

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "--ring-dim" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| fatal("--ring-dim expects a value"));
                ring_dim = parse_int("--ring-dim", value);
            }
            "--min" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| fatal("--min expects a value"));
                min = parse_int("--min", value);
            }
            "--max" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| fatal("--max expects a value"));
                max = parse_int("--max", value);
            }
            other => fatal(&format!("unknown argument: {other}")),
        }
    }

    let params = ScanParams::from_signed(&ring_dim, &min, &max)
        .unwrap_or_else(|err| fatal(&err.to_string()));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "Valid plaintext primes for ring dimension m = {}:",
        params.order()
    )
    .unwrap_or_else(|err| fatal(&format!("failed to write output: {err}")));
    for candidate in scan(&params) {
        // Flush per line so a long scan streams instead of buffering.
        writeln!(out, "p = {}   (k = {})", candidate.p, candidate.k)
            .and_then(|()| out.flush())
            .unwrap_or_else(|err| fatal(&format!("failed to write output: {err}")));
    }
}
