//! `algotrace-trace` - run one engine request and print the result as JSON.
//!
//! Usage:
//!   algotrace-trace [--pretty] < request.json
//!
//! The request is read from stdin; see `algotrace::request` for its shape.

use algotrace::run_request;
use std::io::{self, Read, Write};

fn main() {
    let pretty = std::env::args().skip(1).any(|a| a == "--pretty");

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run_request(buf.trim(), pretty) {
        Ok(out) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{out}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
