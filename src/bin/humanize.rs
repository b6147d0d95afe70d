//! Command-line humanizer
//!
//! Run with: cargo run --bin humanize -- 1523428.56 -5.25
//! With no arguments, reads one amount per line from stdin.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use money_humanizer::{humanize, Amount};

fn main() -> anyhow::Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let inputs: Vec<String> = if args.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        args
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0u32;

    for input in &inputs {
        match input.parse::<Amount>() {
            Ok(amount) => writeln!(out, "{}", humanize(amount.value()))?,
            Err(e) => {
                eprintln!("{input}: {e}");
                failures += 1;
            }
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
