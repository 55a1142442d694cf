use std::io::{self, BufRead};

use clap::Parser;
use tinycalc::{interpreter::lexer::tokenize, run_source};

/// tinycalc is a tiny single-line arithmetic language: assignments, `print`
/// statements and the four arithmetic operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Dump the scanned token stream instead of executing.
    #[arg(short, long)]
    tokens: bool,

    /// The program text, e.g. 'x = 1 + 2 * 3; print x;'. Read from standard
    /// input when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let source = args.contents.unwrap_or_else(read_line);

    if args.tokens {
        dump_tokens(&source);
        return;
    }

    if let Err(e) = run_source(&source) {
        eprintln!("{e}");
    }
}

/// Reads exactly one line of code from standard input.
fn read_line() -> String {
    println!("Enter a line of code (e.g., 'x = 1 + 2 * 3; print x;'):");

    let mut buffer = String::new();
    if io::stdin().lock().read_line(&mut buffer).is_err() {
        eprintln!("Error reading input.");
        std::process::exit(1);
    }

    buffer
}

/// Prints each token of the source along with the text it was scanned from.
fn dump_tokens(source: &str) {
    match tokenize(source) {
        Ok(tokens) => {
            for (token, span) in tokens {
                println!("{:?}: '{}'", token, &source[span]);
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}
