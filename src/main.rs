// main.rs - Command-line entry point.
//
// Exit status: 0 when every (pattern, mode) count matches, 1 on any count
// mismatch, 2 on fatal errors (usage, I/O, compile, conversion, engine).

use std::io;
use std::process::ExitCode;

use rexcheck::corpus::Corpus;
use rexcheck::harness::{default_suite, Harness};

fn main() -> ExitCode {
    let mut args = std::env::args_os().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            eprintln!("usage: rexcheck <corpus-file>");
            return ExitCode::from(2);
        }
    };

    let corpus = match Corpus::load(&path) {
        Ok(corpus) => corpus,
        Err(err) => {
            eprintln!("rexcheck: {}", err);
            return ExitCode::from(2);
        }
    };

    let stdout = io::stdout();
    let mut harness = Harness::new(&corpus, stdout.lock());
    match harness.run_suite(&default_suite()) {
        Ok(outcome) if outcome.passed() => ExitCode::SUCCESS,
        Ok(outcome) => {
            eprintln!(
                "rexcheck: {} of {} pattern/mode checks failed",
                outcome.failures, outcome.checks
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("rexcheck: {}", err);
            ExitCode::from(2)
        }
    }
}
