//! happy - Check whether numbers are happy

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = happy_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
