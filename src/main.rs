//! Command-line entry point for zipdigest.
//!
//! All decisions are made in the library; this file only prints the
//! outcome and turns it into an exit status.

use clap::Parser;
use std::process::ExitCode;

use zipdigest::{Cli, Outcome, digest_archive};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let code = match digest_archive(&cli.archive, &cli.output, &cli.digest_options()).await {
        Ok(outcome) => {
            report(&outcome);
            outcome.exit_code()
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            err.exit_code()
        }
    };

    ExitCode::from(code)
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Written { files, output } => {
            println!("Wrote {} files to {}", files, output.display());
        }
        Outcome::DiagnosisWritten { output } => {
            println!(
                "No matching files found. Diagnostic output written to: {}",
                output.display()
            );
        }
        Outcome::NoMatches => {
            eprintln!("No matching files found. Use --show-diagnosis to write a diagnostic file.");
        }
    }
}
