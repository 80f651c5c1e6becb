//! Thin binary entry point. Parses CLI args and delegates to `lastfm2spotify::run()`.

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = lastfm2spotify::cli::Cli::parse();

    match lastfm2spotify::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
