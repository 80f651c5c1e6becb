//! lastfm2spotify: import Last.fm loved tracks to a Spotify playlist.
//! Binds credentials from flags, environment and the settings file, then checks they are all present.

pub mod cli;
pub mod config;
pub mod validate;

use anyhow::Result;
use console::style;

use cli::Cli;
use config::{Config, Credential};

/// Run the CLI with parsed arguments.
///
/// A missing credential is reported on stdout but is not an error: the
/// process still exits successfully.
pub fn run(cli: Cli) -> Result<()> {
    // Credentials are only checked for presence, so non-UTF-8 bytes are kept lossily.
    let config = Config::resolve(&cli, |name| {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    });

    if cli.verbose {
        report_sources(&config);
    }

    if let Err(missing) = validate::validate(&config) {
        println!("{}", style(missing).red());
        return Ok(());
    }

    if cli.verbose {
        eprintln!("{}", style("All credentials provided").green());
    }

    Ok(())
}

/// Print where every setting came from. Credential values are never shown.
fn report_sources(config: &Config) {
    for credential in Credential::ALL {
        let value = config.credential(credential);
        let shown = if value.is_empty() {
            "empty".to_string()
        } else {
            format!("set ({} chars)", value.chars().count())
        };
        eprintln!(
            "{}",
            style(format!(
                "{:<25} {:<16} from {}",
                credential.flag(),
                shown,
                config.credential_source(credential)
            ))
            .dim()
        );
    }
    eprintln!(
        "{}",
        style(format!(
            "{:<25} {:<16} from {}",
            "--market", config.market, config.sources.market
        ))
        .dim()
    );
}
