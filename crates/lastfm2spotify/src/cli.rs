//! CLI argument parsing with clap. Defines the `Cli` struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Credential;

#[derive(Parser, Debug)]
#[command(
    name = "lastfm2spotify",
    version = "2.0",
    about = "import your LastFM loved tracks to a Spotify playlist",
    after_help = env_help()
)]
pub struct Cli {
    /// Last.fm API key that will be used to query data from the API
    #[arg(long, visible_alias = Credential::LastfmApiKey.alias(), value_name = "KEY")]
    pub lastfm_api_key: Option<String>,

    /// Last.fm API secret that will be used to query data from the API
    #[arg(long, visible_alias = Credential::LastfmApiSecret.alias(), value_name = "SECRET")]
    pub lastfm_api_secret: Option<String>,

    /// Spotify Client ID that will be used to query data from the API
    #[arg(long, visible_alias = Credential::SpotifyClientId.alias(), value_name = "ID")]
    pub spotify_client_id: Option<String>,

    /// Spotify Client Secret that will be used to query data from the API
    #[arg(long, visible_alias = Credential::SpotifyClientSecret.alias(), value_name = "SECRET")]
    pub spotify_client_secret: Option<String>,

    /// Market that will be used when querying data from the Spotify API [default: US]
    #[arg(short, long, value_name = "CODE")]
    pub market: Option<String>,

    /// Path to settings file (default: ~/.config/lastfm2spotify/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report where each setting came from
    #[arg(long)]
    pub verbose: bool,
}

/// The `Environment:` section of `--help`, one line per credential.
fn env_help() -> String {
    let mut help = String::from("Environment:");
    for credential in Credential::ALL {
        help.push_str(&format!(
            "\n  {:<22} used when {} is not given",
            credential.env_var(),
            credential.flag()
        ));
    }
    help
}
