//! Configuration binding: flags, then environment, then the optional TOML settings file, then defaults.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Market used when no flag or settings file supplies one.
pub const DEFAULT_MARKET: &str = "US";

/// A credential required before talking to either service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    LastfmApiKey,
    LastfmApiSecret,
    SpotifyClientId,
    SpotifyClientSecret,
}

impl Credential {
    /// All credentials, in the order they are checked.
    pub const ALL: [Credential; 4] = [
        Credential::LastfmApiKey,
        Credential::LastfmApiSecret,
        Credential::SpotifyClientId,
        Credential::SpotifyClientSecret,
    ];

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            Credential::LastfmApiKey => "LastFM API Key",
            Credential::LastfmApiSecret => "LastFM API Secret",
            Credential::SpotifyClientId => "Spotify Client ID",
            Credential::SpotifyClientSecret => "Spotify Client Secret",
        }
    }

    pub fn env_var(self) -> &'static str {
        match self {
            Credential::LastfmApiKey => "LASTFM_API_KEY",
            Credential::LastfmApiSecret => "LASTFM_API_SECRET",
            Credential::SpotifyClientId => "SPOTIFY_CLIENT_ID",
            Credential::SpotifyClientSecret => "SPOTIFY_CLIENT_SECRET",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Credential::LastfmApiKey => "--lastfm-api-key",
            Credential::LastfmApiSecret => "--lastfm-api-secret",
            Credential::SpotifyClientId => "--spotify-client-id",
            Credential::SpotifyClientSecret => "--spotify-client-secret",
        }
    }

    /// Short long-flag alias, e.g. `--lfmkey`.
    pub fn alias(self) -> &'static str {
        match self {
            Credential::LastfmApiKey => "lfmkey",
            Credential::LastfmApiSecret => "lfmsecret",
            Credential::SpotifyClientId => "scid",
            Credential::SpotifyClientSecret => "scs",
        }
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Where a bound value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Flag,
    Env,
    File,
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Flag => write!(f, "flag"),
            ValueSource::Env => write!(f, "env"),
            ValueSource::File => write!(f, "config file"),
            ValueSource::Default => write!(f, "default"),
        }
    }
}

/// Provenance of each field in [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sources {
    pub lastfm_api_key: ValueSource,
    pub lastfm_api_secret: ValueSource,
    pub spotify_client_id: ValueSource,
    pub spotify_client_secret: ValueSource,
    pub market: ValueSource,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            lastfm_api_key: ValueSource::Default,
            lastfm_api_secret: ValueSource::Default,
            spotify_client_id: ValueSource::Default,
            spotify_client_secret: ValueSource::Default,
            market: ValueSource::Default,
        }
    }
}

/// Settings for one invocation. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub lastfm_api_key: String,
    pub lastfm_api_secret: String,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    /// Market used when querying tracks from Spotify
    pub market: String,
    pub sources: Sources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lastfm_api_key: String::new(),
            lastfm_api_secret: String::new(),
            spotify_client_id: String::new(),
            spotify_client_secret: String::new(),
            market: DEFAULT_MARKET.to_string(),
            sources: Sources::default(),
        }
    }
}

/// Optional on-disk settings. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    lastfm_api_key: Option<String>,
    lastfm_api_secret: Option<String>,
    spotify_client_id: Option<String>,
    spotify_client_secret: Option<String>,
    market: Option<String>,
}

impl FileConfig {
    /// Load the settings file, or return an empty one if it doesn't exist.
    fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

impl Config {
    /// Parse `args` (program name first) and bind them against `env`.
    pub fn load<I, T, F>(args: I, env: F) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        F: Fn(&str) -> Option<String>,
    {
        let cli = Cli::try_parse_from(args)?;
        Ok(Self::resolve(&cli, env))
    }

    /// Bind already-parsed flags against `env` and the settings file.
    ///
    /// An unreadable or malformed settings file is reported as a warning on
    /// stderr and skipped; binding itself never fails.
    pub fn resolve<F>(cli: &Cli, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match read_settings(cli.config.as_deref()) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("warning: ignoring settings file ({e:#})");
                FileConfig::default()
            }
        };
        let lookup = |name: &str| env(name).filter(|v| !v.is_empty());

        let (lastfm_api_key, lastfm_api_key_src) = pick(
            cli.lastfm_api_key.clone(),
            lookup(Credential::LastfmApiKey.env_var()),
            file.lastfm_api_key,
            "",
        );
        let (lastfm_api_secret, lastfm_api_secret_src) = pick(
            cli.lastfm_api_secret.clone(),
            lookup(Credential::LastfmApiSecret.env_var()),
            file.lastfm_api_secret,
            "",
        );
        let (spotify_client_id, spotify_client_id_src) = pick(
            cli.spotify_client_id.clone(),
            lookup(Credential::SpotifyClientId.env_var()),
            file.spotify_client_id,
            "",
        );
        let (spotify_client_secret, spotify_client_secret_src) = pick(
            cli.spotify_client_secret.clone(),
            lookup(Credential::SpotifyClientSecret.env_var()),
            file.spotify_client_secret,
            "",
        );
        // The market has no environment variable.
        let (market, market_src) = pick(cli.market.clone(), None, file.market, DEFAULT_MARKET);

        Self {
            lastfm_api_key,
            lastfm_api_secret,
            spotify_client_id,
            spotify_client_secret,
            market,
            sources: Sources {
                lastfm_api_key: lastfm_api_key_src,
                lastfm_api_secret: lastfm_api_secret_src,
                spotify_client_id: spotify_client_id_src,
                spotify_client_secret: spotify_client_secret_src,
                market: market_src,
            },
        }
    }

    /// Value of a single credential.
    pub fn credential(&self, credential: Credential) -> &str {
        match credential {
            Credential::LastfmApiKey => &self.lastfm_api_key,
            Credential::LastfmApiSecret => &self.lastfm_api_secret,
            Credential::SpotifyClientId => &self.spotify_client_id,
            Credential::SpotifyClientSecret => &self.spotify_client_secret,
        }
    }

    /// Where a single credential's value came from.
    pub fn credential_source(&self, credential: Credential) -> ValueSource {
        match credential {
            Credential::LastfmApiKey => self.sources.lastfm_api_key,
            Credential::LastfmApiSecret => self.sources.lastfm_api_secret,
            Credential::SpotifyClientId => self.sources.spotify_client_id,
            Credential::SpotifyClientSecret => self.sources.spotify_client_secret,
        }
    }
}

/// Explicit flags win even when empty; file values only count when non-empty.
fn pick(
    flag: Option<String>,
    env: Option<String>,
    file: Option<String>,
    default: &str,
) -> (String, ValueSource) {
    if let Some(v) = flag {
        (v, ValueSource::Flag)
    } else if let Some(v) = env {
        (v, ValueSource::Env)
    } else if let Some(v) = file.filter(|v| !v.is_empty()) {
        (v, ValueSource::File)
    } else {
        (default.to_string(), ValueSource::Default)
    }
}

/// Read the settings file. Without `--config` and without a home directory there is none.
fn read_settings(cli_path: Option<&Path>) -> Result<FileConfig> {
    let path = match cli_path {
        Some(p) => expand_tilde(p)?,
        None => match default_config_path() {
            Ok(p) => p,
            Err(_) => return Ok(FileConfig::default()),
        },
    };
    FileConfig::load(&path)
}

/// Expand `~` prefix to the user's home directory.
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    if let Ok(stripped) = path.strip_prefix("~") {
        Ok(dirs::home_dir()
            .context("could not determine home directory")?
            .join(stripped))
    } else {
        Ok(path.to_path_buf())
    }
}

/// Default settings file path: ~/.config/lastfm2spotify/config.toml
pub fn default_config_path() -> Result<PathBuf> {
    Ok(dirs::home_dir()
        .context("could not determine home directory")?
        .join(".config")
        .join("lastfm2spotify")
        .join("config.toml"))
}
