//! Credential presence checks run before anything talks to Last.fm or Spotify.

use thiserror::Error;

use crate::config::{Config, Credential};

/// A required credential was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No {0} provided. See lastfmloved2spotify -h for help")]
pub struct MissingCredential(pub Credential);

/// Check credentials in order, stopping at the first empty one.
pub fn validate(config: &Config) -> Result<(), MissingCredential> {
    match Credential::ALL
        .into_iter()
        .find(|c| config.credential(*c).is_empty())
    {
        Some(missing) => Err(MissingCredential(missing)),
        None => Ok(()),
    }
}
