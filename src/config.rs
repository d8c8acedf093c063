//! Environment-backed settings
//!
//! The upstream credential is never embedded in the binary; it comes from
//! the environment (or a `.env` file loaded in `main`).

use anyhow::{anyhow, Result};

pub const TOKEN_VAR: &str = "LZT_API_TOKEN";
pub const API_URL_VAR: &str = "LZT_API_URL";
pub const GAME_ID_VAR: &str = "STEAMLENS_GAME_ID";

pub const DEFAULT_API_URL: &str = "https://api.lzt.market";

/// Game whose playtime fills the Hours column (Rust)
pub const DEFAULT_TRACKED_GAME: &str = "252490";

#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL
    pub api_url: String,

    /// Bearer credential for the market API
    pub api_token: String,

    /// Steam game ID for the Hours column
    pub tracked_game: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_token = get(TOKEN_VAR)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "{} is not set. Export it or add it to a .env file",
                    TOKEN_VAR
                )
            })?;

        let api_url = get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let tracked_game = get(GAME_ID_VAR).unwrap_or_else(|| DEFAULT_TRACKED_GAME.to_string());

        Ok(Self {
            api_url,
            api_token,
            tracked_game,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_an_error() {
        let result = Config::from_lookup(|_| None);
        let err = result.unwrap_err();
        assert!(err.to_string().contains(TOKEN_VAR));
    }

    #[test]
    fn empty_token_is_rejected() {
        let result = Config::from_lookup(|key| (key == TOKEN_VAR).then(String::new));
        assert!(result.is_err());
    }

    #[test]
    fn defaults_apply_when_only_the_token_is_set() {
        let config =
            Config::from_lookup(|key| (key == TOKEN_VAR).then(|| "secret".to_string())).unwrap();

        assert_eq!(config.api_token, "secret");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.tracked_game, DEFAULT_TRACKED_GAME);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(|key| match key {
            TOKEN_VAR => Some("secret".to_string()),
            API_URL_VAR => Some("http://localhost:9999".to_string()),
            GAME_ID_VAR => Some("730".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:9999");
        assert_eq!(config.tracked_game, "730");
    }
}
