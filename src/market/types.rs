//! Type definitions for LZT Market API responses

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Market API error types
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch Steam items (HTTP {status})")]
    Api { status: reqwest::StatusCode },

    #[error("Malformed listings response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One Steam account listing from the market catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Listing ID, unique across the catalog; also forms the listing URL
    pub item_id: u64,

    /// English listing title
    pub title_en: String,

    /// Asking price
    pub price: Decimal,

    /// How the account was obtained (brute, stealer, resale, ...)
    pub item_origin: String,

    /// Account country, usually an ISO-ish code
    pub account_country: String,

    /// When the listing was published (epoch seconds)
    pub published_date: i64,

    /// Last account activity (epoch seconds)
    pub account_last_activity: i64,

    /// Extended guarantee code: -1, 0, 1, or an unrecognized value
    pub extended_guarantee: i64,

    /// Per-game statistics, absent for accounts with a hidden profile
    #[serde(default)]
    pub account_full_games: Option<FullGames>,
}

impl Listing {
    /// Playtime in hours for one game, `None` when the account has no
    /// stats for it.
    pub fn playtime(&self, game_id: &str) -> Option<Decimal> {
        self.account_full_games
            .as_ref()
            .and_then(|games| games.list.get(game_id))
            .and_then(|stats| stats.playtime_forever)
    }
}

/// Game statistics map, keyed by Steam game ID
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FullGames {
    #[serde(default)]
    pub list: HashMap<String, GameStats>,
}

/// Statistics for a single game on an account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    /// Total playtime in hours
    #[serde(default)]
    pub playtime_forever: Option<Decimal>,
}

/// Response envelope returned by the listings endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ListingsResponse {
    pub items: Vec<Listing>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn listing_decodes_without_game_stats() {
        let listing: Listing = serde_json::from_value(serde_json::json!({
            "item_id": 7,
            "title_en": "Quiet account",
            "price": 3.5,
            "item_origin": "resale",
            "account_country": "DE",
            "published_date": 1714180008,
            "account_last_activity": 1714000000,
            "extended_guarantee": 0
        }))
        .unwrap();

        assert_eq!(listing.item_id, 7);
        assert_eq!(listing.playtime("252490"), None);
    }

    #[test]
    fn playtime_looks_up_the_requested_game_only() {
        let listing: Listing = serde_json::from_value(serde_json::json!({
            "item_id": 8,
            "title_en": "Rust main",
            "price": 12,
            "item_origin": "brute",
            "account_country": "US",
            "published_date": 1714180008,
            "account_last_activity": 1714000000,
            "extended_guarantee": 1,
            "account_full_games": {
                "list": {
                    "252490": { "playtime_forever": 104.25 },
                    "730": {}
                }
            }
        }))
        .unwrap();

        assert_eq!(listing.playtime("252490"), Some(dec!(104.25)));
        assert_eq!(listing.playtime("730"), None);
        assert_eq!(listing.playtime("570"), None);
    }

    #[test]
    fn envelope_requires_items_field() {
        let result: Result<ListingsResponse, _> =
            serde_json::from_value(serde_json::json!({ "data": [] }));
        assert!(result.is_err());
    }
}
