//! Giphy configuration parsed from environment variables.

use super::types::GiphyError;

pub const API_KEY_VAR: &str = "GIPHY_API_KEY";
pub const DEFAULT_GIPHY_BASE_URL: &str = "https://api.giphy.com/v1";
pub const DEFAULT_GIPHY_LIMIT: u32 = 50;
pub const DEFAULT_GIPHY_RATING: &str = "g";
pub const DEFAULT_GIPHY_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_GIPHY_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Upper bound Giphy accepts for `limit` on public keys.
const MAX_GIPHY_LIMIT: u32 = 50;
const RATINGS: [&str; 4] = ["g", "pg", "pg-13", "r"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GiphyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiphyConfig {
    pub api_key: String,
    pub base_url: String,
    pub limit: u32,
    pub rating: String,
    pub timeouts: GiphyTimeouts,
}

impl GiphyConfig {
    /// Build typed Giphy config from environment variables.
    ///
    /// Required:
    /// - `GIPHY_API_KEY`
    ///
    /// Optional:
    /// - `GIPHY_BASE_URL`: default `https://api.giphy.com/v1`
    /// - `GIPHY_LIMIT`: 1-50, default 50
    /// - `GIPHY_RATING`: `g` (default), `pg`, `pg-13`, or `r`
    /// - `GIPHY_REQUEST_TIMEOUT_SECS`: default 10
    /// - `GIPHY_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, GiphyError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GiphyError::MissingApiKey { var: API_KEY_VAR.into() })?;

        let base_url = std::env::var("GIPHY_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GIPHY_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let limit = parse_limit(std::env::var("GIPHY_LIMIT").ok().as_deref())?;
        let rating = parse_rating(std::env::var("GIPHY_RATING").ok().as_deref())?;
        let timeouts = GiphyTimeouts {
            request_secs: env_parse_u64("GIPHY_REQUEST_TIMEOUT_SECS", DEFAULT_GIPHY_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("GIPHY_CONNECT_TIMEOUT_SECS", DEFAULT_GIPHY_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_key, base_url, limit, rating, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_limit(raw: Option<&str>) -> Result<u32, GiphyError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_GIPHY_LIMIT);
    };
    match raw.trim().parse::<u32>() {
        Ok(limit) if (1..=MAX_GIPHY_LIMIT).contains(&limit) => Ok(limit),
        _ => Err(GiphyError::ConfigParse(format!("GIPHY_LIMIT must be 1-{MAX_GIPHY_LIMIT}, got '{raw}'"))),
    }
}

fn parse_rating(raw: Option<&str>) -> Result<String, GiphyError> {
    let rating = raw.unwrap_or(DEFAULT_GIPHY_RATING).trim().to_ascii_lowercase();
    if RATINGS.contains(&rating.as_str()) {
        Ok(rating)
    } else {
        Err(GiphyError::ConfigParse(format!("unknown GIPHY_RATING: {rating}")))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
