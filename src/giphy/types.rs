//! Giphy proxy types: errors, the normalized media item, and payload parsing.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by GIF lookups.
#[derive(Debug, thiserror::Error)]
pub enum GiphyError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to Giphy failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// Giphy returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body was not JSON.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// MEDIA ITEM
// =============================================================================

/// One GIF as served to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    /// Small rendition for the picker grid.
    pub preview_url: String,
    /// Full rendition embedded into the comment.
    pub full_url: String,
}

// =============================================================================
// PARSING
// =============================================================================

/// Flatten a Giphy search/trending body into media items.
///
/// Only a body that is not JSON at all is an error. A missing `data` array
/// yields no items, and items without an id or either rendition are skipped.
pub fn parse_response(json: &str) -> Result<Vec<MediaItem>, GiphyError> {
    let body: serde_json::Value = serde_json::from_str(json).map_err(|e| GiphyError::ApiParse(e.to_string()))?;

    let Some(data) = body.get("data").and_then(serde_json::Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(data.iter().filter_map(media_item_from_value).collect())
}

fn media_item_from_value(item: &serde_json::Value) -> Option<MediaItem> {
    let text_at = |pointer: &str| {
        item.pointer(pointer)
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    Some(MediaItem {
        id: text_at("/id")?,
        title: text_at("/title").unwrap_or_default(),
        preview_url: text_at("/images/fixed_height_small/url")?,
        full_url: text_at("/images/fixed_height/url")?,
    })
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
