//! Wire DTOs for the host's GIF proxy.
//!
//! DESIGN
//! ======
//! The host already flattens Giphy's nested `images` object, so the browser
//! only sees `{ "data": [{ id, title, preview_url, full_url }] }`. Parsing is
//! lenient: a missing `data` array or an item with missing URLs is dropped
//! instead of failing the whole response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One selectable GIF.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Small rendition shown in the picker grid.
    pub preview_url: String,
    /// Rendition embedded in the posted comment.
    pub full_url: String,
}

/// Extract GIF items from a proxy response body.
///
/// # Errors
///
/// Returns an error string only when the body is not JSON at all.
pub fn parse_gif_response(body: &str) -> Result<Vec<GifItem>, String> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    Ok(gif_items_from_value(&value))
}

/// Collect well-formed items from a `{ "data": [...] }` value.
pub fn gif_items_from_value(value: &serde_json::Value) -> Vec<GifItem> {
    value
        .get("data")
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<GifItem>(item.clone()).ok())
                .filter(|item| !item.full_url.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
