//! REST helpers for the host's GIF proxy.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since searches only happen in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; the picker turns any error
//! into an empty grid.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::GifItem;
use crate::state::gif_search::GifQuery;

#[cfg(any(test, feature = "hydrate"))]
const GIF_ENDPOINT: &str = "/api/gifs";

/// Query-string pairs for a GIF request.
#[cfg(any(test, feature = "hydrate"))]
fn gif_query_params(query: &GifQuery) -> Vec<(&'static str, String)> {
    match query {
        GifQuery::Trending => Vec::new(),
        GifQuery::Search(term) => vec![("q", term.clone())],
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn gif_request_failed_message(status: u16) -> String {
    format!("gif request failed: {status}")
}

/// Fetch GIFs for `query` from `GET /api/gifs`.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-OK status, or a
/// non-JSON body.
pub async fn fetch_gifs(query: &GifQuery) -> Result<Vec<GifItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let params = gif_query_params(query);
        let resp = gloo_net::http::Request::get(GIF_ENDPOINT)
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(gif_request_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        super::types::parse_gif_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}
