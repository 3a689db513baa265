//! GIF proxy route.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::giphy::types::{GiphyError, MediaItem};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GifQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GifList {
    pub data: Vec<MediaItem>,
}

/// `GET /api/gifs?q=` — keyword search, or trending when `q` is blank.
pub async fn list_gifs(
    State(state): State<AppState>,
    Query(params): Query<GifQuery>,
) -> Result<Json<GifList>, StatusCode> {
    let Some(source) = state.gifs.as_ref() else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let term = params.q.as_deref().map_or("", str::trim);
    let result = if term.is_empty() { source.trending().await } else { source.search(term).await };

    match result {
        Ok(data) => {
            tracing::debug!(term, count = data.len(), "gif lookup");
            Ok(Json(GifList { data }))
        }
        Err(e) => {
            tracing::warn!(error = %e, term, "gif lookup failed");
            Err(giphy_error_to_status(&e))
        }
    }
}

pub(crate) fn giphy_error_to_status(err: &GiphyError) -> StatusCode {
    match err {
        GiphyError::MissingApiKey { .. } | GiphyError::ConfigParse(_) | GiphyError::HttpClientBuild(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        GiphyError::ApiRequest(_) | GiphyError::ApiResponse { .. } | GiphyError::ApiParse(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "gifs_test.rs"]
mod tests;
