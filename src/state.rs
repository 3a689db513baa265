//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no comment data; it only holds the optional GIF source.

use std::sync::Arc;

use crate::giphy::GifSource;

#[derive(Clone)]
pub struct AppState {
    /// Optional GIF source. `None` if `GIPHY_API_KEY` is not configured.
    pub gifs: Option<Arc<dyn GifSource>>,
}

impl AppState {
    #[must_use]
    pub fn new(gifs: Option<Arc<dyn GifSource>>) -> Self {
        Self { gifs }
    }
}
