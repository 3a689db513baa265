#![recursion_limit = "256"]

mod giphy;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::giphy::{GifSource, GiphyClient};

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize GIF source (non-fatal: GIF search disabled if config missing).
    let gifs: Option<Arc<dyn GifSource>> = match GiphyClient::from_env() {
        Ok(client) => {
            tracing::info!(limit = client.limit(), rating = client.rating(), "giphy client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "giphy client not configured, GIF search disabled");
            None
        }
    };

    let state = state::AppState::new(gifs);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "spotlight listening");
    axum::serve(listener, app).await.expect("server failed");
}
