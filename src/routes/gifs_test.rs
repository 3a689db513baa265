use std::sync::{Arc, Mutex};

use super::*;
use crate::giphy::GifSource;

#[derive(Default)]
struct FakeSource {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeSource {
    fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    fn reply(&self, label: String) -> Result<Vec<MediaItem>, GiphyError> {
        self.calls.lock().unwrap().push(label.clone());
        if self.fail {
            return Err(GiphyError::ApiResponse { status: 500, body: "upstream down".into() });
        }
        Ok(vec![MediaItem {
            id: label.clone(),
            title: label,
            preview_url: "https://media.giphy.com/p.gif".into(),
            full_url: "https://media.giphy.com/f.gif".into(),
        }])
    }
}

#[async_trait::async_trait]
impl GifSource for FakeSource {
    async fn search(&self, term: &str) -> Result<Vec<MediaItem>, GiphyError> {
        self.reply(format!("search:{term}"))
    }

    async fn trending(&self) -> Result<Vec<MediaItem>, GiphyError> {
        self.reply("trending".into())
    }
}

fn state_with(source: &Arc<FakeSource>) -> AppState {
    AppState::new(Some(source.clone() as Arc<dyn GifSource>))
}

fn query(q: Option<&str>) -> Query<GifQuery> {
    Query(GifQuery { q: q.map(str::to_owned) })
}

#[tokio::test]
async fn keyword_query_searches_trimmed_term() {
    let source = Arc::new(FakeSource::default());
    let Json(list) = list_gifs(State(state_with(&source)), query(Some("  cats  "))).await.unwrap();

    assert_eq!(list.data.len(), 1);
    assert_eq!(list.data[0].id, "search:cats");
    assert_eq!(*source.calls.lock().unwrap(), ["search:cats"]);
}

#[tokio::test]
async fn blank_or_missing_query_loads_trending() {
    let source = Arc::new(FakeSource::default());
    list_gifs(State(state_with(&source)), query(None)).await.unwrap();
    list_gifs(State(state_with(&source)), query(Some("   "))).await.unwrap();

    assert_eq!(*source.calls.lock().unwrap(), ["trending", "trending"]);
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let source = Arc::new(FakeSource::failing());
    let err = list_gifs(State(state_with(&source)), query(Some("dogs"))).await.unwrap_err();
    assert_eq!(err, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unconfigured_source_is_service_unavailable() {
    let err = list_gifs(State(AppState::new(None)), query(Some("dogs"))).await.unwrap_err();
    assert_eq!(err, StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn parse_failures_map_to_bad_gateway() {
    assert_eq!(giphy_error_to_status(&GiphyError::ApiParse("eof".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        giphy_error_to_status(&GiphyError::MissingApiKey { var: "GIPHY_API_KEY".into() }),
        StatusCode::SERVICE_UNAVAILABLE
    );
}
