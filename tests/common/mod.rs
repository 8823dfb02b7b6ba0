#![allow(dead_code)]

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use useragent_cli::config::Config;

/// What the fake remote source answers with
#[derive(Clone)]
pub enum Reply {
    Agents(Vec<String>),
    Status(StatusCode),
    Body(&'static str),
    Slow(Duration),
}

struct MockState {
    hits: AtomicUsize,
    reply: Reply,
}

pub struct MockSource {
    pub url: String,
    state: Arc<MockState>,
}

impl MockSource {
    pub async fn start(reply: Reply) -> Self {
        let state = Arc::new(MockState {
            hits: AtomicUsize::new(0),
            reply,
        });

        let app = Router::new()
            .route("/ua.json", get(serve_list))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock source");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/ua.json", addr),
            state,
        }
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

async fn serve_list(State(state): State<Arc<MockState>>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    match &state.reply {
        Reply::Agents(list) => Json(list.clone()).into_response(),
        Reply::Status(status) => (*status, "upstream unavailable").into_response(),
        Reply::Body(body) => (StatusCode::OK, *body).into_response(),
        Reply::Slow(delay) => {
            tokio::time::sleep(*delay).await;
            Json(vec!["too late"]).into_response()
        }
    }
}

pub fn agents(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("Mozilla/5.0 (TestOS {}) Gecko/20100101 Firefox/{}.0", i, 100 + i))
        .collect()
}

pub fn config_for(url: &str, cache_dir: &std::path::Path) -> Config {
    let url = url.to_string();
    let cache_dir = cache_dir.to_string_lossy().into_owned();
    Config::from_lookup(move |key| match key {
        "USERAGENT_CLI_SOURCE_URL" => Some(url.clone()),
        "USERAGENT_CLI_CACHE_DIR" => Some(cache_dir.clone()),
        "USERAGENT_CLI_FETCH_TIMEOUT_SECS" => Some("2".to_string()),
        _ => None,
    })
    .expect("Failed to build test config")
}
