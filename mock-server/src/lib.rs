use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{AppendHeaders, IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use tokio::net::TcpListener;

/// Counters shared by every handler.
#[derive(Debug, Default)]
pub struct ServerState {
    hits: AtomicUsize,
}

impl ServerState {
    /// Number of requests received so far, on any route.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub type Shared = Arc<ServerState>;

pub fn app() -> Router {
    app_with_state(Shared::default())
}

pub fn app_with_state(state: Shared) -> Router {
    Router::new()
        .route("/status/{code}", any(status))
        .route("/echo", any(echo))
        .route("/headers", any(headers))
        .route("/delay/{ms}", any(delay))
        .route("/cookies", get(cookies))
        .layer(middleware::from_fn_with_state(state.clone(), count_hits))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_state(listener: TcpListener, state: Shared) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn count_hits(State(state): State<Shared>, request: Request, next: Next) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, String), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, format!("status {code}")))
}

async fn echo(body: Bytes) -> Bytes {
    body
}

/// Request headers as a JSON object, first value per name.
async fn headers(headers: HeaderMap) -> Json<HashMap<String, String>> {
    Json(first_values(&headers))
}

async fn delay(Path(ms): Path<u64>) -> &'static str {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    "done"
}

async fn cookies() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, "first=1"), (SET_COOKIE, "second=2")]),
        "cookies",
    )
}

fn first_values(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .keys()
        .filter_map(|name| {
            let value = headers.get(name)?.to_str().ok()?;
            Some((name.as_str().to_string(), value.to_string()))
        })
        .collect()
}
