//! Мок внешнего бэкенда и запуск прокси на эфемерных портах

use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Bytes},
    extract::{Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::routes::configure_routes;
use crate::shared::app_state::AppState;
use crate::shared::config::{BackendConfig, Config, ServerConfig};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Option<String>,
    received: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockBackend {
    pub url: String,
    received: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockBackend {
    pub fn hits(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn last(&self) -> CapturedRequest {
        self.received
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("backend received no requests")
    }
}

async fn mock_handler(State(state): State<MockState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default();
    state.received.lock().unwrap().push(CapturedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        content_type: parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    match state.body {
        Some(body) => (
            state.status,
            [(CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => state.status.into_response(),
    }
}

/// Мок бэкенда, отвечающий всегда одним и тем же JSON
pub async fn spawn_backend(status: StatusCode, body: Value) -> MockBackend {
    spawn_backend_raw(status, Some(body.to_string())).await
}

/// Мок с произвольным (в т.ч. невалидным) телом ответа
pub async fn spawn_backend_raw(status: StatusCode, body: Option<String>) -> MockBackend {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body,
        received: received.clone(),
    };
    let app = Router::new().fallback(mock_handler).with_state(state);
    let url = serve(app).await;
    MockBackend { url, received }
}

/// Адрес, на котором гарантированно никто не слушает
pub async fn unreachable_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn test_config(backend_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            max_body_mb: 1,
            static_dir: None,
        },
        backend: BackendConfig {
            url: Some(backend_url.to_string()),
            timeout_secs: Some(5),
        },
    }
}

/// Запускает роутер прокси, направленный на `backend_url`
pub async fn spawn_proxy(backend_url: &str) -> String {
    let state = AppState::new(test_config(backend_url)).unwrap();
    serve(configure_routes(state)).await
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Статус и JSON-тело ответа прокси
pub async fn read_response(response: reqwest::Response) -> (u16, Value) {
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.unwrap();
    (status, body)
}
