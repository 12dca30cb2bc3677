use std::time::Instant;

use axum::body::{Body, HttpBody};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Одна запись на запрос: статус, метод, путь, длительность (ms),
/// размер ответа. Ответы 4xx/5xx пишутся с уровнем `warn`.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    // Размер известен заранее для Json/Bytes; потоковые тела (статика) - "-"
    let size = response
        .body()
        .size_hint()
        .exact()
        .map(|n| format_number(n as usize))
        .unwrap_or_else(|| "-".to_string());

    if status.is_client_error() || status.is_server_error() {
        tracing::warn!(status = status.as_u16(), method = %method, path = %path, elapsed_ms, size = %size, "request");
    } else {
        tracing::info!(status = status.as_u16(), method = %method, path = %path, elapsed_ms, size = %size, "request");
    }

    response
}
