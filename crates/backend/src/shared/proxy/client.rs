use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header::CONTENT_TYPE, Method, StatusCode};
use contracts::shared::backend_url::join_url;
use contracts::shared::envelope::{backend_error_message, backend_message, split_envelope};
use serde_json::Value;

use super::error::ProxyError;
use crate::shared::format::body_preview;

/// Тело, пересылаемое без перекодирования
#[derive(Debug, Clone)]
pub struct ForwardBody {
    pub content_type: String,
    pub bytes: Bytes,
}

impl ForwardBody {
    pub fn new(content_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn json(bytes: Bytes) -> Self {
        Self::new("application/json", bytes)
    }
}

/// HTTP-клиент внешнего бэкенда
///
/// Один `reqwest::Client` на процесс, базовый URL неизменен после старта.
#[derive(Clone)]
pub struct BackendProxy {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl BackendProxy {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: Arc::from(base_url.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ровно один запрос во внешний бэкенд по `path` с тем же методом.
    ///
    /// Возвращает payload бэкенда: содержимое `data`, если бэкенд ответил
    /// конвертом, иначе тело целиком (пустое тело - `null`).
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        body: Option<ForwardBody>,
    ) -> Result<Value, ProxyError> {
        let url = join_url(&self.base_url, path);
        tracing::debug!(method = %method, url = %url, "forwarding to backend");

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, body.content_type)
                .body(body.bytes);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProxyError::Transport(format!("{} {} failed: {}", method, url, e)))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let text = response.text().await.map_err(|e| {
            ProxyError::Transport(format!("{} {}: cannot read body: {}", method, url, e))
        })?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %body_preview(&text, 500), "backend error body");
            return Err(ProxyError::Backend {
                status,
                message: backend_message(&text)
                    .unwrap_or_else(|| backend_error_message(status.as_u16())),
            });
        }

        let value: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| {
                ProxyError::Transport(format!(
                    "{} {}: malformed JSON ({}): {}",
                    method,
                    url,
                    e,
                    body_preview(&text, 200)
                ))
            })?
        };

        split_envelope(value).map_err(|message| ProxyError::Rejected {
            message: message.unwrap_or_else(|| backend_error_message(status.as_u16())),
        })
    }
}
