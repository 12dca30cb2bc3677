//! Клиент эндпоинтов: любой ответ приводится к `ApiResponse<T>`
//!
//! Ошибки транспорта и разбора не выходят наружу как `Err`: вызывающий код
//! всегда получает конверт (при сбое сети с `CONNECTION_ERROR_MESSAGE`).

use contracts::endpoints::{Endpoint, HttpMethod, ResourceKey, Target};
use contracts::shared::backend_url::join_url;
use contracts::shared::envelope::{ApiResponse, CONNECTION_ERROR_MESSAGE};
use contracts::shared::validation::ValidationError;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use super::api_utils::{api_url, backend_url};

/// Полный URL эндпоинта с учётом цели (бэкенд или прокси дашборда)
pub fn url_for(endpoint: &Endpoint) -> String {
    match endpoint.target {
        Target::Backend => join_url(&backend_url(), &endpoint.path),
        Target::Dashboard => api_url(&endpoint.path),
    }
}

pub fn request_for(endpoint: &Endpoint) -> RequestBuilder {
    let url = url_for(endpoint);
    match endpoint.method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Put => Request::put(&url),
        HttpMethod::Delete => Request::delete(&url),
    }
}

/// Отправить запрос и нормализовать ответ в конверт
pub async fn send_envelope<T: DeserializeOwned + Default>(
    request: Result<Request, gloo_net::Error>,
) -> ApiResponse<T> {
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            log::error!("Failed to build request: {}", e);
            return ApiResponse::failure(CONNECTION_ERROR_MESSAGE);
        }
    };

    let method = request.method();
    let url = request.url();
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("{:?} {} failed: {}", method, url, e);
            return ApiResponse::failure(CONNECTION_ERROR_MESSAGE);
        }
    };

    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::error!("{:?} {}: failed to read body: {}", method, url, e);
            return ApiResponse::failure(CONNECTION_ERROR_MESSAGE);
        }
    };

    let envelope = ApiResponse::from_http(status, &body);
    if !envelope.success {
        log::warn!(
            "{:?} {} -> {}: {}",
            method,
            url,
            status,
            envelope.message.as_deref().unwrap_or_default()
        );
    }
    envelope
}

/// Конверт для ошибки построения пути (пустой обязательный параметр)
pub fn invalid_request<T>(error: ValidationError) -> ApiResponse<T> {
    log::warn!("Request not sent ({}): {}", error.field, error.message);
    ApiResponse::failure(error.message)
}

/// GET ресурса каталога по ключу
pub async fn fetch_resource<T: DeserializeOwned + Default>(key: ResourceKey) -> ApiResponse<T> {
    match key.endpoint() {
        Ok(endpoint) => send_envelope(request_for(&endpoint).build()).await,
        Err(e) => invalid_request(e),
    }
}
