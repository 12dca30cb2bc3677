use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::envelope::{ApiResponse, INTERNAL_ERROR_MESSAGE};
use contracts::shared::validation::ValidationError;

/// Ошибки прокси-обработчиков
///
/// | Вариант | HTTP | Сообщение клиенту |
/// |---------|------|-------------------|
/// | `Validation` | 400 | текст валидации |
/// | `PayloadTooLarge` | 413 | фиксированный текст |
/// | `Backend` | статус бэкенда | сообщение бэкенда или общее |
/// | `Rejected` | 502 | сообщение бэкенда или общее |
/// | `Transport` | 500 | `INTERNAL_ERROR_MESSAGE`, причина только в логах |
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("validation failed on '{}': {}", .0.field, .0.message)]
    Validation(#[from] ValidationError),

    #[error("request body exceeds the configured limit")]
    PayloadTooLarge,

    #[error("backend responded {status}: {message}")]
    Backend { status: StatusCode, message: String },

    #[error("backend reported failure: {message}")]
    Rejected { message: String },

    #[error("transport error: {0}")]
    Transport(String),
}

pub const MSG_PAYLOAD_TOO_LARGE: &str = "El archivo enviado supera el tamaño permitido";

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Validation(_) => StatusCode::BAD_REQUEST,
            ProxyError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ProxyError::Backend { status, .. } => *status,
            ProxyError::Rejected { .. } => StatusCode::BAD_GATEWAY,
            ProxyError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Текст для браузера; внутренние причины наружу не уходят
    pub fn public_message(&self) -> String {
        match self {
            ProxyError::Validation(e) => e.message.clone(),
            ProxyError::PayloadTooLarge => MSG_PAYLOAD_TOO_LARGE.to_string(),
            ProxyError::Backend { message, .. } | ProxyError::Rejected { message } => {
                message.clone()
            }
            ProxyError::Transport(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ProxyError::Validation(_) | ProxyError::PayloadTooLarge => {
                tracing::warn!(status = status.as_u16(), "rejected: {}", self)
            }
            ProxyError::Backend { .. } | ProxyError::Rejected { .. } => {
                tracing::warn!(status = status.as_u16(), "{}", self)
            }
            ProxyError::Transport(_) => tracing::error!("{}", self),
        }

        let body = ApiResponse::<()>::failure(self.public_message());
        (status, Json(body)).into_response()
    }
}
