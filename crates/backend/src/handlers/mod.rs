pub mod campaign_templates;
pub mod coverage_zones;
pub mod product_media;

#[cfg(test)]
pub(crate) mod test_support;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::envelope::ApiResponse;
use contracts::shared::validation::ValidationError;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::proxy::ProxyError;

pub const MSG_INVALID_JSON: &str = "El cuerpo de la solicitud no es un JSON válido";

/// Результат прокси-обработчика: конверт успеха или `ProxyError`
pub type ProxyResult = Result<Json<ApiResponse<Value>>, ProxyError>;

/// Тело запроса под `DefaultBodyLimit`: превышение лимита уходит
/// в конверт 413, а не текстом axum
pub(crate) fn buffered_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, ProxyError> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ProxyError::PayloadTooLarge
        } else {
            ProxyError::Transport(rejection.body_text())
        }
    })
}

/// Разбор JSON-тела без axum-экстрактора, чтобы ошибки тоже шли в конверте.
/// Пустое тело даёт `T::default()`: отсутствующие поля отловит валидация.
pub(crate) fn parse_json_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ProxyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|_| ProxyError::Validation(ValidationError::new("body", MSG_INVALID_JSON)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product_media::DeleteDetailImagesRequest;

    #[test]
    fn test_parse_json_body() {
        let req: DeleteDetailImagesRequest = parse_json_body(&Bytes::from_static(b"")).unwrap();
        assert!(req.sku.is_none());

        let req: DeleteDetailImagesRequest =
            parse_json_body(&Bytes::from_static(br#"{"sku":"A","numeros":[1]}"#)).unwrap();
        assert_eq!(req.numeros, Some(vec![1]));

        let err = parse_json_body::<DeleteDetailImagesRequest>(&Bytes::from_static(b"{oops"))
            .unwrap_err();
        assert_eq!(err.public_message(), MSG_INVALID_JSON);
    }
}
