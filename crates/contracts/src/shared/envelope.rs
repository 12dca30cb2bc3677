use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ошибка транспорта или некорректный ответ (клиентская сторона)
pub const CONNECTION_ERROR_MESSAGE: &str = "Error de conexión con el servidor";

/// Внутренняя ошибка прокси дашборда
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Сообщение по умолчанию, если бэкенд ответил ошибкой без текста
pub fn backend_error_message(status: u16) -> String {
    format!("Error del servidor externo (HTTP {})", status)
}

/// Единый конверт ответа: `{ success, message?, data? }`
///
/// `success == true` означает, что `data` присутствует;
/// `success == false` означает, что есть `message`, а `data` отсутствует.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Проверка инварианта конверта
    pub fn is_well_formed(&self) -> bool {
        if self.success {
            self.data.is_some()
        } else {
            self.data.is_none() && self.message.as_deref().is_some_and(|m| !m.is_empty())
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .message
                .unwrap_or_else(|| CONNECTION_ERROR_MESSAGE.to_string())),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
        }
    }
}

impl<T: DeserializeOwned + Default> ApiResponse<T> {
    /// Нормализация сырого HTTP-ответа бэкенда в конверт.
    ///
    /// Никогда не паникует: любой неожиданный ответ превращается в неуспешный конверт.
    /// Успешный ответ без данных (`data: null`, пустое тело 204) даёт `T::default()`.
    pub fn from_http(status: u16, body: &str) -> Self {
        if !(200..300).contains(&status) {
            return Self::failure(
                backend_message(body).unwrap_or_else(|| backend_error_message(status)),
            );
        }

        let value: Value = if body.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(body) {
                Ok(v) => v,
                Err(_) => return Self::failure(CONNECTION_ERROR_MESSAGE),
            }
        };

        let payload = match split_envelope(value) {
            Ok(payload) => payload,
            Err(message) => {
                return Self::failure(message.unwrap_or_else(|| backend_error_message(status)))
            }
        };

        if payload.is_null() {
            return Self::success(serde_json::from_value(Value::Null).unwrap_or_default());
        }
        match serde_json::from_value::<T>(payload) {
            Ok(data) => Self::success(data),
            Err(_) => Self::failure(CONNECTION_ERROR_MESSAGE),
        }
    }
}

/// Текст ошибки из тела ответа бэкенда (`message` или `error`)
pub fn backend_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}

/// Разворачивает конверт бэкенда.
///
/// - объект с булевым `success: true` → содержимое `data` (или `null`);
/// - объект с `success: false` → `Err` с сообщением бэкенда, если оно есть;
/// - всё остальное считается «голым» payload и возвращается как есть.
pub fn split_envelope(value: Value) -> Result<Value, Option<String>> {
    let success = value.get("success").and_then(Value::as_bool);
    match success {
        Some(true) => Ok(value.get("data").cloned().unwrap_or(Value::Null)),
        Some(false) => Err(["message", "error"]
            .iter()
            .filter_map(|key| value.get(*key))
            .filter_map(Value::as_str)
            .find(|m| !m.trim().is_empty())
            .map(str::to_string)),
        None => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constructors_are_well_formed() {
        assert!(ApiResponse::success(vec![1, 2]).is_well_formed());
        assert!(ApiResponse::success_with_message("ok", ()).is_well_formed());
        assert!(ApiResponse::<()>::failure("boom").is_well_formed());

        let broken = ApiResponse::<u8> {
            success: true,
            message: None,
            data: None,
        };
        assert!(!broken.is_well_formed());
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let failure = serde_json::to_value(ApiResponse::<()>::failure("Falta el SKU")).unwrap();
        assert_eq!(failure, json!({"success": false, "message": "Falta el SKU"}));

        let success = serde_json::to_value(ApiResponse::success(vec!["a"])).unwrap();
        assert_eq!(success, json!({"success": true, "data": ["a"]}));
    }

    #[test]
    fn test_from_http_unwraps_backend_envelope() {
        let r = ApiResponse::<Vec<String>>::from_http(
            200,
            r#"{"success":true,"data":["telefonos","audio"]}"#,
        );
        assert_eq!(r.data, Some(vec!["telefonos".to_string(), "audio".to_string()]));
        assert!(r.is_well_formed());
    }

    #[test]
    fn test_from_http_empty_list_is_success() {
        let r = ApiResponse::<Vec<String>>::from_http(200, r#"{"success":true,"data":[]}"#);
        assert!(r.success);
        assert_eq!(r.data, Some(vec![]));
        assert_eq!(r.message, None);
    }

    #[test]
    fn test_from_http_null_data_is_empty_list() {
        let r = ApiResponse::<Vec<String>>::from_http(200, r#"{"success":true,"data":null}"#);
        assert!(r.success);
        assert_eq!(r.data, Some(vec![]));

        let r = ApiResponse::<Vec<String>>::from_http(204, "");
        assert!(r.success);
        assert_eq!(r.data, Some(vec![]));
        assert!(r.is_well_formed());

        let r = ApiResponse::<Option<u32>>::from_http(200, r#"{"success":true}"#);
        assert_eq!(r.data, Some(None));
    }

    #[test]
    fn test_from_http_bare_payload() {
        let r = ApiResponse::<Vec<u32>>::from_http(200, "[1,2,3]");
        assert_eq!(r.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_from_http_unit_payload_without_data() {
        let r = ApiResponse::<()>::from_http(200, r#"{"success":true}"#);
        assert!(r.success);
        let r = ApiResponse::<()>::from_http(204, "");
        assert!(r.success);
    }

    #[test]
    fn test_from_http_backend_failure_message() {
        let r = ApiResponse::<()>::from_http(404, r#"{"message":"Producto no encontrado"}"#);
        assert_eq!(r.message.as_deref(), Some("Producto no encontrado"));
        assert!(r.is_well_formed());

        let r = ApiResponse::<()>::from_http(500, "<html>oops</html>");
        assert_eq!(r.message, Some(backend_error_message(500)));
    }

    #[test]
    fn test_from_http_success_false_with_2xx() {
        let r = ApiResponse::<Vec<String>>::from_http(
            200,
            r#"{"success":false,"error":"Categoría inexistente"}"#,
        );
        assert!(!r.success);
        assert_eq!(r.message.as_deref(), Some("Categoría inexistente"));
    }

    #[test]
    fn test_from_http_malformed_json() {
        let r = ApiResponse::<Vec<String>>::from_http(200, "{not json");
        assert_eq!(r.message.as_deref(), Some(CONNECTION_ERROR_MESSAGE));

        let r = ApiResponse::<Vec<String>>::from_http(200, r#"{"success":true,"data":42}"#);
        assert_eq!(r.message.as_deref(), Some(CONNECTION_ERROR_MESSAGE));
        assert!(r.is_well_formed());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ApiResponse::success(5).into_result(), Ok(5));
        assert_eq!(
            ApiResponse::<i32>::failure("x").into_result(),
            Err("x".to_string())
        );
    }

    #[test]
    fn test_split_envelope() {
        assert_eq!(split_envelope(json!({"success": true})), Ok(Value::Null));
        assert_eq!(split_envelope(json!({"id": 1})), Ok(json!({"id": 1})));
        assert_eq!(split_envelope(json!({"success": false})), Err(None));
    }
}
