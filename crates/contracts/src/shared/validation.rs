use thiserror::Error;

/// Ошибка валидации входящего запроса.
///
/// `message` - готовый для пользователя текст, уходит в конверт как есть.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Стандартное сообщение для обязательного параметра
    pub fn required(field: &'static str) -> Self {
        Self::new(field, format!("El parámetro '{}' es requerido", field))
    }
}

/// Обязательное непустое строковое поле (пробелы по краям отбрасываются)
pub fn require_text(
    field: &'static str,
    value: Option<&str>,
    message: &str,
) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::new(field, message)),
    }
}

/// Обязательный непустой список
pub fn require_items<T: Clone>(
    field: &'static str,
    value: Option<&[T]>,
    message: &str,
) -> Result<Vec<T>, ValidationError> {
    match value {
        Some(items) if !items.is_empty() => Ok(items.to_vec()),
        _ => Err(ValidationError::new(field, message)),
    }
}

/// Ограничение длины в символах (не байтах)
pub fn max_chars(
    field: &'static str,
    value: &str,
    limit: usize,
    message: &str,
) -> Result<(), ValidationError> {
    if value.chars().count() > limit {
        Err(ValidationError::new(field, message))
    } else {
        Ok(())
    }
}
