//! Общие контракты между frontend и backend дашборда
//!
//! - `shared` - конверт ответа (Envelope), валидация, базовый URL внешнего бэкенда
//! - `domain` - DTO и модели представления по ресурсам
//! - `endpoints` - шаблоны путей внешнего бэкенда и прокси дашборда

pub mod domain;
pub mod endpoints;
pub mod shared;
