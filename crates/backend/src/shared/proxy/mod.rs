//! Пересылка запросов дашборда во внешний бэкенд

pub mod client;
pub mod error;

pub use client::{BackendProxy, ForwardBody};
pub use error::ProxyError;
