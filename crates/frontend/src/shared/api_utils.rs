//! API utilities for frontend-backend communication
//!
//! Reads go straight to the external backend, mutations go through the
//! dashboard's own proxy (served on port 3000).

use contracts::shared::backend_url::{join_url, resolve_backend_url};

/// Get the base URL of the dashboard proxy
///
/// Constructs the URL from the current window location,
/// using port 3000 for the dashboard server.
///
/// # Returns
/// - Base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Base URL of the external backend
///
/// `BACKEND_API_URL` is read at compile time; falls back to the shared default.
pub fn backend_url() -> String {
    resolve_backend_url(option_env!("BACKEND_API_URL"))
}

/// Build a full dashboard URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/coverage-zones");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}
