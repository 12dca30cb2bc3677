/// Переменная окружения с базовым URL внешнего бэкенда
pub const BACKEND_URL_ENV: &str = "BACKEND_API_URL";

/// URL внешнего бэкенда по умолчанию (одинаковый для frontend и backend)
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Единое правило выбора базового URL.
///
/// Пустое или отсутствующее значение означает `DEFAULT_BACKEND_URL`,
/// завершающий `/` отбрасывается.
///
/// # Примеры
/// ```
/// use contracts::shared::backend_url::resolve_backend_url;
/// assert_eq!(resolve_backend_url(None), "http://localhost:3001");
/// assert_eq!(resolve_backend_url(Some("https://api.shop.com/")), "https://api.shop.com");
/// ```
pub fn resolve_backend_url(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_BACKEND_URL.to_string(),
    }
}

/// Склеивает базовый URL и путь ресурса (путь начинается с `/`)
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_backend_url() {
        assert_eq!(resolve_backend_url(None), DEFAULT_BACKEND_URL);
        assert_eq!(resolve_backend_url(Some("")), DEFAULT_BACKEND_URL);
        assert_eq!(resolve_backend_url(Some("   ")), DEFAULT_BACKEND_URL);
        assert_eq!(
            resolve_backend_url(Some("http://10.0.0.5:8080//")),
            "http://10.0.0.5:8080"
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3001/", "/api/coverage-zones"),
            "http://localhost:3001/api/coverage-zones"
        );
        assert_eq!(
            join_url("http://localhost:3001", "api/coverage-zones"),
            "http://localhost:3001/api/coverage-zones"
        );
    }
}
