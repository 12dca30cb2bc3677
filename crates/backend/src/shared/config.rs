use contracts::shared::backend_url::{resolve_backend_url, BACKEND_URL_ENV};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Лимит тела запроса (multipart с изображениями), МБ
    #[serde(default = "default_max_body_mb")]
    pub max_body_mb: usize,
    /// Каталог со сборкой frontend (отдаётся как статика, если существует)
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    #[serde(default)]
    pub url: Option<String>,
    /// Без значения используется таймаут транспорта по умолчанию
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_max_body_mb() -> usize {
    25
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
max_body_mb = 25

[backend]
url = "http://localhost:3001"
"#;

impl Config {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.server.host, self.server.port).parse()?)
    }

    /// Итоговый базовый URL внешнего бэкенда (после `apply_env`)
    pub fn backend_url(&self) -> String {
        resolve_backend_url(self.backend.url.as_deref())
    }

    pub fn backend_timeout(&self) -> Option<Duration> {
        self.backend.timeout_secs.map(Duration::from_secs)
    }

    pub fn max_body_bytes(&self) -> usize {
        self.server.max_body_mb * 1024 * 1024
    }

    /// Переменная окружения перекрывает значение из файла
    pub fn apply_env(mut self, env_url: Option<String>) -> Self {
        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            self.backend.url = Some(url);
        }
        self.backend.url = Some(resolve_backend_url(self.backend.url.as_deref()));
        self
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `BACKEND_API_URL` overrides `backend.url` in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let config = load_file_config()?;
    Ok(config.apply_env(std::env::var(BACKEND_URL_ENV).ok()))
}

fn load_file_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}
