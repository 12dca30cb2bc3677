use std::sync::Arc;

use super::config::Config;
use super::proxy::BackendProxy;

/// Общее неизменяемое состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub proxy: BackendProxy,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let proxy = BackendProxy::new(config.backend_url(), config.backend_timeout())?;
        Ok(Self {
            config: Arc::new(config),
            proxy,
        })
    }
}
