pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let addr = config.bind_addr()?;
    let static_dir = config.server.static_dir.clone();
    let state = shared::app_state::AppState::new(config)?;

    tracing::info!(
        backend = %state.proxy.base_url(),
        max_body_mb = state.config.server.max_body_mb,
        "Dashboard proxy configured"
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let mut app = routes::configure_routes(state);

    // Собранный frontend отдаётся тем же сервером, если каталог указан
    if let Some(dir) = static_dir.filter(|d| std::path::Path::new(d).is_dir()) {
        tracing::info!("Serving frontend from {}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    let app = app
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Dashboard proxy listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
