use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use contracts::endpoints::routes;

use crate::handlers;
use crate::shared::app_state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes();

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // PRODUCT MEDIA
        // ========================================
        .route(
            routes::PRODUCT_MEDIA,
            put(handlers::product_media::update_media),
        )
        .route(
            routes::PRODUCT_MEDIA_DETAIL,
            delete(handlers::product_media::delete_detail_images),
        )
        .route(
            routes::PRODUCT_MEDIA_PREVIEW,
            delete(handlers::product_media::delete_preview_image),
        )
        // ========================================
        // COVERAGE ZONES
        // ========================================
        .route(
            routes::COVERAGE_ZONES,
            post(handlers::coverage_zones::create),
        )
        .route(
            routes::COVERAGE_ZONE,
            put(handlers::coverage_zones::update).delete(handlers::coverage_zones::delete),
        )
        // ========================================
        // MARKETING CAMPAIGNS
        // ========================================
        .route(
            routes::CAMPAIGN_TEMPLATES,
            post(handlers::campaign_templates::create),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
