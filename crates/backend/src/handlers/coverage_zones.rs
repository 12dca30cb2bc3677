use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::Method,
    Json,
};
use contracts::domain::a003_coverage_zone::aggregate::{
    CoverageZone, CoverageZoneDto, MSG_ZONE_CREATED, MSG_ZONE_DELETED, MSG_ZONE_UPDATED,
};
use contracts::endpoints::{coverage_zone_path, routes};
use contracts::shared::envelope::ApiResponse;

use super::{buffered_body, parse_json_body, ProxyResult};
use crate::shared::app_state::AppState;
use crate::shared::proxy::ForwardBody;

// Тело проверяется через преобразование в модель зоны, но уходит как пришло
fn validate_zone(body: &Bytes) -> Result<CoverageZone, crate::shared::proxy::ProxyError> {
    let dto: CoverageZoneDto = parse_json_body(body)?;
    Ok(CoverageZone::try_from(&dto)?)
}

/// POST /api/coverage-zones
pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ProxyResult {
    let body = buffered_body(body)?;
    let zone = validate_zone(&body)?;

    let data = state
        .proxy
        .forward(
            Method::POST,
            routes::COVERAGE_ZONES,
            Some(ForwardBody::json(body)),
        )
        .await?;

    tracing::info!(name = %zone.name, points = zone.polygon.len(), "coverage zone created");
    Ok(Json(ApiResponse::success_with_message(MSG_ZONE_CREATED, data)))
}

/// PUT /api/coverage-zones/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> ProxyResult {
    let body = buffered_body(body)?;
    let path = coverage_zone_path(&id)?;
    let zone = validate_zone(&body)?;

    let data = state
        .proxy
        .forward(Method::PUT, &path, Some(ForwardBody::json(body)))
        .await?;

    tracing::info!(id = %id, name = %zone.name, "coverage zone updated");
    Ok(Json(ApiResponse::success_with_message(MSG_ZONE_UPDATED, data)))
}

/// DELETE /api/coverage-zones/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ProxyResult {
    let path = coverage_zone_path(&id)?;
    let data = state.proxy.forward(Method::DELETE, &path, None).await?;

    tracing::info!(id = %id, "coverage zone deleted");
    Ok(Json(ApiResponse::success_with_message(MSG_ZONE_DELETED, data)))
}
