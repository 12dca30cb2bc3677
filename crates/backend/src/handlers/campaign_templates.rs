use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::Method,
    Json,
};
use contracts::domain::a004_campaign_template::aggregate::{CampaignTemplate, MSG_TEMPLATE_CREATED};
use contracts::endpoints::routes;
use contracts::shared::envelope::ApiResponse;

use super::{buffered_body, parse_json_body, ProxyResult};
use crate::shared::app_state::AppState;
use crate::shared::proxy::ForwardBody;

/// POST /api/campaigns/templates
pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ProxyResult {
    let body = buffered_body(body)?;
    let template: CampaignTemplate = parse_json_body(&body)?;
    template.validate()?;

    let data = state
        .proxy
        .forward(
            Method::POST,
            routes::CAMPAIGN_TEMPLATES,
            Some(ForwardBody::json(body)),
        )
        .await?;

    tracing::info!(
        name = %template.name,
        header = template.header.kind(),
        "campaign template created"
    );
    Ok(Json(ApiResponse::success_with_message(MSG_TEMPLATE_CREATED, data)))
}
