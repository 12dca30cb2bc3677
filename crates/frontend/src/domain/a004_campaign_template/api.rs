use contracts::domain::a004_campaign_template::aggregate::CampaignTemplate;
use contracts::endpoints::Endpoint;
use contracts::shared::envelope::ApiResponse;
use serde_json::Value;

use crate::shared::endpoint_client::{invalid_request, request_for, send_envelope};

/// POST /api/campaigns/templates
pub async fn create_campaign_template(template: &CampaignTemplate) -> ApiResponse<Value> {
    if let Err(e) = template.validate() {
        return invalid_request(e);
    }
    send_envelope(request_for(&Endpoint::create_campaign_template()).json(template)).await
}
