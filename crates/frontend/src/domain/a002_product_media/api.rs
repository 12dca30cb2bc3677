//! Мутации медиа товара (через прокси дашборда)

use contracts::domain::a002_product_media::aggregate::{
    DeleteDetailImagesRequest, DeletePreviewImageRequest,
};
use contracts::endpoints::Endpoint;
use contracts::shared::envelope::ApiResponse;
use serde_json::Value;
use web_sys::FormData;

use crate::shared::endpoint_client::{invalid_request, request_for, send_envelope};

/// DELETE /api/products/{code}/media/detail
pub async fn delete_detail_images(code: &str, sku: &str, numeros: Vec<u32>) -> ApiResponse<Value> {
    let request = DeleteDetailImagesRequest::new(sku, numeros);
    if let Err(e) = request.validate() {
        return invalid_request(e);
    }
    let endpoint = match Endpoint::delete_detail_images(code) {
        Ok(endpoint) => endpoint,
        Err(e) => return invalid_request(e),
    };
    send_envelope(request_for(&endpoint).json(&request)).await
}

/// DELETE /api/products/{code}/media/preview
pub async fn delete_preview_image(code: &str, sku: &str) -> ApiResponse<Value> {
    let request = DeletePreviewImageRequest::new(sku);
    if let Err(e) = request.validate() {
        return invalid_request(e);
    }
    let endpoint = match Endpoint::delete_preview_image(code) {
        Ok(endpoint) => endpoint,
        Err(e) => return invalid_request(e),
    };
    send_envelope(request_for(&endpoint).json(&request)).await
}

/// PUT /api/products/{code}/media
///
/// Форма уходит как есть: браузер сам выставляет multipart boundary.
/// Поля `sku` и `codigoMarket` проверяет прокси.
pub async fn update_media(code: &str, form: FormData) -> ApiResponse<Value> {
    let endpoint = match Endpoint::update_media(code) {
        Ok(endpoint) => endpoint,
        Err(e) => return invalid_request(e),
    };
    send_envelope(request_for(&endpoint).body(form)).await
}
