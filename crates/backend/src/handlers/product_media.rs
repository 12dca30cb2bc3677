use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{rejection::BytesRejection, FromRequest, Multipart, Path, Request, State},
    http::{header::CONTENT_TYPE, Method},
    Json,
};
use contracts::domain::a002_product_media::aggregate::{
    detail_images_deleted_message, DeleteDetailImagesRequest, DeletePreviewImageRequest,
    MediaUpdateFields, MSG_MEDIA_UPDATED, MSG_PREVIEW_DELETED,
};
use contracts::endpoints::product_media_path;
use contracts::shared::envelope::ApiResponse;
use contracts::shared::validation::ValidationError;

use super::{buffered_body, parse_json_body, ProxyResult};
use crate::shared::app_state::AppState;
use crate::shared::proxy::{ForwardBody, ProxyError};

pub const MSG_MULTIPART_REQUIRED: &str = "La solicitud debe enviarse como multipart/form-data";
pub const MSG_INVALID_MULTIPART: &str = "El formulario enviado no es válido";

/// DELETE /api/products/:code/media/detail
pub async fn delete_detail_images(
    State(state): State<AppState>,
    Path(code): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> ProxyResult {
    let body = buffered_body(body)?;
    let request: DeleteDetailImagesRequest = parse_json_body(&body)?;
    let validated = request.validate()?;
    let path = format!("{}/detail", product_media_path(&code)?);

    let data = state
        .proxy
        .forward(Method::DELETE, &path, Some(ForwardBody::json(body)))
        .await?;

    tracing::info!(
        code = %code,
        sku = %validated.sku,
        count = validated.numeros.len(),
        "detail images deleted"
    );
    Ok(Json(ApiResponse::success_with_message(
        detail_images_deleted_message(validated.numeros.len()),
        data,
    )))
}

/// DELETE /api/products/:code/media/preview
pub async fn delete_preview_image(
    State(state): State<AppState>,
    Path(code): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> ProxyResult {
    let body = buffered_body(body)?;
    let request: DeletePreviewImageRequest = parse_json_body(&body)?;
    let validated = request.validate()?;
    let path = format!("{}/preview", product_media_path(&code)?);

    let data = state
        .proxy
        .forward(Method::DELETE, &path, Some(ForwardBody::json(body)))
        .await?;

    tracing::info!(code = %code, sku = %validated.sku, "preview image deleted");
    Ok(Json(ApiResponse::success_with_message(
        MSG_PREVIEW_DELETED,
        data,
    )))
}

/// PUT /api/products/:code/media
///
/// Multipart-тело пересылается байт в байт с исходным `Content-Type`
/// (boundary сохраняется); разбор нужен только для проверки полей.
pub async fn update_media(
    State(state): State<AppState>,
    Path(code): Path<String>,
    request: Request,
) -> ProxyResult {
    let (parts, body) = request.into_parts();

    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !content_type.starts_with("multipart/form-data") {
        return Err(ValidationError::new("body", MSG_MULTIPART_REQUIRED).into());
    }

    let bytes = to_bytes(body, state.config.max_body_bytes())
        .await
        .map_err(|_| ProxyError::PayloadTooLarge)?;

    let fields = read_media_fields(Request::from_parts(parts, Body::from(bytes.clone()))).await?;
    let update = fields.validate()?;
    let path = product_media_path(&code)?;

    let data = state
        .proxy
        .forward(
            Method::PUT,
            &path,
            Some(ForwardBody::new(content_type, bytes)),
        )
        .await?;

    tracing::info!(
        code = %code,
        sku = %update.sku,
        market = %update.market_code,
        files = update.file_count,
        "media updated"
    );
    Ok(Json(ApiResponse::success_with_message(MSG_MEDIA_UPDATED, data)))
}

/// Собирает текстовые поля формы; файловые части пропускаются
async fn read_media_fields(request: Request) -> Result<MediaUpdateFields, ProxyError> {
    let invalid = || ProxyError::Validation(ValidationError::new("body", MSG_INVALID_MULTIPART));

    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|_| invalid())?;

    let mut fields = MediaUpdateFields::default();
    while let Some(field) = multipart.next_field().await.map_err(|_| invalid())? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let text = match file_name {
            Some(_) => None,
            None => Some(field.text().await.map_err(|_| invalid())?),
        };
        fields.record(&name, file_name.as_deref(), text);
    }
    Ok(fields)
}
