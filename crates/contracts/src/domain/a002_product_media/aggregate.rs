use serde::{Deserialize, Serialize};

use crate::shared::validation::{require_items, require_text, ValidationError};

/// Имена текстовых полей multipart-формы обновления медиа
pub const FIELD_SKU: &str = "sku";
pub const FIELD_MARKET_CODE: &str = "codigoMarket";

pub const MSG_SKU_REQUIRED: &str = "El SKU es requerido";
pub const MSG_NUMBERS_REQUIRED: &str = "Los números de las imágenes a eliminar son requeridos";
pub const MSG_MARKET_CODE_REQUIRED: &str = "El código de market es requerido";

pub const MSG_PREVIEW_DELETED: &str = "Imagen de preview eliminada correctamente";
pub const MSG_MEDIA_UPDATED: &str = "Multimedia del producto actualizada correctamente";

pub fn detail_images_deleted_message(count: usize) -> String {
    format!(
        "Imágenes de detalle eliminadas correctamente ({} imagen/es)",
        count
    )
}

// ============================================================================
// DELETE /media/detail
// ============================================================================

/// Тело запроса на удаление детальных изображений (как пришло из браузера)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteDetailImagesRequest {
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub numeros: Option<Vec<u32>>,
}

/// Провалидированный запрос
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDetailImages {
    pub sku: String,
    pub numeros: Vec<u32>,
}

impl DeleteDetailImagesRequest {
    pub fn new(sku: impl Into<String>, numeros: Vec<u32>) -> Self {
        Self {
            sku: Some(sku.into()),
            numeros: Some(numeros),
        }
    }

    /// Сначала проверяются номера, затем SKU
    pub fn validate(&self) -> Result<DeleteDetailImages, ValidationError> {
        let numeros = require_items("numeros", self.numeros.as_deref(), MSG_NUMBERS_REQUIRED)?;
        let sku = require_text(FIELD_SKU, self.sku.as_deref(), MSG_SKU_REQUIRED)?;
        Ok(DeleteDetailImages { sku, numeros })
    }
}

// ============================================================================
// DELETE /media/preview
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePreviewImageRequest {
    #[serde(default)]
    pub sku: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePreviewImage {
    pub sku: String,
}

impl DeletePreviewImageRequest {
    pub fn new(sku: impl Into<String>) -> Self {
        Self {
            sku: Some(sku.into()),
        }
    }

    pub fn validate(&self) -> Result<DeletePreviewImage, ValidationError> {
        let sku = require_text(FIELD_SKU, self.sku.as_deref(), MSG_SKU_REQUIRED)?;
        Ok(DeletePreviewImage { sku })
    }
}

// ============================================================================
// PUT /media (multipart)
// ============================================================================

/// Текстовые поля multipart-формы, собранные прокси при разборе.
/// Файловые части не интерпретируются.
#[derive(Debug, Clone, Default)]
pub struct MediaUpdateFields {
    pub sku: Option<String>,
    pub market_code: Option<String>,
    pub file_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUpdate {
    pub sku: String,
    pub market_code: String,
    pub file_count: usize,
}

impl MediaUpdateFields {
    /// Учитывает одно поле формы; `file_name` есть только у файловых частей
    pub fn record(&mut self, name: &str, file_name: Option<&str>, text: Option<String>) {
        if file_name.is_some() {
            self.file_count += 1;
            return;
        }
        match name {
            FIELD_SKU => self.sku = text,
            FIELD_MARKET_CODE => self.market_code = text,
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<MediaUpdate, ValidationError> {
        let sku = require_text(FIELD_SKU, self.sku.as_deref(), MSG_SKU_REQUIRED)?;
        let market_code = require_text(
            FIELD_MARKET_CODE,
            self.market_code.as_deref(),
            MSG_MARKET_CODE_REQUIRED,
        )?;
        Ok(MediaUpdate {
            sku,
            market_code,
            file_count: self.file_count,
        })
    }
}
