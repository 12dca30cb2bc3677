//! Шаблоны путей ресурсов
//!
//! Чтение идёт напрямую во внешний бэкенд, мутации - через прокси дашборда.
//! Пути прокси совпадают с путями бэкенда, поэтому обработчик пересылает
//! запрос по тому же пути.

use std::fmt;

use crate::shared::validation::{require_text, ValidationError};

/// Шаблоны маршрутов прокси дашборда (синтаксис axum)
pub mod routes {
    pub const PRODUCT_MEDIA: &str = "/api/products/:code/media";
    pub const PRODUCT_MEDIA_DETAIL: &str = "/api/products/:code/media/detail";
    pub const PRODUCT_MEDIA_PREVIEW: &str = "/api/products/:code/media/preview";
    pub const COVERAGE_ZONES: &str = "/api/coverage-zones";
    pub const COVERAGE_ZONE: &str = "/api/coverage-zones/:id";
    pub const CAMPAIGN_TEMPLATES: &str = "/api/campaigns/templates";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Куда уходит запрос клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Внешний бэкенд (чтение)
    Backend,
    /// Собственный прокси дашборда (мутации)
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub target: Target,
    pub path: String,
}

impl Endpoint {
    fn new(method: HttpMethod, target: Target, path: impl Into<String>) -> Self {
        Self {
            method,
            target,
            path: path.into(),
        }
    }

    pub fn categories() -> Self {
        Self::new(HttpMethod::Get, Target::Backend, "/api/products/categories/distinct")
    }

    pub fn menus(category: &str) -> Result<Self, ValidationError> {
        let category = segment("categoryName", category)?;
        Ok(Self::new(
            HttpMethod::Get,
            Target::Backend,
            format!("/api/products/categories/{}/menus/distinct", category),
        ))
    }

    pub fn subcategories(category: &str, menu: &str) -> Result<Self, ValidationError> {
        let category = segment("categoryName", category)?;
        let menu = segment("menuName", menu)?;
        Ok(Self::new(
            HttpMethod::Get,
            Target::Backend,
            format!(
                "/api/products/categories/{}/menus/{}/subcategories/distinct",
                category, menu
            ),
        ))
    }

    pub fn product_columns() -> Self {
        Self::new(HttpMethod::Get, Target::Backend, "/api/products/columns")
    }

    pub fn display_types() -> Self {
        Self::new(HttpMethod::Get, Target::Backend, "/api/products/display-types")
    }

    pub fn coverage_zones() -> Self {
        Self::new(HttpMethod::Get, Target::Backend, routes::COVERAGE_ZONES)
    }

    pub fn create_coverage_zone() -> Self {
        Self::new(HttpMethod::Post, Target::Dashboard, routes::COVERAGE_ZONES)
    }

    pub fn update_coverage_zone(id: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(
            HttpMethod::Put,
            Target::Dashboard,
            coverage_zone_path(id)?,
        ))
    }

    pub fn delete_coverage_zone(id: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(
            HttpMethod::Delete,
            Target::Dashboard,
            coverage_zone_path(id)?,
        ))
    }

    pub fn delete_detail_images(code: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(
            HttpMethod::Delete,
            Target::Dashboard,
            format!("{}/detail", product_media_path(code)?),
        ))
    }

    pub fn delete_preview_image(code: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(
            HttpMethod::Delete,
            Target::Dashboard,
            format!("{}/preview", product_media_path(code)?),
        ))
    }

    pub fn update_media(code: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(
            HttpMethod::Put,
            Target::Dashboard,
            product_media_path(code)?,
        ))
    }

    pub fn create_campaign_template() -> Self {
        Self::new(HttpMethod::Post, Target::Dashboard, routes::CAMPAIGN_TEMPLATES)
    }
}

/// Путь к медиа товара (`code` - код товара)
pub fn product_media_path(code: &str) -> Result<String, ValidationError> {
    Ok(format!("/api/products/{}/media", segment("code", code)?))
}

pub fn coverage_zone_path(id: &str) -> Result<String, ValidationError> {
    Ok(format!("{}/{}", routes::COVERAGE_ZONES, segment("id", id)?))
}

fn segment(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = require_text(field, Some(value), &ValidationError::required(field).message)?;
    Ok(urlencoding::encode(&value).into_owned())
}

/// Ключ семейства ресурсов (`categories`, `menus:<категория>`, ...).
///
/// По нему хук выбирает эндпоинт и определяет, что запрос уже в полёте.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Categories,
    Menus { category: String },
    Subcategories { category: String, menu: String },
    ProductColumns,
    DisplayTypes,
    CoverageZones,
}

impl ResourceKey {
    pub fn endpoint(&self) -> Result<Endpoint, ValidationError> {
        match self {
            ResourceKey::Categories => Ok(Endpoint::categories()),
            ResourceKey::Menus { category } => Endpoint::menus(category),
            ResourceKey::Subcategories { category, menu } => {
                Endpoint::subcategories(category, menu)
            }
            ResourceKey::ProductColumns => Ok(Endpoint::product_columns()),
            ResourceKey::DisplayTypes => Ok(Endpoint::display_types()),
            ResourceKey::CoverageZones => Ok(Endpoint::coverage_zones()),
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKey::Categories => write!(f, "categories"),
            ResourceKey::Menus { category } => write!(f, "menus:{}", category),
            ResourceKey::Subcategories { category, menu } => {
                write!(f, "subcategories:{}/{}", category, menu)
            }
            ResourceKey::ProductColumns => write!(f, "product-columns"),
            ResourceKey::DisplayTypes => write!(f, "display-types"),
            ResourceKey::CoverageZones => write!(f, "coverage-zones"),
        }
    }
}
