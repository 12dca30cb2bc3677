use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geojson::{close_ring, open_ring, GeoJsonPolygon, POLYGON_TYPE};
use crate::shared::validation::{require_text, ValidationError};

pub const MSG_NAME_REQUIRED: &str = "El nombre de la zona es requerido";
pub const MSG_GEOMETRY_REQUIRED: &str = "La geometría de la zona es requerida";
pub const MSG_GEOMETRY_TYPE: &str = "La geometría de la zona debe ser un polígono";
pub const MSG_TOO_FEW_POINTS: &str = "La zona debe tener al menos 3 puntos distintos";
pub const MSG_OUT_OF_RANGE: &str = "Las coordenadas de la zona están fuera de rango";
pub const MSG_NEGATIVE_FEE: &str = "El costo de envío no puede ser negativo";
pub const MSG_ID_REQUIRED: &str = "El identificador de la zona es requerido";

pub const MSG_ZONE_CREATED: &str = "Zona de cobertura creada correctamente";
pub const MSG_ZONE_UPDATED: &str = "Zona de cobertura actualizada correctamente";
pub const MSG_ZONE_DELETED: &str = "Zona de cobertura eliminada correctamente";

// ============================================================================
// Backend DTO
// ============================================================================

/// Зона покрытия в том виде, в каком её хранит бэкенд
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoverageZoneDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub nombre: String,
    #[serde(default = "default_active")]
    pub activa: bool,
    #[serde(
        rename = "costoEnvio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub costo_envio: Option<f64>,
    #[serde(default)]
    pub geometria: Option<GeoJsonPolygon>,
    #[serde(
        rename = "actualizadoEn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub actualizado_en: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

// ============================================================================
// View model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn in_range(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Зона покрытия для UI: внешний контур без замыкающей точки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageZone {
    pub id: Option<String>,
    pub name: String,
    pub active: bool,
    pub delivery_fee: Option<f64>,
    pub polygon: Vec<LatLng>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CoverageZone {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("nombre", Some(self.name.as_str()), MSG_NAME_REQUIRED)?;

        if self.polygon.iter().any(|p| !p.in_range()) {
            return Err(ValidationError::new("geometria", MSG_OUT_OF_RANGE));
        }

        let mut distinct: Vec<LatLng> = Vec::with_capacity(self.polygon.len());
        for p in &self.polygon {
            if !distinct.contains(p) {
                distinct.push(*p);
            }
        }
        if distinct.len() < 3 {
            return Err(ValidationError::new("geometria", MSG_TOO_FEW_POINTS));
        }

        if self.delivery_fee.is_some_and(|fee| fee < 0.0) {
            return Err(ValidationError::new("costoEnvio", MSG_NEGATIVE_FEE));
        }
        Ok(())
    }

    /// Попадает ли точка внутрь контура (ray casting)
    pub fn contains(&self, point: &LatLng) -> bool {
        let n = self.polygon.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.polygon[i];
            let b = self.polygon[j];
            if (a.lat > point.lat) != (b.lat > point.lat)
                && point.lng < (b.lng - a.lng) * (point.lat - a.lat) / (b.lat - a.lat) + a.lng
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

impl TryFrom<&CoverageZoneDto> for CoverageZone {
    type Error = ValidationError;

    fn try_from(dto: &CoverageZoneDto) -> Result<Self, Self::Error> {
        let geometry = dto
            .geometria
            .as_ref()
            .ok_or_else(|| ValidationError::new("geometria", MSG_GEOMETRY_REQUIRED))?;
        if geometry.kind != POLYGON_TYPE {
            return Err(ValidationError::new("geometria", MSG_GEOMETRY_TYPE));
        }
        let ring = geometry
            .exterior()
            .filter(|r| !r.is_empty())
            .ok_or_else(|| ValidationError::new("geometria", MSG_GEOMETRY_REQUIRED))?;

        let zone = CoverageZone {
            id: dto.id.clone(),
            name: dto.nombre.trim().to_string(),
            active: dto.activa,
            delivery_fee: dto.costo_envio,
            polygon: open_ring(ring)
                .iter()
                .map(|[lng, lat]| LatLng::new(*lat, *lng))
                .collect(),
            updated_at: dto.actualizado_en,
        };
        zone.validate()?;
        Ok(zone)
    }
}

impl From<&CoverageZone> for CoverageZoneDto {
    fn from(zone: &CoverageZone) -> Self {
        let ring = zone.polygon.iter().map(|p| [p.lng, p.lat]).collect();
        Self {
            id: zone.id.clone(),
            nombre: zone.name.clone(),
            activa: zone.active,
            costo_envio: zone.delivery_fee,
            geometria: Some(GeoJsonPolygon::from_ring(close_ring(ring))),
            actualizado_en: zone.updated_at,
        }
    }
}
