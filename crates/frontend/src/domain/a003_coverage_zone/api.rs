use contracts::domain::a003_coverage_zone::aggregate::{CoverageZone, CoverageZoneDto};
use contracts::endpoints::{Endpoint, ResourceKey};
use contracts::shared::envelope::ApiResponse;
use serde_json::Value;

use crate::shared::endpoint_client::{fetch_resource, invalid_request, request_for, send_envelope};

/// Зоны, которые не удалось преобразовать, пропускаются с предупреждением
fn into_zones(dtos: Vec<CoverageZoneDto>) -> Vec<CoverageZone> {
    dtos.iter()
        .filter_map(|dto| match CoverageZone::try_from(dto) {
            Ok(zone) => Some(zone),
            Err(e) => {
                log::warn!("Skipping coverage zone {:?}: {}", dto.id, e);
                None
            }
        })
        .collect()
}

pub async fn fetch_coverage_zones() -> ApiResponse<Vec<CoverageZone>> {
    fetch_resource::<Vec<CoverageZoneDto>>(ResourceKey::CoverageZones)
        .await
        .map(into_zones)
}

pub async fn create_coverage_zone(zone: &CoverageZone) -> ApiResponse<Value> {
    if let Err(e) = zone.validate() {
        return invalid_request(e);
    }
    let dto = CoverageZoneDto::from(zone);
    send_envelope(request_for(&Endpoint::create_coverage_zone()).json(&dto)).await
}

pub async fn update_coverage_zone(id: &str, zone: &CoverageZone) -> ApiResponse<Value> {
    if let Err(e) = zone.validate() {
        return invalid_request(e);
    }
    let endpoint = match Endpoint::update_coverage_zone(id) {
        Ok(endpoint) => endpoint,
        Err(e) => return invalid_request(e),
    };
    let dto = CoverageZoneDto::from(zone);
    send_envelope(request_for(&endpoint).json(&dto)).await
}

pub async fn delete_coverage_zone(id: &str) -> ApiResponse<Value> {
    let endpoint = match Endpoint::delete_coverage_zone(id) {
        Ok(endpoint) => endpoint,
        Err(e) => return invalid_request(e),
    };
    send_envelope(request_for(&endpoint).build()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_zones_are_skipped() {
        let dtos: Vec<CoverageZoneDto> = serde_json::from_value(json!([
            {
                "id": "z-1",
                "nombre": "Ñuñoa",
                "geometria": {
                    "type": "Polygon",
                    "coordinates": [[[-70.6, -33.46], [-70.58, -33.46], [-70.58, -33.44]]]
                }
            },
            {"id": "z-2", "nombre": "Sin geometría"}
        ]))
        .unwrap();

        let zones = into_zones(dtos);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].id.as_deref(), Some("z-1"));
        assert_eq!(zones[0].polygon.len(), 3);
    }
}
