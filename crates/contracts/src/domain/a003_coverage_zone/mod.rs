pub mod aggregate;
pub mod geojson;

pub use aggregate::{CoverageZone, CoverageZoneDto, LatLng};
pub use geojson::GeoJsonPolygon;
