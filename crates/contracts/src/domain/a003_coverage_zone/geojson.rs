use serde::{Deserialize, Serialize};

pub const POLYGON_TYPE: &str = "Polygon";

/// Геометрия зоны в формате GeoJSON.
///
/// Координаты в порядке `[lng, lat]`, первое кольцо внешнее,
/// последняя точка кольца повторяет первую.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonPolygon {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl GeoJsonPolygon {
    pub fn from_ring(ring: Vec<[f64; 2]>) -> Self {
        Self {
            kind: POLYGON_TYPE.to_string(),
            coordinates: vec![ring],
        }
    }

    pub fn exterior(&self) -> Option<&[[f64; 2]]> {
        self.coordinates.first().map(Vec::as_slice)
    }
}

/// Замыкает кольцо, если последняя точка не совпадает с первой
pub fn close_ring(mut ring: Vec<[f64; 2]>) -> Vec<[f64; 2]> {
    if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
        if first != last {
            ring.push(first);
        }
    }
    ring
}

/// Убирает замыкающую точку
pub fn open_ring(ring: &[[f64; 2]]) -> &[[f64; 2]] {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_ring() {
        let ring = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];
        assert_eq!(close_ring(ring.clone()).len(), 4);
        assert_eq!(close_ring(close_ring(ring)).len(), 4);
        assert!(close_ring(vec![]).is_empty());
    }

    #[test]
    fn test_open_ring() {
        let ring = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]];
        assert_eq!(open_ring(&ring).len(), 3);
        assert_eq!(open_ring(&ring[..3]).len(), 3);
    }

    #[test]
    fn test_type_field_name() {
        let json = serde_json::to_value(GeoJsonPolygon::from_ring(vec![[1.0, 2.0]])).unwrap();
        assert_eq!(json["type"], "Polygon");
        assert_eq!(json["coordinates"][0][0][1], 2.0);
    }
}
