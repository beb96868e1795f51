//! Well-known-text serialization for boundary polygons
//!
//! The spatial column stores boundaries as closed polygon text:
//! `POLYGON((lng lat, lng lat, ..., first_lng first_lat))`
//! with the first vertex repeated at the end and lng before lat (x y axis
//! order, as `ST_GeomFromText` expects).

use thiserror::Error;

use crate::domain::Coordinate;

/// Polygon text that could not be parsed
#[derive(Debug, Error, PartialEq)]
pub enum WktError {
    #[error("expected POLYGON((...)) text")]
    MissingPolygonShell,
    #[error("vertex {index} is not a 'lng lat' pair: '{text}'")]
    BadVertex { index: usize, text: String },
    #[error("polygon text holds {0} vertices, need at least 3")]
    TooFewVertices(usize),
}

/// Serialize a ring as closed polygon well-known text.
///
/// The ring is taken as implicitly closed; the closing vertex is added here,
/// so callers pass vertices without repeating the first one.
pub fn polygon_wkt(ring: &[Coordinate]) -> String {
    let mut vertices: Vec<String> = ring.iter().map(|c| format!("{} {}", c.lng, c.lat)).collect();
    if let Some(first) = vertices.first().cloned() {
        vertices.push(first);
    }
    format!("POLYGON(({}))", vertices.join(","))
}

/// Parse closed polygon well-known text back into ring vertices.
///
/// The closing vertex is dropped when it repeats the first, returning the
/// same implicitly-closed form [`polygon_wkt`] takes.
pub fn parse_polygon_wkt(text: &str) -> Result<Vec<Coordinate>, WktError> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix("POLYGON((")
        .and_then(|rest| rest.strip_suffix("))"))
        .ok_or(WktError::MissingPolygonShell)?;

    let mut ring = Vec::new();
    for (index, pair) in inner.split(',').enumerate() {
        let mut parts = pair.split_whitespace();
        let lng = parts.next().and_then(|v| v.parse::<f64>().ok());
        let lat = parts.next().and_then(|v| v.parse::<f64>().ok());
        match (lng, lat, parts.next()) {
            (Some(lng), Some(lat), None) => ring.push(Coordinate::new(lat, lng)),
            _ => {
                return Err(WktError::BadVertex {
                    index,
                    text: pair.trim().to_string(),
                });
            }
        }
    }

    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }

    if ring.len() < 3 {
        return Err(WktError::TooFewVertices(ring.len()));
    }

    Ok(ring)
}
