//! What the listing flow needs from a boundary
//!
//! Listing creation computes the area bundle, the centroid, and the
//! serialized polygon in one synchronous call inside its transaction;
//! radius search needs the km-to-meters convention and a cheap prefilter
//! box around the query point.

use serde::Serialize;

use crate::domain::{AreaMeasurement, Coordinate};
use crate::geometry::{RingError, check_ring, haversine_km, ring_area_sq_feet, ring_centroid};
use crate::wkt::polygon_wkt;

/// Everything the listing-creation transaction persists for a boundary:
/// denormalized area figures, the map-pin centroid, and the closed polygon
/// text for the spatial column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryProfile {
    pub measurement: AreaMeasurement,
    pub centroid: Coordinate,
    pub wkt: String,
}

/// Validate a ring and derive its persistence bundle.
///
/// Fails with the validation error before computing anything, so a rejected
/// ring never produces partial figures.
pub fn profile_boundary(ring: &[Coordinate]) -> Result<BoundaryProfile, RingError> {
    check_ring(ring)?;

    let measurement = AreaMeasurement::from_sq_feet(ring_area_sq_feet(ring));
    let centroid = ring_centroid(ring).ok_or(RingError::TooFewVertices(0))?;

    Ok(BoundaryProfile {
        measurement,
        centroid,
        wkt: polygon_wkt(ring),
    })
}

/// A search-by-radius query: center point plus radius in kilometers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusQuery {
    pub center: Coordinate,
    pub radius_km: f64,
}

impl RadiusQuery {
    pub fn new(center: Coordinate, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    /// The radius in meters, the unit the spatial distance predicate takes
    pub fn radius_meters(&self) -> f64 {
        self.radius_km * 1000.0
    }

    /// Approximate degree box around the center, usable as a cheap
    /// prefilter before the real distance check
    pub fn bounds(&self) -> GeoBounds {
        // Approximate degrees per km
        // 1 degree latitude ~ 111 km
        // 1 degree longitude ~ 111 km * cos(lat)
        let lat_delta = self.radius_km / 111.0;
        let lng_delta = self.radius_km / (111.0 * self.center.lat.to_radians().cos());

        GeoBounds {
            south: self.center.lat - lat_delta,
            west: self.center.lng - lng_delta,
            north: self.center.lat + lat_delta,
            east: self.center.lng + lng_delta,
        }
    }

    /// Whether a point falls within the radius (great-circle distance)
    pub fn contains(&self, point: &Coordinate) -> bool {
        haversine_km(&self.center, point) <= self.radius_km
    }
}

/// Latitude/longitude bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot_ring() -> Vec<Coordinate> {
        vec![
            Coordinate::new(17.4000, 78.4000),
            Coordinate::new(17.4000, 78.4009),
            Coordinate::new(17.4009, 78.4009),
            Coordinate::new(17.4009, 78.4000),
        ]
    }

    #[test]
    fn test_profile_bundles_consistent_figures() {
        let profile = profile_boundary(&plot_ring()).unwrap();

        let m = profile.measurement;
        assert!(m.sq_feet > 0.0);
        // All figures derive from the same base
        assert!((m.sq_yards - m.sq_feet / 9.0).abs() < 0.01);
        assert!((m.acres - m.sq_feet / 43560.0).abs() < 0.01);

        assert!((profile.centroid.lat - 17.40045).abs() < 1e-9);
        assert!((profile.centroid.lng - 78.40045).abs() < 1e-9);

        assert!(profile.wkt.starts_with("POLYGON(("));
        assert!(profile.wkt.ends_with("78.4 17.4))"));
    }

    #[test]
    fn test_profile_rejects_before_computing() {
        let err = profile_boundary(&plot_ring()[..2]).unwrap_err();
        assert_eq!(err, RingError::TooFewVertices(2));
    }

    #[test]
    fn test_radius_meters_convention() {
        let q = RadiusQuery::new(Coordinate::new(17.4, 78.4), 2.5);
        assert_eq!(q.radius_meters(), 2500.0);
    }

    #[test]
    fn test_bounds_prefilter() {
        let q = RadiusQuery::new(Coordinate::new(17.4, 78.4), 5.0);
        let bounds = q.bounds();

        assert!(bounds.contains(&q.center));
        // ~1 km east of center
        assert!(bounds.contains(&Coordinate::new(17.4, 78.4095)));
        // ~100 km away
        assert!(!bounds.contains(&Coordinate::new(18.3, 78.4)));

        assert!(q.contains(&Coordinate::new(17.4, 78.4095)));
        assert!(!q.contains(&Coordinate::new(18.3, 78.4)));
    }
}
