//! Polygon surface area from geographic coordinates
//!
//! Uses a spherical-excess approximation: longitude deltas weighted by
//! latitude sine terms, scaled by the earth radius squared. First-order
//! accurate, which is fine for plot-sized polygons (sub-kilometer); it is
//! not a geodesic-exact algorithm and drifts at continental scale.
//!
//! Persisted area figures were produced by exactly this arithmetic, so the
//! formula must stay bit-for-bit comparable; swapping in a more exact
//! algorithm would require a migration step for historical listings.

use crate::domain::Coordinate;

/// Mean earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Square meters to square feet
pub const SQ_METERS_TO_SQ_FEET: f64 = 10.7639;

/// Surface area of an implicitly-closed ring in square meters.
///
/// Fewer than 3 vertices yields `0.0` rather than an error; callers are
/// expected to gate rings through validation first, this default only keeps
/// direct calls from panicking. The result is independent of winding
/// direction and of which vertex the ring starts at.
pub fn ring_area_sq_meters(ring: &[Coordinate]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..ring.len() {
        let p1 = &ring[i];
        let p2 = &ring[(i + 1) % ring.len()];
        sum += (p2.lng - p1.lng).to_radians()
            * (2.0 + p1.lat.to_radians().sin() + p2.lat.to_radians().sin());
    }

    // The sign of the sum depends on winding; area does not
    (sum * EARTH_RADIUS_METERS * EARTH_RADIUS_METERS / 2.0).abs()
}

/// Surface area of an implicitly-closed ring in square feet
pub fn ring_area_sq_feet(ring: &[Coordinate]) -> f64 {
    ring_area_sq_meters(ring) * SQ_METERS_TO_SQ_FEET
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Roughly 100m x 100m square near the equator (0.0009 deg ~ 100m)
    fn small_square() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.0009),
            Coordinate::new(0.0009, 0.0009),
            Coordinate::new(0.0009, 0.0),
        ]
    }

    #[test]
    fn test_small_square_scale() {
        let sq_m = ring_area_sq_meters(&small_square());
        // Within a few percent of 10,000 m^2
        assert!((sq_m - 10_000.0).abs() < 400.0, "got {} m^2", sq_m);

        let sq_ft = ring_area_sq_feet(&small_square());
        assert!((sq_ft - 107_639.0).abs() < 4_500.0, "got {} sq ft", sq_ft);
    }

    #[test]
    fn test_degenerate_input_is_zero() {
        assert_eq!(ring_area_sq_feet(&[]), 0.0);
        assert_eq!(ring_area_sq_feet(&[Coordinate::new(0.0, 0.0)]), 0.0);
        assert_eq!(
            ring_area_sq_feet(&[Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]),
            0.0
        );
    }

    #[test]
    fn test_cyclic_invariance() {
        let ring = small_square();
        let base = ring_area_sq_feet(&ring);
        for start in 1..ring.len() {
            let mut rotated = ring.clone();
            rotated.rotate_left(start);
            let area = ring_area_sq_feet(&rotated);
            assert!(
                (area - base).abs() <= base * 1e-6,
                "start {}: {} vs {}",
                start,
                area,
                base
            );
        }
    }

    #[test]
    fn test_winding_invariance() {
        let ring = small_square();
        let mut reversed = ring.clone();
        reversed.reverse();
        let forward = ring_area_sq_feet(&ring);
        let backward = ring_area_sq_feet(&reversed);
        assert!((forward - backward).abs() <= forward * 1e-9);
    }

    #[test]
    fn test_collinear_ring_is_flat() {
        let line = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.001),
            Coordinate::new(0.0, 0.002),
        ];
        assert!(ring_area_sq_meters(&line) < 1e-6);
    }
}
