use crate::domain::Coordinate;
use crate::units::round2;

/// Mean earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers, by the haversine
/// formula.
///
/// The square-root argument is clamped to [0, 1] so coincident and antipodal
/// points stay finite instead of producing NaN from rounding spill.
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Render a distance for display: meters below 1 km, otherwise km to
/// 2 decimals ("450 meters", "2.35 km")
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} meters", (km * 1000.0).round() as i64)
    } else {
        format!("{} km", round2(km))
    }
}
