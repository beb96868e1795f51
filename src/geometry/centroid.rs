use crate::domain::Coordinate;

/// Arithmetic mean of the ring's vertex latitudes and longitudes.
///
/// This is an approximation, not the area-weighted polygon centroid; it is
/// what map-pin placement and radius search key off, and it is never used
/// for area computation. Returns `None` for an empty ring.
pub fn ring_centroid(ring: &[Coordinate]) -> Option<Coordinate> {
    if ring.is_empty() {
        return None;
    }

    let n = ring.len() as f64;
    let lat = ring.iter().map(|c| c.lat).sum::<f64>() / n;
    let lng = ring.iter().map(|c| c.lng).sum::<f64>() / n;

    Some(Coordinate::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_of_square() {
        let ring = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 2.0),
            Coordinate::new(2.0, 2.0),
            Coordinate::new(2.0, 0.0),
        ];
        let c = ring_centroid(&ring).unwrap();
        assert_eq!(c, Coordinate::new(1.0, 1.0));
    }

    #[test]
    fn test_centroid_empty() {
        assert!(ring_centroid(&[]).is_none());
    }

    #[test]
    fn test_centroid_single_point() {
        let c = ring_centroid(&[Coordinate::new(17.38, 78.48)]).unwrap();
        assert_eq!(c, Coordinate::new(17.38, 78.48));
    }
}
