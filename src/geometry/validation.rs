//! Boundary ring validation
//!
//! The gate every client-supplied ring passes before area computation or
//! persistence. Checks vertex count, finiteness, and coordinate ranges;
//! self-intersecting rings are accepted as long as each vertex is
//! individually valid, matching what the marketplace has always accepted.

use thiserror::Error;

use crate::domain::Coordinate;

/// Why a boundary ring was rejected
#[derive(Debug, Error, PartialEq)]
pub enum RingError {
    #[error("boundary needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("vertex {index} has a non-finite coordinate")]
    NotFinite { index: usize },
    #[error("vertex {index} is out of range: lat {lat}, lng {lng}")]
    OutOfRange { index: usize, lat: f64, lng: f64 },
}

/// Check a candidate ring, reporting the first offending vertex.
///
/// Callers must not compute or persist an area for a ring that fails here;
/// the error is the client-facing rejection.
pub fn check_ring(ring: &[Coordinate]) -> Result<(), RingError> {
    if ring.len() < 3 {
        return Err(RingError::TooFewVertices(ring.len()));
    }

    for (index, c) in ring.iter().enumerate() {
        if !c.lat.is_finite() || !c.lng.is_finite() {
            return Err(RingError::NotFinite { index });
        }
        if !c.is_valid() {
            return Err(RingError::OutOfRange {
                index,
                lat: c.lat,
                lng: c.lng,
            });
        }
    }

    Ok(())
}

/// Pure accept/reject predicate over a candidate ring
pub fn validate_ring(ring: &[Coordinate]) -> bool {
    check_ring(ring).is_ok()
}
