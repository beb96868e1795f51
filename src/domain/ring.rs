use serde::{Deserialize, Serialize};

use super::Coordinate;

/// An ordered, implicitly-closed boundary ring (last vertex connects back to
/// the first). Self-intersection is not checked; each vertex is validated
/// individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryRing {
    pub vertices: Vec<Coordinate>,
}

impl BoundaryRing {
    pub fn new(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }

    /// Parse a client-supplied JSON array of `{"lat", "lng"}` objects
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// At least 3 vertices, each within coordinate bounds
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3 && self.vertices.iter().all(Coordinate::is_valid)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let ring = BoundaryRing::from_json(
            r#"[{"lat":0.0,"lng":0.0},{"lat":0.0,"lng":1.0},{"lat":1.0,"lng":1.0}]"#,
        )
        .unwrap();
        assert_eq!(ring.len(), 3);
        assert!(ring.is_valid());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(BoundaryRing::from_json(r#"{"lat":0.0}"#).is_err());
        assert!(BoundaryRing::from_json(r#"[{"lat":0.0}]"#).is_err());
        assert!(BoundaryRing::from_json("not json").is_err());
    }

    #[test]
    fn test_validity() {
        let two = BoundaryRing::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]);
        assert!(!two.is_valid());

        let bad_vertex = BoundaryRing::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(91.0, 0.0),
            Coordinate::new(1.0, 1.0),
        ]);
        assert!(!bad_vertex.is_valid());
    }
}
