pub mod coordinate;
pub mod measurement;
pub mod ring;

pub use coordinate::Coordinate;
pub use measurement::AreaMeasurement;
pub use ring::BoundaryRing;
