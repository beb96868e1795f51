//! Land-area unit conversion
//!
//! All conversions go through square feet as the base unit using exact,
//! process-wide constant ratios. The gunta is a regional unit used in parts
//! of South Asia.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 1 sq yard = 9 sq feet
pub const SQ_FEET_PER_SQ_YARD: f64 = 9.0;
/// 1 gunta = 1089 sq feet
pub const SQ_FEET_PER_GUNTA: f64 = 1089.0;
/// 1 acre = 43560 sq feet
pub const SQ_FEET_PER_ACRE: f64 = 43560.0;

/// Requested unit is not one of the supported land-area units
#[derive(Debug, Error, PartialEq)]
#[error("invalid area unit '{0}', expected sq_feet, sq_yards, guntas, or acres")]
pub struct UnitError(pub String);

/// The land-area units the marketplace displays and stores.
///
/// Parses from the wire strings (`sq_feet`, `sq_yards`, `guntas`, `acres`);
/// an unknown string fails with [`UnitError`] rather than falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    SqFeet,
    SqYards,
    Guntas,
    Acres,
}

impl AreaUnit {
    /// How many square feet one of this unit covers
    pub fn sq_feet_per_unit(self) -> f64 {
        match self {
            AreaUnit::SqFeet => 1.0,
            AreaUnit::SqYards => SQ_FEET_PER_SQ_YARD,
            AreaUnit::Guntas => SQ_FEET_PER_GUNTA,
            AreaUnit::Acres => SQ_FEET_PER_ACRE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AreaUnit::SqFeet => "sq_feet",
            AreaUnit::SqYards => "sq_yards",
            AreaUnit::Guntas => "guntas",
            AreaUnit::Acres => "acres",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AreaUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sq_feet" => Ok(AreaUnit::SqFeet),
            "sq_yards" => Ok(AreaUnit::SqYards),
            "guntas" => Ok(AreaUnit::Guntas),
            "acres" => Ok(AreaUnit::Acres),
            other => Err(UnitError(other.to_string())),
        }
    }
}

/// Convert an area value between units via the square-feet base.
///
/// Converting a unit to itself returns the input unchanged, so no-op
/// conversions carry no floating-point drift.
pub fn convert(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.sq_feet_per_unit() / to.sq_feet_per_unit()
}

/// Round to 2 decimal places, the presentation convention for every persisted
/// area and distance figure
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
