use serde::{Deserialize, Serialize};

use crate::units::{SQ_FEET_PER_ACRE, SQ_FEET_PER_GUNTA, SQ_FEET_PER_SQ_YARD, round2};

/// Area figures for a land plot in every unit the marketplace displays.
///
/// Computed once at listing creation and persisted as-is; display never
/// recomputes. Each field is rounded independently from the square-feet base
/// rather than chained, so rounding error never compounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaMeasurement {
    pub sq_feet: f64,
    pub sq_yards: f64,
    pub guntas: f64,
    pub acres: f64,
}

impl AreaMeasurement {
    /// Derive all four figures from a square-feet value, each rounded to
    /// 2 decimal places from the base
    pub fn from_sq_feet(sq_feet: f64) -> Self {
        Self {
            sq_feet: round2(sq_feet),
            sq_yards: round2(sq_feet / SQ_FEET_PER_SQ_YARD),
            guntas: round2(sq_feet / SQ_FEET_PER_GUNTA),
            acres: round2(sq_feet / SQ_FEET_PER_ACRE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_acre() {
        let m = AreaMeasurement::from_sq_feet(43560.0);
        assert_eq!(m.sq_feet, 43560.0);
        assert_eq!(m.sq_yards, 4840.0);
        assert_eq!(m.guntas, 40.0);
        assert_eq!(m.acres, 1.0);
    }

    #[test]
    fn test_rounds_from_base_not_chained() {
        let m = AreaMeasurement::from_sq_feet(1234.567);
        assert_eq!(m.sq_feet, 1234.57);
        // 1234.567 / 9 = 137.17411..., rounded from the unrounded base
        assert_eq!(m.sq_yards, 137.17);
        assert_eq!(m.guntas, 1.13);
        assert_eq!(m.acres, 0.03);
    }

    #[test]
    fn test_serde_field_names() {
        let m = AreaMeasurement::from_sq_feet(43560.0);
        let json = serde_json::to_string(&m).unwrap();
        for field in ["sq_feet", "sq_yards", "guntas", "acres"] {
            assert!(json.contains(field), "missing field {}", field);
        }
    }
}
