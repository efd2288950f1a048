//! Roof loads and their conversion to purlin line loads
//!
//! Surface loads (kg/m²) are carried to the purlin over its tributary width.
//! Wind acts normal to the roof plane, so only its component perpendicular to
//! the purlin's strong axis is kept.
//!
//! # Overview
//!
//! - [`Geometry`] - purlin spacing, span and roof slope
//! - [`LoadInputs`] - surface dead, live and wind loads
//! - [`LineLoads`] - per-length loads on the purlin (kg/m)
//! - [`LoadCombination`] - factored combinations and governing selection
//!
//! # Example
//!
//! ```
//! use purlin_core::loads::{Geometry, LoadInputs, LineLoads};
//!
//! let geometry = Geometry { spacing: 1.0, span: 4.0, slope: 0.0 };
//! let loads = LoadInputs { dl: 10.0, ll: 30.0, wl: 50.0 };
//!
//! let line = LineLoads::from_surface(&geometry, &loads, 5.5);
//! assert_eq!(line.dl_line, 15.5);
//! assert_eq!(line.wl_perp, 50.0); // flat roof: full wind load
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{
    evaluate_combinations, find_governing_combination, lrfd_purlin_combinations,
    CombinationSummary, FactorGroup, FactoredLoad, LoadCombination,
};
pub use load_types::LoadType;

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, EngineResult};

/// Purlin layout on the roof.
///
/// ## JSON Example
///
/// ```json
/// { "spacing": 1.0, "span": 4.0, "slope": 5.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Purlin spacing / tributary width (m)
    pub spacing: f64,
    /// Purlin span between rafters (m)
    pub span: f64,
    /// Roof slope (degrees), 0 ≤ slope < 90
    pub slope: f64,
}

impl Geometry {
    /// Validate geometry.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [("spacing", self.spacing), ("span", self.span), ("slope", self.slope)] {
            if !value.is_finite() {
                return Err(DesignError::validation(field, value.to_string(), "Must be a finite number"));
            }
        }
        if self.spacing <= 0.0 {
            return Err(DesignError::validation(
                "spacing",
                self.spacing.to_string(),
                "Spacing must be positive",
            ));
        }
        if self.span <= 0.0 {
            return Err(DesignError::validation(
                "span",
                self.span.to_string(),
                "Span must be positive",
            ));
        }
        if !(0.0..90.0).contains(&self.slope) {
            return Err(DesignError::validation(
                "slope",
                self.slope.to_string(),
                "Slope must be in [0, 90) degrees",
            ));
        }
        Ok(())
    }

    /// Cosine of the roof slope
    pub fn cos_slope(&self) -> f64 {
        self.slope.to_radians().cos()
    }
}

/// Surface loads on the roof (kg/m²).
///
/// `dl` excludes the purlin self-weight, which comes from the section record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadInputs {
    /// Superimposed dead load (kg/m²)
    pub dl: f64,
    /// Roof live load (kg/m²)
    pub ll: f64,
    /// Wind pressure normal to the roof (kg/m²)
    pub wl: f64,
}

impl LoadInputs {
    /// Validate that every surface load is a non-negative number.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, load_type, value) in [
            ("dl", LoadType::Dead, self.dl),
            ("ll", LoadType::Live, self.ll),
            ("wl", LoadType::Wind, self.wl),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DesignError::validation(
                    field,
                    value.to_string(),
                    format!("{} cannot be negative", load_type.description()),
                ));
            }
        }
        Ok(())
    }
}

/// Per-length loads on the purlin (kg/m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineLoads {
    /// Section self-weight (kg/m), already included in `dl_line`
    pub self_weight: f64,
    /// Dead line load w_DL = DL·S + W_self
    pub dl_line: f64,
    /// Live line load w_LL = LL·S
    pub ll_line: f64,
    /// Wind line load perpendicular to the purlin w_WL = WL·S·cos θ
    pub wl_perp: f64,
}

impl LineLoads {
    /// Convert surface loads to line loads over the tributary spacing.
    pub fn from_surface(geometry: &Geometry, loads: &LoadInputs, self_weight: f64) -> Self {
        LineLoads {
            self_weight,
            dl_line: loads.dl * geometry.spacing + self_weight,
            ll_line: loads.ll * geometry.spacing,
            wl_perp: loads.wl * geometry.spacing * geometry.cos_slope(),
        }
    }

    /// Line load for a load type
    pub fn get(&self, load_type: LoadType) -> f64 {
        match load_type {
            LoadType::Dead => self.dl_line,
            LoadType::Live => self.ll_line,
            LoadType::Wind => self.wl_perp,
        }
    }

    /// Unfactored service load used for deflection (w_DL + w_LL)
    pub fn service(&self) -> f64 {
        self.dl_line + self.ll_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Geometry {
        Geometry { spacing: 1.0, span: 4.0, slope: 5.0 }
    }

    fn loads() -> LoadInputs {
        LoadInputs { dl: 10.0, ll: 30.0, wl: 50.0 }
    }

    #[test]
    fn test_line_loads() {
        let line = LineLoads::from_surface(&geometry(), &loads(), 5.5);
        assert_eq!(line.dl_line, 15.5);
        assert_eq!(line.ll_line, 30.0);
        assert!((line.wl_perp - 49.8097).abs() < 1e-4);
        assert_eq!(line.self_weight, 5.5);
    }

    #[test]
    fn test_flat_roof_wind_is_unreduced() {
        let geometry = Geometry { spacing: 1.2, span: 4.0, slope: 0.0 };
        let line = LineLoads::from_surface(&geometry, &loads(), 5.5);
        assert_eq!(line.wl_perp, 50.0 * 1.2);
    }

    #[test]
    fn test_service_load() {
        let line = LineLoads::from_surface(&geometry(), &loads(), 5.5);
        assert_eq!(line.service(), 45.5);
    }

    #[test]
    fn test_get_by_type() {
        let line = LineLoads::from_surface(&geometry(), &loads(), 5.5);
        assert_eq!(line.get(LoadType::Dead), line.dl_line);
        assert_eq!(line.get(LoadType::Live), line.ll_line);
        assert_eq!(line.get(LoadType::Wind), line.wl_perp);
    }

    #[test]
    fn test_geometry_validation() {
        assert!(geometry().validate().is_ok());

        let zero_span = Geometry { span: 0.0, ..geometry() };
        assert_eq!(zero_span.validate().unwrap_err().field(), "span");

        let negative_spacing = Geometry { spacing: -1.0, ..geometry() };
        assert_eq!(negative_spacing.validate().unwrap_err().field(), "spacing");

        let vertical = Geometry { slope: 90.0, ..geometry() };
        assert_eq!(vertical.validate().unwrap_err().field(), "slope");

        let nan_span = Geometry { span: f64::NAN, ..geometry() };
        assert!(nan_span.validate().is_err());
    }

    #[test]
    fn test_negative_load_rejected() {
        let bad = LoadInputs { ll: -1.0, ..loads() };
        let err = bad.validate().unwrap_err();
        assert_eq!(err.field(), "ll");
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_zero_loads_allowed() {
        let zero = LoadInputs { dl: 0.0, ll: 0.0, wl: 0.0 };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&geometry()).unwrap();
        let parsed: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, geometry());
    }
}
