//! # Materials
//!
//! Steel grade data and cross-section records for cold-formed purlins.
//!
//! - [`MaterialProperties`] - the `Fy`/`E` pair the engine consumes (ksc)
//! - [`SteelGrade`] - TIS 1228-2549 grades with tabulated strengths
//! - [`SectionProperties`] - one resolved cross-section record
//!
//! ## Example
//!
//! ```rust
//! use purlin_core::materials::{MaterialProperties, SteelGrade};
//!
//! // SSC400 minimum properties, converted to ksc
//! let mat = MaterialProperties::from_grade(SteelGrade::Ssc400);
//! assert!((mat.fy - 2498.265).abs() < 1e-6);
//! ```

pub mod record;
pub mod section;

pub use record::{required_number, required_text, Record};
pub use section::SectionProperties;

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, EngineResult};
use crate::units::{Ksc, Mpa};

/// Material strength and stiffness used by the capacity checks.
///
/// Both values are in ksc (kgf/cm²), consistent with section properties in cm.
///
/// ## JSON Example
///
/// ```json
/// { "fy": 2400.0, "e": 2000000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Yield strength Fy (ksc)
    pub fy: f64,
    /// Modulus of elasticity E (ksc)
    pub e: f64,
}

impl MaterialProperties {
    /// Create from explicit values in ksc
    pub fn new(fy: f64, e: f64) -> Self {
        MaterialProperties { fy, e }
    }

    /// Tabulated properties of a grade, converted to ksc
    pub fn from_grade(grade: SteelGrade) -> Self {
        let props = grade.properties();
        MaterialProperties {
            fy: Ksc::from(props.fy).0,
            e: Ksc::from(props.e).0,
        }
    }

    /// Resolve from a loose record with keys `Fy` and `E`.
    pub fn from_record(record: &Record) -> EngineResult<Self> {
        Ok(MaterialProperties {
            fy: required_number(record, "Fy")?,
            e: required_number(record, "E")?,
        })
    }

    /// Reject non-numeric values, then non-positive strength or stiffness.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [("Fy", self.fy), ("E", self.e)];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(DesignError::missing_data(field));
            }
        }
        for (field, value) in fields {
            if value <= 0.0 {
                return Err(DesignError::validation(
                    field,
                    value.to_string(),
                    format!("{} must be positive", field),
                ));
            }
        }
        Ok(())
    }
}

/// Cold-formed structural steel grades (TIS 1228-2549)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SteelGrade {
    /// SSC400 - general cold-formed steel
    #[default]
    #[serde(rename = "SSC400")]
    Ssc400,
}

/// Tabulated mechanical properties of a steel grade (MPa)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelProperties {
    /// Minimum yield strength
    pub fy: Mpa,
    /// Minimum tensile strength
    pub fu: Mpa,
    /// Modulus of elasticity
    pub e: Mpa,
}

impl SteelGrade {
    /// Grade designation as printed in the standard
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::Ssc400 => "SSC400",
        }
    }

    /// Minimum mechanical properties per TIS 1228-2549
    pub fn properties(&self) -> SteelProperties {
        match self {
            SteelGrade::Ssc400 => SteelProperties {
                fy: Mpa(245.0),
                fu: Mpa(400.0),
                e: Mpa(2.04e5),
            },
        }
    }

    /// Minimum elongation (%) for a given wall thickness (TIS 1228-2549 Table 2)
    pub fn elongation_percent(&self, thickness_mm: f64) -> f64 {
        match self {
            SteelGrade::Ssc400 => {
                if thickness_mm <= 5.0 {
                    21.0
                } else {
                    17.0
                }
            }
        }
    }

    /// Reference standard
    pub fn standard(&self) -> &'static str {
        "TIS 1228-2549"
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ssc400_properties() {
        let props = SteelGrade::Ssc400.properties();
        assert_eq!(props.fy.0, 245.0);
        assert_eq!(props.fu.0, 400.0);
        assert_eq!(props.e.0, 204_000.0);
    }

    #[test]
    fn test_elongation_by_thickness() {
        assert_eq!(SteelGrade::Ssc400.elongation_percent(3.2), 21.0);
        assert_eq!(SteelGrade::Ssc400.elongation_percent(5.0), 21.0);
        assert_eq!(SteelGrade::Ssc400.elongation_percent(6.0), 17.0);
        assert_eq!(SteelGrade::Ssc400.standard(), "TIS 1228-2549");
    }

    #[test]
    fn test_from_grade_in_ksc() {
        let mat = MaterialProperties::from_grade(SteelGrade::Ssc400);
        assert!((mat.fy - 245.0 * 10.197).abs() < 1e-9);
        assert!((mat.e - 2.04e5 * 10.197).abs() < 1e-6);
    }

    #[test]
    fn test_grade_serialization() {
        let json = serde_json::to_string(&SteelGrade::Ssc400).unwrap();
        assert_eq!(json, "\"SSC400\"");
    }

    #[test]
    fn test_material_from_record() {
        let row = json!({ "Fy": 2400, "E": "2000000" });
        let mat = MaterialProperties::from_record(row.as_object().unwrap()).unwrap();
        assert_eq!(mat, MaterialProperties::new(2400.0, 2_000_000.0));
    }

    #[test]
    fn test_material_validation() {
        assert!(MaterialProperties::new(2400.0, 2.0e6).validate().is_ok());

        let err = MaterialProperties::new(f64::NAN, 2.0e6).validate().unwrap_err();
        assert_eq!(err, DesignError::missing_data("Fy"));

        let err = MaterialProperties::new(-2400.0, 2.0e6).validate().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.field(), "Fy");

        let err = MaterialProperties::new(2400.0, 0.0).validate().unwrap_err();
        assert_eq!(err.field(), "E");
    }

    #[test]
    fn test_material_missing_e() {
        let row = json!({ "Fy": 2400 });
        let err = MaterialProperties::from_record(row.as_object().unwrap()).unwrap_err();
        assert_eq!(err, DesignError::missing_data("E"));
    }
}
