//! Cold-formed section properties
//!
//! A [`SectionProperties`] record is resolved by the caller (usually by exact
//! name match against a TIS 1228 lipped-channel table) and handed to the engine
//! as-is. The engine never looks sections up itself.
//!
//! ## Units
//!
//! | Field | Unit |
//! |---|---|
//! | `weight` | kg/m |
//! | `ix` | cm⁴ |
//! | `zx` | cm³ |
//! | `area` | cm² |
//! | `h`, `t` | mm |

use serde::{Deserialize, Serialize};

use super::record::{required_number, required_text, Record};
use crate::errors::{DesignError, EngineResult};

/// Geometric and mass properties of one cold-formed section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "C-100x50x20x3.2",
///   "weight": 5.5,
///   "ix": 78.6,
///   "zx": 15.7,
///   "area": 7.01,
///   "h": 100.0,
///   "t": 3.2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Section designation (e.g., "C-100x50x20x3.2")
    pub name: String,
    /// Self-weight (kg/m)
    pub weight: f64,
    /// Second moment of area about the strong axis (cm⁴)
    pub ix: f64,
    /// Section modulus about the strong axis (cm³)
    pub zx: f64,
    /// Gross area (cm²)
    pub area: f64,
    /// Section height (mm)
    pub h: f64,
    /// Wall thickness (mm)
    pub t: f64,
}

impl SectionProperties {
    /// Resolve a section from a loose catalog row.
    ///
    /// Keys are matched exactly: `Section` (or `name`), `Weight`, `Ix`, `Zx`,
    /// `Area`, `h`, `t`. Numeric values may be JSON numbers or numeric strings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use purlin_core::materials::SectionProperties;
    /// use serde_json::json;
    ///
    /// let row = json!({
    ///     "Section": "C-100x50x20x3.2",
    ///     "Weight": 5.5, "Ix": 78.6, "Zx": 15.7, "Area": 7.01, "h": 100, "t": "3.2"
    /// });
    /// let section = SectionProperties::from_record(row.as_object().unwrap()).unwrap();
    /// assert_eq!(section.t, 3.2);
    /// ```
    pub fn from_record(record: &Record) -> EngineResult<Self> {
        let name = required_text(record, &["Section", "name"])?;
        Ok(SectionProperties {
            name,
            weight: required_number(record, "Weight")?,
            ix: required_number(record, "Ix")?,
            zx: required_number(record, "Zx")?,
            area: required_number(record, "Area")?,
            h: required_number(record, "h")?,
            t: required_number(record, "t")?,
        })
    }

    /// Resolve a section from any JSON value, which must be an object.
    pub fn from_json(value: &serde_json::Value) -> EngineResult<Self> {
        let record = value
            .as_object()
            .ok_or_else(|| DesignError::missing_data("section"))?;
        Self::from_record(record)
    }

    /// Check the properties the engine refuses to compute without.
    ///
    /// Non-numeric values are missing data; every property must also be
    /// strictly positive.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("Weight", self.weight),
            ("Ix", self.ix),
            ("Zx", self.zx),
            ("Area", self.area),
            ("h", self.h),
            ("t", self.t),
        ];
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

    /// Web slenderness h/t (informational, not gated).
    ///
    /// Only meaningful after [`validate`](Self::validate) has accepted `t`.
    pub fn slenderness(&self) -> f64 {
        self.h / self.t
    }
}

impl std::fmt::Display for SectionProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
