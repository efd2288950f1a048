//! # Project Data Structures
//!
//! A `PurlinProject` bundles everything needed to reproduce one purlin check:
//! project information, design settings and the raw input records exactly as
//! they were exported from the section catalog or entry form.
//!
//! ## Structure
//!
//! ```text
//! PurlinProject
//! ├── meta: ProjectMetadata (schema version, project, owner, engineer, timestamps)
//! ├── settings: DesignSettings (deflection divisor, combination table)
//! └── input: DesignInput (geometry, loads, section record, material)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use purlin_core::project::PurlinProject;
//!
//! let project = PurlinProject::demo();
//! let result = project.run().unwrap();
//! assert!(result.passes());
//!
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("C-100x50x20x3.2"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::calculations::capacity::DEFAULT_DEFLECTION_LIMIT_RATIO;
use crate::calculations::{run_design_with, DesignResult};
use crate::errors::{DesignError, EngineResult};
use crate::loads::{lrfd_purlin_combinations, Geometry, LoadCombination, LoadInputs};
use crate::materials::{MaterialProperties, Record, SectionProperties, SteelGrade};

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurlinProject {
    /// Project information printed on the report header
    pub meta: ProjectMetadata,

    /// Design settings; defaults apply when absent
    #[serde(default)]
    pub settings: DesignSettings,

    /// Raw design inputs
    pub input: DesignInput,
}

impl PurlinProject {
    /// Create a project around a set of inputs with default settings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use purlin_core::project::{PurlinProject, SCHEMA_VERSION};
    ///
    /// let demo = PurlinProject::demo();
    /// let project = PurlinProject::new("Warehouse A", "ACME Co.", "J. Engineer", demo.input);
    /// assert_eq!(project.meta.version, SCHEMA_VERSION);
    /// assert_eq!(project.settings.deflection_limit_ratio, 360.0);
    /// ```
    pub fn new(
        project_name: impl Into<String>,
        owner: impl Into<String>,
        engineer: impl Into<String>,
        input: DesignInput,
    ) -> Self {
        let now = Utc::now();
        PurlinProject {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                project_name: project_name.into(),
                owner: owner.into(),
                engineer: engineer.into(),
                created: now,
                modified: now,
            },
            settings: DesignSettings::default(),
            input,
        }
    }

    /// The built-in worked example: C-100x50x20x3.2 over 4 m at 1 m spacing.
    pub fn demo() -> Self {
        let section = json!({
            "Section": "C-100x50x20x3.2",
            "Weight": 5.5,
            "Ix": 78.6,
            "Zx": 15.7,
            "Area": 7.01,
            "h": 100,
            "t": 3.2
        });
        let material = json!({ "Fy": 2400.0, "E": 2000000.0 });

        PurlinProject::new(
            "Demo Warehouse",
            "Demo Owner",
            "Demo Engineer",
            DesignInput {
                geometry: Geometry { spacing: 1.0, span: 4.0, slope: 5.0 },
                loads: LoadInputs { dl: 10.0, ll: 30.0, wl: 50.0 },
                section,
                material: MaterialSpec::Record(material),
            },
        )
    }

    /// Resolve the raw records and run the design check.
    pub fn run(&self) -> EngineResult<DesignResult> {
        let section = SectionProperties::from_json(&self.input.section)?;
        let material = self.input.material.resolve()?;
        log::debug!(
            "project '{}': section {} with Fy={} E={}",
            self.meta.project_name,
            section.name,
            material.fy,
            material.e
        );
        run_design_with(
            &section,
            &self.input.geometry,
            &self.input.loads,
            &material,
            &self.settings,
        )
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Project name
    pub project_name: String,

    /// Building owner
    #[serde(default)]
    pub owner: String,

    /// Name of the responsible engineer
    #[serde(default)]
    pub engineer: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Design settings that are fixed per project rather than per input.
///
/// ## JSON Example
///
/// ```json
/// { "deflection_limit_ratio": 240.0 }
/// ```
///
/// Fields left out take their defaults (L/360 and the LRFD purlin table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Serviceability divisor: Δ_allow = L / ratio
    pub deflection_limit_ratio: f64,

    /// Load combination table, evaluated in order
    pub combinations: Vec<LoadCombination>,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            deflection_limit_ratio: DEFAULT_DEFLECTION_LIMIT_RATIO,
            combinations: lrfd_purlin_combinations(),
        }
    }
}

impl DesignSettings {
    /// Reject a non-positive divisor or an empty combination table.
    pub fn validate(&self) -> EngineResult<()> {
        let ratio = self.deflection_limit_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(DesignError::validation(
                "deflection_limit_ratio",
                ratio.to_string(),
                "Deflection limit divisor must be positive",
            ));
        }
        if self.combinations.is_empty() {
            return Err(DesignError::validation(
                "combinations",
                "[]",
                "At least one load combination is required",
            ));
        }
        Ok(())
    }
}

/// Material given either by grade or by explicit values.
///
/// ```json
/// { "grade": "SSC400" }
/// { "Fy": 2400, "E": 2000000 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialSpec {
    /// Tabulated grade
    Grade { grade: SteelGrade },
    /// Loose record with `Fy` and `E` (ksc)
    Record(Value),
}

impl MaterialSpec {
    /// Resolve to the values the engine consumes
    pub fn resolve(&self) -> EngineResult<MaterialProperties> {
        match self {
            MaterialSpec::Grade { grade } => Ok(MaterialProperties::from_grade(*grade)),
            MaterialSpec::Record(value) => {
                let record: &Record = value
                    .as_object()
                    .ok_or_else(|| DesignError::missing_data("material"))?;
                MaterialProperties::from_record(record)
            }
        }
    }
}

/// Raw inputs of one purlin check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    pub geometry: Geometry,
    pub loads: LoadInputs,
    /// Section record as exported from the catalog
    pub section: Value,
    pub material: MaterialSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = PurlinProject::new("Warehouse", "Owner", "Engineer", PurlinProject::demo().input);
        assert_eq!(project.meta.project_name, "Warehouse");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.meta.created, project.meta.modified);
    }

    #[test]
    fn test_project_roundtrip() {
        let project = PurlinProject::demo();
        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("Demo Warehouse"));

        let roundtrip: PurlinProject = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.input, project.input);
        assert_eq!(roundtrip.settings, project.settings);
    }

    #[test]
    fn test_settings_default_when_absent() {
        let json = r#"{
            "meta": {
                "version": "0.1.0",
                "project_name": "P",
                "created": "2026-01-01T00:00:00Z",
                "modified": "2026-01-01T00:00:00Z"
            },
            "input": {
                "geometry": { "spacing": 1.0, "span": 4.0, "slope": 5.0 },
                "loads": { "dl": 10.0, "ll": 30.0, "wl": 50.0 },
                "section": { "Section": "C", "Weight": 5.5, "Ix": 78.6, "Zx": 15.7,
                             "Area": 7.01, "h": 100, "t": 3.2 },
                "material": { "grade": "SSC400" }
            }
        }"#;
        let project: PurlinProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.settings, DesignSettings::default());
        assert!(matches!(project.input.material, MaterialSpec::Grade { .. }));
        assert!(project.run().is_ok());
    }

    #[test]
    fn test_partial_settings() {
        let settings: DesignSettings = serde_json::from_str(r#"{ "deflection_limit_ratio": 240.0 }"#).unwrap();
        assert_eq!(settings.deflection_limit_ratio, 240.0);
        assert_eq!(settings.combinations.len(), 2);
    }

    #[test]
    fn test_settings_validation() {
        let bad = DesignSettings { deflection_limit_ratio: 0.0, ..Default::default() };
        assert_eq!(bad.validate().unwrap_err().field(), "deflection_limit_ratio");

        let empty = DesignSettings { combinations: Vec::new(), ..Default::default() };
        assert_eq!(empty.validate().unwrap_err().field(), "combinations");
    }

    #[test]
    fn test_material_record_resolution() {
        let record = MaterialSpec::Record(json!({ "Fy": "2400", "E": 2000000 }));
        let mat = record.resolve().unwrap();
        assert_eq!(mat.fy, 2400.0);

        let missing = MaterialSpec::Record(json!({ "Fy": 2400 }));
        let err = missing.resolve().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_DATA");
        assert_eq!(err.field(), "E");
    }

    #[test]
    fn test_missing_section_field() {
        let mut project = PurlinProject::demo();
        if let Value::Object(map) = &mut project.input.section {
            map.remove("Zx");
        }
        let err = project.run().unwrap_err();
        assert_eq!(err, DesignError::missing_data("Zx"));
    }

    #[test]
    fn test_touch_updates_modified() {
        let mut project = PurlinProject::demo();
        let created = project.meta.created;
        project.touch();
        assert!(project.meta.modified >= created);
    }
}
