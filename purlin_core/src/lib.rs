//! # purlin_core - Cold-Formed Steel Purlin Design Engine
//!
//! `purlin_core` checks a cold-formed steel purlin against the LRFD method and
//! explains itself: alongside the governing forces, capacities and pass/fail
//! ratios it returns an ordered trace of every formula and substitution, ready
//! to be typeset by a report generator.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `run_design` is a pure function; each call builds its own trace
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Every failure names the offending field or quantity
//! - **Auditable**: Titles, LaTeX formulas and substituted values for each step
//!
//! ## Quick Start
//!
//! ```rust
//! use purlin_core::{run_design, Geometry, LoadInputs, MaterialProperties, SectionProperties};
//!
//! let section = SectionProperties {
//!     name: "C-100x50x20x3.2".to_string(),
//!     weight: 5.5, ix: 78.6, zx: 15.7, area: 7.01, h: 100.0, t: 3.2,
//! };
//! let geometry = Geometry { spacing: 1.0, span: 4.0, slope: 5.0 };
//! let loads = LoadInputs { dl: 10.0, ll: 30.0, wl: 50.0 };
//! let material = MaterialProperties::new(2400.0, 2.0e6);
//!
//! let result = run_design(&section, &geometry, &loads, &material).unwrap();
//! for step in &result.steps {
//!     println!("{}: {} = {}", step.title, step.substitution, step.result);
//! }
//! assert!(result.passes());
//! ```
//!
//! ## Modules
//!
//! - [`loads`] - Surface-to-line load conversion and load combinations
//! - [`equations`] - Beam formulas and the equation registry
//! - [`calculations`] - Capacity checks and the design pipeline
//! - [`steps`] - Calculation trace
//! - [`materials`] - Steel grades and section records
//! - [`project`] - Project files and design settings
//! - [`units`] - Unit wrappers and conversion constants
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod project;
pub mod steps;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{run_design, run_design_with, DesignChecks, DesignForces, DesignResult};
pub use errors::{DesignError, EngineResult};
pub use loads::{Geometry, LineLoads, LoadCombination, LoadInputs, LoadType};
pub use materials::{MaterialProperties, SectionProperties, SteelGrade};
pub use project::{DesignSettings, PurlinProject};
pub use steps::{DesignStep, StepStatus};
