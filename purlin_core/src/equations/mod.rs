//! # Structural Equations
//!
//! Fundamental mechanics formulas and the registry of equations that appear
//! in the calculation trace.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported uniform-load formulas (moment, shear, deflection)
//! - [`registry`] - Equation titles, LaTeX forms and result units for the trace
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Deflection**: Positive downward

pub mod beam;
pub mod registry;

pub use beam::{uniform_load_max_deflection, uniform_load_max_moment, uniform_load_max_shear};

pub use registry::{Equation, EquationMetadata, LINE_LOAD_UNIT};
