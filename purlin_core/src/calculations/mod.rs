//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - inputs are plain, JSON-serializable records
//! - `run_*(inputs) -> Result<*Result, DesignError>` is a pure function
//! - the result carries every intermediate value plus the calculation trace
//!
//! ## Available Calculations
//!
//! - [`purlin`] - LRFD check of a simply-supported cold-formed purlin
//! - [`capacity`] - flexure, shear and deflection capacity checks

pub mod capacity;
pub mod purlin;

// Re-export commonly used types
pub use capacity::{
    CheckStatus, Capacities, Demands, DesignChecks, LimitStateCheck, Ratios, PHI_FLEXURE,
    PHI_SHEAR,
};
pub use purlin::{run_design, run_design_with, DesignForces, DesignResult};
