//! # Equation Registry
//!
//! Every fixed formula the purlin check records in its calculation trace,
//! with the title, LaTeX form and result unit printed in reports.
//!
//! Load combinations are not listed here: their equations come from the
//! combination table (see [`crate::loads::LoadCombination::equation`]).
//!
//! ## Usage
//!
//! ```rust
//! use purlin_core::equations::registry::Equation;
//!
//! let meta = Equation::DesignMoment.metadata();
//! assert_eq!(meta.title, "Design Moment (Mu)");
//! assert_eq!(meta.result_unit, "kg-m");
//! ```
//!
//! ## References
//!
//! - Moment, shear and deflection: Roark's Formulas for Stress and Strain,
//!   8th Edition, Table 8.1, Case 2a
//! - Capacities: LRFD strength with φ_b = 0.90, φ_v = 1.0

use serde::{Deserialize, Serialize};

/// Unit of every line load and factored combination in the trace
pub const LINE_LOAD_UNIT: &str = "kg/m";

/// Display metadata of one equation.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationMetadata {
    /// Step title shown in the trace (e.g., "Design Moment (Mu)")
    pub title: &'static str,
    /// Symbolic formula in LaTeX
    pub formula: &'static str,
    /// Unit appended to the formatted result
    pub result_unit: &'static str,
}

/// All fixed equations of the purlin check, in trace order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// w_DL = DL·S + W_self
    DeadLineLoad,
    /// w_LL = LL·S
    LiveLineLoad,
    /// w_WL = WL·S·cos θ
    WindLineLoad,
    /// M_u = w_u L²/8
    DesignMoment,
    /// V_u = w_u L/2
    DesignShear,
    /// φM_n = 0.90 Z_x F_y
    FlexuralCapacity,
    /// φV_n = 0.6 F_y A_w
    ShearCapacity,
    /// Δ = 5 w L⁴ / (384 E I_x)
    Deflection,
}

impl Equation {
    /// Full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::DeadLineLoad => EquationMetadata {
                title: "Dead Load (DL)",
                formula: r"w_{DL} = (DL_{surf} \times S) + W_{self}",
                result_unit: LINE_LOAD_UNIT,
            },
            Equation::LiveLineLoad => EquationMetadata {
                title: "Live Load (LL)",
                formula: r"w_{LL} = LL_{surf} \times S",
                result_unit: LINE_LOAD_UNIT,
            },
            Equation::WindLineLoad => EquationMetadata {
                title: "Wind Load (Perpendicular)",
                formula: r"w_{WL} = (WL_{surf} \times S) \times \cos(\theta)",
                result_unit: LINE_LOAD_UNIT,
            },
            Equation::DesignMoment => EquationMetadata {
                title: "Design Moment (Mu)",
                formula: r"M_u = \frac{w_u L^2}{8}",
                result_unit: "kg-m",
            },
            Equation::DesignShear => EquationMetadata {
                title: "Design Shear (Vu)",
                formula: r"V_u = \frac{w_u L}{2}",
                result_unit: "kg",
            },
            Equation::FlexuralCapacity => EquationMetadata {
                title: "Moment Capacity (Phi Mn)",
                formula: r"\phi M_n = 0.90 (Z_x F_y)",
                result_unit: "kg-m",
            },
            Equation::ShearCapacity => EquationMetadata {
                title: "Shear Capacity (Phi Vn)",
                formula: r"\phi V_n = 0.6 F_y A_w",
                result_unit: "kg",
            },
            Equation::Deflection => EquationMetadata {
                title: "Deflection (Delta)",
                formula: r"\Delta = \frac{5 w_{ser} L^4}{384 E I_x}",
                result_unit: "cm",
            },
        }
    }
}
