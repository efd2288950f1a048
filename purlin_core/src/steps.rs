//! # Calculation Trace
//!
//! Every computed quantity of a design run becomes one [`DesignStep`]:
//! title, symbolic formula, numeric substitution, formatted result and, for
//! limit-state checks, a PASS/FAIL status.
//!
//! A [`StepRecorder`] lives only inside a single design run. It is append-only
//! and is consumed into the immutable `Vec<DesignStep>` returned to the caller,
//! so no trace can outlive or leak between runs.
//!
//! ## Example
//!
//! ```rust
//! use purlin_core::equations::Equation;
//! use purlin_core::steps::{StepRecorder, StepStatus};
//!
//! let mut recorder = StepRecorder::new();
//! recorder.record_equation(
//!     Equation::LiveLineLoad,
//!     r"w_{LL} = 30.0 \times 1.0".to_string(),
//!     30.0,
//!     None,
//! );
//! let steps = recorder.into_steps();
//! assert_eq!(steps[0].title, "Live Load (LL)");
//! assert_eq!(steps[0].result, "30.00 kg/m");
//! assert_eq!(steps[0].status, None);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::Equation;

/// Outcome of a limit-state step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl StepStatus {
    /// PASS when the demand/capacity ratio does not exceed 1.0
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 1.0 {
            StepStatus::Pass
        } else {
            StepStatus::Fail
        }
    }

    /// Upper-case label
    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Pass => "PASS",
            StepStatus::Fail => "FAIL",
        }
    }

}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry of the calculation trace.
///
/// ## JSON Example
///
/// ```json
/// {
///   "title": "Design Shear (Vu)",
///   "formula": "V_u = \\frac{w_u L}{2}",
///   "substitution": "V_u = \\frac{134.22 \\times 4.0}{2}",
///   "result": "268.44 kg",
///   "status": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignStep {
    /// Step title (e.g., "Moment Capacity (Phi Mn)")
    pub title: String,
    /// Symbolic formula (LaTeX)
    pub formula: String,
    /// Formula with numeric values substituted (LaTeX)
    pub substitution: String,
    /// Formatted result with units
    pub result: String,
    /// PASS/FAIL for limit-state checks, None otherwise
    pub status: Option<StepStatus>,
}

/// Append-only recorder for one design run.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<DesignStep>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step
    pub fn record(&mut self, step: DesignStep) {
        self.steps.push(step);
    }

    /// Append a step whose title, formula and result unit come from the
    /// equation registry
    pub fn record_equation(
        &mut self,
        equation: Equation,
        substitution: String,
        value: f64,
        status: Option<StepStatus>,
    ) {
        let meta = equation.metadata();
        self.record(DesignStep {
            title: meta.title.to_string(),
            formula: meta.formula.to_string(),
            substitution,
            result: fmt_result(value, meta.result_unit),
            status,
        });
    }

    /// Like [`record_equation`](Self::record_equation), with a note after the
    /// result, e.g. `0.96 cm (Limit: 1.11 cm)`
    pub fn record_equation_with_note(
        &mut self,
        equation: Equation,
        substitution: String,
        value: f64,
        note: &str,
        status: Option<StepStatus>,
    ) {
        self.record_equation(equation, substitution, value, status);
        if let Some(step) = self.steps.last_mut() {
            step.result = format!("{} ({})", step.result, note);
        }
    }

    /// Steps recorded so far
    pub fn steps(&self) -> &[DesignStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Finish the run and hand the trace to the caller
    pub fn into_steps(self) -> Vec<DesignStep> {
        self.steps
    }
}

/// Format a derived quantity with two decimals and its unit
pub(crate) fn fmt_result(value: f64, unit: &str) -> String {
    format!("{:.2} {}", value, unit)
}

/// Format a raw input value in its shortest round-trip form (`4.0`, `2400.0`, `78.6`)
pub(crate) fn fmt_input(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_ratio() {
        assert_eq!(StepStatus::from_ratio(0.79), StepStatus::Pass);
        assert_eq!(StepStatus::from_ratio(1.0), StepStatus::Pass);
        assert_eq!(StepStatus::from_ratio(1.0001), StepStatus::Fail);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&StepStatus::Pass).unwrap(), "\"PASS\"");
        assert_eq!(serde_json::to_string(&StepStatus::Fail).unwrap(), "\"FAIL\"");
    }

    #[test]
    fn test_recorder_preserves_order() {
        let mut recorder = StepRecorder::new();
        assert!(recorder.is_empty());
        for eq in [Equation::DesignMoment, Equation::DesignShear] {
            recorder.record_equation(eq, String::new(), 1.0, None);
        }
        recorder.record(DesignStep {
            title: "Custom".to_string(),
            formula: "x = 1".to_string(),
            substitution: "x = 1".to_string(),
            result: "1".to_string(),
            status: Some(StepStatus::Pass),
        });
        assert_eq!(recorder.len(), 3);
        let titles: Vec<String> = recorder.into_steps().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Design Moment (Mu)", "Design Shear (Vu)", "Custom"]);
    }

    #[test]
    fn test_no_deduplication() {
        let mut recorder = StepRecorder::new();
        recorder.record_equation(Equation::DeadLineLoad, "a".into(), 15.5, None);
        recorder.record_equation(Equation::DeadLineLoad, "a".into(), 15.5, None);
        assert_eq!(recorder.steps().len(), 2);
        assert_eq!(recorder.steps()[0], recorder.steps()[1]);
    }

    #[test]
    fn test_result_unit_from_registry() {
        let mut recorder = StepRecorder::new();
        recorder.record_equation(Equation::DesignMoment, String::new(), 268.4411, None);
        recorder.record_equation(Equation::DesignShear, String::new(), 268.4411, None);
        recorder.record_equation_with_note(
            Equation::Deflection,
            String::new(),
            0.9648,
            "Limit: 1.11 cm",
            Some(StepStatus::Pass),
        );
        let results: Vec<&str> = recorder.steps().iter().map(|s| s.result.as_str()).collect();
        assert_eq!(results, vec!["268.44 kg-m", "268.44 kg", "0.96 cm (Limit: 1.11 cm)"]);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(fmt_result(268.4411, "kg-m"), "268.44 kg-m");
        assert_eq!(fmt_input(4.0), "4.0");
        assert_eq!(fmt_input(2_000_000.0), "2000000.0");
        assert_eq!(fmt_input(78.6), "78.6");
    }
}
