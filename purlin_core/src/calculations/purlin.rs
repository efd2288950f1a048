//! # Purlin Design Check
//!
//! The full LRFD check of a simply-supported cold-formed purlin:
//!
//! 1. Surface loads to line loads (wind projected by the roof slope)
//! 2. Factored load combinations, governing = maximum
//! 3. Design moment and shear
//! 4. Flexure, shear and deflection checks
//!
//! Every computed quantity is appended to the calculation trace in that order.
//!
//! ## Example
//!
//! ```rust
//! use purlin_core::calculations::run_design;
//! use purlin_core::loads::{Geometry, LoadInputs};
//! use purlin_core::materials::{MaterialProperties, SectionProperties};
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
//! assert!(result.passes());
//! assert_eq!(result.steps.len(), 10);
//! println!("Governs: {}", result.governing_condition());
//! ```

use serde::{Deserialize, Serialize};

use super::capacity::{check_capacity, DesignChecks};
use crate::equations::{uniform_load_max_moment, uniform_load_max_shear, Equation, LINE_LOAD_UNIT};
use crate::errors::{ensure_finite, EngineResult};
use crate::loads::combinations::{evaluate_combinations, CombinationSummary};
use crate::loads::{Geometry, LineLoads, LoadInputs};
use crate::materials::{MaterialProperties, SectionProperties};
use crate::project::DesignSettings;
use crate::steps::{fmt_input, fmt_result, DesignStep, StepRecorder};

/// Governing design forces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignForces {
    /// M_u = w_u L²/8 (kg·m)
    pub mu_kgm: f64,
    /// V_u = w_u L/2 (kg)
    pub vu_kg: f64,
}

/// Everything one design run produces.
///
/// Built fresh per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Line loads on the purlin (kg/m)
    pub loads: LineLoads,
    /// Every factored combination and the governing one
    pub combinations: CombinationSummary,
    /// Design moment and shear
    pub forces: DesignForces,
    /// Capacities, demands, ratios and pass flags
    pub checks: DesignChecks,
    /// Calculation trace in execution order
    pub steps: Vec<DesignStep>,
}

impl DesignResult {
    /// True when flexure, shear and deflection all pass
    pub fn passes(&self) -> bool {
        self.checks.passes()
    }

    /// Highest demand/capacity ratio
    pub fn governing_ratio(&self) -> f64 {
        self.checks.governing_ratio()
    }

    /// Limit state with the highest ratio ("Flexure", "Shear" or "Deflection")
    pub fn governing_condition(&self) -> &'static str {
        self.checks.governing_condition()
    }
}

/// Run the purlin check with default settings (LRFD table, L/360).
///
/// This is a pure function: identical inputs give identical results and the
/// calculation trace belongs to the returned value alone.
///
/// # Errors
///
/// * `Validation` - span or spacing ≤ 0, slope outside [0, 90), negative load,
///   any section property, `Fy` or `E` ≤ 0
/// * `MissingData` - a section or material value is not a number
/// * `Computation` - a zero capacity or a non-finite intermediate
pub fn run_design(
    section: &SectionProperties,
    geometry: &Geometry,
    loads: &LoadInputs,
    material: &MaterialProperties,
) -> EngineResult<DesignResult> {
    run_design_with(section, geometry, loads, material, &DesignSettings::default())
}

/// Run the purlin check with explicit settings.
///
/// All inputs are validated before the first step is recorded.
pub fn run_design_with(
    section: &SectionProperties,
    geometry: &Geometry,
    loads: &LoadInputs,
    material: &MaterialProperties,
    settings: &DesignSettings,
) -> EngineResult<DesignResult> {
    geometry.validate()?;
    loads.validate()?;
    section.validate()?;
    material.validate()?;
    settings.validate()?;

    log::debug!(
        "designing {} over {} m at {} m spacing (slope {}°)",
        section.name,
        geometry.span,
        geometry.spacing,
        geometry.slope
    );

    let mut recorder = StepRecorder::new();

    let line = line_loads(section, geometry, loads, &mut recorder)?;
    let combinations = combine(&line, settings, &mut recorder)?;
    let forces = design_forces(combinations.design, geometry.span, &mut recorder)?;
    let checks = check_capacity(
        section,
        material,
        &line,
        geometry.span,
        &forces,
        settings.deflection_limit_ratio,
        &mut recorder,
    )?;

    log::info!(
        "{}: {} (governing {} at {:.3})",
        section.name,
        if checks.passes() { "PASS" } else { "FAIL" },
        checks.governing_condition(),
        checks.governing_ratio()
    );

    Ok(DesignResult {
        loads: line,
        combinations,
        forces,
        checks,
        steps: recorder.into_steps(),
    })
}

fn line_loads(
    section: &SectionProperties,
    geometry: &Geometry,
    loads: &LoadInputs,
    recorder: &mut StepRecorder,
) -> EngineResult<LineLoads> {
    let line = LineLoads::from_surface(geometry, loads, section.weight);
    ensure_finite("w_DL", line.dl_line)?;
    ensure_finite("w_LL", line.ll_line)?;
    ensure_finite("w_WL", line.wl_perp)?;

    let spacing = fmt_input(geometry.spacing);
    recorder.record_equation(
        Equation::DeadLineLoad,
        format!(
            r"w_{{DL}} = ({} \times {}) + {}",
            fmt_input(loads.dl),
            spacing,
            fmt_input(section.weight)
        ),
        line.dl_line,
        None,
    );
    recorder.record_equation(
        Equation::LiveLineLoad,
        format!(r"w_{{LL}} = {} \times {}", fmt_input(loads.ll), spacing),
        line.ll_line,
        None,
    );
    recorder.record_equation(
        Equation::WindLineLoad,
        format!(
            r"w_{{WL}} = ({} \times {}) \times {:.4}",
            fmt_input(loads.wl),
            spacing,
            geometry.cos_slope()
        ),
        line.wl_perp,
        None,
    );

    log::debug!(
        "line loads: DL={:.2} LL={:.2} WL={:.2} kg/m",
        line.dl_line,
        line.ll_line,
        line.wl_perp
    );
    Ok(line)
}

fn combine(
    line: &LineLoads,
    settings: &DesignSettings,
    recorder: &mut StepRecorder,
) -> EngineResult<CombinationSummary> {
    let summary = evaluate_combinations(line, &settings.combinations)?;
    ensure_finite("w_u", summary.design)?;

    for (i, (combo, factored)) in settings.combinations.iter().zip(&summary.values).enumerate() {
        recorder.record(DesignStep {
            title: format!("Load Combination {} ({})", i + 1, combo.name),
            formula: format!("w_{{{}}} = {}", factored.symbol, combo.equation()),
            substitution: format!("w_{{{}}} = {}", factored.symbol, combo.substitution(line)),
            result: fmt_result(factored.value, LINE_LOAD_UNIT),
            status: None,
        });
    }

    log::debug!(
        "governing combination: {} (w_u = {:.2} kg/m)",
        summary.governing,
        summary.design
    );
    Ok(summary)
}

fn design_forces(wu: f64, span: f64, recorder: &mut StepRecorder) -> EngineResult<DesignForces> {
    let mu = ensure_finite("M_u", uniform_load_max_moment(wu, span))?;
    let vu = ensure_finite("V_u", uniform_load_max_shear(wu, span))?;

    recorder.record_equation(
        Equation::DesignMoment,
        format!(r"M_u = \frac{{{:.2} \times {}^2}}{{8}}", wu, fmt_input(span)),
        mu,
        None,
    );
    recorder.record_equation(
        Equation::DesignShear,
        format!(r"V_u = \frac{{{:.2} \times {}}}{{2}}", wu, fmt_input(span)),
        vu,
        None,
    );

    log::debug!("forces: Mu={:.2} kg-m Vu={:.2} kg", mu, vu);
    Ok(DesignForces { mu_kgm: mu, vu_kg: vu })
}
