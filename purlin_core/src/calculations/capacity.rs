//! # Capacity Checks
//!
//! Flexure, shear and deflection checks of a cold-formed purlin section.
//! Each check compares a demand with a capacity:
//!
//! ```text
//! ratio = demand / capacity        PASS ⇔ ratio ≤ 1.0
//! ```
//!
//! All three checks are always evaluated so the report shows every ratio,
//! even when an earlier one already fails.
//!
//! ## Formulas
//!
//! | Check | Capacity | Units |
//! |---|---|---|
//! | Flexure | φM_n = 0.90 · Z_x F_y / 100 | kg·m |
//! | Shear | φV_n = 1.0 · 0.6 F_y A_w, A_w = h t / 100 | kg |
//! | Deflection | Δ_allow = L_cm / 360 | cm |

use serde::{Deserialize, Serialize};

use super::purlin::DesignForces;
use crate::equations::{uniform_load_max_deflection, Equation};
use crate::errors::{checked_div, ensure_finite, ensure_positive_capacity, DesignError, EngineResult};
use crate::loads::LineLoads;
use crate::materials::{MaterialProperties, SectionProperties};
use crate::steps::{fmt_input, StepRecorder, StepStatus};
use crate::units::{Centimeters, KgCm, KgM, KgPerCm, KgPerM, Meters, Millimeters, SqCm};

/// Resistance factor for flexure
pub const PHI_FLEXURE: f64 = 0.90;

/// Resistance factor for shear
pub const PHI_SHEAR: f64 = 1.0;

/// Shear yield coefficient (V_n = 0.6 F_y A_w)
pub const SHEAR_YIELD_COEFFICIENT: f64 = 0.6;

/// Default serviceability divisor (Δ_allow = L/360)
pub const DEFAULT_DEFLECTION_LIMIT_RATIO: f64 = 360.0;

/// Demand against capacity for one limit state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitStateCheck {
    pub demand: f64,
    pub capacity: f64,
    /// demand / capacity
    pub ratio: f64,
    pub passes: bool,
}

impl LimitStateCheck {
    /// Build a check, refusing a zero or non-finite capacity
    pub fn new(quantity: &str, demand: f64, capacity: f64) -> EngineResult<Self> {
        let ratio = checked_div(quantity, demand, capacity)?;
        Ok(LimitStateCheck {
            demand,
            capacity,
            ratio,
            passes: ratio <= 1.0,
        })
    }

    pub fn status(&self) -> StepStatus {
        StepStatus::from_ratio(self.ratio)
    }
}

/// Design flexural strength φM_n (kg·m)
///
/// `zx` in cm³, `fy` in ksc. Z_x·F_y is kg·cm and is converted to kg·m.
pub fn flexural_capacity(zx: f64, fy: f64) -> EngineResult<f64> {
    let mn: KgM = KgCm(zx * fy).into();
    ensure_positive_capacity("phi_mn", (mn * PHI_FLEXURE).value())
}

/// Web shear area A_w (cm²) from web height and thickness in mm
pub fn web_area(h: f64, t: f64) -> f64 {
    let aw: SqCm = (Millimeters(h) * Millimeters(t)).into();
    aw.value()
}

/// Design shear strength φV_n (kg)
pub fn shear_capacity(fy: f64, aw: f64) -> EngineResult<f64> {
    ensure_positive_capacity("phi_vn", PHI_SHEAR * SHEAR_YIELD_COEFFICIENT * fy * aw)
}

/// Midspan deflection under the service load (cm).
///
/// `w_service` in kg/m and `span` in m are converted to kg/cm and cm so the
/// result is consistent with `e` (ksc) and `ix` (cm⁴).
pub fn service_deflection(w_service: f64, span: f64, e: f64, ix: f64) -> EngineResult<f64> {
    let stiffness = e * ix;
    if !stiffness.is_finite() || stiffness <= 0.0 {
        return Err(DesignError::computation(
            "E*Ix",
            format!("flexural stiffness must be positive, got {}", stiffness),
        ));
    }
    let w: KgPerCm = KgPerM(w_service).into();
    let l: Centimeters = Meters(span).into();
    uniform_load_max_deflection(w.value(), l.value(), e, ix)
        .ok_or_else(|| DesignError::computation("delta", "deflection is not finite"))
}

/// Allowable deflection L_cm / divisor (cm)
pub fn deflection_limit(span: f64, divisor: f64) -> EngineResult<f64> {
    let l: Centimeters = Meters(span).into();
    let limit = checked_div("delta_limit", l.value(), divisor)?;
    ensure_positive_capacity("delta_limit", limit)
}

/// Capacities of the section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capacities {
    /// φM_n (kg·m)
    pub phi_mn: f64,
    /// φV_n (kg)
    pub phi_vn: f64,
    /// Allowable deflection (cm)
    pub delta_limit: f64,
}

/// Demands on the section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Demands {
    /// M_u (kg·m)
    pub mu: f64,
    /// V_u (kg)
    pub vu: f64,
    /// Service deflection (cm)
    pub delta: f64,
}

/// Demand/capacity ratios, plus the informational web slenderness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratios {
    pub moment: f64,
    pub shear: f64,
    pub deflection: f64,
    /// h/t, reported only
    pub h_t: f64,
}

/// Pass flags per limit state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckStatus {
    pub moment: bool,
    pub shear: bool,
    pub deflection: bool,
}

/// All member checks of one design run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "capacity": { "phi_mn": 339.12, "phi_vn": 4608.0, "delta_limit": 1.111 },
///   "demand": { "mu": 268.44, "vu": 268.44, "delta": 0.965 },
///   "ratios": { "moment": 0.79, "shear": 0.058, "deflection": 0.868, "h_t": 31.25 },
///   "status": { "moment": true, "shear": true, "deflection": true }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignChecks {
    pub capacity: Capacities,
    pub demand: Demands,
    pub ratios: Ratios,
    pub status: CheckStatus,
}

impl DesignChecks {
    /// Assemble the record from the three limit-state checks
    pub fn from_checks(
        flexure: &LimitStateCheck,
        shear: &LimitStateCheck,
        deflection: &LimitStateCheck,
        h_t: f64,
    ) -> Self {
        DesignChecks {
            capacity: Capacities {
                phi_mn: flexure.capacity,
                phi_vn: shear.capacity,
                delta_limit: deflection.capacity,
            },
            demand: Demands {
                mu: flexure.demand,
                vu: shear.demand,
                delta: deflection.demand,
            },
            ratios: Ratios {
                moment: flexure.ratio,
                shear: shear.ratio,
                deflection: deflection.ratio,
                h_t,
            },
            status: CheckStatus {
                moment: flexure.passes,
                shear: shear.passes,
                deflection: deflection.passes,
            },
        }
    }

    /// True when flexure, shear and deflection all pass
    pub fn passes(&self) -> bool {
        self.status.moment && self.status.shear && self.status.deflection
    }

    /// Highest demand/capacity ratio
    pub fn governing_ratio(&self) -> f64 {
        self.ratios.moment.max(self.ratios.shear).max(self.ratios.deflection)
    }

    /// Limit state with the highest ratio
    pub fn governing_condition(&self) -> &'static str {
        let r = &self.ratios;
        if r.moment >= r.shear && r.moment >= r.deflection {
            "Flexure"
        } else if r.shear >= r.deflection {
            "Shear"
        } else {
            "Deflection"
        }
    }
}

/// Run the three member checks and record one step for each.
///
/// Strength checks use the factored design forces; the deflection check
/// uses the unfactored service load `w_DL + w_LL`.
pub(crate) fn check_capacity(
    section: &SectionProperties,
    material: &MaterialProperties,
    line: &LineLoads,
    span: f64,
    forces: &DesignForces,
    deflection_limit_ratio: f64,
    recorder: &mut StepRecorder,
) -> EngineResult<DesignChecks> {
    let DesignForces { mu_kgm: mu, vu_kg: vu } = *forces;

    // Flexure
    let phi_mn = flexural_capacity(section.zx, material.fy)?;
    let flexure = LimitStateCheck::new("moment_ratio", mu, phi_mn)?;
    recorder.record_equation(
        Equation::FlexuralCapacity,
        format!(
            r"\phi M_n = 0.90 ({} \times {}) / 100",
            fmt_input(section.zx),
            fmt_input(material.fy)
        ),
        phi_mn,
        Some(flexure.status()),
    );
    log::debug!("flexure: Mu={:.2} phi_Mn={:.2} ratio={:.3}", mu, phi_mn, flexure.ratio);

    // Shear
    let aw = web_area(section.h, section.t);
    let phi_vn = shear_capacity(material.fy, aw)?;
    let shear = LimitStateCheck::new("shear_ratio", vu, phi_vn)?;
    recorder.record_equation(
        Equation::ShearCapacity,
        format!(r"\phi V_n = 0.6 \times {} \times {:.2}", fmt_input(material.fy), aw),
        phi_vn,
        Some(shear.status()),
    );
    log::debug!("shear: Vu={:.2} phi_Vn={:.2} ratio={:.3}", vu, phi_vn, shear.ratio);

    // Deflection
    let w_service = ensure_finite("w_service", line.service())?;
    let delta = service_deflection(w_service, span, material.e, section.ix)?;
    let delta_limit = deflection_limit(span, deflection_limit_ratio)?;
    let deflection = LimitStateCheck::new("deflection_ratio", delta, delta_limit)?;
    let w_cm: KgPerCm = KgPerM(w_service).into();
    let l_cm: Centimeters = Meters(span).into();
    recorder.record_equation_with_note(
        Equation::Deflection,
        format!(
            r"\Delta = \frac{{5 \times {:.2} \times {:.0}^4}}{{384 \times {} \times {}}}",
            w_cm.value(),
            l_cm.value(),
            fmt_input(material.e),
            fmt_input(section.ix)
        ),
        delta,
        &format!("Limit: {:.2} cm", delta_limit),
        Some(deflection.status()),
    );
    log::debug!(
        "deflection: delta={:.3} cm limit={:.3} cm ratio={:.3}",
        delta,
        delta_limit,
        deflection.ratio
    );

    let h_t = ensure_finite("h_t", section.slenderness())?;

    Ok(DesignChecks::from_checks(&flexure, &shear, &deflection, h_t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn section() -> SectionProperties {
        SectionProperties {
            name: "C-100x50x20x3.2".to_string(),
            weight: 5.5,
            ix: 78.6,
            zx: 15.7,
            area: 7.01,
            h: 100.0,
            t: 3.2,
        }
    }

    fn line() -> LineLoads {
        LineLoads { self_weight: 5.5, dl_line: 15.5, ll_line: 30.0, wl_perp: 49.81 }
    }

    #[test]
    fn test_flexural_capacity() {
        // 0.90 * (15.7 * 2400 / 100)
        assert_relative_eq!(flexural_capacity(15.7, 2400.0).unwrap(), 339.12, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_modulus_is_computation_error() {
        let err = flexural_capacity(0.0, 2400.0).unwrap_err();
        assert_eq!(err.error_code(), "COMPUTATION_ERROR");
        assert_eq!(err.field(), "phi_mn");
    }

    #[test]
    fn test_shear_capacity() {
        let aw = web_area(100.0, 3.2);
        assert_relative_eq!(aw, 3.2, epsilon = 1e-12);
        assert_relative_eq!(shear_capacity(2400.0, aw).unwrap(), 4608.0, epsilon = 1e-9);
    }

    #[test]
    fn test_service_deflection() {
        let delta = service_deflection(45.5, 4.0, 2.0e6, 78.6).unwrap();
        assert_relative_eq!(delta, 0.96480, epsilon = 1e-4);
        assert_relative_eq!(deflection_limit(4.0, 360.0).unwrap(), 400.0 / 360.0);
    }

    #[test]
    fn test_zero_stiffness() {
        let err = service_deflection(45.5, 4.0, 2.0e6, 0.0).unwrap_err();
        assert_eq!(err.field(), "E*Ix");
        let err = service_deflection(45.5, 4.0, 0.0, 78.6).unwrap_err();
        assert_eq!(err.field(), "E*Ix");
    }

    #[test]
    fn test_limit_state_boundary() {
        let at_capacity = LimitStateCheck::new("r", 5.0, 5.0).unwrap();
        assert!(at_capacity.passes);
        assert_eq!(at_capacity.status(), StepStatus::Pass);

        let over = LimitStateCheck::new("r", 5.1, 5.0).unwrap();
        assert!(!over.passes);
        assert_eq!(over.status(), StepStatus::Fail);

        assert!(LimitStateCheck::new("r", 1.0, 0.0).is_err());
    }

    #[test]
    fn test_check_capacity_records_three_steps() {
        let mut recorder = StepRecorder::new();
        let checks = check_capacity(
            &section(),
            &MaterialProperties::new(2400.0, 2.0e6),
            &line(),
            4.0,
            &DesignForces { mu_kgm: 268.44, vu_kg: 268.44 },
            DEFAULT_DEFLECTION_LIMIT_RATIO,
            &mut recorder,
        )
        .unwrap();

        assert!(checks.passes());
        assert_eq!(checks.governing_condition(), "Deflection");
        assert_relative_eq!(checks.ratios.h_t, 31.25);

        let steps = recorder.into_steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].substitution, r"\phi M_n = 0.90 (15.7 \times 2400.0) / 100");
        assert_eq!(steps[0].result, "339.12 kg-m");
        assert_eq!(steps[1].substitution, r"\phi V_n = 0.6 \times 2400.0 \times 3.20");
        assert_eq!(steps[1].result, "4608.00 kg");
        assert_eq!(
            steps[2].substitution,
            r"\Delta = \frac{5 \times 0.46 \times 400^4}{384 \times 2000000.0 \times 78.6}"
        );
        assert_eq!(steps[2].result, "0.96 cm (Limit: 1.11 cm)");
        assert!(steps.iter().all(|s| s.status == Some(StepStatus::Pass)));
    }

    #[test]
    fn test_all_checks_computed_when_flexure_fails() {
        let mut recorder = StepRecorder::new();
        let checks = check_capacity(
            &section(),
            &MaterialProperties::new(2400.0, 2.0e6),
            &line(),
            4.0,
            &DesignForces { mu_kgm: 400.0, vu_kg: 400.0 },
            DEFAULT_DEFLECTION_LIMIT_RATIO,
            &mut recorder,
        )
        .unwrap();

        assert!(!checks.status.moment);
        assert!(checks.status.shear);
        assert!(!checks.passes());
        assert_eq!(checks.governing_condition(), "Flexure");
        assert_eq!(recorder.len(), 3);
        assert_eq!(recorder.steps()[0].status, Some(StepStatus::Fail));
    }
}
