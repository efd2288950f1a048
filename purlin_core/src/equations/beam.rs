//! # Simply-Supported Beam Formulas
//!
//! Closed-form results for a simply-supported purlin under a full-length
//! uniform load. Pin at the left support (x=0), roller at the right (x=L).
//!
//! ## Notation
//!
//! - `w` = Uniform load intensity (force per unit length)
//! - `L` = Span length
//! - `E` = Modulus of elasticity
//! - `I` = Second moment of area
//!
//! Units are whatever the caller supplies; the results are consistent with
//! them (kg/m and m give kg·m and kg; kg/cm, cm, ksc and cm⁴ give cm).
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 2a

/// Maximum shear for uniform load (at the supports)
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ════════════════
///    △              △
///   R1  ←───L────→  R2
/// ```
///
/// # Formula
/// V_max = R1 = R2 = wL/2
#[inline]
pub fn uniform_load_max_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

/// Maximum moment for uniform load (at midspan)
///
/// # Formula
/// M_max = wL²/8
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l.powi(2) / 8.0
}

/// Maximum deflection for uniform load (at midspan)
///
/// # Formula
/// δ_max = 5wL⁴ / (384EI)
///
/// Returns `None` when `E·I` is zero or the result is not finite.
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> Option<f64> {
    if e * i == 0.0 {
        return None;
    }
    let delta = 5.0 * w * l.powi(4) / (384.0 * e * i);
    delta.is_finite().then_some(delta)
}
