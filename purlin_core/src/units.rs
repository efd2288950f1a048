//! # Unit Types
//!
//! Lightweight newtype wrappers for the mixed metric units used in Thai
//! cold-formed steel practice. JSON serialization stays clean (just numbers).
//!
//! ## Unit Convention
//!
//! The design formulas deliberately mix units and the conversions below are
//! part of the calculation, not a convenience layer:
//!
//! - Span and spacing: meters (m); deflection: centimeters (cm)
//! - Web height and thickness: millimeters (mm)
//! - Line load: kilograms per meter (kg/m), kg/cm for deflection
//! - Stress: kilogram-force per square centimeter (ksc)
//! - Moment: kg·m (capacity from Zx·Fy in kg·cm divided by 100)
//!
//! ## Example
//!
//! ```rust
//! use purlin_core::units::{Centimeters, KgPerCm, KgPerM, Meters};
//!
//! let span: Centimeters = Meters(4.0).into();
//! assert_eq!(span.0, 400.0);
//!
//! let w: KgPerCm = KgPerM(45.5).into();
//! assert_eq!(w.0, 0.455);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;

/// Square millimeters per square centimeter
pub const MM2_PER_CM2: f64 = 100.0;

/// kg·cm per kg·m
pub const KGCM_PER_KGM: f64 = 100.0;

/// ksc per MPa (1 MPa ≈ 10.197 kgf/cm²)
pub const KSC_PER_MPA: f64 = 10.197;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * CM_PER_M)
    }
}

impl Mul for Millimeters {
    type Output = SqMm;
    fn mul(self, rhs: Self) -> SqMm {
        SqMm(self.0 * rhs.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqCm(pub f64);

impl From<SqMm> for SqCm {
    fn from(mm2: SqMm) -> Self {
        SqCm(mm2.0 / MM2_PER_CM2)
    }
}

// ============================================================================
// Distributed Load Units
// ============================================================================

/// Line load in kilograms per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM(pub f64);

/// Line load in kilograms per centimeter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerCm(pub f64);

impl From<KgPerM> for KgPerCm {
    fn from(w: KgPerM) -> Self {
        KgPerCm(w.0 / CM_PER_M)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilogram-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgM(pub f64);

/// Moment in kilogram-centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgCm(pub f64);

impl From<KgCm> for KgM {
    fn from(m: KgCm) -> Self {
        KgM(m.0 / KGCM_PER_KGM)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in kilogram-force per square centimeter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksc(pub f64);

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

impl From<Mpa> for Ksc {
    fn from(mpa: Mpa) -> Self {
        Ksc(mpa.0 * KSC_PER_MPA)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(SqMm);
impl_arithmetic!(SqCm);
impl_arithmetic!(KgPerM);
impl_arithmetic!(KgPerCm);
impl_arithmetic!(KgM);
impl_arithmetic!(KgCm);
impl_arithmetic!(Ksc);
impl_arithmetic!(Mpa);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_centimeters() {
        let cm: Centimeters = Meters(4.0).into();
        assert_eq!(cm.0, 400.0);
    }

    #[test]
    fn test_web_area_conversion() {
        let area: SqCm = (Millimeters(100.0) * Millimeters(3.2)).into();
        assert!((area.0 - 3.2).abs() < 1e-12);
    }

    #[test]
    fn test_moment_conversion() {
        let m: KgM = KgCm(37_680.0).into();
        assert_eq!(m.0, 376.8);
    }

    #[test]
    fn test_mpa_to_ksc() {
        let fy: Ksc = Mpa(245.0).into();
        assert!((fy.0 - 2498.265).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = KgPerM(15.5);
        let b = KgPerM(30.0);
        assert_eq!((a + b).0, 45.5);
        assert_eq!((b - a).0, 14.5);
        assert_eq!((b * 2.0).0, 60.0);
        assert_eq!((b / 2.0).0, 15.0);
    }

    #[test]
    fn test_serialization() {
        let span = Meters(4.5);
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, "4.5");
        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(span, roundtrip);
    }
}
