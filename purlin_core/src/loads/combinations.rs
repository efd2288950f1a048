//! LRFD load combinations for roof purlins
//!
//! A combination is a named list of factor groups. Each group scales a sum of
//! factored load terms, which expresses both plain combinations
//! (`1.4D + 1.7L`) and reduced companion forms (`0.75(1.4D + 1.7L) + 1.6W`)
//! without special cases:
//!
//! ```text
//! w_u = Σ_groups multiplier · Σ_terms factor · w_type
//! ```
//!
//! Factors are stored in insertion order so the floating-point summation is
//! the same on every run.
//!
//! ## Registering a combination
//!
//! ```
//! use purlin_core::loads::{LoadCombination, LoadType, lrfd_purlin_combinations};
//!
//! let mut combos = lrfd_purlin_combinations();
//! combos.push(
//!     LoadCombination::new("Uplift")
//!         .with_factor(LoadType::Dead, 0.9)
//!         .with_factor(LoadType::Wind, -1.3),
//! );
//! assert_eq!(combos.len(), 3);
//! assert_eq!(combos[2].equation(), "0.9D - 1.3W");
//! ```

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;
use super::LineLoads;
use crate::errors::{DesignError, EngineResult};

/// A scaled sum of factored load terms, e.g. `0.75(1.4D + 1.7L)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorGroup {
    /// Scale applied to the whole group (1.0 for an unscaled group)
    pub multiplier: f64,
    /// Load factors in display and summation order
    pub factors: Vec<(LoadType, f64)>,
}

impl FactorGroup {
    fn is_scaled(&self) -> bool {
        self.multiplier != 1.0
    }

    fn apply(&self, loads: &LineLoads) -> f64 {
        let sum: f64 = self
            .factors
            .iter()
            .fold(0.0, |acc, (load_type, factor)| acc + factor * loads.get(*load_type));
        self.multiplier * sum
    }
}

/// A named factored load combination.
///
/// # Example
/// ```
/// use purlin_core::loads::{LoadCombination, LoadType, LineLoads};
///
/// let combo = LoadCombination::new("Gravity")
///     .with_factor(LoadType::Dead, 1.4)
///     .with_factor(LoadType::Live, 1.7);
///
/// let loads = LineLoads { self_weight: 0.0, dl_line: 10.0, ll_line: 20.0, wl_perp: 0.0 };
/// assert!((combo.apply(&loads) - 48.0).abs() < 1e-12);
/// assert_eq!(combo.equation(), "1.4D + 1.7L");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination name (e.g., "Gravity", "Combined")
    pub name: String,

    /// Factor groups, summed in order
    pub groups: Vec<FactorGroup>,
}

impl LoadCombination {
    /// Create an empty combination
    pub fn new(name: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            groups: Vec::new(),
        }
    }

    /// Add an unscaled load term (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.groups.push(FactorGroup {
            multiplier: 1.0,
            factors: vec![(load_type, factor)],
        });
        self
    }

    /// Add a group of terms scaled by a common multiplier (builder pattern)
    pub fn with_group(mut self, multiplier: f64, factors: &[(LoadType, f64)]) -> Self {
        self.groups.push(FactorGroup {
            multiplier,
            factors: factors.to_vec(),
        });
        self
    }

    /// Total factored line load for this combination
    pub fn apply(&self, loads: &LineLoads) -> f64 {
        self.groups
            .iter()
            .fold(0.0, |acc, group| acc + group.apply(loads))
    }

    /// Symbolic equation, e.g. `0.75(1.4D + 1.7L) + 1.6W`
    pub fn equation(&self) -> String {
        self.render(|load_type, factor, _scaled| format!("{}{}", fmt_factor(factor), load_type.code()))
    }

    /// Equation with line-load values substituted (two decimals).
    ///
    /// Terms inside a scaled group are written `1.4 \times 15.50`, standalone
    /// terms `1.4(15.50)`.
    pub fn substitution(&self, loads: &LineLoads) -> String {
        self.render(|load_type, factor, scaled| {
            let value = loads.get(load_type);
            if scaled {
                format!("{} \\times {:.2}", fmt_factor(factor), value)
            } else {
                format!("{}({:.2})", fmt_factor(factor), value)
            }
        })
    }

    fn render<F>(&self, term: F) -> String
    where
        F: Fn(LoadType, f64, bool) -> String,
    {
        let mut out = String::new();
        for group in &self.groups {
            if group.is_scaled() {
                let inner = join_terms(group.factors.iter().map(|(lt, f)| (*f, term(*lt, f.abs(), true))));
                push_term(&mut out, group.multiplier, format!("{}({})", fmt_factor(group.multiplier.abs()), inner));
            } else {
                for (load_type, factor) in &group.factors {
                    push_term(&mut out, *factor, term(*load_type, factor.abs(), false));
                }
            }
        }
        out
    }
}

/// Factor text as written in the equation: shortest representation, no
/// trailing zeros (`1.4`, `0.75`, `1`).
fn fmt_factor(factor: f64) -> String {
    format!("{}", factor)
}

fn push_term(out: &mut String, sign: f64, text: String) {
    if out.is_empty() {
        if sign < 0.0 {
            out.push('-');
        }
    } else if sign < 0.0 {
        out.push_str(" - ");
    } else {
        out.push_str(" + ");
    }
    out.push_str(&text);
}

fn join_terms(terms: impl Iterator<Item = (f64, String)>) -> String {
    let mut out = String::new();
    for (sign, text) in terms {
        push_term(&mut out, sign, text);
    }
    out
}

/// Default LRFD combination table for roof purlins.
///
/// | # | Name | Equation |
/// |---|---|---|
/// | 1 | Gravity | 1.4D + 1.7L |
/// | 2 | Combined | 0.75(1.4D + 1.7L) + 1.6W |
///
/// # Example
/// ```
/// use purlin_core::loads::lrfd_purlin_combinations;
///
/// let combos = lrfd_purlin_combinations();
/// assert_eq!(combos[0].equation(), "1.4D + 1.7L");
/// assert_eq!(combos[1].equation(), "0.75(1.4D + 1.7L) + 1.6W");
/// ```
pub fn lrfd_purlin_combinations() -> Vec<LoadCombination> {
    vec![
        LoadCombination::new("Gravity")
            .with_factor(LoadType::Dead, 1.4)
            .with_factor(LoadType::Live, 1.7),
        LoadCombination::new("Combined")
            .with_group(0.75, &[(LoadType::Dead, 1.4), (LoadType::Live, 1.7)])
            .with_factor(LoadType::Wind, 1.6),
    ]
}

/// One evaluated combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoredLoad {
    /// Combination name
    pub name: String,
    /// Subscript used in the trace (`u1`, `u2`, ...)
    pub symbol: String,
    /// Factored line load (kg/m)
    pub value: f64,
}

/// All evaluated combinations plus the governing envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationSummary {
    /// Every combination, in table order
    pub values: Vec<FactoredLoad>,
    /// Governing design load w_u = max(values) (kg/m)
    pub design: f64,
    /// Name of the governing combination
    pub governing: String,
}

/// Trace subscript for the combination at `index` (zero-based)
pub fn combination_symbol(index: usize) -> String {
    format!("u{}", index + 1)
}

/// Find the governing (maximum) combination.
///
/// On a tie the earlier combination in the table is reported. Returns
/// `None` for an empty table.
///
/// # Example
/// ```
/// use purlin_core::loads::{find_governing_combination, lrfd_purlin_combinations, LineLoads};
///
/// let loads = LineLoads { self_weight: 5.5, dl_line: 15.5, ll_line: 30.0, wl_perp: 0.0 };
/// let (max_load, name) = find_governing_combination(&loads, &lrfd_purlin_combinations()).unwrap();
/// assert_eq!(name, "Gravity");
/// assert!((max_load - 72.7).abs() < 1e-9);
/// ```
pub fn find_governing_combination(
    loads: &LineLoads,
    combinations: &[LoadCombination],
) -> Option<(f64, String)> {
    let mut governing: Option<(f64, &LoadCombination)> = None;
    for combo in combinations {
        let value = combo.apply(loads);
        match governing {
            Some((best, _)) if value <= best => {}
            _ => governing = Some((value, combo)),
        }
    }
    governing.map(|(value, combo)| (value, combo.name.clone()))
}

/// Evaluate every combination and select the governing envelope.
pub fn evaluate_combinations(
    loads: &LineLoads,
    combinations: &[LoadCombination],
) -> EngineResult<CombinationSummary> {
    let (design, governing) = find_governing_combination(loads, combinations).ok_or_else(|| {
        DesignError::validation("combinations", "[]", "At least one load combination is required")
    })?;

    let values = combinations
        .iter()
        .enumerate()
        .map(|(i, combo)| FactoredLoad {
            name: combo.name.clone(),
            symbol: combination_symbol(i),
            value: combo.apply(loads),
        })
        .collect();

    Ok(CombinationSummary {
        values,
        design,
        governing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_loads() -> LineLoads {
        LineLoads {
            self_weight: 5.5,
            dl_line: 15.5,
            ll_line: 30.0,
            wl_perp: 50.0 * 5.0_f64.to_radians().cos(),
        }
    }

    #[test]
    fn test_default_table() {
        let combos = lrfd_purlin_combinations();
        assert_eq!(combos.len(), 2);
        assert_eq!(combos[0].name, "Gravity");
        assert_eq!(combos[1].name, "Combined");
    }

    #[test]
    fn test_equations() {
        let combos = lrfd_purlin_combinations();
        assert_eq!(combos[0].equation(), "1.4D + 1.7L");
        assert_eq!(combos[1].equation(), "0.75(1.4D + 1.7L) + 1.6W");
    }

    #[test]
    fn test_substitutions() {
        let combos = lrfd_purlin_combinations();
        let loads = golden_loads();
        assert_eq!(combos[0].substitution(&loads), "1.4(15.50) + 1.7(30.00)");
        assert_eq!(
            combos[1].substitution(&loads),
            "0.75(1.4 \\times 15.50 + 1.7 \\times 30.00) + 1.6(49.81)"
        );
    }

    #[test]
    fn test_combined_matches_closed_form() {
        let loads = golden_loads();
        let combos = lrfd_purlin_combinations();
        let expected = 0.75 * (1.4 * loads.dl_line + 1.7 * loads.ll_line) + 1.6 * loads.wl_perp;
        assert_eq!(combos[1].apply(&loads), expected);
        assert_eq!(combos[0].apply(&loads), 1.4 * loads.dl_line + 1.7 * loads.ll_line);
    }

    #[test]
    fn test_governing_is_maximum() {
        let loads = golden_loads();
        let combos = lrfd_purlin_combinations();
        let (max_load, name) = find_governing_combination(&loads, &combos).unwrap();
        let wu1 = combos[0].apply(&loads);
        let wu2 = combos[1].apply(&loads);
        assert_eq!(max_load, wu1.max(wu2));
        assert_eq!(name, "Combined");
        assert!((max_load - 134.22).abs() < 0.005);
    }

    #[test]
    fn test_tie_reports_first() {
        let loads = LineLoads { self_weight: 0.0, dl_line: 10.0, ll_line: 0.0, wl_perp: 0.0 };
        let combos = vec![
            LoadCombination::new("A").with_factor(LoadType::Dead, 1.0),
            LoadCombination::new("B").with_factor(LoadType::Dead, 1.0),
        ];
        let (_, name) = find_governing_combination(&loads, &combos).unwrap();
        assert_eq!(name, "A");
    }

    #[test]
    fn test_empty_table() {
        assert!(find_governing_combination(&golden_loads(), &[]).is_none());
        let err = evaluate_combinations(&golden_loads(), &[]).unwrap_err();
        assert_eq!(err.field(), "combinations");
    }

    #[test]
    fn test_negative_factor_rendering() {
        let combo = LoadCombination::new("Uplift")
            .with_factor(LoadType::Dead, 0.9)
            .with_factor(LoadType::Wind, -1.3);
        assert_eq!(combo.equation(), "0.9D - 1.3W");
        assert_eq!(combo.substitution(&golden_loads()), "0.9(15.50) - 1.3(49.81)");
        assert!(combo.apply(&golden_loads()) < 0.0);
    }

    #[test]
    fn test_summary_symbols() {
        let summary = evaluate_combinations(&golden_loads(), &lrfd_purlin_combinations()).unwrap();
        let symbols: Vec<&str> = summary.values.iter().map(|v| v.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["u1", "u2"]);
        assert_eq!(summary.governing, "Combined");
        assert_eq!(summary.design, summary.values[1].value);
    }

    #[test]
    fn test_combination_serialization() {
        let combo = &lrfd_purlin_combinations()[1];
        let json = serde_json::to_string(combo).unwrap();
        let parsed: LoadCombination = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, combo);
    }
}
