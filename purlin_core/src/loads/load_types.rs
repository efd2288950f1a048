//! Load type definitions for purlin design

use serde::{Deserialize, Serialize};

/// Load categories acting on a roof purlin.
///
/// Each load type has the single-letter abbreviation used in combination
/// equations.
///
/// # Example
/// ```
/// use purlin_core::loads::LoadType;
///
/// assert_eq!(LoadType::Wind.code(), "W");
/// assert_eq!(LoadType::Dead.description(), "Dead load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Dead load (roofing, services, purlin self-weight)
    Dead,
    /// L - Roof live load (maintenance, workers)
    Live,
    /// W - Wind pressure, component perpendicular to the roof plane
    Wind,
}

impl LoadType {
    /// Standard abbreviation code (D, L, W)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
            LoadType::Wind => "W",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Live load",
            LoadType::Wind => "Wind load",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let codes: Vec<&str> = [LoadType::Dead, LoadType::Live, LoadType::Wind]
            .iter()
            .map(|lt| lt.code())
            .collect();
        assert_eq!(codes, vec!["D", "L", "W"]);
    }
}
