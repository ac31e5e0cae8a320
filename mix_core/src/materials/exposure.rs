//! Exposure Conditions (IS 456:2000 Table 3)
//!
//! Environmental exposure classes and the maximum free water-cement ratio
//! adopted for each.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::normalize_label;

/// Environmental exposure condition.
///
/// Serializes as the lower-case label used in reports (`"very severe"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExposureCondition {
    Mild,
    Moderate,
    Severe,
    #[serde(rename = "very severe", alias = "very-severe", alias = "very_severe")]
    VerySevere,
    Extreme,
}

static EXPOSURE_INDEX: Lazy<HashMap<String, ExposureCondition>> = Lazy::new(|| {
    ExposureCondition::ALL
        .iter()
        .map(|exposure| (normalize_label(exposure.label()), *exposure))
        .collect()
});

static WATER_CEMENT_RATIO_TABLE: Lazy<Vec<(ExposureCondition, f64)>> = Lazy::new(|| {
    ExposureCondition::ALL
        .iter()
        .map(|exposure| (*exposure, exposure.max_water_cement_ratio()))
        .collect()
});

impl ExposureCondition {
    /// All exposure conditions, mildest first
    pub const ALL: [ExposureCondition; 5] = [
        ExposureCondition::Mild,
        ExposureCondition::Moderate,
        ExposureCondition::Severe,
        ExposureCondition::VerySevere,
        ExposureCondition::Extreme,
    ];

    /// Report label (e.g., "very severe")
    pub fn label(&self) -> &'static str {
        match self {
            ExposureCondition::Mild => "mild",
            ExposureCondition::Moderate => "moderate",
            ExposureCondition::Severe => "severe",
            ExposureCondition::VerySevere => "very severe",
            ExposureCondition::Extreme => "extreme",
        }
    }

    /// Maximum free water-cement ratio for this exposure
    pub fn max_water_cement_ratio(&self) -> f64 {
        match self {
            ExposureCondition::Mild => 0.55,
            ExposureCondition::Moderate => 0.50,
            ExposureCondition::Severe => 0.45,
            ExposureCondition::VerySevere => 0.40,
            ExposureCondition::Extreme => 0.35,
        }
    }

    /// Parse from common string representations ("very severe", "Very-Severe", "VERY_SEVERE")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        EXPOSURE_INDEX
            .get(&normalize_label(s))
            .copied()
            .ok_or_else(|| CalcError::unknown_label("exposure condition", s))
    }
}

/// The full water-cement ratio table, mildest exposure first.
pub fn water_cement_ratio_table() -> &'static [(ExposureCondition, f64)] {
    &WATER_CEMENT_RATIO_TABLE
}

impl std::fmt::Display for ExposureCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ExposureCondition {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}
