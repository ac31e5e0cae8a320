//! Fine aggregate grading zones (IS 383)

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::normalize_label;

/// Grading zone of the fine aggregate.
///
/// Recorded with the design; the coarse aggregate fraction does not yet vary
/// with zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FineAggregateZone {
    #[serde(rename = "Zone I")]
    ZoneI,
    #[serde(rename = "Zone II")]
    ZoneII,
    #[serde(rename = "Zone III")]
    ZoneIII,
    #[serde(rename = "Zone IV")]
    ZoneIV,
}

static ZONE_INDEX: Lazy<HashMap<String, FineAggregateZone>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for zone in FineAggregateZone::ALL {
        let (roman, arabic) = zone.numerals();
        for key in [roman, arabic] {
            index.insert(normalize_label(key), zone);
            index.insert(normalize_label(&format!("Zone {}", key)), zone);
        }
    }
    index
});

impl FineAggregateZone {
    pub const ALL: [FineAggregateZone; 4] = [
        FineAggregateZone::ZoneI,
        FineAggregateZone::ZoneII,
        FineAggregateZone::ZoneIII,
        FineAggregateZone::ZoneIV,
    ];

    fn numerals(&self) -> (&'static str, &'static str) {
        match self {
            FineAggregateZone::ZoneI => ("I", "1"),
            FineAggregateZone::ZoneII => ("II", "2"),
            FineAggregateZone::ZoneIII => ("III", "3"),
            FineAggregateZone::ZoneIV => ("IV", "4"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FineAggregateZone::ZoneI => "Zone I",
            FineAggregateZone::ZoneII => "Zone II",
            FineAggregateZone::ZoneIII => "Zone III",
            FineAggregateZone::ZoneIV => "Zone IV",
        }
    }

    /// Parse "Zone II", "II", "zone-2" or "2"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        ZONE_INDEX
            .get(&normalize_label(s))
            .copied()
            .ok_or_else(|| CalcError::unknown_label("fine aggregate zone", s))
    }
}

impl std::fmt::Display for FineAggregateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for FineAggregateZone {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}
