//! Concrete Grades (IS 456 / IS 10262)
//!
//! Grade designations M10 … M80 and the assumed standard deviation used when
//! no site data is available (IS 10262:2019 Clause 4.2.1.3, Table 2).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::normalize_label;

/// Concrete strength grade.
///
/// Serializes as its designation (`"M25"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConcreteGrade {
    M10,
    M15,
    M20,
    M25,
    M30,
    M35,
    M40,
    M45,
    M50,
    M55,
    M60,
    M65,
    M70,
    M75,
    M80,
}

/// Normalized label → grade index, built once on first use.
static GRADE_INDEX: Lazy<HashMap<String, ConcreteGrade>> = Lazy::new(|| {
    ConcreteGrade::ALL
        .iter()
        .map(|grade| (normalize_label(grade.label()), *grade))
        .collect()
});

/// Grade → standard deviation table, in grade order.
static STANDARD_DEVIATION_TABLE: Lazy<Vec<(ConcreteGrade, f64)>> = Lazy::new(|| {
    ConcreteGrade::ALL
        .iter()
        .map(|grade| (*grade, grade.standard_deviation_mpa()))
        .collect()
});

impl ConcreteGrade {
    /// All grades for UI selection
    pub const ALL: [ConcreteGrade; 15] = [
        ConcreteGrade::M10,
        ConcreteGrade::M15,
        ConcreteGrade::M20,
        ConcreteGrade::M25,
        ConcreteGrade::M30,
        ConcreteGrade::M35,
        ConcreteGrade::M40,
        ConcreteGrade::M45,
        ConcreteGrade::M50,
        ConcreteGrade::M55,
        ConcreteGrade::M60,
        ConcreteGrade::M65,
        ConcreteGrade::M70,
        ConcreteGrade::M75,
        ConcreteGrade::M80,
    ];

    /// Designation label (e.g., "M25")
    pub fn label(&self) -> &'static str {
        match self {
            ConcreteGrade::M10 => "M10",
            ConcreteGrade::M15 => "M15",
            ConcreteGrade::M20 => "M20",
            ConcreteGrade::M25 => "M25",
            ConcreteGrade::M30 => "M30",
            ConcreteGrade::M35 => "M35",
            ConcreteGrade::M40 => "M40",
            ConcreteGrade::M45 => "M45",
            ConcreteGrade::M50 => "M50",
            ConcreteGrade::M55 => "M55",
            ConcreteGrade::M60 => "M60",
            ConcreteGrade::M65 => "M65",
            ConcreteGrade::M70 => "M70",
            ConcreteGrade::M75 => "M75",
            ConcreteGrade::M80 => "M80",
        }
    }

    /// Characteristic compressive strength implied by the designation (MPa)
    pub fn characteristic_strength_mpa(&self) -> f64 {
        match self {
            ConcreteGrade::M10 => 10.0,
            ConcreteGrade::M15 => 15.0,
            ConcreteGrade::M20 => 20.0,
            ConcreteGrade::M25 => 25.0,
            ConcreteGrade::M30 => 30.0,
            ConcreteGrade::M35 => 35.0,
            ConcreteGrade::M40 => 40.0,
            ConcreteGrade::M45 => 45.0,
            ConcreteGrade::M50 => 50.0,
            ConcreteGrade::M55 => 55.0,
            ConcreteGrade::M60 => 60.0,
            ConcreteGrade::M65 => 65.0,
            ConcreteGrade::M70 => 70.0,
            ConcreteGrade::M75 => 75.0,
            ConcreteGrade::M80 => 80.0,
        }
    }

    /// Assumed standard deviation s (MPa), IS 10262:2019 Table 2
    pub fn standard_deviation_mpa(&self) -> f64 {
        match self {
            ConcreteGrade::M10 | ConcreteGrade::M15 => 3.5,
            ConcreteGrade::M20 | ConcreteGrade::M25 => 4.0,
            ConcreteGrade::M30
            | ConcreteGrade::M35
            | ConcreteGrade::M40
            | ConcreteGrade::M45
            | ConcreteGrade::M50
            | ConcreteGrade::M55
            | ConcreteGrade::M60
            | ConcreteGrade::M65
            | ConcreteGrade::M70
            | ConcreteGrade::M75
            | ConcreteGrade::M80 => 5.0,
        }
    }

    /// Parse from common string representations ("M25", "m25", "M-25", "M 25")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        GRADE_INDEX
            .get(&normalize_label(s))
            .copied()
            .ok_or_else(|| CalcError::unknown_label("concrete grade", s))
    }
}

/// The full standard deviation table, ordered by grade.
pub fn standard_deviation_table() -> &'static [(ConcreteGrade, f64)] {
    &STANDARD_DEVIATION_TABLE
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ConcreteGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}
