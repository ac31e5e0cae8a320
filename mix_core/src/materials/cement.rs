//! Cement types

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::normalize_label;

/// Cement type used in the mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CementType {
    /// Ordinary Portland cement, 33 grade (IS 269)
    #[serde(rename = "OPC 33")]
    Opc33,
    /// Ordinary Portland cement, 43 grade (IS 269)
    #[serde(rename = "OPC 43")]
    Opc43,
    /// Ordinary Portland cement, 53 grade (IS 269)
    #[serde(rename = "OPC 53")]
    Opc53,
    /// Portland pozzolana cement (IS 1489)
    #[serde(rename = "PPC")]
    Ppc,
    /// Portland slag cement (IS 455)
    #[serde(rename = "PSC")]
    Psc,
}

impl CementType {
    pub const ALL: [CementType; 5] = [
        CementType::Opc33,
        CementType::Opc43,
        CementType::Opc53,
        CementType::Ppc,
        CementType::Psc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CementType::Opc33 => "OPC 33",
            CementType::Opc43 => "OPC 43",
            CementType::Opc53 => "OPC 53",
            CementType::Ppc => "PPC",
            CementType::Psc => "PSC",
        }
    }

    /// Parse "OPC 53", "opc-53", "OPC53 grade", "ppc"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = normalize_label(s);
        let normalized = normalized.trim_end_matches("GRADE");
        match normalized {
            "OPC33" => Ok(CementType::Opc33),
            "OPC43" => Ok(CementType::Opc43),
            "OPC53" => Ok(CementType::Opc53),
            "PPC" => Ok(CementType::Ppc),
            "PSC" => Ok(CementType::Psc),
            _ => Err(CalcError::unknown_label("cement type", s)),
        }
    }
}

impl std::fmt::Display for CementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for CementType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}
