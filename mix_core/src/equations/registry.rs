//! # Equation Registry
//!
//! Central registry of the mix proportioning equations. Each equation carries
//! its code reference, plain-text formula and variable definitions, so a
//! calculation step can cite exactly what it applied.
//!
//! ## Usage
//!
//! ```rust
//! use mix_core::equations::registry::Equation;
//!
//! let meta = Equation::TargetMeanStrength.metadata();
//! assert_eq!(meta.formula_plain, "f'ck = fck + 1.65 s");
//! println!("Reference: {}", meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a concrete design standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// IS 10262 - Concrete Mix Proportioning, Guidelines
    IS10262 {
        year: u16,
        clause: &'static str,
    },
    /// IS 456 - Plain and Reinforced Concrete, Code of Practice
    IS456 {
        year: u16,
        clause: &'static str,
    },
    /// Basic absolute-volume relations (no specific clause)
    AbsoluteVolume,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::IS10262 { year, clause } => format!("IS 10262:{} {}", year, clause),
            CodeReference::IS456 { year, clause } => format!("IS 456:{} {}", year, clause),
            CodeReference::AbsoluteVolume => "Absolute volume method".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::IS10262 { .. } => "IS 10262",
            CodeReference::IS456 { .. } => "IS 456",
            CodeReference::AbsoluteVolume => "Abs. volume",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    /// Symbol (e.g., "fck", "W", "V_c")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "MPa", "kg/m³")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a proportioning equation.
#[derive(Debug, Clone, Serialize)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Target Mean Strength")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// The equations applied by the mix design, in stage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// f'ck = fck + 1.65 s
    TargetMeanStrength,
    /// w/c from exposure table
    WaterCementRatio,
    /// W = 186 + ΔW(slump)
    WaterContent,
    /// C = W / (w/c)
    CementContent,
    /// V_agg = 1 - (V_c + V_w + V_adm)
    AggregateVolume,
    /// V_ca = 0.62 V_agg, V_fa = V_agg - V_ca
    CoarseFineSplit,
    /// M = V × SG × 1000
    VolumeToMass,
}

/// Every registered equation, in stage order.
pub const ALL_EQUATIONS: [Equation; 7] = [
    Equation::TargetMeanStrength,
    Equation::WaterCementRatio,
    Equation::WaterContent,
    Equation::CementContent,
    Equation::AggregateVolume,
    Equation::CoarseFineSplit,
    Equation::VolumeToMass,
];

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::TargetMeanStrength => EquationMetadata {
                name: "Target Mean Strength",
                description: "Strength the mix is proportioned for, so that no more than 5% of results fall below fck",
                formula_plain: "f'ck = fck + 1.65 s",
                reference: CodeReference::IS10262 { year: 2019, clause: "Cl. 4.2, Table 2" },
                variables: vec![
                    Variable::new("f'ck", "Target mean compressive strength at 28 days", "MPa"),
                    Variable::new("fck", "Characteristic compressive strength at 28 days", "MPa"),
                    Variable::new("s", "Assumed standard deviation for the grade", "MPa"),
                ],
                assumptions: vec!["No site control data; s taken from Table 2"],
                source_function: "target_mean_strength",
            },

            Equation::WaterCementRatio => EquationMetadata {
                name: "Water-Cement Ratio",
                description: "Maximum free water-cement ratio for the exposure condition",
                formula_plain: "w/c = table(exposure)",
                reference: CodeReference::IS456 { year: 2000, clause: "Table 3" },
                variables: vec![Variable::new("w/c", "Free water-cement ratio", "-")],
                assumptions: vec!["Durability limit governs; strength-based w/c curve not applied"],
                source_function: "ExposureCondition::max_water_cement_ratio",
            },

            Equation::WaterContent => EquationMetadata {
                name: "Water Content",
                description: "Base water content adjusted for slump above 50 mm",
                formula_plain: "W = 186 + ((slump - 50) / 25) x 0.03 x 186, for slump > 50",
                reference: CodeReference::IS10262 { year: 2019, clause: "Cl. 5.3, Table 4" },
                variables: vec![
                    Variable::new("W", "Water content", "kg/m³"),
                    Variable::new("slump", "Required slump", "mm"),
                ],
                assumptions: vec![
                    "Base value for 20 mm angular aggregate at 50 mm slump",
                    "No reduction for slump below 50 mm",
                    "No correction for other aggregate sizes",
                ],
                source_function: "slump_water_correction",
            },

            Equation::CementContent => EquationMetadata {
                name: "Cement Content",
                description: "Cement content from water content and water-cement ratio",
                formula_plain: "C = W / (w/c)",
                reference: CodeReference::IS10262 { year: 2019, clause: "Cl. 5.4" },
                variables: vec![
                    Variable::new("C", "Cement content", "kg/m³"),
                    Variable::new("W", "Water content", "kg/m³"),
                    Variable::new("w/c", "Water-cement ratio", "-"),
                ],
                assumptions: vec!["Minimum cement content of IS 456 Table 5 not enforced"],
                source_function: "cement_content",
            },

            Equation::AggregateVolume => EquationMetadata {
                name: "Total Aggregate Volume",
                description: "Volume left for aggregates after cement, water and admixture",
                formula_plain: "V_agg = 1 - (C / (SG_c x 1000) + W / (SG_w x 1000) + 1 / (SG_adm x 1000))",
                reference: CodeReference::IS10262 { year: 2019, clause: "Cl. 5.6" },
                variables: vec![
                    Variable::new("V_agg", "Absolute volume of all aggregate", "m³"),
                    Variable::new("SG_c", "Specific gravity of cement", "-"),
                    Variable::new("SG_w", "Specific gravity of water", "-"),
                    Variable::new("SG_adm", "Specific gravity of admixture", "-"),
                ],
                assumptions: vec![
                    "Entrapped air neglected",
                    "Admixture taken as one litre-equivalent regardless of dosage",
                ],
                source_function: "total_aggregate_volume",
            },

            Equation::CoarseFineSplit => EquationMetadata {
                name: "Coarse and Fine Aggregate Volume",
                description: "Division of total aggregate volume into coarse and fine fractions",
                formula_plain: "V_ca = 0.62 x V_agg, V_fa = V_agg - V_ca",
                reference: CodeReference::IS10262 { year: 2019, clause: "Cl. 5.5, Table 5" },
                variables: vec![
                    Variable::new("V_ca", "Absolute volume of coarse aggregate", "m³"),
                    Variable::new("V_fa", "Absolute volume of fine aggregate", "m³"),
                ],
                assumptions: vec!["Coarse fraction fixed at 0.62 for every aggregate size and zone"],
                source_function: "split_aggregate_volume",
            },

            Equation::VolumeToMass => EquationMetadata {
                name: "Aggregate Mass",
                description: "Mass of aggregate from its absolute volume",
                formula_plain: "M = V x SG x 1000",
                reference: CodeReference::AbsoluteVolume,
                variables: vec![
                    Variable::new("M", "Aggregate mass", "kg/m³"),
                    Variable::new("V", "Absolute volume", "m³"),
                    Variable::new("SG", "Specific gravity (SSD)", "-"),
                ],
                assumptions: vec!["Aggregates in saturated surface-dry condition"],
                source_function: "mass_from_volume",
            },
        }
    }
}

/// Generate a markdown reference of every equation.
///
/// # Example
///
/// ```rust
/// use mix_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("## Target Mean Strength"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str("# Mix Design Equations Reference\n\n");
    output.push_str("> Auto-generated from the equation registry. Do not edit manually.\n\n");
    output.push_str("All quantities are per cubic metre of fresh concrete.\n\n---\n\n");

    for equation in ALL_EQUATIONS {
        let meta = equation.metadata();

        output.push_str(&format!("## {}\n\n", meta.name));
        output.push_str(&format!("{}\n\n", meta.description));
        output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));
        output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));

        if !meta.variables.is_empty() {
            output.push_str("| Symbol | Description | Units |\n");
            output.push_str("|--------|-------------|-------|\n");
            for var in &meta.variables {
                output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
            }
            output.push('\n');
        }

        if !meta.assumptions.is_empty() {
            output.push_str("**Assumptions:**\n\n");
            for assumption in &meta.assumptions {
                output.push_str(&format!("- {}\n", assumption));
            }
            output.push('\n');
        }

        output.push_str(&format!("*Implemented in `{}`*\n\n", meta.source_function));
    }

    output
}
