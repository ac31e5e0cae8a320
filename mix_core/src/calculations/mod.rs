//! # Mix Design Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`mix_design`] - Absolute-volume mix proportioning per IS 10262
//!
//! [`trace`] holds the step-by-step report records shared by calculations.

pub mod mix_design;
pub mod trace;

// Re-export commonly used types
pub use mix_design::{
    calculate, DesignIntermediates, MassRatio, MixDesignForm, MixDesignInput, MixDesignResult,
    MixProportions,
};
pub use trace::{fmt_mass, fmt_number, fmt_volume, to_fixed, CalculationStep, StepTrace, StepValue};
