//! # mix_core - Concrete Mix Design Engine
//!
//! `mix_core` proportions concrete mixes by the IS 10262 absolute-volume
//! method. All inputs and outputs are JSON-serializable, and every result
//! carries a step-by-step trace of the arithmetic with the actual numbers
//! substituted.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Fixed Tables**: Standard deviation and water-cement ratio tables are
//!   read-only statics shared by every calculation
//!
//! ## Quick Start
//!
//! ```rust
//! use mix_core::calculations::{calculate, MixDesignForm, MixDesignInput};
//!
//! let form = MixDesignForm {
//!     grade: Some("M25".into()),
//!     strength_mpa: Some(25.0),
//!     exposure: Some("moderate".into()),
//!     slump_mm: Some(50.0),
//!     max_aggregate_size_mm: Some(20.0),
//!     fine_aggregate_zone: Some("Zone II".into()),
//!     cement_type: Some("OPC 53".into()),
//!     cement_sg: Some(3.15),
//!     water_sg: Some(1.0),
//!     coarse_aggregate_sg: Some(2.7),
//!     fine_aggregate_sg: Some(2.6),
//!     admixture_sg: None,
//! };
//!
//! let input = MixDesignInput::try_from(form).unwrap();
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.proportions.water_kg_m3, 186.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Mix design input, result and calculation
//! - [`equations`] - Proportioning formulas and their code references
//! - [`materials`] - Grades, exposure conditions and their constant tables
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalculationStep, MixDesignForm, MixDesignInput, MixDesignResult, MixProportions};
pub use errors::{CalcError, CalcResult};
pub use materials::{CementType, ConcreteGrade, ExposureCondition, FineAggregateZone};
