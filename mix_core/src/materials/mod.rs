//! # Materials and Design Classes
//!
//! Enumerated design classes and the constant tables attached to them.
//!
//! ## Classes
//!
//! - **Concrete grade** ([`ConcreteGrade`]): M10 … M80, with the assumed
//!   standard deviation of IS 10262:2019 Table 2
//! - **Exposure condition** ([`ExposureCondition`]): mild … extreme, with the
//!   maximum water-cement ratio used for each
//! - **Fine aggregate zone** ([`FineAggregateZone`]): grading Zone I … IV
//! - **Cement type** ([`CementType`]): OPC 33/43/53, PPC, PSC
//!
//! Zone and cement type are recorded with a design but do not enter the
//! current formula set.
//!
//! ## Example
//!
//! ```rust
//! use mix_core::materials::{ConcreteGrade, ExposureCondition};
//!
//! let grade = ConcreteGrade::from_str_flexible("m 25").unwrap();
//! assert_eq!(grade, ConcreteGrade::M25);
//! assert_eq!(grade.standard_deviation_mpa(), 4.0);
//!
//! let exposure = ExposureCondition::from_str_flexible("very-severe").unwrap();
//! assert_eq!(exposure.max_water_cement_ratio(), 0.40);
//! ```

pub mod aggregate;
pub mod cement;
pub mod exposure;
pub mod grade;

pub use aggregate::FineAggregateZone;
pub use cement::CementType;
pub use exposure::{water_cement_ratio_table, ExposureCondition};
pub use grade::{standard_deviation_table, ConcreteGrade};

/// Normalize a user-supplied label for table lookup.
///
/// Upper-cases and strips whitespace, `-`, `_` and `.` so that
/// "very severe", "Very-Severe" and "VERY_SEVERE" all compare equal.
pub(crate) fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '_' | '.'))
        .flat_map(char::to_uppercase)
        .collect()
}
