//! # Mix Proportioning Equations
//!
//! All formulas used by the mix design live here, in one place, so they can be
//! checked against IS 10262 / IS 456 without reading the calculation flow.
//!
//! ## Modules
//!
//! - [`proportioning`] - Pure formulas and the fixed constants they use
//! - [`registry`] - Equation metadata and code references for reports
//!
//! ## Unit Conventions
//!
//! - **Mass**: kg per cubic metre of concrete
//! - **Volume**: m³ per cubic metre of concrete (absolute volume)
//! - **Density**: specific gravity × 1000 kg/m³

pub mod proportioning;
pub mod registry;

pub use proportioning::{
    absolute_volume,
    admixture_volume,
    cement_content,
    mass_from_volume,
    slump_water_correction,
    split_aggregate_volume,
    target_mean_strength,
    total_aggregate_volume,
    BASE_WATER_CONTENT_KG_M3,
    COARSE_AGGREGATE_VOLUME_FRACTION,
    TOLERANCE_FACTOR,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
