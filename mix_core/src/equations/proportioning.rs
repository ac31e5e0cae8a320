//! # Mix Proportioning Formulas
//!
//! Fundamental equations of the IS 10262 absolute-volume method, one per
//! proportioning stage. All quantities are per cubic metre of concrete.
//!
//! ## Notation
//!
//! - `fck` = Characteristic compressive strength (MPa)
//! - `f'ck` = Target mean strength (MPa)
//! - `s` = Standard deviation (MPa)
//! - `W` = Water content (kg/m³)
//! - `C` = Cement content (kg/m³)
//! - `w/c` = Water-cement ratio
//! - `V` = Absolute volume (m³)
//! - `SG` = Specific gravity
//!
//! ## References
//!
//! - IS 10262:2019 Concrete Mix Proportioning - Guidelines
//! - IS 456:2000 Plain and Reinforced Concrete - Code of Practice

use crate::units::WATER_DENSITY_KG_M3;

/// Standard normal deviate for 5% of results falling below fck
pub const TOLERANCE_FACTOR: f64 = 1.65;

/// Maximum water content for 20 mm aggregate at 50 mm slump (kg/m³)
pub const BASE_WATER_CONTENT_KG_M3: f64 = 186.0;

/// Slump the base water content is calibrated for (mm)
pub const REFERENCE_SLUMP_MM: f64 = 50.0;

/// Slump step for the water correction (mm)
pub const SLUMP_STEP_MM: f64 = 25.0;

/// Fractional water increase per slump step
pub const WATER_INCREASE_PER_STEP: f64 = 0.03;

/// Volume of coarse aggregate per unit volume of total aggregate.
///
/// Fixed regardless of aggregate size and fine aggregate zone.
pub const COARSE_AGGREGATE_VOLUME_FRACTION: f64 = 0.62;

// =============================================================================
// TARGET STRENGTH
// =============================================================================

/// Target mean strength for mix proportioning
///
/// # Formula (IS 10262:2019 Clause 4.2)
/// - f'ck = fck + 1.65 s
#[inline]
pub fn target_mean_strength(fck: f64, standard_deviation: f64) -> f64 {
    fck + TOLERANCE_FACTOR * standard_deviation
}

// =============================================================================
// WATER AND CEMENT
// =============================================================================

/// Additional water for slump above the 50 mm reference
///
/// # Formula (IS 10262:2019 Clause 5.3)
/// - ΔW = ((slump - 50) / 25) × 0.03 × W_base    for slump > 50
/// - ΔW = 0                                       otherwise
///
/// Lower slumps do not reduce the water content below the base value.
#[inline]
pub fn slump_water_correction(slump_mm: f64, base_water_kg: f64) -> f64 {
    if slump_mm > REFERENCE_SLUMP_MM {
        ((slump_mm - REFERENCE_SLUMP_MM) / SLUMP_STEP_MM) * WATER_INCREASE_PER_STEP * base_water_kg
    } else {
        0.0
    }
}

/// Cement content from water content and water-cement ratio
///
/// # Formula
/// - C = W / (w/c)
#[inline]
pub fn cement_content(water_kg: f64, water_cement_ratio: f64) -> f64 {
    water_kg / water_cement_ratio
}

// =============================================================================
// ABSOLUTE VOLUMES
// =============================================================================

/// Absolute volume of a material from its mass
///
/// # Formula
/// - V = M / (SG × 1000)
#[inline]
pub fn absolute_volume(mass_kg: f64, specific_gravity: f64) -> f64 {
    mass_kg / (specific_gravity * WATER_DENSITY_KG_M3)
}

/// Absolute volume allowance for a chemical admixture
///
/// One litre-equivalent of admixture is assumed whatever the dosage:
/// - V = 1 / (SG × 1000) when an admixture is used, 0 otherwise
#[inline]
pub fn admixture_volume(admixture_sg: Option<f64>) -> f64 {
    match admixture_sg {
        Some(sg) => 1.0 / (sg * WATER_DENSITY_KG_M3),
        None => 0.0,
    }
}

/// Volume left for aggregates in one cubic metre of concrete
///
/// # Formula
/// - V_agg = 1 - (V_c + V_w + V_adm)
#[inline]
pub fn total_aggregate_volume(cement_volume: f64, water_volume: f64, admixture_volume: f64) -> f64 {
    1.0 - (cement_volume + water_volume + admixture_volume)
}

/// Split total aggregate volume into coarse and fine parts
///
/// # Formulas
/// - V_ca = P_ca × V_agg
/// - V_fa = V_agg - V_ca
///
/// # Returns
/// (V_ca, V_fa)
#[inline]
pub fn split_aggregate_volume(total_volume: f64, coarse_fraction: f64) -> (f64, f64) {
    let coarse = coarse_fraction * total_volume;
    let fine = total_volume - coarse;
    (coarse, fine)
}

/// Mass of material occupying an absolute volume
///
/// # Formula
/// - M = V × SG × 1000
#[inline]
pub fn mass_from_volume(volume: f64, specific_gravity: f64) -> f64 {
    volume * specific_gravity * WATER_DENSITY_KG_M3
}
