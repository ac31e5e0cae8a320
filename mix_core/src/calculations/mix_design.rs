//! # Concrete Mix Design (IS 10262)
//!
//! Proportions one cubic metre of concrete by the absolute-volume method in
//! seven fixed stages:
//!
//! 1. Target mean strength, f'ck = fck + 1.65 s
//! 2. Water-cement ratio from the exposure condition
//! 3. Water content, 186 kg/m³ plus 3% per 25 mm of slump above 50 mm
//! 4. Cement content, W / (w/c)
//! 5. Volume left for aggregates after cement, water and admixture
//! 6. Coarse/fine split at a fixed coarse fraction of 0.62
//! 7. Aggregate volumes converted to masses
//!
//! ## Assumptions
//!
//! - Base water content is for 20 mm aggregate; the aggregate size is recorded
//!   but does not correct the water content
//! - Slump below 50 mm does not reduce water content
//! - Minimum cement content is not enforced
//! - Fine aggregate zone and cement type do not enter the formulas
//!
//! ## Example
//!
//! ```rust
//! use mix_core::calculations::mix_design::{calculate, MixDesignInput};
//! use mix_core::materials::{CementType, ConcreteGrade, ExposureCondition, FineAggregateZone};
//!
//! let input = MixDesignInput {
//!     grade: ConcreteGrade::M25,
//!     strength_mpa: 25.0,
//!     exposure: ExposureCondition::Moderate,
//!     slump_mm: 100.0,
//!     max_aggregate_size_mm: 20.0,
//!     fine_aggregate_zone: FineAggregateZone::ZoneII,
//!     cement_type: CementType::Opc53,
//!     cement_sg: 3.15,
//!     water_sg: 1.0,
//!     coarse_aggregate_sg: 2.7,
//!     fine_aggregate_sg: 2.6,
//!     admixture_sg: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("Cement: {:.2} kg/m³", result.proportions.cement_kg_m3);
//! println!("Water:  {:.2} kg/m³", result.proportions.water_kg_m3);
//! for step in result.steps() {
//!     println!("{}", step);
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculations::trace::{fmt_mass, fmt_number, fmt_volume, CalculationStep, StepTrace, StepValue};
use crate::equations::proportioning::{
    admixture_volume, cement_content, slump_water_correction, split_aggregate_volume,
    target_mean_strength, total_aggregate_volume, BASE_WATER_CONTENT_KG_M3,
    COARSE_AGGREGATE_VOLUME_FRACTION, TOLERANCE_FACTOR,
};
use crate::equations::registry::{Equation, ALL_EQUATIONS};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::materials::{CementType, ConcreteGrade, ExposureCondition, FineAggregateZone};
use crate::units::{CubicMeters, KgPerM3, SpecificGravity};

// ============================================================================
// Input
// ============================================================================

/// Validated design parameters for one mix.
///
/// ## JSON Example
///
/// ```json
/// {
///   "grade": "M25",
///   "strength_mpa": 25.0,
///   "exposure": "moderate",
///   "slump_mm": 75.0,
///   "max_aggregate_size_mm": 20.0,
///   "fine_aggregate_zone": "Zone II",
///   "cement_type": "OPC 53",
///   "cement_sg": 3.15,
///   "water_sg": 1.0,
///   "coarse_aggregate_sg": 2.7,
///   "fine_aggregate_sg": 2.6,
///   "admixture_sg": 1.145
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixDesignInput {
    /// Concrete grade (selects the standard deviation)
    pub grade: ConcreteGrade,

    /// Characteristic compressive strength fck (MPa)
    pub strength_mpa: f64,

    /// Exposure condition (selects the water-cement ratio)
    pub exposure: ExposureCondition,

    /// Required slump (mm)
    pub slump_mm: f64,

    /// Nominal maximum size of coarse aggregate (mm), for the record only
    pub max_aggregate_size_mm: f64,

    /// Grading zone of the fine aggregate, for the record only
    pub fine_aggregate_zone: FineAggregateZone,

    /// Cement type, for the record only
    pub cement_type: CementType,

    /// Specific gravity of cement
    pub cement_sg: f64,

    /// Specific gravity of water
    pub water_sg: f64,

    /// Specific gravity of coarse aggregate (SSD)
    pub coarse_aggregate_sg: f64,

    /// Specific gravity of fine aggregate (SSD)
    pub fine_aggregate_sg: f64,

    /// Specific gravity of chemical admixture, if one is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admixture_sg: Option<f64>,
}

impl MixDesignInput {
    /// Validate input parameters.
    ///
    /// Every numeric field must be a finite positive real, including the
    /// admixture specific gravity when one is supplied.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("strength_mpa", self.strength_mpa)?;
        require_positive("slump_mm", self.slump_mm)?;
        require_positive("max_aggregate_size_mm", self.max_aggregate_size_mm)?;
        require_positive("cement_sg", self.cement_sg)?;
        require_positive("water_sg", self.water_sg)?;
        require_positive("coarse_aggregate_sg", self.coarse_aggregate_sg)?;
        require_positive("fine_aggregate_sg", self.fine_aggregate_sg)?;
        if let Some(sg) = self.admixture_sg {
            require_positive("admixture_sg", sg)?;
        }
        Ok(())
    }
}

/// Flat, untyped design parameters as a form or command line collects them.
///
/// Every field is optional so the record can be filled from several sources
/// (file, flags, configured defaults) before conversion. Converting to a
/// [`MixDesignInput`] reports the first missing or unrecognised field.
///
/// An admixture specific gravity of zero or NaN means "no admixture", as an
/// empty form field would.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixDesignForm {
    pub grade: Option<String>,
    pub strength_mpa: Option<f64>,
    pub exposure: Option<String>,
    pub slump_mm: Option<f64>,
    pub max_aggregate_size_mm: Option<f64>,
    pub fine_aggregate_zone: Option<String>,
    pub cement_type: Option<String>,
    pub cement_sg: Option<f64>,
    pub water_sg: Option<f64>,
    pub coarse_aggregate_sg: Option<f64>,
    pub fine_aggregate_sg: Option<f64>,
    pub admixture_sg: Option<f64>,
}

impl MixDesignForm {
    /// Fill every empty field from `fallback`.
    pub fn or(self, fallback: MixDesignForm) -> MixDesignForm {
        MixDesignForm {
            grade: self.grade.or(fallback.grade),
            strength_mpa: self.strength_mpa.or(fallback.strength_mpa),
            exposure: self.exposure.or(fallback.exposure),
            slump_mm: self.slump_mm.or(fallback.slump_mm),
            max_aggregate_size_mm: self.max_aggregate_size_mm.or(fallback.max_aggregate_size_mm),
            fine_aggregate_zone: self.fine_aggregate_zone.or(fallback.fine_aggregate_zone),
            cement_type: self.cement_type.or(fallback.cement_type),
            cement_sg: self.cement_sg.or(fallback.cement_sg),
            water_sg: self.water_sg.or(fallback.water_sg),
            coarse_aggregate_sg: self.coarse_aggregate_sg.or(fallback.coarse_aggregate_sg),
            fine_aggregate_sg: self.fine_aggregate_sg.or(fallback.fine_aggregate_sg),
            admixture_sg: self.admixture_sg.or(fallback.admixture_sg),
        }
    }
}

fn required<T>(field: &str, value: Option<T>) -> CalcResult<T> {
    value.ok_or_else(|| CalcError::missing_field(field))
}

impl TryFrom<MixDesignForm> for MixDesignInput {
    type Error = CalcError;

    fn try_from(form: MixDesignForm) -> CalcResult<Self> {
        let grade = ConcreteGrade::from_str_flexible(&required("grade", form.grade)?)?;
        let exposure = ExposureCondition::from_str_flexible(&required("exposure", form.exposure)?)?;
        let fine_aggregate_zone =
            FineAggregateZone::from_str_flexible(&required("fine_aggregate_zone", form.fine_aggregate_zone)?)?;
        let cement_type = CementType::from_str_flexible(&required("cement_type", form.cement_type)?)?;

        let input = MixDesignInput {
            grade,
            strength_mpa: required("strength_mpa", form.strength_mpa)?,
            exposure,
            slump_mm: required("slump_mm", form.slump_mm)?,
            max_aggregate_size_mm: required("max_aggregate_size_mm", form.max_aggregate_size_mm)?,
            fine_aggregate_zone,
            cement_type,
            cement_sg: required("cement_sg", form.cement_sg)?,
            water_sg: required("water_sg", form.water_sg)?,
            coarse_aggregate_sg: required("coarse_aggregate_sg", form.coarse_aggregate_sg)?,
            fine_aggregate_sg: required("fine_aggregate_sg", form.fine_aggregate_sg)?,
            admixture_sg: form.admixture_sg.filter(|sg| !sg.is_nan() && *sg != 0.0),
        };
        input.validate()?;
        Ok(input)
    }
}

// ============================================================================
// Results
// ============================================================================

/// Final quantities per cubic metre of concrete.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cement_kg_m3": 372.0,
///   "water_kg_m3": 186.0,
///   "coarse_aggregate_kg_m3": 1164.94,
///   "fine_aggregate_kg_m3": 687.55
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixProportions {
    pub cement_kg_m3: f64,
    pub water_kg_m3: f64,
    pub coarse_aggregate_kg_m3: f64,
    pub fine_aggregate_kg_m3: f64,
}

impl MixProportions {
    /// Proportions by mass relative to cement (cement : fine : coarse)
    pub fn ratio_by_mass(&self) -> MassRatio {
        MassRatio {
            fine_aggregate: self.fine_aggregate_kg_m3 / self.cement_kg_m3,
            coarse_aggregate: self.coarse_aggregate_kg_m3 / self.cement_kg_m3,
            water_cement: self.water_kg_m3 / self.cement_kg_m3,
        }
    }
}

/// Mix ratio by mass with cement = 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassRatio {
    pub fine_aggregate: f64,
    pub coarse_aggregate: f64,
    pub water_cement: f64,
}

impl fmt::Display for MassRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "1 : {} : {} (w/c {})",
            fmt_mass(self.fine_aggregate),
            fmt_mass(self.coarse_aggregate),
            fmt_mass(self.water_cement)
        )
    }
}

/// Every intermediate value of the seven stages, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignIntermediates {
    pub standard_deviation_mpa: f64,
    pub target_mean_strength_mpa: f64,
    pub water_cement_ratio: f64,
    pub base_water_content_kg_m3: f64,
    pub additional_water_kg_m3: f64,
    pub cement_volume_m3: f64,
    pub water_volume_m3: f64,
    pub admixture_volume_m3: f64,
    pub total_aggregate_volume_m3: f64,
    pub coarse_aggregate_fraction: f64,
    pub coarse_aggregate_volume_m3: f64,
    pub fine_aggregate_volume_m3: f64,
}

/// Results from a mix design.
///
/// The numeric summary ([`MixProportions`]) and the step narrative are
/// independent: callers may use either or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixDesignResult {
    /// Cement, water, coarse and fine aggregate (kg/m³)
    pub proportions: MixProportions,
    /// Intermediate values of every stage
    pub intermediates: DesignIntermediates,
    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,
}

impl MixDesignResult {
    /// The four final quantities
    pub fn proportions(&self) -> &MixProportions {
        &self.proportions
    }

    /// The calculation steps, in order
    pub fn steps(&self) -> &[CalculationStep] {
        &self.steps
    }

    /// All steps rendered as text, separated by blank lines
    pub fn narrative(&self) -> String {
        self.steps
            .iter()
            .map(|step| step.to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// Calculate a mix design.
///
/// Input is validated in full before any stage runs; on error no steps are
/// produced.
///
/// # Arguments
///
/// * `input` - Design parameters
///
/// # Returns
///
/// * `Ok(MixDesignResult)` - Quantities, intermediates and step trace
/// * `Err(CalcError)` - If any numeric input is not a finite positive real
pub fn calculate(input: &MixDesignInput) -> CalcResult<MixDesignResult> {
    input.validate()?;

    let mut trace = StepTrace::new();

    // Stage 1: target mean strength
    let standard_deviation = input.grade.standard_deviation_mpa();
    let target_mean = target_mean_strength(input.strength_mpa, standard_deviation);
    trace.record(
        Equation::TargetMeanStrength,
        "Calculate the target mean strength",
        vec![format!(
            "Target Mean Strength = {} + {} * {} = {} MPa",
            fmt_number(input.strength_mpa),
            fmt_number(TOLERANCE_FACTOR),
            fmt_number(standard_deviation),
            fmt_mass(target_mean)
        )],
        vec![
            StepValue::new("standard_deviation", standard_deviation, "MPa"),
            StepValue::new("target_mean_strength", target_mean, "MPa"),
        ],
    );
    debug!(grade = %input.grade, standard_deviation, target_mean, "target mean strength");

    // Stage 2: water-cement ratio
    let water_cement_ratio = input.exposure.max_water_cement_ratio();
    trace.record(
        Equation::WaterCementRatio,
        "Select water-cement ratio based on exposure conditions",
        vec![format!(
            "Water-Cement Ratio for {} exposure = {}",
            input.exposure,
            fmt_number(water_cement_ratio)
        )],
        vec![StepValue::new("water_cement_ratio", water_cement_ratio, "")],
    );
    debug!(exposure = %input.exposure, water_cement_ratio, "water-cement ratio");

    // Stage 3: water content
    let base_water = BASE_WATER_CONTENT_KG_M3;
    let additional_water = slump_water_correction(input.slump_mm, base_water);
    let water = base_water + additional_water;
    trace.record(
        Equation::WaterContent,
        "Determine water content and adjust for slump value",
        vec![
            format!("Base Water Content = {} kg/m³", fmt_number(base_water)),
            format!(
                "Additional Water Content for {} mm slump = {} kg/m³",
                fmt_number(input.slump_mm),
                fmt_mass(additional_water)
            ),
            format!("Total Water Content = {} kg/m³", fmt_mass(water)),
        ],
        vec![
            StepValue::new("base_water_content", base_water, "kg/m³"),
            StepValue::new("additional_water_content", additional_water, "kg/m³"),
            StepValue::new("water_content", water, "kg/m³"),
        ],
    );
    debug!(slump_mm = input.slump_mm, additional_water, water, "water content");

    // Stage 4: cement content
    let cement = cement_content(water, water_cement_ratio);
    trace.record(
        Equation::CementContent,
        "Calculate cement content",
        vec![format!(
            "Cement Content = {} / {} = {} kg/m³",
            fmt_mass(water),
            fmt_number(water_cement_ratio),
            fmt_mass(cement)
        )],
        vec![StepValue::new("cement_content", cement, "kg/m³")],
    );
    debug!(cement, "cement content");

    // Stage 5: volume available for aggregates
    let cement_volume = KgPerM3(cement).absolute_volume(SpecificGravity(input.cement_sg)).0;
    let water_volume = KgPerM3(water).absolute_volume(SpecificGravity(input.water_sg)).0;
    let admixture_vol = admixture_volume(input.admixture_sg);
    let aggregate_volume = total_aggregate_volume(cement_volume, water_volume, admixture_vol);
    trace.record(
        Equation::AggregateVolume,
        "Calculate the volume of all aggregates",
        vec![
            format!(
                "Volume of Cement = {} / ({} * 1000) = {} m³",
                fmt_mass(cement),
                fmt_number(input.cement_sg),
                fmt_volume(cement_volume)
            ),
            format!(
                "Volume of Water = {} / ({} * 1000) = {} m³",
                fmt_mass(water),
                fmt_number(input.water_sg),
                fmt_volume(water_volume)
            ),
            format!("Volume of Admixture = {} m³", fmt_volume(admixture_vol)),
            format!(
                "Total Volume of Aggregates = 1 - ({} + {} + {}) = {} m³",
                fmt_volume(cement_volume),
                fmt_volume(water_volume),
                fmt_volume(admixture_vol),
                fmt_volume(aggregate_volume)
            ),
        ],
        vec![
            StepValue::new("cement_volume", cement_volume, "m³"),
            StepValue::new("water_volume", water_volume, "m³"),
            StepValue::new("admixture_volume", admixture_vol, "m³"),
            StepValue::new("total_aggregate_volume", aggregate_volume, "m³"),
        ],
    );
    debug!(cement_volume, water_volume, admixture_vol, aggregate_volume, "aggregate volume");

    // Stage 6: coarse/fine split
    let coarse_fraction = COARSE_AGGREGATE_VOLUME_FRACTION;
    let (coarse_volume, fine_volume) = split_aggregate_volume(aggregate_volume, coarse_fraction);
    trace.record(
        Equation::CoarseFineSplit,
        "Calculate volume fraction of coarse and fine aggregates",
        vec![
            format!("Volume Fraction of Coarse Aggregate = {}", fmt_number(coarse_fraction)),
            format!(
                "Volume of Coarse Aggregate = {} * {} = {} m³",
                fmt_number(coarse_fraction),
                fmt_volume(aggregate_volume),
                fmt_volume(coarse_volume)
            ),
            format!(
                "Volume of Fine Aggregate = {} - {} = {} m³",
                fmt_volume(aggregate_volume),
                fmt_volume(coarse_volume),
                fmt_volume(fine_volume)
            ),
        ],
        vec![
            StepValue::new("coarse_aggregate_fraction", coarse_fraction, ""),
            StepValue::new("coarse_aggregate_volume", coarse_volume, "m³"),
            StepValue::new("fine_aggregate_volume", fine_volume, "m³"),
        ],
    );
    debug!(coarse_volume, fine_volume, "coarse/fine split");

    // Stage 7: volumes to masses
    let coarse_mass = CubicMeters(coarse_volume).mass(SpecificGravity(input.coarse_aggregate_sg)).0;
    let fine_mass = CubicMeters(fine_volume).mass(SpecificGravity(input.fine_aggregate_sg)).0;
    trace.record(
        Equation::VolumeToMass,
        "Convert volumes to weights",
        vec![
            format!(
                "Weight of Coarse Aggregate = {} * {} * 1000 = {} kg/m³",
                fmt_volume(coarse_volume),
                fmt_number(input.coarse_aggregate_sg),
                fmt_mass(coarse_mass)
            ),
            format!(
                "Weight of Fine Aggregate = {} * {} * 1000 = {} kg/m³",
                fmt_volume(fine_volume),
                fmt_number(input.fine_aggregate_sg),
                fmt_mass(fine_mass)
            ),
        ],
        vec![
            StepValue::new("coarse_aggregate_weight", coarse_mass, "kg/m³"),
            StepValue::new("fine_aggregate_weight", fine_mass, "kg/m³"),
        ],
    );
    debug_assert_eq!(trace.len(), ALL_EQUATIONS.len(), "one step per equation");

    let proportions = MixProportions {
        cement_kg_m3: cement,
        water_kg_m3: water,
        coarse_aggregate_kg_m3: coarse_mass,
        fine_aggregate_kg_m3: fine_mass,
    };
    info!(
        grade = %input.grade,
        cement = proportions.cement_kg_m3,
        water = proportions.water_kg_m3,
        coarse = proportions.coarse_aggregate_kg_m3,
        fine = proportions.fine_aggregate_kg_m3,
        "mix design complete"
    );

    Ok(MixDesignResult {
        proportions,
        intermediates: DesignIntermediates {
            standard_deviation_mpa: standard_deviation,
            target_mean_strength_mpa: target_mean,
            water_cement_ratio,
            base_water_content_kg_m3: base_water,
            additional_water_kg_m3: additional_water,
            cement_volume_m3: cement_volume,
            water_volume_m3: water_volume,
            admixture_volume_m3: admixture_vol,
            total_aggregate_volume_m3: aggregate_volume,
            coarse_aggregate_fraction: coarse_fraction,
            coarse_aggregate_volume_m3: coarse_volume,
            fine_aggregate_volume_m3: fine_volume,
        },
        steps: trace.into_steps(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> MixDesignInput {
        MixDesignInput {
            grade: ConcreteGrade::M25,
            strength_mpa: 25.0,
            exposure: ExposureCondition::Moderate,
            slump_mm: 50.0,
            max_aggregate_size_mm: 20.0,
            fine_aggregate_zone: FineAggregateZone::ZoneII,
            cement_type: CementType::Opc53,
            cement_sg: 3.15,
            water_sg: 1.0,
            coarse_aggregate_sg: 2.7,
            fine_aggregate_sg: 2.6,
            admixture_sg: None,
        }
    }

    fn test_form() -> MixDesignForm {
        MixDesignForm {
            grade: Some("M25".to_string()),
            strength_mpa: Some(25.0),
            exposure: Some("moderate".to_string()),
            slump_mm: Some(50.0),
            max_aggregate_size_mm: Some(20.0),
            fine_aggregate_zone: Some("Zone II".to_string()),
            cement_type: Some("OPC 53".to_string()),
            cement_sg: Some(3.15),
            water_sg: Some(1.0),
            coarse_aggregate_sg: Some(2.7),
            fine_aggregate_sg: Some(2.6),
            admixture_sg: None,
        }
    }

    #[test]
    fn test_reference_mix() {
        let result = calculate(&test_input()).unwrap();
        let i = &result.intermediates;
        let p = &result.proportions;

        // f'ck = 25 + 1.65 × 4.0 = 31.6
        assert!((i.target_mean_strength_mpa - 31.6).abs() < 1e-9);
        assert_eq!(i.water_cement_ratio, 0.50);
        assert_eq!(p.water_kg_m3, 186.0);
        assert!((p.cement_kg_m3 - 372.0).abs() < 1e-9);

        // V_agg = 1 - (372/3150 + 0.186) = 0.695905
        assert!((i.total_aggregate_volume_m3 - 0.695_904_762).abs() < 1e-8);
        assert!((p.coarse_aggregate_kg_m3 - 1164.94).abs() < 0.01);
        assert!((p.fine_aggregate_kg_m3 - 687.55).abs() < 0.01);
    }

    #[test]
    fn test_seven_steps_in_order() {
        let result = calculate(&test_input()).unwrap();
        assert_eq!(result.steps().len(), 7);
        for (i, step) in result.steps().iter().enumerate() {
            assert_eq!(step.index, i + 1);
        }
        assert_eq!(result.steps()[0].equation, Equation::TargetMeanStrength);
        assert_eq!(result.steps()[6].equation, Equation::VolumeToMass);
    }

    #[test]
    fn test_step_text() {
        let result = calculate(&test_input()).unwrap();
        let steps = result.steps();

        assert_eq!(
            steps[0].to_string(),
            "Step 1: Calculate the target mean strength\n\
             Target Mean Strength = 25 + 1.65 * 4 = 31.60 MPa"
        );
        assert_eq!(
            steps[1].to_string(),
            "Step 2: Select water-cement ratio based on exposure conditions\n\
             Water-Cement Ratio for moderate exposure = 0.5"
        );
        assert_eq!(
            steps[2].lines,
            vec![
                "Base Water Content = 186 kg/m³".to_string(),
                "Additional Water Content for 50 mm slump = 0.00 kg/m³".to_string(),
                "Total Water Content = 186.00 kg/m³".to_string(),
            ]
        );
        assert_eq!(steps[3].lines[0], "Cement Content = 186.00 / 0.5 = 372.00 kg/m³");
        assert_eq!(steps[4].lines[0], "Volume of Cement = 372.00 / (3.15 * 1000) = 0.118095 m³");
        assert_eq!(steps[4].lines[2], "Volume of Admixture = 0.000000 m³");
        assert_eq!(
            steps[4].lines[3],
            "Total Volume of Aggregates = 1 - (0.118095 + 0.186000 + 0.000000) = 0.695905 m³"
        );
        assert_eq!(steps[5].lines[0], "Volume Fraction of Coarse Aggregate = 0.62");
        assert_eq!(
            steps[6].lines[0],
            "Weight of Coarse Aggregate = 0.431461 * 2.7 * 1000 = 1164.94 kg/m³"
        );
        assert_eq!(
            steps[6].lines[1],
            "Weight of Fine Aggregate = 0.264444 * 2.6 * 1000 = 687.55 kg/m³"
        );
    }

    #[test]
    fn test_step_values_match_intermediates() {
        let result = calculate(&test_input()).unwrap();
        let steps = result.steps();
        assert_eq!(
            steps[0].value("target_mean_strength"),
            Some(result.intermediates.target_mean_strength_mpa)
        );
        assert_eq!(steps[3].value("cement_content"), Some(result.proportions.cement_kg_m3));
        assert_eq!(
            steps[6].value("fine_aggregate_weight"),
            Some(result.proportions.fine_aggregate_kg_m3)
        );
    }

    #[test]
    fn test_slump_increase() {
        let mut input = test_input();
        input.slump_mm = 100.0;
        let result = calculate(&input).unwrap();
        assert!((result.intermediates.additional_water_kg_m3 - 11.16).abs() < 1e-9);
        assert!((result.proportions.water_kg_m3 - 197.16).abs() < 1e-9);
        assert_eq!(
            result.steps()[2].lines[1],
            "Additional Water Content for 100 mm slump = 11.16 kg/m³"
        );
    }

    #[test]
    fn test_admixture_reduces_aggregate_volume() {
        let plain = calculate(&test_input()).unwrap();
        let mut input = test_input();
        input.admixture_sg = Some(1.145);
        let with_admixture = calculate(&input).unwrap();

        let expected = 1.0 / (1.145 * 1000.0);
        assert_eq!(with_admixture.intermediates.admixture_volume_m3, expected);
        let drop = plain.intermediates.total_aggregate_volume_m3
            - with_admixture.intermediates.total_aggregate_volume_m3;
        assert!((drop - expected).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_numbers() {
        let mut input = test_input();
        input.slump_mm = 0.0;
        assert!(matches!(
            calculate(&input),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "slump_mm"
        ));

        let mut input = test_input();
        input.cement_sg = f64::NAN;
        assert!(calculate(&input).is_err());

        let mut input = test_input();
        input.admixture_sg = Some(-1.0);
        assert_eq!(calculate(&input).unwrap_err().field(), "admixture_sg");
    }

    #[test]
    fn test_form_conversion() {
        let input = MixDesignInput::try_from(test_form()).unwrap();
        assert_eq!(input, test_input());
    }

    #[test]
    fn test_form_unknown_grade() {
        let mut form = test_form();
        form.grade = Some("M99".to_string());
        let err = MixDesignInput::try_from(form).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_LABEL");
    }

    #[test]
    fn test_form_missing_number() {
        let mut form = test_form();
        form.water_sg = None;
        let err = MixDesignInput::try_from(form).unwrap_err();
        assert_eq!(err, CalcError::missing_field("water_sg"));
    }

    #[test]
    fn test_form_empty_admixture_means_none() {
        let mut form = test_form();
        form.admixture_sg = Some(0.0);
        assert_eq!(MixDesignInput::try_from(form.clone()).unwrap().admixture_sg, None);
        form.admixture_sg = Some(f64::NAN);
        assert_eq!(MixDesignInput::try_from(form).unwrap().admixture_sg, None);
    }

    #[test]
    fn test_form_fallback() {
        let partial = MixDesignForm {
            grade: Some("M30".to_string()),
            ..Default::default()
        };
        let merged = partial.or(test_form());
        assert_eq!(merged.grade.as_deref(), Some("M30"));
        assert_eq!(merged.cement_sg, Some(3.15));
    }

    #[test]
    fn test_mass_ratio() {
        let result = calculate(&test_input()).unwrap();
        let ratio = result.proportions.ratio_by_mass();
        assert!((ratio.water_cement - 0.5).abs() < 1e-12);
        assert_eq!(ratio.to_string(), "1 : 1.85 : 3.13 (w/c 0.50)");
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(!json.contains("admixture_sg"));
        let roundtrip: MixDesignInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: MixDesignResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.proportions, roundtrip.proportions);
    }
}
