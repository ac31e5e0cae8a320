//! End-to-end mix design scenarios and properties over every grade/exposure pair.

use mix_core::calculations::{calculate, MixDesignForm, MixDesignInput};
use mix_core::materials::{CementType, ConcreteGrade, ExposureCondition, FineAggregateZone};
use mix_core::CalcError;

fn reference_input() -> MixDesignInput {
    MixDesignInput {
        grade: ConcreteGrade::M25,
        strength_mpa: 25.0,
        exposure: ExposureCondition::Moderate,
        slump_mm: 50.0,
        max_aggregate_size_mm: 20.0,
        fine_aggregate_zone: FineAggregateZone::ZoneII,
        cement_type: CementType::Opc43,
        cement_sg: 3.15,
        water_sg: 1.0,
        coarse_aggregate_sg: 2.7,
        fine_aggregate_sg: 2.6,
        admixture_sg: None,
    }
}

fn reference_form() -> MixDesignForm {
    MixDesignForm {
        grade: Some("M25".to_string()),
        strength_mpa: Some(25.0),
        exposure: Some("moderate".to_string()),
        slump_mm: Some(50.0),
        max_aggregate_size_mm: Some(20.0),
        fine_aggregate_zone: Some("II".to_string()),
        cement_type: Some("OPC 43".to_string()),
        cement_sg: Some(3.15),
        water_sg: Some(1.0),
        coarse_aggregate_sg: Some(2.7),
        fine_aggregate_sg: Some(2.6),
        admixture_sg: None,
    }
}

fn all_pairs() -> Vec<(ConcreteGrade, ExposureCondition)> {
    ConcreteGrade::ALL
        .iter()
        .flat_map(|g| ExposureCondition::ALL.iter().map(move |e| (*g, *e)))
        .collect()
}

#[test]
fn scenario_a_reference_mix() {
    let result = calculate(&reference_input()).unwrap();
    let i = &result.intermediates;

    assert!((i.target_mean_strength_mpa - 31.6).abs() < 1e-9);
    assert_eq!(i.water_cement_ratio, 0.50);
    assert_eq!(result.proportions.water_kg_m3, 186.0);
    assert!((result.proportions.cement_kg_m3 - 372.0).abs() < 1e-9);
}

#[test]
fn scenario_b_higher_slump() {
    let mut input = reference_input();
    input.slump_mm = 100.0;
    let result = calculate(&input).unwrap();

    assert!((result.intermediates.additional_water_kg_m3 - 11.16).abs() < 1e-9);
    assert!((result.proportions.water_kg_m3 - 197.16).abs() < 1e-9);
    assert!((result.proportions.cement_kg_m3 - 394.32).abs() < 1e-9);
}

#[test]
fn scenario_c_unknown_grade_label() {
    let mut form = reference_form();
    form.grade = Some("M12".to_string());

    match MixDesignInput::try_from(form) {
        Err(CalcError::UnknownLabel { kind, label }) => {
            assert_eq!(kind, "concrete grade");
            assert_eq!(label, "M12");
        }
        other => panic!("expected UnknownLabel, got {:?}", other),
    }
}

#[test]
fn scenario_c_unknown_exposure_label() {
    let mut form = reference_form();
    form.exposure = Some("coastal".to_string());
    let err = MixDesignInput::try_from(form).unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_LABEL");
    assert_eq!(err.field(), "exposure condition");
}

#[test]
fn scenario_d_admixture_volume() {
    let mut input = reference_input();
    input.admixture_sg = Some(1.145);
    let result = calculate(&input).unwrap();
    let i = &result.intermediates;

    assert!((i.admixture_volume_m3 - 1.0 / 1145.0).abs() < 1e-15);
    let subtracted = i.cement_volume_m3 + i.water_volume_m3 + i.admixture_volume_m3;
    assert!((i.total_aggregate_volume_m3 - (1.0 - subtracted)).abs() < 1e-12);
    assert!((i.coarse_aggregate_volume_m3 + i.fine_aggregate_volume_m3 - i.total_aggregate_volume_m3).abs() < 1e-9);
    assert_eq!(result.steps()[4].lines[2], "Volume of Admixture = 0.000873 m³");
}

#[test]
fn target_mean_exceeds_strength_for_every_pair() {
    for (grade, exposure) in all_pairs() {
        let mut input = reference_input();
        input.grade = grade;
        input.exposure = exposure;
        input.strength_mpa = grade.characteristic_strength_mpa();

        let result = calculate(&input).unwrap();
        assert!(
            result.intermediates.target_mean_strength_mpa > input.strength_mpa,
            "{} / {}",
            grade,
            exposure
        );
    }
}

#[test]
fn cement_is_water_over_ratio_for_every_exposure() {
    for exposure in ExposureCondition::ALL {
        for slump in [25.0, 50.0, 75.0, 120.0] {
            let mut input = reference_input();
            input.exposure = exposure;
            input.slump_mm = slump;

            let result = calculate(&input).unwrap();
            let p = &result.proportions;
            assert_eq!(p.cement_kg_m3, p.water_kg_m3 / exposure.max_water_cement_ratio());
        }
    }
}

#[test]
fn water_content_flat_below_reference_and_non_decreasing_above() {
    for slump in [1.0, 10.0, 25.0, 49.9, 50.0] {
        let mut input = reference_input();
        input.slump_mm = slump;
        assert_eq!(calculate(&input).unwrap().proportions.water_kg_m3, 186.0);
    }

    let mut previous = 186.0;
    for step in 0..=40 {
        let mut input = reference_input();
        input.slump_mm = 50.0 + step as f64 * 5.0;
        let water = calculate(&input).unwrap().proportions.water_kg_m3;
        assert!(water >= previous, "water decreased at slump {}", input.slump_mm);
        previous = water;
    }
}

#[test]
fn coarse_plus_fine_equals_total_volume() {
    for (grade, exposure) in all_pairs() {
        for admixture_sg in [None, Some(1.145), Some(1.2)] {
            let mut input = reference_input();
            input.grade = grade;
            input.exposure = exposure;
            input.admixture_sg = admixture_sg;

            let i = calculate(&input).unwrap().intermediates;
            let sum = i.coarse_aggregate_volume_m3 + i.fine_aggregate_volume_m3;
            assert!((sum - i.total_aggregate_volume_m3).abs() < 1e-9);
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let mut input = reference_input();
    input.slump_mm = 85.0;
    input.admixture_sg = Some(1.145);

    let first = calculate(&input).unwrap();
    let second = calculate(&input).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.proportions.fine_aggregate_kg_m3.to_bits(),
        second.proportions.fine_aggregate_kg_m3.to_bits()
    );
}

#[test]
fn recorded_only_fields_do_not_change_quantities() {
    let base = calculate(&reference_input()).unwrap();

    let mut input = reference_input();
    input.max_aggregate_size_mm = 40.0;
    input.fine_aggregate_zone = FineAggregateZone::ZoneIV;
    input.cement_type = CementType::Ppc;
    let varied = calculate(&input).unwrap();

    assert_eq!(base.proportions, varied.proportions);
    assert_eq!(base.steps, varied.steps);
}

#[test]
fn summary_and_narrative_are_independent_outputs() {
    let result = calculate(&reference_input()).unwrap();

    let summary = serde_json::to_value(result.proportions()).unwrap();
    assert_eq!(summary["water_kg_m3"], 186.0);

    let narrative = result.narrative();
    assert!(narrative.starts_with("Step 1: Calculate the target mean strength"));
    assert!(narrative.contains("\n\nStep 7: Convert volumes to weights"));
    assert_eq!(narrative.matches("Step ").count(), 7);
}

#[test]
fn invalid_numbers_abort_before_any_stage() {
    let cases: Vec<(&str, Box<dyn Fn(&mut MixDesignInput)>)> = vec![
        ("strength_mpa", Box::new(|i: &mut MixDesignInput| i.strength_mpa = -25.0)),
        ("slump_mm", Box::new(|i: &mut MixDesignInput| i.slump_mm = f64::INFINITY)),
        ("max_aggregate_size_mm", Box::new(|i: &mut MixDesignInput| i.max_aggregate_size_mm = 0.0)),
        ("water_sg", Box::new(|i: &mut MixDesignInput| i.water_sg = f64::NAN)),
        ("fine_aggregate_sg", Box::new(|i: &mut MixDesignInput| i.fine_aggregate_sg = 0.0)),
    ];

    for (field, mutate) in cases {
        let mut input = reference_input();
        mutate(&mut input);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), field);
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}

#[test]
fn form_json_round_trip_into_design() {
    let json = r#"{
        "grade": "m30",
        "strength_mpa": 30,
        "exposure": "Very Severe",
        "slump_mm": 75,
        "max_aggregate_size_mm": 20,
        "fine_aggregate_zone": "Zone I",
        "cement_type": "PPC",
        "cement_sg": 2.9,
        "water_sg": 1.0,
        "coarse_aggregate_sg": 2.74,
        "fine_aggregate_sg": 2.65
    }"#;
    let form: MixDesignForm = serde_json::from_str(json).unwrap();
    let input = MixDesignInput::try_from(form).unwrap();
    assert_eq!(input.grade, ConcreteGrade::M30);
    assert_eq!(input.exposure, ExposureCondition::VerySevere);
    assert_eq!(input.admixture_sg, None);

    let result = calculate(&input).unwrap();
    // 30 + 1.65 × 5 = 38.25; W = 186 + 5.58; C = W / 0.40
    assert!((result.intermediates.target_mean_strength_mpa - 38.25).abs() < 1e-9);
    assert!((result.proportions.water_kg_m3 - 191.58).abs() < 1e-9);
    assert!((result.proportions.cement_kg_m3 - 478.95).abs() < 1e-9);
}

#[test]
fn halfway_results_round_up_in_step_text() {
    let mut input = reference_input();
    input.strength_mpa = 25.025;
    let result = calculate(&input).unwrap();
    assert_eq!(result.intermediates.target_mean_strength_mpa, 31.625);
    assert_eq!(
        result.steps()[0].lines[0],
        "Target Mean Strength = 25.025 + 1.65 * 4 = 31.63 MPa"
    );

    input.strength_mpa = 18.525;
    let result = calculate(&input).unwrap();
    assert_eq!(
        result.steps()[0].lines[0],
        "Target Mean Strength = 18.525 + 1.65 * 4 = 25.13 MPa"
    );
}

#[test]
fn tiny_raw_inputs_render_in_exponent_form() {
    let mut input = reference_input();
    input.strength_mpa = 1e-7;
    let result = calculate(&input).unwrap();
    assert_eq!(
        result.steps()[0].lines[0],
        "Target Mean Strength = 1e-7 + 1.65 * 4 = 6.60 MPa"
    );
}
