//! Output formatting module
//!
//! Renderers return strings; `commands` decides where they go.

use std::fmt::Write as _;

use mix_core::calculations::fmt_mass;
use mix_core::equations::generate_equations_markdown;
use mix_core::materials::{standard_deviation_table, water_cement_ratio_table};
use mix_core::{MixDesignInput, MixDesignResult};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Which parts of a design result to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    pub summary: bool,
    pub steps: bool,
}

impl Sections {
    pub fn from_flags(summary_only: bool, steps_only: bool) -> Self {
        Sections {
            summary: !steps_only,
            steps: !summary_only,
        }
    }
}

pub fn render_design(
    format: OutputFormat,
    input: &MixDesignInput,
    result: &MixDesignResult,
    sections: Sections,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(design_text(input, result, sections)),
        OutputFormat::Markdown => Ok(design_markdown(input, result, sections)),
        OutputFormat::Json => design_json(input, result, sections),
    }
}

fn design_text(input: &MixDesignInput, result: &MixDesignResult, sections: Sections) -> String {
    let mut out = String::new();
    if sections.summary {
        let p = result.proportions();
        out.push_str("Mix Design Results\n");
        out.push_str("==================\n");
        let _ = writeln!(out, "Grade:            {} ({} exposure)", input.grade, input.exposure);
        let _ = writeln!(out, "Cement:           {} kg/m³", fmt_mass(p.cement_kg_m3));
        let _ = writeln!(out, "Water:            {} kg/m³", fmt_mass(p.water_kg_m3));
        let _ = writeln!(out, "Coarse Aggregate: {} kg/m³", fmt_mass(p.coarse_aggregate_kg_m3));
        let _ = writeln!(out, "Fine Aggregate:   {} kg/m³", fmt_mass(p.fine_aggregate_kg_m3));
        let _ = writeln!(out, "Mix ratio:        {}", p.ratio_by_mass());
    }
    if sections.summary && sections.steps {
        out.push('\n');
    }
    if sections.steps {
        out.push_str("Calculation Steps\n");
        out.push_str("=================\n");
        out.push_str(&result.narrative());
        out.push('\n');
    }
    out
}

fn design_markdown(input: &MixDesignInput, result: &MixDesignResult, sections: Sections) -> String {
    let mut out = String::new();
    if sections.summary {
        let p = result.proportions();
        let _ = writeln!(out, "## Mix Design Results: {} ({} exposure)\n", input.grade, input.exposure);
        out.push_str("| Material | Quantity (kg/m³) |\n");
        out.push_str("|----------|------------------|\n");
        let _ = writeln!(out, "| Cement | {} |", fmt_mass(p.cement_kg_m3));
        let _ = writeln!(out, "| Water | {} |", fmt_mass(p.water_kg_m3));
        let _ = writeln!(out, "| Coarse Aggregate | {} |", fmt_mass(p.coarse_aggregate_kg_m3));
        let _ = writeln!(out, "| Fine Aggregate | {} |", fmt_mass(p.fine_aggregate_kg_m3));
        let _ = writeln!(out, "\nMix ratio by mass: {}", p.ratio_by_mass());
    }
    if sections.summary && sections.steps {
        out.push('\n');
    }
    if sections.steps {
        out.push_str("## Calculation Steps\n");
        for step in result.steps() {
            let _ = writeln!(out, "\n### {}\n", step.heading());
            let _ = writeln!(out, "_{}_\n", step.equation.metadata().reference.citation());
            for line in &step.lines {
                let _ = writeln!(out, "- {}", line);
            }
        }
    }
    out
}

fn design_json(input: &MixDesignInput, result: &MixDesignResult, sections: Sections) -> Result<String> {
    let value = match (sections.summary, sections.steps) {
        (true, false) => json!({
            "proportions": result.proportions(),
            "ratio_by_mass": result.proportions().ratio_by_mass(),
        }),
        (false, true) => json!({ "steps": result.steps() }),
        _ => json!({
            "input": input,
            "proportions": result.proportions(),
            "ratio_by_mass": result.proportions().ratio_by_mass(),
            "intermediates": result.intermediates,
            "steps": result.steps(),
        }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Standard deviation and maximum water-cement ratio tables
pub fn render_tables(format: OutputFormat) -> Result<String> {
    let sd = standard_deviation_table();
    let wc = water_cement_ratio_table();
    let mut out = String::new();

    match format {
        OutputFormat::Json => {
            let value = json!({
                "standard_deviation_mpa": sd
                    .iter()
                    .map(|(grade, s)| json!({ "grade": grade, "standard_deviation_mpa": s }))
                    .collect::<Vec<_>>(),
                "max_water_cement_ratio": wc
                    .iter()
                    .map(|(exposure, r)| json!({ "exposure": exposure, "max_water_cement_ratio": r }))
                    .collect::<Vec<_>>(),
            });
            out = serde_json::to_string_pretty(&value)?;
        }
        OutputFormat::Markdown => {
            out.push_str("## Assumed Standard Deviation\n\n");
            out.push_str("| Grade | fck (MPa) | s (MPa) |\n|-------|-----------|---------|\n");
            for (grade, s) in sd {
                let _ = writeln!(out, "| {} | {} | {} |", grade, grade.characteristic_strength_mpa(), s);
            }
            out.push_str("\n## Maximum Water-Cement Ratio\n\n");
            out.push_str("| Exposure | Max w/c |\n|----------|---------|\n");
            for (exposure, r) in wc {
                let _ = writeln!(out, "| {} | {} |", exposure, r);
            }
        }
        OutputFormat::Text => {
            out.push_str("Assumed Standard Deviation\n");
            out.push_str("==========================\n");
            for (grade, s) in sd {
                let _ = writeln!(out, "{:<6} {:>4} MPa", grade.label(), s);
            }
            out.push_str("\nMaximum Water-Cement Ratio\n");
            out.push_str("==========================\n");
            for (exposure, r) in wc {
                let _ = writeln!(out, "{:<12} {:.2}", exposure.label(), r);
            }
        }
    }
    Ok(out)
}

/// Equation reference; text and markdown share the markdown rendering
pub fn render_equations(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let all: Vec<_> = mix_core::equations::ALL_EQUATIONS
                .iter()
                .map(|eq| eq.metadata())
                .collect();
            Ok(serde_json::to_string_pretty(&all)?)
        }
        OutputFormat::Text | OutputFormat::Markdown => Ok(generate_equations_markdown()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mix_core::{calculate, CementType, ConcreteGrade, ExposureCondition, FineAggregateZone};

    fn reference() -> (MixDesignInput, MixDesignResult) {
        let input = MixDesignInput {
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
        };
        let result = calculate(&input).unwrap();
        (input, result)
    }

    #[test]
    fn test_text_summary_lines() {
        let (input, result) = reference();
        let out = render_design(OutputFormat::Text, &input, &result, Sections::from_flags(false, false)).unwrap();

        assert!(out.starts_with("Mix Design Results\n"));
        assert!(out.contains("Cement:           372.00 kg/m³"));
        assert!(out.contains("Water:            186.00 kg/m³"));
        assert!(out.contains("Coarse Aggregate: 1164.94 kg/m³"));
        assert!(out.contains("Fine Aggregate:   687.55 kg/m³"));
        assert!(out.contains("Step 1: Calculate the target mean strength"));
        assert!(out.contains("Target Mean Strength = 25 + 1.65 * 4 = 31.60 MPa"));
    }

    #[test]
    fn test_text_sections_are_independent() {
        let (input, result) = reference();

        let summary = render_design(OutputFormat::Text, &input, &result, Sections::from_flags(true, false)).unwrap();
        assert!(summary.contains("Cement:"));
        assert!(!summary.contains("Calculation Steps"));

        let steps = render_design(OutputFormat::Text, &input, &result, Sections::from_flags(false, true)).unwrap();
        assert!(steps.starts_with("Calculation Steps"));
        assert!(!steps.contains("Mix Design Results"));
    }

    #[test]
    fn test_markdown_cites_code_clauses() {
        let (input, result) = reference();
        let out = render_design(OutputFormat::Markdown, &input, &result, Sections::from_flags(false, false)).unwrap();

        assert!(out.contains("| Cement | 372.00 |"));
        assert!(out.contains("### Step 4: Calculate cement content"));
        assert!(out.contains("IS 10262"));
        assert_eq!(out.matches("### Step ").count(), 7);
    }

    #[test]
    fn test_json_shapes() {
        let (input, result) = reference();

        let full: serde_json::Value =
            serde_json::from_str(&render_design(OutputFormat::Json, &input, &result, Sections::from_flags(false, false)).unwrap()).unwrap();
        assert_eq!(full["proportions"]["water_kg_m3"], 186.0);
        assert_eq!(full["input"]["grade"], "M25");
        assert_eq!(full["steps"].as_array().unwrap().len(), 7);

        let summary: serde_json::Value = serde_json::from_str(
            &render_design(OutputFormat::Json, &input, &result, Sections::from_flags(true, false)).unwrap(),
        )
        .unwrap();
        assert!(summary.get("steps").is_none());
        assert!(summary.get("proportions").is_some());
    }

    #[test]
    fn test_tables_list_every_row() {
        let text = render_tables(OutputFormat::Text).unwrap();
        assert!(text.contains("M10"));
        assert!(text.contains("M80"));
        assert!(text.contains("very severe  0.40"));

        let json: serde_json::Value = serde_json::from_str(&render_tables(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["standard_deviation_mpa"].as_array().unwrap().len(), 15);
        assert_eq!(json["max_water_cement_ratio"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_equations_reference() {
        let md = render_equations(OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("# Mix Design Equations Reference"));

        let json: serde_json::Value = serde_json::from_str(&render_equations(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 7);
    }
}
