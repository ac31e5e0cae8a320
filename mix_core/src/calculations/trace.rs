//! # Calculation Trace
//!
//! Ordered, human-readable record of each proportioning stage: the formula
//! with the actual numbers substituted, and the named values it produced.
//!
//! Display precision is fixed so reports can be compared verbatim:
//! masses and ratios with 2 decimals, volumes in m³ with 6 decimals, raw
//! inputs and table constants as given. Fixed-point values round exact ties
//! away from zero; raw values switch to exponent form below 1e-6 and from
//! 1e21 up.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;

/// A named value produced by a calculation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepValue {
    /// Machine-friendly name (e.g., "target_mean_strength")
    pub name: String,
    /// Unrounded value
    pub value: f64,
    /// Unit label ("MPa", "kg/m³", "m³", or "" for ratios)
    pub unit: String,
}

impl StepValue {
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
        }
    }
}

/// One stage of the mix design, in report form.
///
/// ## JSON Example
///
/// ```json
/// {
///   "index": 4,
///   "title": "Calculate cement content",
///   "equation": "CementContent",
///   "lines": ["Cement Content = 186.00 / 0.5 = 372.00 kg/m³"],
///   "values": [{ "name": "cement_content", "value": 372.0, "unit": "kg/m³" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// 1-based position in the sequence
    pub index: usize,
    /// Short description of the stage
    pub title: String,
    /// Equation applied in this stage
    pub equation: Equation,
    /// Formula trace with substituted values, one line per relation
    pub lines: Vec<String>,
    /// Values produced by this stage
    pub values: Vec<StepValue>,
}

impl CalculationStep {
    /// Look up a produced value by name
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }

    /// Heading line: "Step N: title"
    pub fn heading(&self) -> String {
        format!("Step {}: {}", self.index, self.title)
    }
}

impl fmt::Display for CalculationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading())?;
        for line in &self.lines {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// Collector for steps during a calculation.
///
/// Assigns consecutive indices starting at 1.
#[derive(Debug, Clone, Default)]
pub struct StepTrace {
    steps: Vec<CalculationStep>,
}

impl StepTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step; returns its index
    pub fn record(
        &mut self,
        equation: Equation,
        title: impl Into<String>,
        lines: Vec<String>,
        values: Vec<StepValue>,
    ) -> usize {
        let index = self.steps.len() + 1;
        self.steps.push(CalculationStep {
            index,
            title: title.into(),
            equation,
            lines,
            values,
        });
        index
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Finish tracing and hand over the steps
    pub fn into_steps(self) -> Vec<CalculationStep> {
        self.steps
    }
}

/// Digits needed for the exact decimal expansion of any f64 fraction
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Mass or ratio at report precision
pub fn fmt_mass(value: f64) -> String {
    to_fixed(value, 2)
}

/// Volume in m³ at report precision
pub fn fmt_volume(value: f64) -> String {
    to_fixed(value, 6)
}

/// Fixed-point rendering with exact ties rounded away from zero.
///
/// `{:.N}` rounds a value lying exactly halfway to even (31.625 gives
/// "31.62"); reports expect "31.63". Values merely close to a tie, such as
/// 1.005 (stored as 1.00499...), keep the standard rendering.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", decimals, 0.0);
    }
    let magnitude = value.abs();
    if !value.is_finite() || !is_exact_tie(magnitude, decimals) {
        return format!("{:.*}", decimals, value);
    }

    // A tie's expansion ends in the '5' right after the kept digits.
    let exact = format!("{:.*}", decimals + 1, magnitude);
    let kept = exact[..exact.len() - 1].trim_end_matches('.');
    let rounded = increment_last_digit(kept);
    if value < 0.0 {
        format!("-{}", rounded)
    } else {
        rounded
    }
}

fn is_exact_tie(magnitude: f64, decimals: usize) -> bool {
    if !format!("{:.*}", decimals + 1, magnitude).ends_with('5') {
        return false;
    }
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let Some(point) = exact.find('.') else {
        return false;
    };
    let tail = &exact[point + 1 + decimals..];
    tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0')
}

/// Add one unit in the last place of a plain decimal string ("9.99" -> "10.00")
fn increment_last_digit(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'.' => continue,
            b'9' => bytes[i] = b'0',
            d => {
                bytes[i] = d + 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// Raw input or table constant, shortest round-trip digits.
///
/// Plain decimal from 1e-6 up to 1e21, exponent form outside that range
/// ("1e-7", "1.5e+21").
pub fn fmt_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !value.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }
    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => scientific,
    }
}
