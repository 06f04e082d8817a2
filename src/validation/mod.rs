//! Physical range validation for raw mix-design inputs.
//!
//! Every field is checked against the bounds the training data was
//! augmented within; values outside those bounds degrade prediction
//! accuracy, so they are rejected before feature derivation. All
//! violations are accumulated in one pass so the caller can report
//! every offending field at once, not just the first.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::types::RawMixInput;

// ============================================================================
// Range Table
// ============================================================================

/// Inclusive physical bounds for one raw input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

/// Valid ranges for all 8 raw fields, in declaration order.
///
/// These match the material limits of the model's training data. Order is
/// load-bearing: violations are reported in this order.
pub const RANGE_TABLE: [FieldRange; 8] = [
    FieldRange { field: "cement", min: 50.0, max: 600.0, unit: "kg/m³" },
    FieldRange { field: "blast_furnace_slag", min: 0.0, max: 300.0, unit: "kg/m³" },
    FieldRange { field: "fly_ash", min: 0.0, max: 200.0, unit: "kg/m³" },
    FieldRange { field: "water", min: 100.0, max: 250.0, unit: "kg/m³" },
    FieldRange { field: "superplasticizer", min: 0.0, max: 50.0, unit: "kg/m³" },
    FieldRange { field: "coarse_aggregate", min: 800.0, max: 1200.0, unit: "kg/m³" },
    FieldRange { field: "fine_aggregate", min: 500.0, max: 1000.0, unit: "kg/m³" },
    FieldRange { field: "age_days", min: 1.0, max: 365.0, unit: "days" },
];

fn field_value(input: &RawMixInput, field: &'static str) -> f64 {
    match field {
        "cement" => input.cement,
        "blast_furnace_slag" => input.blast_furnace_slag,
        "fly_ash" => input.fly_ash,
        "water" => input.water,
        "superplasticizer" => input.superplasticizer,
        "coarse_aggregate" => input.coarse_aggregate,
        "fine_aggregate" => input.fine_aggregate,
        "age_days" => input.age_days,
        other => unreachable!("field '{other}' is not in RANGE_TABLE"),
    }
}

// ============================================================================
// Validation Result
// ============================================================================

/// One out-of-range field: which bound it broke and the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeViolation {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
    pub value: f64,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {:.1} is outside physical range ({}-{} {})",
            self.field, self.value, self.min, self.max, self.unit
        )
    }
}

/// Outcome of range-checking a `RawMixInput`.
///
/// `Invalid` carries a non-empty violation list in `RANGE_TABLE` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<RangeViolation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The violation list (empty when valid).
    pub fn violations(&self) -> &[RangeViolation] {
        match self {
            Self::Valid => &[],
            Self::Invalid(v) => v,
        }
    }
}

// ============================================================================
// Validator (entry point)
// ============================================================================

/// Range-check every raw field against `RANGE_TABLE`.
///
/// Bounds are inclusive on both ends. All violations are collected rather
/// than short-circuiting on the first, so a single pass tells the caller
/// everything that is wrong with the record. Pure function; reporting to
/// the user is the caller's job.
pub fn validate(input: &RawMixInput) -> ValidationResult {
    let mut violations = Vec::new();

    for range in &RANGE_TABLE {
        let value = field_value(input, range.field);
        if !(range.min <= value && value <= range.max) {
            violations.push(RangeViolation {
                field: range.field,
                min: range.min,
                max: range.max,
                unit: range.unit,
                value,
            });
        }
    }

    if violations.is_empty() {
        ValidationResult::Valid
    } else {
        warn!(
            violation_count = violations.len(),
            "mix input rejected by range validation"
        );
        ValidationResult::Invalid(violations)
    }
}

// ============================================================================
// Tests
// ============================================================================
