use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskeval_core::{StructuredOutput, EXPECTED_FIELDS};

/// Per-task scoring result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExampleMetrics {
    pub task_id: String,
    pub field_accuracy: f64,
    pub exact_match: u8,
    pub schema_compliant: u8,
    pub num_fields: usize,
}

impl ExampleMetrics {
    pub fn new(task_id: impl Into<String>, comparison: FieldComparison) -> Self {
        Self {
            task_id: task_id.into(),
            field_accuracy: comparison.field_accuracy,
            exact_match: comparison.exact_match,
            schema_compliant: comparison.schema_compliant,
            num_fields: EXPECTED_FIELDS.len(),
        }
    }
}

/// Raw output of a single expected-vs-predicted comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldComparison {
    /// Fraction of recognized fields matching exactly, in [0, 1].
    pub field_accuracy: f64,
    /// 1 iff all recognized fields match.
    pub exact_match: u8,
    /// 1 iff all recognized fields are present and non-null.
    pub schema_compliant: u8,
}

/// Compare a predicted structured output against the expected one.
///
/// Schema compliance is independent of correctness: a field that is
/// present and non-null but wrong still counts toward compliance. A
/// field missing from the expected output compares as JSON null, so a
/// predicted null matches an absent expected value.
pub fn compare_structured_outputs(
    expected: &StructuredOutput,
    predicted: &StructuredOutput,
) -> FieldComparison {
    let total = EXPECTED_FIELDS.len();
    let mut correct = 0usize;
    let mut schema_ok = 1u8;

    for field in EXPECTED_FIELDS {
        let Some(value) = predicted.get(field) else {
            schema_ok = 0;
            continue;
        };
        if value.is_null() {
            schema_ok = 0;
        }
        if value == expected.get(field).unwrap_or(&Value::Null) {
            correct += 1;
        }
    }

    FieldComparison {
        field_accuracy: correct as f64 / total as f64,
        exact_match: u8::from(correct == total),
        schema_compliant: schema_ok,
    }
}
