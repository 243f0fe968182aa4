use serde::{Deserialize, Serialize};

use crate::structured::ExampleMetrics;

/// Run-level summary over all scored examples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateMetrics {
    pub num_examples: usize,
    pub avg_field_accuracy: f64,
    pub exact_match_rate: f64,
    pub schema_compliance_rate: f64,
}

impl AggregateMetrics {
    pub fn empty() -> Self {
        Self {
            num_examples: 0,
            avg_field_accuracy: 0.0,
            exact_match_rate: 0.0,
            schema_compliance_rate: 0.0,
        }
    }
}

/// Arithmetic means over the per-example metrics. An empty run yields
/// the all-zero aggregate rather than dividing by zero.
pub fn aggregate_metrics(per_example: &[ExampleMetrics]) -> AggregateMetrics {
    let n = per_example.len();
    if n == 0 {
        return AggregateMetrics::empty();
    }

    let sum_accuracy: f64 = per_example.iter().map(|e| e.field_accuracy).sum();
    let sum_exact: u32 = per_example.iter().map(|e| u32::from(e.exact_match)).sum();
    let sum_schema: u32 = per_example.iter().map(|e| u32::from(e.schema_compliant)).sum();

    AggregateMetrics {
        num_examples: n,
        avg_field_accuracy: sum_accuracy / n as f64,
        exact_match_rate: f64::from(sum_exact) / n as f64,
        schema_compliance_rate: f64::from(sum_schema) / n as f64,
    }
}
