use pretty_assertions::assert_eq;
use serde_json::json;
use taskeval_core::{StructuredOutput, EXPECTED_FIELDS};
use taskeval_metrics::{aggregate_metrics, compare_structured_outputs, ExampleMetrics};
use test_case::test_case;

fn reference() -> StructuredOutput {
    json!({
        "intent": "billing_issue",
        "priority": "high",
        "requires_human": true,
        "target_system": "billing",
        "sla_hours": 4
    })
    .as_object()
    .cloned()
    .unwrap()
}

/// Corrupt the first `wrong` recognized fields of a copy of the
/// reference output.
fn with_wrong_fields(wrong: usize) -> StructuredOutput {
    let mut predicted = reference();
    for field in EXPECTED_FIELDS.iter().take(wrong) {
        predicted.insert(field.to_string(), json!("__wrong__"));
    }
    predicted
}

#[test_case(0, 1.0; "all fields correct")]
#[test_case(1, 0.8; "one field wrong")]
#[test_case(3, 0.4; "three fields wrong")]
#[test_case(5, 0.0; "all fields wrong")]
fn field_accuracy_is_correct_over_five(wrong: usize, expected_accuracy: f64) {
    let expected = reference();
    let predicted = with_wrong_fields(wrong);

    let cmp = compare_structured_outputs(&expected, &predicted);
    assert!((cmp.field_accuracy - expected_accuracy).abs() < 1e-9);
    assert!((0.0..=1.0).contains(&cmp.field_accuracy));

    // Exact match holds exactly when accuracy is 1.0.
    assert_eq!(cmp.exact_match == 1, cmp.field_accuracy == 1.0);
    // Every field is present and non-null, so compliance is unaffected.
    assert_eq!(cmp.schema_compliant, 1);
}

#[test]
fn per_example_metrics_carry_the_fixed_field_count() {
    let expected = reference();
    let cmp = compare_structured_outputs(&expected, &expected.clone());
    let metrics = ExampleMetrics::new("t-1", cmp);
    assert_eq!(metrics.num_fields, 5);
    assert_eq!(metrics.task_id, "t-1");
}

#[test]
fn aggregation_over_scored_examples_matches_hand_computation() {
    let expected = reference();
    let predictions = vec![
        ("t-1", with_wrong_fields(0)),
        ("t-2", with_wrong_fields(1)),
        ("t-3", with_wrong_fields(5)),
    ];

    let per_example: Vec<ExampleMetrics> = predictions
        .into_iter()
        .map(|(id, predicted)| {
            ExampleMetrics::new(id, compare_structured_outputs(&expected, &predicted))
        })
        .collect();

    let summary = aggregate_metrics(&per_example);
    assert_eq!(summary.num_examples, 3);
    assert!((summary.avg_field_accuracy - 0.6).abs() < 1e-9);
    assert!((summary.exact_match_rate - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(summary.schema_compliance_rate, 1.0);
}
