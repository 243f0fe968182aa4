use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use taskeval_core::{available_models, EvalError, Result};
use taskeval_metrics::{
    aggregate_metrics, compare_structured_outputs, AggregateMetrics, ExampleMetrics,
};
use taskeval_runners::create_runner;

use crate::artifacts::RunArtifacts;
use crate::dataset::{load_tasks, packaged_tasks};

/// Run the full evaluation loop for one model.
///
/// Tasks are processed strictly one at a time, in source order. Fatal
/// errors (unknown model, runner construction, task source) abort
/// before any artifact is written for the affected stage; a remote
/// model returning unparseable content is absorbed by the runner's raw
/// fallback and only degrades that task's score.
pub async fn evaluate_model(
    model_name: &str,
    output_dir: &Path,
    tasks_path: Option<&Path>,
) -> Result<AggregateMetrics> {
    let models = available_models();
    let config = models.get(model_name).ok_or_else(|| {
        EvalError::Config(format!(
            "unknown model '{model_name}', available: {}",
            models.keys().cloned().collect::<Vec<_>>().join(", ")
        ))
    })?;
    let runner = create_runner(config)?;

    let tasks = match tasks_path {
        Some(path) => load_tasks(path)?,
        None => packaged_tasks()?,
    };
    tracing::info!(model = model_name, tasks = tasks.len(), "starting evaluation");

    let mut artifacts = RunArtifacts::create(output_dir, model_name)?;
    let mut per_example: Vec<ExampleMetrics> = Vec::with_capacity(tasks.len());

    let bar = ProgressBar::new(tasks.len() as u64).with_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for task in &tasks {
        let predicted = runner
            .generate(&task.input_text, task.context.as_deref())
            .await?;
        let comparison = compare_structured_outputs(&task.expected_output, &predicted);
        let metrics = ExampleMetrics::new(&task.task_id, comparison);

        artifacts.record(task, &predicted, &metrics)?;
        per_example.push(metrics);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let summary = aggregate_metrics(&per_example);
    artifacts.finish(&summary)?;

    tracing::info!(
        model = model_name,
        num_examples = summary.num_examples,
        avg_field_accuracy = summary.avg_field_accuracy,
        exact_match_rate = summary.exact_match_rate,
        schema_compliance_rate = summary.schema_compliance_rate,
        "evaluation finished"
    );

    Ok(summary)
}
