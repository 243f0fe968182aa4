use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use taskeval_core::{EvalError, Result, StructuredOutput, TaskExample};
use taskeval_metrics::{AggregateMetrics, ExampleMetrics};

/// One line of the raw prediction log.
#[derive(Debug, Serialize)]
struct PredictionRecord<'a> {
    task_id: &'a str,
    input_text: &'a str,
    context: Option<&'a str>,
    expected_output: &'a StructuredOutput,
    predicted_output: &'a StructuredOutput,
}

/// The three per-run output files, written incrementally as the driver
/// walks the task list:
///
/// - `<model>_predictions.jsonl` — raw (input, expected, predicted) log
/// - `<model>_metrics.csv` — per-example metrics table
/// - `<model>_summary.json` — aggregate metrics, written on `finish`
pub struct RunArtifacts {
    predictions: BufWriter<File>,
    metrics: csv::Writer<File>,
    summary_path: PathBuf,
}

impl RunArtifacts {
    pub fn create(output_dir: &Path, model_name: &str) -> Result<Self> {
        fs::create_dir_all(output_dir)?;

        let predictions_path = output_dir.join(format!("{model_name}_predictions.jsonl"));
        let metrics_path = output_dir.join(format!("{model_name}_metrics.csv"));
        let summary_path = output_dir.join(format!("{model_name}_summary.json"));

        let predictions = BufWriter::new(File::create(predictions_path)?);

        let mut metrics = csv::Writer::from_writer(File::create(metrics_path)?);
        metrics
            .write_record([
                "task_id",
                "field_accuracy",
                "exact_match",
                "schema_compliant",
                "num_fields",
            ])
            .map_err(|e| EvalError::Serialization(e.to_string()))?;

        Ok(Self {
            predictions,
            metrics,
            summary_path,
        })
    }

    /// Append one task's raw prediction and metrics row.
    pub fn record(
        &mut self,
        task: &TaskExample,
        predicted: &StructuredOutput,
        metrics: &ExampleMetrics,
    ) -> Result<()> {
        let record = PredictionRecord {
            task_id: &task.task_id,
            input_text: &task.input_text,
            context: task.context.as_deref(),
            expected_output: &task.expected_output,
            predicted_output: predicted,
        };
        let line = serde_json::to_string(&record)?;
        writeln!(self.predictions, "{line}")?;

        self.metrics
            .write_record([
                metrics.task_id.clone(),
                format!("{:.4}", metrics.field_accuracy),
                metrics.exact_match.to_string(),
                metrics.schema_compliant.to_string(),
                metrics.num_fields.to_string(),
            ])
            .map_err(|e| EvalError::Serialization(e.to_string()))?;

        Ok(())
    }

    /// Flush the incremental files and write the aggregate summary.
    pub fn finish(mut self, summary: &AggregateMetrics) -> Result<()> {
        self.predictions.flush()?;
        self.metrics.flush()?;

        let json = serde_json::to_string_pretty(summary)?;
        fs::write(&self.summary_path, json)?;
        Ok(())
    }
}
