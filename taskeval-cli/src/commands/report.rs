//! `taskeval report` — terminal view over persisted result files.
//!
//! Read-only: it scans `<results-dir>` for `*_summary.json` files and
//! renders a model-level table, with per-example row counts taken from
//! the matching `*_metrics.csv` files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use taskeval_metrics::AggregateMetrics;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Directory containing evaluation results
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,
}

pub fn execute(args: ReportArgs) -> Result<()> {
    if !args.results_dir.exists() {
        println!(
            "{}",
            "No results directory found. Run an evaluation first.".dimmed()
        );
        return Ok(());
    }

    let summaries = load_summaries(&args.results_dir)?;
    if summaries.is_empty() {
        println!(
            "{}",
            format!("No summary files found in {}.", args.results_dir.display()).dimmed()
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header([
        "model",
        "examples",
        "avg field accuracy",
        "exact match rate",
        "schema compliance",
        "metrics rows",
    ]);

    for (model_name, summary) in &summaries {
        let rows = metrics_row_count(&args.results_dir, model_name)?;
        table.add_row([
            model_name.clone(),
            summary.num_examples.to_string(),
            format!("{:.3}", summary.avg_field_accuracy),
            format!("{:.3}", summary.exact_match_rate),
            format!("{:.3}", summary.schema_compliance_rate),
            rows.map_or_else(|| "-".to_string(), |n| n.to_string()),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Collect `(model_name, summary)` pairs from `*_summary.json` files.
fn load_summaries(results_dir: &Path) -> Result<Vec<(String, AggregateMetrics)>> {
    let mut summaries = Vec::new();
    for entry in fs::read_dir(results_dir)? {
        let path = entry?.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(model_name) = file_name.strip_suffix("_summary.json") else {
            continue;
        };
        let raw = fs::read_to_string(&path)?;
        let summary: AggregateMetrics = serde_json::from_str(&raw)?;
        summaries.push((model_name.to_string(), summary));
    }
    summaries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(summaries)
}

/// Number of data rows in a model's metrics CSV, if the file exists.
/// A malformed row is an error, not a smaller count.
fn metrics_row_count(results_dir: &Path, model_name: &str) -> Result<Option<usize>> {
    let path = results_dir.join(format!("{model_name}_metrics.csv"));
    if !path.exists() {
        return Ok(None);
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut count = 0;
    for record in reader.records() {
        record?;
        count += 1;
    }
    Ok(Some(count))
}
