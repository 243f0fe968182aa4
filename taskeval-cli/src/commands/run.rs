//! `taskeval run` — evaluate one model and persist the results.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use taskeval_harness::evaluate_model;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Model name to evaluate
    #[arg(long, default_value = "rule_based")]
    pub model: String,

    /// Directory to write results into
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,

    /// Optional path to a custom tasks JSONL file; defaults to the
    /// packaged dataset
    #[arg(long)]
    pub tasks_path: Option<PathBuf>,
}

pub async fn execute(args: RunArgs) -> Result<()> {
    let summary = evaluate_model(&args.model, &args.results_dir, args.tasks_path.as_deref())
        .await?;

    println!(
        "Evaluated model '{}' on {} examples.",
        args.model.bold(),
        summary.num_examples
    );
    println!("Average field accuracy: {:.3}", summary.avg_field_accuracy);
    println!("Exact match rate: {:.3}", summary.exact_match_rate);
    println!(
        "Schema compliance rate: {:.3}",
        summary.schema_compliance_rate
    );

    Ok(())
}
