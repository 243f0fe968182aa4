use std::fs;
use std::path::Path;

use taskeval_core::{EvalError, Result, TaskExample};

/// Default support-style dataset, compiled into the binary so a fresh
/// checkout can evaluate without any external files.
const PACKAGED_TASKS: &str = include_str!("../data/tasks_support.jsonl");

/// Load task examples from a JSONL file.
///
/// The whole file is read into memory up front. Blank lines are
/// skipped; any malformed record is a fatal source error.
pub fn load_tasks(path: &Path) -> Result<Vec<TaskExample>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        EvalError::Source(format!("failed to read {}: {e}", path.display()))
    })?;
    parse_tasks(&raw)
}

/// The packaged default dataset.
pub fn packaged_tasks() -> Result<Vec<TaskExample>> {
    parse_tasks(PACKAGED_TASKS)
}

fn parse_tasks(raw: &str) -> Result<Vec<TaskExample>> {
    let mut tasks = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let task: TaskExample = serde_json::from_str(line).map_err(|e| {
            EvalError::Source(format!("malformed task record on line {}: {e}", idx + 1))
        })?;
        tasks.push(task);
    }
    Ok(tasks)
}
