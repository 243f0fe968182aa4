use serde::{Deserialize, Serialize};

use super::output::StructuredOutput;

/// One evaluation item: a support-style request plus the structured
/// action we expect a model to produce for it.
///
/// Loaded once from the task source and read-only for the rest of the
/// run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskExample {
    pub task_id: String,
    pub input_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub expected_output: StructuredOutput,
}
