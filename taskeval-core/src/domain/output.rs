use serde_json::{Map, Value};

/// The five recognized fields of a structured support action.
///
/// `intent` and `target_system` are free-form strings, `priority` is one
/// of "low"/"medium"/"high", `requires_human` is a boolean and
/// `sla_hours` an integer. Predicted outputs may omit fields, add extra
/// ones or carry nulls; scoring handles all of those without failing.
pub const EXPECTED_FIELDS: [&str; 5] = [
    "intent",
    "priority",
    "requires_human",
    "target_system",
    "sla_hours",
];

/// A structured model output (expected or predicted): field name to
/// JSON value.
pub type StructuredOutput = Map<String, Value>;

/// Sentinel field a remote runner substitutes when the model response
/// is not parseable JSON. Its presence makes the output score as
/// non-compliant and non-matching downstream.
pub const RAW_FALLBACK_FIELD: &str = "_raw";
