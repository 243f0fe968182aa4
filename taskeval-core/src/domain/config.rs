use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

/// Which concrete runner a model configuration selects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    RuleBased,
    #[serde(rename = "openai_chat")]
    OpenAiChat,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RuleBased => write!(f, "rule_based"),
            Self::OpenAiChat => write!(f, "openai_chat"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelConfig {
    pub name: String,
    pub kind: ModelKind,
    pub params: serde_json::Value,
}

/// Static registry of evaluable models. Adding a provider means adding
/// an entry here; there is no runtime registration.
pub fn available_models() -> BTreeMap<String, ModelConfig> {
    let mut models = BTreeMap::new();
    models.insert(
        "rule_based".to_string(),
        ModelConfig {
            name: "rule_based".to_string(),
            kind: ModelKind::RuleBased,
            params: json!({}),
        },
    );
    // Requires OPENAI_API_KEY in the environment.
    models.insert(
        "openai_gpt4o".to_string(),
        ModelConfig {
            name: "openai_gpt4o".to_string(),
            kind: ModelKind::OpenAiChat,
            params: json!({ "model": "gpt-4o" }),
        },
    );
    models
}
