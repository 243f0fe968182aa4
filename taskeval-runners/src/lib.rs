pub mod openai;
pub mod prompts;
pub mod rule_based;

pub use openai::*;
pub use rule_based::*;

use taskeval_core::{ModelConfig, ModelKind, ModelRunner, Result};

/// Build the runner a model configuration selects.
///
/// Rule-based construction cannot fail; the OpenAI runner fails fast
/// when its credentials are missing, before any task is processed.
pub fn create_runner(config: &ModelConfig) -> Result<Box<dyn ModelRunner>> {
    match config.kind {
        ModelKind::RuleBased => Ok(Box::new(RuleBasedRunner::new(config.clone()))),
        ModelKind::OpenAiChat => Ok(Box::new(OpenAiChatRunner::from_env(config.clone())?)),
    }
}
