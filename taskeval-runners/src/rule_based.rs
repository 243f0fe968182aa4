use async_trait::async_trait;
use serde_json::json;
use taskeval_core::{ModelConfig, ModelRunner, Result, StructuredOutput};

/// Keyword-matching baseline.
///
/// Intentionally naive, but it lets the whole pipeline run without any
/// external API. Rules are applied in a fixed order; when several
/// intent rules match, the last one wins.
pub struct RuleBasedRunner {
    config: ModelConfig,
}

impl RuleBasedRunner {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    fn classify(&self, input_text: &str) -> StructuredOutput {
        let text = input_text.to_lowercase();

        let mut intent = "general_question";
        let mut target_system = "general";

        if ["refund", "charge", "billing", "invoice"]
            .iter()
            .any(|kw| text.contains(kw))
        {
            intent = "billing_issue";
            target_system = "billing";
        }
        if ["password", "login", "account"].iter().any(|kw| text.contains(kw)) {
            intent = "account_issue";
            target_system = "account";
        }
        if ["slow", "disconnect", "latency", "network"]
            .iter()
            .any(|kw| text.contains(kw))
        {
            intent = "technical_issue";
            target_system = "network";
        }
        if text.contains("cancel") || text.contains("close my account") {
            intent = "cancellation_request";
        }

        let (priority, sla_hours) = if ["urgent", "asap", "immediately", "not working"]
            .iter()
            .any(|kw| text.contains(kw))
        {
            ("high", 4)
        } else if text.contains("whenever") || text.contains("no rush") {
            ("low", 72)
        } else {
            ("medium", 24)
        };

        let requires_human = !(text.contains("just wanted to ask") || text.contains("curious"));

        json!({
            "intent": intent,
            "priority": priority,
            "requires_human": requires_human,
            "target_system": target_system,
            "sla_hours": sla_hours,
        })
        .as_object()
        .cloned()
        .unwrap_or_default()
    }
}

#[async_trait]
impl ModelRunner for RuleBasedRunner {
    async fn generate(
        &self,
        input_text: &str,
        _context: Option<&str>,
    ) -> Result<StructuredOutput> {
        Ok(self.classify(input_text))
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
