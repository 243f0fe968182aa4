use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use taskeval_core::{
    EvalError, ModelConfig, ModelRunner, Result, StructuredOutput, RAW_FALLBACK_FIELD,
};

use crate::prompts::support_action_prompt;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";

/// Runner backed by an OpenAI chat completion model.
///
/// Sampling is pinned to temperature 0 so repeated runs are as
/// deterministic as the API allows. A response body that is not a JSON
/// object is wrapped in a `_raw` sentinel instead of failing the run;
/// transport and API errors still propagate.
pub struct OpenAiChatRunner {
    config: ModelConfig,
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl OpenAiChatRunner {
    /// Build from the environment. Fails fast when `OPENAI_API_KEY` is
    /// unset so a misconfigured run aborts before any task is touched.
    pub fn from_env(config: ModelConfig) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            EvalError::Provider("OPENAI_API_KEY environment variable is not set".to_string())
        })?;
        Ok(Self::new(config, api_key))
    }

    pub fn new(config: ModelConfig, api_key: String) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Point the runner at a different endpoint. Used to target mock
    /// servers in tests.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    fn model(&self) -> &str {
        self.config
            .params
            .get("model")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_MODEL)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl ModelRunner for OpenAiChatRunner {
    async fn generate(
        &self,
        input_text: &str,
        context: Option<&str>,
    ) -> Result<StructuredOutput> {
        let prompt = support_action_prompt(input_text, context);
        let body = json!({
            "model": self.model(),
            "messages": [
                { "role": "system", "content": "You are a strict JSON-only assistant." },
                { "role": "user", "content": prompt },
            ],
            "temperature": 0.0,
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| EvalError::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| EvalError::Http(e.to_string()))?;

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| EvalError::Http(e.to_string()))?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(output)) => Ok(output),
            _ => {
                tracing::warn!(
                    model = self.model(),
                    "model returned non-JSON content, substituting raw fallback"
                );
                let mut fallback = Map::new();
                fallback.insert(RAW_FALLBACK_FIELD.to_string(), Value::String(content));
                Ok(fallback)
            }
        }
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
