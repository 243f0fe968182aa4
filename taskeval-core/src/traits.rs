use async_trait::async_trait;

use crate::domain::StructuredOutput;
use crate::error::Result;

/// A prediction-generating capability.
///
/// Implementations map a support request (plus optional account
/// context) to a structured output. They are expected to be pure with
/// respect to the evaluation run: no state carries over between calls.
#[async_trait]
pub trait ModelRunner: Send + Sync {
    async fn generate(
        &self,
        input_text: &str,
        context: Option<&str>,
    ) -> Result<StructuredOutput>;

    /// The registry name this runner was built from.
    fn name(&self) -> &str;
}
