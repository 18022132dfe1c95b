use std::sync::Arc;

use crate::domain::flow::ports::LLMClient;

/// Stateless service implementing every flow. Holds nothing but the model client,
/// so clones are cheap and calls never observe each other.
#[derive(Debug)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: Arc<LLM>,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
        }
    }
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
        }
    }
}
