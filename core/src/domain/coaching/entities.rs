use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::flow::ModelReply;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatQuery {
    pub query: String,
    /// Context used to personalise the answer.
    pub biography: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ChatAnswer {
    pub answer: String,
}

impl ModelReply for ChatAnswer {
    fn check(&self) -> Result<(), String> {
        if self.answer.trim().is_empty() {
            return Err("answer is empty".to_string());
        }
        Ok(())
    }
}
