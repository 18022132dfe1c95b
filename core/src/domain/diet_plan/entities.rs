use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::flow::ModelReply;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanRequest {
    /// Age, gender, weight, height, activity level.
    pub biography: String,
    pub fitness_goals: String,
}

/// A single formatted block of text, returned exactly as the model wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DietPlanResult {
    pub diet_plan: String,
}

impl ModelReply for DietPlanResult {
    fn check(&self) -> Result<(), String> {
        if self.diet_plan.trim().is_empty() {
            return Err("dietPlan is empty".to_string());
        }
        Ok(())
    }
}
