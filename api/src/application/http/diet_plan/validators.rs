use fitcoach_core::domain::diet_plan::DietPlanRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanValidator {
    #[validate(length(min = 1, max = 5000, message = "biography is required"))]
    #[schema(example = "30-year-old male, 80kg, desk job")]
    pub biography: String,
    #[validate(length(min = 1, max = 2000, message = "fitnessGoals is required"))]
    #[schema(example = "build muscle")]
    pub fitness_goals: String,
}

impl From<DietPlanValidator> for DietPlanRequest {
    fn from(value: DietPlanValidator) -> Self {
        DietPlanRequest {
            biography: value.biography,
            fitness_goals: value.fitness_goals,
        }
    }
}
