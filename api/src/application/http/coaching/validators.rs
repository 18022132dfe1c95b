use fitcoach_core::domain::coaching::ChatQuery;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatQueryValidator {
    #[validate(length(min = 1, max = 2000, message = "query is required"))]
    #[schema(example = "How many rest days should I take per week?")]
    pub query: String,
    #[validate(length(min = 1, max = 5000, message = "biography is required"))]
    #[schema(example = "45-year-old beginner")]
    pub biography: String,
}

impl From<ChatQueryValidator> for ChatQuery {
    fn from(value: ChatQueryValidator) -> Self {
        ChatQuery {
            query: value.query,
            biography: value.biography,
        }
    }
}
