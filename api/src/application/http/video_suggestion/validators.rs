use fitcoach_core::domain::video_suggestion::VideoSuggestionRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VideoSuggestionValidator {
    #[validate(length(min = 1, max = 5000, message = "userProfile is required"))]
    #[schema(example = "beginner, knee injury last year")]
    pub user_profile: String,
    #[validate(length(min = 1, max = 2000, message = "fitnessGoals is required"))]
    #[schema(example = "low-impact cardio")]
    pub fitness_goals: String,
}

impl From<VideoSuggestionValidator> for VideoSuggestionRequest {
    fn from(value: VideoSuggestionValidator) -> Self {
        VideoSuggestionRequest {
            user_profile: value.user_profile,
            fitness_goals: value.fitness_goals,
        }
    }
}
