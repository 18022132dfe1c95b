use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    flow::{
        GenerationOptions, HarmBlockThreshold, HarmCategory, LLMClient, SafetySetting,
        parse_reply, require_non_empty,
    },
    video_suggestion::{
        entities::{VideoSuggestionRequest, VideoSuggestionResult},
        ports::VideoSuggestionService,
        prompt::VIDEO_SUGGESTION_PROMPT,
        schema::get_video_suggestion_schema,
    },
};

/// Workout content trips the dangerous-content filter on ordinary queries.
fn suggestion_options() -> GenerationOptions {
    GenerationOptions {
        safety_settings: vec![SafetySetting {
            category: HarmCategory::DangerousContent,
            threshold: HarmBlockThreshold::BlockNone,
        }],
    }
}

impl<LLM> VideoSuggestionService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self, request))]
    async fn suggest_videos(
        &self,
        request: VideoSuggestionRequest,
    ) -> Result<VideoSuggestionResult, CoreError> {
        require_non_empty("userProfile", &request.user_profile)?;
        require_non_empty("fitnessGoals", &request.fitness_goals)?;

        let prompt = VIDEO_SUGGESTION_PROMPT.render(&[
            ("user_profile", request.user_profile.as_str()),
            ("fitness_goals", request.fitness_goals.as_str()),
        ])?;

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_video_suggestion_schema(), suggestion_options())
            .await?;

        let result: VideoSuggestionResult = parse_reply(&raw_response)?;
        tracing::debug!(count = result.search_queries.len(), "Video queries suggested");

        Ok(result)
    }
}
