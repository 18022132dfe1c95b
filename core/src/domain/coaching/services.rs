use tracing::instrument;

use crate::domain::{
    coaching::{
        entities::{ChatAnswer, ChatQuery},
        ports::CoachingService,
        prompt::FITNESS_QUERY_PROMPT,
        schema::get_chat_answer_schema,
    },
    common::{entities::app_errors::CoreError, services::Service},
    flow::{GenerationOptions, LLMClient, parse_reply, require_non_empty},
};

impl<LLM> CoachingService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self, query))]
    async fn answer_fitness_query(&self, query: ChatQuery) -> Result<ChatAnswer, CoreError> {
        require_non_empty("query", &query.query)?;
        require_non_empty("biography", &query.biography)?;

        let prompt = FITNESS_QUERY_PROMPT.render(&[
            ("biography", query.biography.as_str()),
            ("query", query.query.as_str()),
        ])?;

        let raw_response = self
            .llm_client
            .generate_with_text(
                prompt,
                get_chat_answer_schema(),
                GenerationOptions::default(),
            )
            .await?;

        parse_reply(&raw_response)
    }
}
