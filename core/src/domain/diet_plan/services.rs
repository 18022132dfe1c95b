use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::{
        entities::{DietPlanRequest, DietPlanResult},
        ports::DietPlanService,
        prompt::DIET_PLAN_PROMPT,
        schema::get_diet_plan_schema,
    },
    flow::{GenerationOptions, LLMClient, parse_reply, require_non_empty},
};

impl<LLM> DietPlanService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self, request))]
    async fn generate_diet_plan(
        &self,
        request: DietPlanRequest,
    ) -> Result<DietPlanResult, CoreError> {
        require_non_empty("biography", &request.biography)?;
        require_non_empty("fitnessGoals", &request.fitness_goals)?;

        let prompt = DIET_PLAN_PROMPT.render(&[
            ("biography", request.biography.as_str()),
            ("fitness_goals", request.fitness_goals.as_str()),
        ])?;

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_diet_plan_schema(), GenerationOptions::default())
            .await?;

        parse_reply(&raw_response)
    }
}
