use axum::extract::State;
use fitcoach_core::domain::diet_plan::{DietPlanResult, DietPlanService};

use crate::application::http::{
    diet_plan::validators::DietPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/diet-plan",
    tag = "diet-plan",
    summary = "Generate a diet plan",
    description = "Writes a personalised 7-day diet plan from a short biography and the user's goals.",
    request_body = DietPlanValidator,
    responses(
        (status = 200, body = DietPlanResult),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn generate_diet_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DietPlanValidator>,
) -> Result<Response<DietPlanResult>, ApiError> {
    let plan = state
        .service
        .generate_diet_plan(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use test_context::test_context;

    use crate::application::http::test_support::GeminiStub;

    #[test_context(GeminiStub)]
    #[tokio::test]
    async fn plan_is_relayed_verbatim(ctx: &mut GeminiStub) {
        ctx.reply_with(r#"{"dietPlan": "Day 1: ...\nDay 2: ..."}"#);
        let server = ctx.server().await;

        let response = server
            .post("/api/diet-plan")
            .json(&json!({
                "biography": "30-year-old male, 80kg",
                "fitnessGoals": "build muscle"
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({"dietPlan": "Day 1: ...\nDay 2: ..."})
        );
    }

    #[test_context(GeminiStub)]
    #[tokio::test]
    async fn empty_biography_is_rejected(ctx: &mut GeminiStub) {
        let server = ctx.server().await;

        let response = server
            .post("/api/diet-plan")
            .json(&json!({"biography": "", "fitnessGoals": "build muscle"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({"error": "biography is required"})
        );
        assert!(ctx.requests().is_empty());
    }

    #[test_context(GeminiStub)]
    #[tokio::test]
    async fn blank_goals_are_rejected(ctx: &mut GeminiStub) {
        let server = ctx.server().await;

        let response = server
            .post("/api/diet-plan")
            .json(&json!({"biography": "runner", "fitnessGoals": "   "}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(ctx.requests().is_empty());
    }

    #[test_context(GeminiStub)]
    #[tokio::test]
    async fn reply_with_extra_fields_is_rejected(ctx: &mut GeminiStub) {
        ctx.reply_with(r#"{"dietPlan": "Day 1", "calories": 2000}"#);
        let server = ctx.server().await;

        let response = server
            .post("/api/diet-plan")
            .json(&json!({"biography": "runner", "fitnessGoals": "endurance"}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test_context(GeminiStub)]
    #[tokio::test]
    async fn upstream_outage_is_a_bad_gateway(ctx: &mut GeminiStub) {
        ctx.fail_with(StatusCode::SERVICE_UNAVAILABLE);
        let server = ctx.server().await;

        let response = server
            .post("/api/diet-plan")
            .json(&json!({"biography": "runner", "fitnessGoals": "endurance"}))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
    }
}
