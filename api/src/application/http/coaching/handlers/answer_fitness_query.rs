use axum::extract::State;
use fitcoach_core::domain::coaching::{ChatAnswer, CoachingService};

use crate::application::http::{
    coaching::validators::ChatQueryValidator,
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
    path = "/chat",
    tag = "coaching",
    summary = "Ask a fitness question",
    request_body = ChatQueryValidator,
    responses(
        (status = 200, body = ChatAnswer),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn answer_fitness_query(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatQueryValidator>,
) -> Result<Response<ChatAnswer>, ApiError> {
    let answer = state
        .service
        .answer_fitness_query(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(answer))
}
