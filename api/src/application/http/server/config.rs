use axum::extract::State;
use fitcoach_core::domain::exercise::ExerciseType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

/// Limits and choices a client needs before it can build a submission.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub max_video_bytes: usize,
    pub max_video_duration_seconds: u64,
    pub exercise_types: Vec<ExerciseType>,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get client configuration",
    responses(
        (status = 200, body = ConfigResponse)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Result<Response<ConfigResponse>, ApiError> {
    Ok(Response::OK(ConfigResponse {
        max_video_bytes: state.limits.max_video_bytes,
        max_video_duration_seconds: state.limits.max_video_duration.as_secs(),
        exercise_types: ExerciseType::ALL.to_vec(),
    }))
}
