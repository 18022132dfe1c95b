use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use fitcoach_core::domain::{
    common::entities::app_errors::CoreError,
    exercise::{ExerciseAnalysisService, VideoAnalysisRequest, VideoAnalysisResult},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use super::analyze_video::ANALYSIS_FAILED;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

/// A clip recorded in the browser during a live session.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRecordingBody {
    #[schema(example = "data:video/webm;base64,GkXfo59ChoEBQveBAULygQRC84EIQoKEd2VibUKHgQRChYECGFOAZwEAAAAAAAAA")]
    pub video_data_uri: String,
    #[schema(example = "Squats")]
    pub exercise_type: String,
}

#[utoipa::path(
    post,
    path = "/analyze-recording",
    tag = "exercise",
    summary = "Count repetitions in a live-session recording",
    description = "Same analysis as `/analyze-video`, for a clip sent inline as a base64 data URI.",
    request_body = AnalyzeRecordingBody,
    responses(
        (status = 200, body = VideoAnalysisResult),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_recording(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRecordingBody>, JsonRejection>,
) -> Result<Response<VideoAnalysisResult>, ApiError> {
    let max_video_bytes = state.limits.max_video_bytes;
    let Json(body) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::from(CoreError::UploadTooLarge {
                max: max_video_bytes,
            })
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    })?;

    let request = VideoAnalysisRequest::from_data_uri(&body.video_data_uri, &body.exercise_type)?;
    state.limits.check_size(request.video.decoded_len())?;

    let result = state
        .service
        .analyze_exercise_video(request)
        .await
        .map_err(|e| {
            error!(error = %e, "Recording analysis failed");
            ApiError::InternalServerError(ANALYSIS_FAILED.to_string())
        })?;

    Ok(Response::OK(result))
}
