use axum::{
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use bytes::Bytes;
use fitcoach_core::domain::{
    common::entities::app_errors::CoreError,
    exercise::{ExerciseAnalysisService, VideoAnalysisRequest, VideoAnalysisResult},
};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const ANALYSIS_FAILED: &str = "Analysis failed on the server.";

/// Multipart body accepted by [`analyze_video`]; used for documentation only.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct AnalyzeVideoForm {
    #[schema(value_type = String, format = Binary)]
    video_file: Vec<u8>,
    #[schema(example = "Push-ups")]
    exercise_type: String,
}

fn read_error(error: MultipartError, max_video_bytes: usize) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Upload rejected by the body limit");
        return ApiError::from(CoreError::UploadTooLarge {
            max: max_video_bytes,
        });
    }

    ApiError::BadRequest(format!("Failed to read multipart body: {}", error.body_text()))
}

#[utoipa::path(
    post,
    path = "/analyze-video",
    tag = "exercise",
    summary = "Count repetitions in an exercise video",
    description = "Counts repetitions of the selected exercise in the uploaded clip and returns optional form feedback.",
    request_body(content = AnalyzeVideoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = VideoAnalysisResult),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_video(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<VideoAnalysisResult>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let max_video_bytes = state.limits.max_video_bytes;
    let mut video: Option<Bytes> = None;
    let mut mime_type: Option<String> = None;
    let mut exercise_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error(e, max_video_bytes))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "videoFile" => {
                mime_type = field.content_type().map(|c| c.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| read_error(e, max_video_bytes))?;
                state.limits.check_size(data.len())?;
                video = Some(data);
            }
            "exerciseType" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| read_error(e, max_video_bytes))?;
                exercise_type = Some(value);
            }
            _ => {}
        }
    }

    let request = VideoAnalysisRequest::from_upload(
        video.as_deref().unwrap_or_default(),
        mime_type.as_deref(),
        exercise_type.as_deref().unwrap_or_default(),
    )?;

    let result = state
        .service
        .analyze_exercise_video(request)
        .await
        .map_err(|e| {
            error!(error = %e, "Video analysis failed");
            ApiError::InternalServerError(ANALYSIS_FAILED.to_string())
        })?;

    Ok(Response::OK(result))
}
