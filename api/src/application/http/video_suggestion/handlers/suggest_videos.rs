use axum::extract::State;
use fitcoach_core::domain::video_suggestion::{VideoSuggestionResult, VideoSuggestionService};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    video_suggestion::validators::VideoSuggestionValidator,
};

#[utoipa::path(
    post,
    path = "/video-suggestions",
    tag = "video-suggestions",
    summary = "Suggest workout video searches",
    description = "Returns search phrases; clients turn each into a video search link.",
    request_body = VideoSuggestionValidator,
    responses(
        (status = 200, body = VideoSuggestionResult),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn suggest_videos(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<VideoSuggestionValidator>,
) -> Result<Response<VideoSuggestionResult>, ApiError> {
    let suggestions = state
        .service
        .suggest_videos(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(suggestions))
}
