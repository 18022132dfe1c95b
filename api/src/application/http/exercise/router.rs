use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    analyze_recording::{__path_analyze_recording, analyze_recording},
    analyze_video::{__path_analyze_video, analyze_video},
};
use crate::application::http::server::app_state::AppState;

/// Room for the multipart boundaries and the `exerciseType` field on top of the video itself.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;
const JSON_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_video, analyze_recording))]
pub struct ExerciseApiDoc;

/// Body limit for a JSON body carrying `max_video_bytes` as base64.
fn recording_body_limit(max_video_bytes: usize) -> usize {
    max_video_bytes
        .div_ceil(3)
        .saturating_mul(4)
        .saturating_add(JSON_OVERHEAD)
}

pub fn exercise_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    let max_video_bytes = state.limits.max_video_bytes;

    Router::new()
        .route(
            &format!("{root_path}/api/analyze-video"),
            post(analyze_video).layer(DefaultBodyLimit::max(
                max_video_bytes.saturating_add(MULTIPART_OVERHEAD),
            )),
        )
        .route(
            &format!("{root_path}/api/analyze-recording"),
            post(analyze_recording)
                .layer(DefaultBodyLimit::max(recording_body_limit(max_video_bytes))),
        )
}
