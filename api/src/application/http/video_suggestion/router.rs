use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::suggest_videos::{__path_suggest_videos, suggest_videos};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(suggest_videos))]
pub struct VideoSuggestionApiDoc;

pub fn video_suggestion_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/video-suggestions", state.args.server.root_path),
        post(suggest_videos),
    )
}
