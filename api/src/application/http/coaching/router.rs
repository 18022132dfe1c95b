use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::answer_fitness_query::{__path_answer_fitness_query, answer_fitness_query};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(answer_fitness_query))]
pub struct CoachingApiDoc;

pub fn coaching_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/chat", state.args.server.root_path),
        post(answer_fitness_query),
    )
}
