use utoipa::OpenApi;

use crate::application::http::{
    coaching::router::CoachingApiDoc, diet_plan::router::DietPlanApiDoc,
    exercise::router::ExerciseApiDoc, health::__path_health_check,
    server::config::__path_get_config, video_suggestion::router::VideoSuggestionApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "fitcoach API"
    ),
    paths(get_config, health_check),
    nest(
        (path = "/api", api = ExerciseApiDoc),
        (path = "/api", api = DietPlanApiDoc),
        (path = "/api", api = CoachingApiDoc),
        (path = "/api", api = VideoSuggestionApiDoc),
    )
)]
pub struct ApiDoc;
