use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    exercise::{entities::VideoAnalysisResult, value_objects::VideoAnalysisRequest},
};

/// Service trait for exercise video analysis
pub trait ExerciseAnalysisService: Send + Sync {
    fn analyze_exercise_video(
        &self,
        request: VideoAnalysisRequest,
    ) -> impl Future<Output = Result<VideoAnalysisResult, CoreError>> + Send;
}
