use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    video_suggestion::entities::{VideoSuggestionRequest, VideoSuggestionResult},
};

pub trait VideoSuggestionService: Send + Sync {
    fn suggest_videos(
        &self,
        request: VideoSuggestionRequest,
    ) -> impl Future<Output = Result<VideoSuggestionResult, CoreError>> + Send;
}
