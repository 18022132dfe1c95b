use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, exercise::entities::ExerciseType,
    media::EncodedMedia,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnalysisRequest {
    pub video: EncodedMedia,
    pub exercise: ExerciseType,
}

impl VideoAnalysisRequest {
    /// Build a request from an uploaded clip, tagging the payload with the
    /// upload's own media type.
    pub fn from_upload(
        video_bytes: &[u8],
        mime_type: Option<&str>,
        exercise_label: &str,
    ) -> Result<Self, CoreError> {
        if video_bytes.is_empty() {
            return Err(CoreError::MissingField("videoFile".to_string()));
        }

        let exercise = exercise_label.parse::<ExerciseType>()?;

        Ok(Self {
            video: EncodedMedia::encode(video_bytes, mime_type),
            exercise,
        })
    }

    /// Build a request from a `data:<mime>;base64,...` recording.
    pub fn from_data_uri(video_data_uri: &str, exercise_label: &str) -> Result<Self, CoreError> {
        if video_data_uri.trim().is_empty() {
            return Err(CoreError::MissingField("videoDataUri".to_string()));
        }

        let video = EncodedMedia::from_data_uri(video_data_uri.trim())?;
        if video.is_empty() {
            return Err(CoreError::MissingField("videoDataUri".to_string()));
        }

        let exercise = exercise_label.parse::<ExerciseType>()?;

        Ok(Self { video, exercise })
    }
}
