use std::time::Duration;

use crate::domain::{
    common::entities::app_errors::CoreError, exercise::entities::ExerciseType,
    submission::preview::{PreviewHandle, PreviewRegistry},
};

pub const MAX_VIDEO_BYTES: usize = 50 * 1024 * 1024; // 50 MB
pub const MAX_VIDEO_DURATION: Duration = Duration::from_secs(45);

/// A recorded or selected clip waiting to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoClip {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: Option<String>,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionLimits {
    pub max_video_bytes: usize,
    pub max_video_duration: Duration,
}

impl Default for SubmissionLimits {
    fn default() -> Self {
        Self {
            max_video_bytes: MAX_VIDEO_BYTES,
            max_video_duration: MAX_VIDEO_DURATION,
        }
    }
}

impl SubmissionLimits {
    pub fn check_size(&self, size: usize) -> Result<(), CoreError> {
        if size > self.max_video_bytes {
            return Err(CoreError::FileTooLarge {
                size,
                max: self.max_video_bytes,
            });
        }
        Ok(())
    }

    pub fn check_duration(&self, duration: Duration) -> Result<(), CoreError> {
        if duration > self.max_video_duration {
            return Err(CoreError::VideoTooLong {
                duration,
                max: self.max_video_duration,
            });
        }
        Ok(())
    }

    /// Admit a clip for submission. The size check runs first; a preview is
    /// then allocated to probe the clip and is released again if anything
    /// after that fails.
    pub fn admit(
        &self,
        clip: &VideoClip,
        exercise_label: &str,
        previews: &PreviewRegistry,
    ) -> Result<(ExerciseType, PreviewHandle), CoreError> {
        if clip.bytes.is_empty() {
            return Err(CoreError::MissingField("videoFile".to_string()));
        }
        self.check_size(clip.bytes.len())?;

        let preview = previews.allocate();
        self.check_duration(clip.duration)?;
        let exercise = exercise_label.parse()?;

        Ok((exercise, preview))
    }
}
