use std::time::Duration;

use thiserror::Error;

/// Coarse grouping used by the HTTP layer and clients to decide how a failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any request was issued.
    Input,
    /// Network failure or non-success status from a remote peer.
    Transport,
    /// The model replied, but not in the expected shape.
    Validation,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("File too large: {size} bytes exceeds the {max} byte limit")]
    FileTooLarge { size: usize, max: usize },

    /// The upload was cut off by a body limit before its size was known.
    #[error("Upload exceeds the {max} byte limit")]
    UploadTooLarge { max: usize },

    #[error("Video too long: {duration:?} exceeds the {max:?} limit")]
    VideoTooLong { duration: Duration, max: Duration },

    #[error("Unsupported exercise type: {0}")]
    UnsupportedExercise(String),

    #[error("Invalid encoded payload: {0}")]
    InvalidEncodedPayload(String),

    #[error("A submission is already pending")]
    SubmissionPending,

    #[error("Capture device unavailable: {0}")]
    CaptureUnavailable(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Model reply did not match the expected shape: {0}")]
    ReplyValidation(String),

    #[error("Prompt template error: {0}")]
    TemplateError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::MissingField(_)
            | CoreError::FileTooLarge { .. }
            | CoreError::UploadTooLarge { .. }
            | CoreError::VideoTooLong { .. }
            | CoreError::UnsupportedExercise(_)
            | CoreError::InvalidEncodedPayload(_)
            | CoreError::SubmissionPending
            | CoreError::CaptureUnavailable(_) => ErrorKind::Input,
            CoreError::Transport(_)
            | CoreError::UpstreamStatus { .. }
            | CoreError::ExternalServiceError(_) => ErrorKind::Transport,
            CoreError::ReplyValidation(_) => ErrorKind::Validation,
            CoreError::TemplateError(_) | CoreError::InternalServerError => ErrorKind::Internal,
        }
    }

    /// Message suitable for showing to the person who triggered the request.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::FileTooLarge { max, .. } | CoreError::UploadTooLarge { max } => {
                format!("Please upload a video smaller than {}.", format_size(*max))
            }
            CoreError::VideoTooLong { max, .. } => format!(
                "Please upload a video with a maximum duration of {} seconds.",
                max.as_secs()
            ),
            CoreError::MissingField(field) => match field.as_str() {
                "exerciseType" => "Please select an exercise type.".to_string(),
                "videoFile" => "Please upload a video.".to_string(),
                other => format!("{other} is required."),
            },
            CoreError::UnsupportedExercise(label) => {
                format!("'{label}' is not a supported exercise.")
            }
            CoreError::SubmissionPending => {
                "A request is already in progress. Please wait for it to finish.".to_string()
            }
            CoreError::CaptureUnavailable(_) => {
                "Could not access the camera. Please check permissions.".to_string()
            }
            CoreError::InvalidEncodedPayload(_) => {
                "The submitted data is invalid.".to_string()
            }
            CoreError::ReplyValidation(_) => {
                "The analysis returned an unexpected result. Please try again.".to_string()
            }
            CoreError::Transport(_)
            | CoreError::UpstreamStatus { .. }
            | CoreError::ExternalServiceError(_)
            | CoreError::TemplateError(_)
            | CoreError::InternalServerError => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

/// Human-readable size, rounded down to one decimal so the stated limit is never above the real one.
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * 1024;

    let (unit, label) = match bytes {
        b if b >= MB => (MB, "MB"),
        b if b >= KB => (KB, "KB"),
        b => return format!("{b} bytes"),
    };

    let tenths = bytes.saturating_mul(10) / unit;
    if tenths % 10 == 0 {
        format!("{}{label}", tenths / 10)
    } else {
        format!("{}.{}{label}", tenths / 10, tenths % 10)
    }
}
