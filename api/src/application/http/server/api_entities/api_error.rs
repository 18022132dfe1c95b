use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fitcoach_core::domain::common::entities::app_errors::{CoreError, ErrorKind};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

/// Body of every failed response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ApiErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let message = error.user_message();

        match error.kind() {
            ErrorKind::Input => match error {
                CoreError::FileTooLarge { .. } | CoreError::UploadTooLarge { .. } => {
                    ApiError::PayloadTooLarge(message)
                }
                _ => ApiError::BadRequest(message),
            },
            ErrorKind::Transport => {
                tracing::error!(error = %error, "Upstream call failed");
                ApiError::BadGateway(message)
            }
            ErrorKind::Validation | ErrorKind::Internal => {
                tracing::error!(error = %error, "Request processing failed");
                ApiError::InternalServerError(message)
            }
        }
    }
}

/// JSON body extractor that also runs `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(first_validation_message(&e)))?;

        Ok(ValidateJson(value))
    }
}

fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_values()
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
