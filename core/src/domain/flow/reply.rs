use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

/// A structured model reply. Deserialization enforces the shape; `check`
/// covers constraints serde cannot express.
pub trait ModelReply: DeserializeOwned {
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Parse-or-fail gate applied to every model reply.
pub fn parse_reply<T: ModelReply>(raw: &str) -> Result<T, CoreError> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body).map_err(|e| {
        error!("Model reply is not valid JSON: {}", e);
        CoreError::ReplyValidation(e.to_string())
    })?;

    // Derived struct deserializers also accept sequences, so `[12]` would pass as a struct.
    if !value.is_object() {
        error!("Model reply is not a JSON object");
        return Err(CoreError::ReplyValidation(
            "expected a JSON object".to_string(),
        ));
    }

    let reply: T = serde_json::from_value(value).map_err(|e| {
        error!("Model reply failed schema validation: {}", e);
        CoreError::ReplyValidation(e.to_string())
    })?;

    reply.check().map_err(|reason| {
        error!("Model reply failed constraint check: {}", reason);
        CoreError::ReplyValidation(reason)
    })?;

    Ok(reply)
}

/// Reject blank text fields before anything is sent.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingField(field.to_string()));
    }
    Ok(())
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let inner = inner.strip_suffix("```").unwrap_or(inner);

    // Language tag, with or without a newline after it.
    inner
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric())
        .trim()
}
