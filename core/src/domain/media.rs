use std::fmt;

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

const DATA_URI_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Binary content carried inside a text request: a media type tag plus the
/// standard base64 encoding of the bytes.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EncodedMedia {
    pub mime_type: String,
    pub data: String,
}

impl EncodedMedia {
    /// Encode raw bytes, tagging them with `mime_type`. A missing or blank type
    /// is tagged as `application/octet-stream`.
    pub fn encode(bytes: &[u8], mime_type: Option<&str>) -> Self {
        let mime_type = mime_type
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_MIME_TYPE);

        Self {
            mime_type: mime_type.to_string(),
            data: general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` string.
    pub fn from_data_uri(uri: &str) -> Result<Self, CoreError> {
        let rest = uri.strip_prefix(DATA_URI_PREFIX).ok_or_else(|| {
            CoreError::InvalidEncodedPayload("missing 'data:' prefix".to_string())
        })?;

        let (mime_type, data) = rest.split_once(BASE64_MARKER).ok_or_else(|| {
            CoreError::InvalidEncodedPayload("missing ';base64,' marker".to_string())
        })?;

        if mime_type.trim().is_empty() {
            return Err(CoreError::InvalidEncodedPayload(
                "empty media type".to_string(),
            ));
        }

        let media = Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        };
        media.decode()?;

        Ok(media)
    }

    pub fn to_data_uri(&self) -> String {
        format!(
            "{DATA_URI_PREFIX}{}{BASE64_MARKER}{}",
            self.mime_type, self.data
        )
    }

    pub fn decode(&self) -> Result<Vec<u8>, CoreError> {
        general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| CoreError::InvalidEncodedPayload(format!("invalid base64: {e}")))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of the decoded payload, without decoding it.
    pub fn decoded_len(&self) -> usize {
        let padding = self.data.bytes().rev().take_while(|b| *b == b'=').count().min(2);
        (self.data.len() / 4 * 3).saturating_sub(padding)
    }
}

// Payloads run to tens of megabytes; never dump them into logs.
impl fmt::Debug for EncodedMedia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedMedia")
            .field("mime_type", &self.mime_type)
            .field("encoded_len", &self.data.len())
            .finish()
    }
}
