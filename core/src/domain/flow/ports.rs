use std::future::Future;

use serde::Serialize;

use crate::domain::{common::entities::app_errors::CoreError, media::EncodedMedia};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
    BlockLowAndAbove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Per-call knobs forwarded to the model. Defaults leave the provider's settings untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub safety_settings: Vec<SafetySetting>,
}

/// LLM Client trait for calling AI models
pub trait LLMClient: Send + Sync {
    /// Prompt plus one attached media payload. Returns the raw reply text.
    fn generate_with_media(
        &self,
        prompt: String,
        media: EncodedMedia,
        response_schema: serde_json::Value,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
