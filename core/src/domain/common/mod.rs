use crate::domain::submission::SubmissionLimits;

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct FitcoachConfig {
    pub llm: LLMConfig,
    pub limits: SubmissionLimits,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}
