use crate::{
    domain::common::{FitcoachConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::gemini_client::GeminiLLMClient,
};

pub type FitcoachService = Service<GeminiLLMClient>;

pub fn create_service(config: FitcoachConfig) -> Result<FitcoachService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        tracing::error!("GEMINI_API_KEY is not set");
        return Err(CoreError::MissingField("GEMINI_API_KEY".to_string()));
    }

    let llm_client = GeminiLLMClient::from_config(&config.llm);
    tracing::info!(model = %config.llm.gemini_model, "Gemini client configured");

    Ok(Service::new(llm_client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::LLMConfig;

    #[test]
    fn blank_api_key_is_refused() {
        let config = FitcoachConfig {
            llm: LLMConfig::default(),
            limits: Default::default(),
        };

        assert_eq!(
            create_service(config).unwrap_err(),
            CoreError::MissingField("GEMINI_API_KEY".to_string())
        );
    }

    #[test]
    fn configured_key_builds_a_service() {
        let config = FitcoachConfig {
            llm: LLMConfig {
                gemini_api_key: "k".to_string(),
                ..LLMConfig::default()
            },
            limits: Default::default(),
        };

        assert!(create_service(config).is_ok());
    }
}
