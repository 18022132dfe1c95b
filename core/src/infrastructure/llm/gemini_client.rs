use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    flow::{GenerationOptions, LLMClient, SafetySetting},
    media::EncodedMedia,
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &LLMConfig) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
        )
    }

    fn build_request(
        parts: Vec<Part>,
        response_schema: serde_json::Value,
        options: GenerationOptions,
    ) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content { parts }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
            safety_settings: options.safety_settings,
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // reqwest errors embed the url, which carries the key
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::Transport(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamStatus {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        let candidate = gemini_response.candidates.into_iter().next().ok_or_else(|| {
            CoreError::ReplyValidation("No candidates in LLM response".to_string())
        })?;

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
            tracing::error!(finish_reason = %reason, "Gemini returned no text");
            return Err(CoreError::ReplyValidation(format!(
                "No text in LLM response (finish reason: {reason})"
            )));
        }

        Ok(text)
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_media(
        &self,
        prompt: String,
        media: EncodedMedia,
        response_schema: serde_json::Value,
        options: GenerationOptions,
    ) -> Result<String, CoreError> {
        let request = Self::build_request(
            vec![
                Part::Text { text: prompt },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: media.mime_type,
                        data: media.data,
                    },
                },
            ],
            response_schema,
            options,
        );

        self.call_gemini_api(request).await
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
        options: GenerationOptions,
    ) -> Result<String, CoreError> {
        let request = Self::build_request(
            vec![Part::Text { text: prompt }],
            response_schema,
            options,
        );

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::post,
    };
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        domain::flow::{HarmBlockThreshold, HarmCategory},
        test_support::spawn_stub,
    };

    #[derive(Clone)]
    struct StubState {
        status: StatusCode,
        body: Value,
        seen: Arc<Mutex<Vec<Value>>>,
    }

    async fn generate(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
        state.seen.lock().unwrap().push(body);
        (state.status, Json(state.body.clone())).into_response()
    }

    async fn stub_gemini(status: StatusCode, body: Value) -> (GeminiLLMClient, Arc<Mutex<Vec<Value>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route("/v1beta/models/{*call}", post(generate))
            .with_state(StubState {
                status,
                body,
                seen: Arc::clone(&seen),
            });
        let base_url = spawn_stub(router).await;
        let client = GeminiLLMClient::new("test-key".into(), "gemini-test".into(), base_url);
        (client, seen)
    }

    fn text_reply(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn sends_inline_media_with_its_own_type() {
        let (client, seen) = stub_gemini(StatusCode::OK, text_reply(r#"{"repetitionCount":4}"#)).await;
        let media = EncodedMedia::encode(b"clip", Some("video/webm"));

        let reply = client
            .generate_with_media(
                "count reps".into(),
                media.clone(),
                json!({"type": "object"}),
                GenerationOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(reply, r#"{"repetitionCount":4}"#);
        let body = &seen.lock().unwrap()[0];
        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "count reps");
        assert_eq!(parts[1]["inline_data"]["mime_type"], "video/webm");
        assert_eq!(parts[1]["inline_data"]["data"], media.data);
        assert_eq!(
            body["generation_config"]["response_mime_type"],
            "application/json"
        );
        assert!(body.get("safety_settings").is_none());
    }

    #[tokio::test]
    async fn forwards_safety_settings() {
        let (client, seen) = stub_gemini(StatusCode::OK, text_reply("{}")).await;
        let options = GenerationOptions {
            safety_settings: vec![SafetySetting {
                category: HarmCategory::DangerousContent,
                threshold: HarmBlockThreshold::BlockNone,
            }],
        };

        client
            .generate_with_text("hi".into(), json!({}), options)
            .await
            .unwrap();

        let body = &seen.lock().unwrap()[0];
        assert_eq!(
            body["safety_settings"],
            json!([{ "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_NONE" }])
        );
    }

    #[tokio::test]
    async fn joins_multi_part_text() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"answer\":" }, { "text": "\"ok\"}" }] }
            }]
        });
        let (client, _) = stub_gemini(StatusCode::OK, body).await;

        let reply = client
            .generate_with_text("q".into(), json!({}), GenerationOptions::default())
            .await
            .unwrap();

        assert_eq!(reply, r#"{"answer":"ok"}"#);
    }

    #[tokio::test]
    async fn non_success_status_is_surfaced() {
        let (client, _) = stub_gemini(
            StatusCode::TOO_MANY_REQUESTS,
            json!({"error": {"message": "quota"}}),
        )
        .await;

        let result = client
            .generate_with_text("q".into(), json!({}), GenerationOptions::default())
            .await;

        assert!(matches!(
            result,
            Err(CoreError::UpstreamStatus { status: 429, .. })
        ));
    }

    #[tokio::test]
    async fn blocked_reply_without_text_is_a_validation_error() {
        let body = json!({ "candidates": [{ "finishReason": "SAFETY" }] });
        let (client, _) = stub_gemini(StatusCode::OK, body).await;

        let result = client
            .generate_with_text("q".into(), json!({}), GenerationOptions::default())
            .await;

        assert!(matches!(result, Err(CoreError::ReplyValidation(msg)) if msg.contains("SAFETY")));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let client = GeminiLLMClient::new("k".into(), "m".into(), "http://127.0.0.1:9".into());

        let result = client
            .generate_with_text("q".into(), json!({}), GenerationOptions::default())
            .await;

        assert!(matches!(result, Err(CoreError::Transport(msg)) if !msg.contains("key=")));
    }
}
