use std::sync::Mutex;

use axum::Router;
use tokio::net::TcpListener;

use crate::domain::{
    common::entities::app_errors::CoreError,
    flow::{GenerationOptions, LLMClient},
    media::EncodedMedia,
};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub media: Option<EncodedMedia>,
    pub schema: serde_json::Value,
    pub options: GenerationOptions,
}

/// Canned model client that records what it was asked.
#[derive(Debug)]
pub struct StubLLMClient {
    reply: Result<String, CoreError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubLLMClient {
    pub fn replying(raw: &str) -> Self {
        Self {
            reply: Ok(raw.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: CoreError) -> Self {
        Self {
            reply: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) -> Result<String, CoreError> {
        self.calls.lock().unwrap().push(call);
        self.reply.clone()
    }
}

impl LLMClient for StubLLMClient {
    async fn generate_with_media(
        &self,
        prompt: String,
        media: EncodedMedia,
        response_schema: serde_json::Value,
        options: GenerationOptions,
    ) -> Result<String, CoreError> {
        self.record(RecordedCall {
            prompt,
            media: Some(media),
            schema: response_schema,
            options,
        })
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
        options: GenerationOptions,
    ) -> Result<String, CoreError> {
        self.record(RecordedCall {
            prompt,
            media: None,
            schema: response_schema,
            options,
        })
    }
}

/// Serve `router` on an ephemeral local port and return its base url.
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
