use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

use crate::{
    application::http::server::http_server::{router, state},
    args::Args,
};

#[derive(Clone)]
struct StubReply {
    status: StatusCode,
    body: Value,
}

#[derive(Clone)]
struct StubState {
    reply: Arc<Mutex<StubReply>>,
    seen: Arc<Mutex<Vec<Value>>>,
}

async fn generate(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    state.seen.lock().unwrap().push(body);
    let reply = state.reply.lock().unwrap().clone();
    (reply.status, Json(reply.body)).into_response()
}

/// A fake Gemini endpoint on an ephemeral port, plus helpers to build the API against it.
pub struct GeminiStub {
    base_url: String,
    state: StubState,
}

impl GeminiStub {
    /// Make the model answer with `text` as its only candidate part.
    pub fn reply_with(&self, text: &str) {
        *self.state.reply.lock().unwrap() = StubReply {
            status: StatusCode::OK,
            body: json!({
                "candidates": [{
                    "content": { "parts": [{ "text": text }], "role": "model" },
                    "finishReason": "STOP"
                }]
            }),
        };
    }

    pub fn fail_with(&self, status: StatusCode) {
        *self.state.reply.lock().unwrap() = StubReply {
            status,
            body: json!({ "error": { "message": "stub failure" } }),
        };
    }

    /// Request bodies the stub received, oldest first.
    pub fn requests(&self) -> Vec<Value> {
        self.state.seen.lock().unwrap().clone()
    }

    pub async fn server(&self) -> TestServer {
        self.server_with(&[]).await
    }

    pub async fn server_with(&self, extra: &[&str]) -> TestServer {
        let mut argv = vec![
            "fitcoach-api",
            "--gemini-api-key",
            "test-key",
            "--gemini-model",
            "gemini-test",
            "--gemini-base-url",
            self.base_url.as_str(),
        ];
        argv.extend_from_slice(extra);

        let args = Args::try_parse_from(argv).unwrap();
        let app_state = state(Arc::new(args)).await.unwrap();
        TestServer::new(router(app_state).unwrap())
    }
}

impl AsyncTestContext for GeminiStub {
    async fn setup() -> Self {
        let state = StubState {
            reply: Arc::new(Mutex::new(StubReply {
                status: StatusCode::OK,
                body: json!({ "candidates": [] }),
            })),
            seen: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/v1beta/models/{*call}", post(generate))
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        GeminiStub {
            base_url: format!("http://{addr}"),
            state,
        }
    }
}
