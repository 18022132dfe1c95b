use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use fitcoach_core::domain::{
    common::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, FitcoachConfig, LLMConfig},
    submission::limits::{MAX_VIDEO_BYTES, MAX_VIDEO_DURATION, SubmissionLimits},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "fitcoach-api", version, about = "fitcoach HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/fitcoach`.
    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "MAX_VIDEO_BYTES", default_value_t = MAX_VIDEO_BYTES)]
    pub max_video_bytes: usize,

    #[arg(long, env = "MAX_VIDEO_SECONDS", default_value_t = MAX_VIDEO_DURATION.as_secs())]
    pub max_video_seconds: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for FitcoachConfig {
    fn from(value: Args) -> Self {
        FitcoachConfig {
            llm: LLMConfig {
                gemini_api_key: value.llm.gemini_api_key,
                gemini_model: value.llm.gemini_model,
                gemini_base_url: value.llm.gemini_base_url,
            },
            limits: SubmissionLimits {
                max_video_bytes: value.server.max_video_bytes,
                max_video_duration: Duration::from_secs(value.server.max_video_seconds),
            },
        }
    }
}
