use reqwest::{
    Client, Response, Url,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

use crate::domain::{
    coaching::entities::{ChatAnswer, ChatQuery},
    common::entities::app_errors::CoreError,
    diet_plan::entities::{DietPlanRequest, DietPlanResult},
    exercise::entities::VideoAnalysisResult,
    flow::{ModelReply, parse_reply, require_non_empty},
    media::{EncodedMedia, FALLBACK_MIME_TYPE},
    submission::{
        limits::{SubmissionLimits, VideoClip},
        preview::PreviewRegistry,
        sequencer::{RequestSequencer, Sequenced},
    },
    video_suggestion::entities::{VideoSuggestionRequest, VideoSuggestionResult},
};

pub const ANALYZE_VIDEO_PATH: &str = "api/analyze-video";
pub const ANALYZE_RECORDING_PATH: &str = "api/analyze-recording";
pub const DIET_PLAN_PATH: &str = "api/diet-plan";
pub const CHAT_PATH: &str = "api/chat";
pub const VIDEO_SUGGESTIONS_PATH: &str = "api/video-suggestions";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordingBody<'a> {
    video_data_uri: String,
    exercise_type: &'a str,
}

/// One sequencer per form, so each form has its own pending flag and ticket stream.
#[derive(Debug, Clone, Default)]
pub struct FormSequencers {
    pub video: RequestSequencer,
    pub diet_plan: RequestSequencer,
    pub chat: RequestSequencer,
    pub video_suggestions: RequestSequencer,
}

/// Client side of the fitcoach API: validates input locally, then talks to the server.
#[derive(Debug, Clone)]
pub struct FitcoachHttpClient {
    base_url: Url,
    limits: SubmissionLimits,
    client: Client,
    sequencers: FormSequencers,
    previews: PreviewRegistry,
}

impl FitcoachHttpClient {
    pub fn new(base_url: &str, limits: SubmissionLimits) -> Result<Self, CoreError> {
        // A trailing slash makes `join` append rather than replace the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| CoreError::Transport(format!("Invalid base url: {e}")))?;

        Ok(Self {
            base_url,
            limits,
            client: Client::new(),
            sequencers: FormSequencers::default(),
            previews: PreviewRegistry::default(),
        })
    }

    pub fn sequencers(&self) -> &FormSequencers {
        &self.sequencers
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    /// Submit a clip for repetition counting. Size, duration and label are
    /// checked before anything goes over the wire.
    #[instrument(skip(self, clip), fields(size = clip.bytes.len(), label = %exercise_label))]
    pub async fn submit_video(
        &self,
        clip: VideoClip,
        exercise_label: &str,
    ) -> Result<Sequenced<VideoAnalysisResult>, CoreError> {
        let (exercise, _preview) = self.limits.admit(&clip, exercise_label, &self.previews)?;
        let _pending = self.sequencers.video.try_begin()?;
        let ticket = self.sequencers.video.issue();

        let mime_type = if clip.mime_type.trim().is_empty() {
            FALLBACK_MIME_TYPE.to_string()
        } else {
            clip.mime_type
        };
        let file_name = clip
            .file_name
            .unwrap_or_else(|| "recording".to_string());

        let part = Part::bytes(clip.bytes)
            .file_name(file_name)
            .mime_str(&mime_type)
            .map_err(|e| CoreError::InvalidEncodedPayload(format!("Invalid media type: {e}")))?;
        let form = Form::new()
            .part("videoFile", part)
            .text("exerciseType", exercise.label());

        let response = self
            .client
            .post(self.endpoint(ANALYZE_VIDEO_PATH)?)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Video submission failed: {}", e);
                CoreError::Transport(e.to_string())
            })?;

        let value = Self::read_json(response).await?;
        Ok(Sequenced { ticket, value })
    }

    /// Submit a live-session recording as an inline data URI. Shares the
    /// limits, preview and sequencer of [`Self::submit_video`].
    #[instrument(skip(self, clip), fields(size = clip.bytes.len(), label = %exercise_label))]
    pub async fn submit_recording(
        &self,
        clip: VideoClip,
        exercise_label: &str,
    ) -> Result<Sequenced<VideoAnalysisResult>, CoreError> {
        let (exercise, _preview) = self.limits.admit(&clip, exercise_label, &self.previews)?;

        let body = RecordingBody {
            video_data_uri: EncodedMedia::encode(&clip.bytes, Some(&clip.mime_type)).to_data_uri(),
            exercise_type: exercise.label(),
        };

        self.post_json(&self.sequencers.video, ANALYZE_RECORDING_PATH, &body)
            .await
    }

    pub async fn generate_diet_plan(
        &self,
        request: DietPlanRequest,
    ) -> Result<Sequenced<DietPlanResult>, CoreError> {
        require_non_empty("biography", &request.biography)?;
        require_non_empty("fitnessGoals", &request.fitness_goals)?;
        self.post_json(&self.sequencers.diet_plan, DIET_PLAN_PATH, &request)
            .await
    }

    pub async fn answer_fitness_query(
        &self,
        query: ChatQuery,
    ) -> Result<Sequenced<ChatAnswer>, CoreError> {
        require_non_empty("query", &query.query)?;
        require_non_empty("biography", &query.biography)?;
        self.post_json(&self.sequencers.chat, CHAT_PATH, &query).await
    }

    pub async fn suggest_videos(
        &self,
        request: VideoSuggestionRequest,
    ) -> Result<Sequenced<VideoSuggestionResult>, CoreError> {
        require_non_empty("userProfile", &request.user_profile)?;
        require_non_empty("fitnessGoals", &request.fitness_goals)?;
        self.post_json(&self.sequencers.video_suggestions, VIDEO_SUGGESTIONS_PATH, &request)
            .await
    }

    async fn post_json<B, T>(
        &self,
        sequencer: &RequestSequencer,
        path: &str,
        body: &B,
    ) -> Result<Sequenced<T>, CoreError>
    where
        B: Serialize,
        T: ModelReply,
    {
        let _pending = sequencer.try_begin()?;
        let ticket = sequencer.issue();

        let response = self
            .client
            .post(self.endpoint(path)?)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(path, "Request failed: {}", e);
                CoreError::Transport(e.to_string())
            })?;

        let value = Self::read_json(response).await?;
        Ok(Sequenced { ticket, value })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CoreError> {
        self.base_url
            .join(path)
            .map_err(|e| CoreError::Transport(format!("Invalid endpoint {path}: {e}")))
    }

    async fn read_json<T: ModelReply>(response: Response) -> Result<T, CoreError> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            error!(status = status.as_u16(), "Server returned an error: {}", body);
            return Err(CoreError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| CoreError::Transport(e.to_string()))?;

        parse_reply(&text)
    }
}
