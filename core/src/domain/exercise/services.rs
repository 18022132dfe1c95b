use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    exercise::{
        entities::VideoAnalysisResult, ports::ExerciseAnalysisService,
        prompt::VIDEO_ANALYSIS_PROMPT, schema::get_video_analysis_schema,
        value_objects::VideoAnalysisRequest,
    },
    flow::{GenerationOptions, LLMClient, parse_reply},
};

impl<LLM> ExerciseAnalysisService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(
        skip(self, request),
        fields(exercise = %request.exercise, mime_type = %request.video.mime_type)
    )]
    async fn analyze_exercise_video(
        &self,
        request: VideoAnalysisRequest,
    ) -> Result<VideoAnalysisResult, CoreError> {
        if request.video.is_empty() {
            return Err(CoreError::MissingField("videoFile".to_string()));
        }

        let exercise = request.exercise.label();
        let prompt = VIDEO_ANALYSIS_PROMPT.render(&[
            ("exercise", exercise),
            ("criterion", request.exercise.rep_criterion()),
        ])?;

        let raw_response = self
            .llm_client
            .generate_with_media(
                prompt,
                request.video,
                get_video_analysis_schema(),
                GenerationOptions::default(),
            )
            .await?;

        let result: VideoAnalysisResult = parse_reply(&raw_response)?;
        tracing::info!(
            repetition_count = result.repetition_count,
            has_feedback = result.form_feedback.is_some(),
            "Exercise video analyzed"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{exercise::entities::ExerciseType, media::EncodedMedia},
        test_support::StubLLMClient,
    };

    fn push_up_request() -> VideoAnalysisRequest {
        VideoAnalysisRequest {
            video: EncodedMedia::encode(b"fake mp4 bytes", Some("video/mp4")),
            exercise: ExerciseType::PushUps,
        }
    }

    #[tokio::test]
    async fn relays_a_well_formed_reply() {
        let service = Service::new(StubLLMClient::replying(
            r#"{"repetitionCount": 12, "formFeedback": "Keep elbows tighter"}"#,
        ));

        let result = service
            .analyze_exercise_video(push_up_request())
            .await
            .unwrap();

        assert_eq!(
            result,
            VideoAnalysisResult {
                repetition_count: 12,
                form_feedback: Some("Keep elbows tighter".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn sends_media_with_rendered_prompt_and_schema() {
        let service = Service::new(StubLLMClient::replying(r#"{"repetitionCount": 3}"#));

        service
            .analyze_exercise_video(push_up_request())
            .await
            .unwrap();

        let calls = service.llm_client.calls();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert!(call.prompt.contains("Push-ups"));
        assert!(call.prompt.contains("90 degrees"));
        assert!(!call.prompt.contains("{{"));
        assert_eq!(call.media.as_ref().unwrap().mime_type, "video/mp4");
        assert_eq!(call.schema["required"][0], "repetitionCount");
    }

    #[tokio::test]
    async fn malformed_reply_is_a_validation_error() {
        for raw in [
            r#"{"formFeedback": "no count"}"#,
            r#"{"repetitionCount": -4}"#,
            r#"{"repetitionCount": 12, "confidence": 0.9}"#,
            "twelve",
            "[12]",
            r#"[12, "Keep elbows tighter"]"#,
        ] {
            let service = Service::new(StubLLMClient::replying(raw));
            let result = service.analyze_exercise_video(push_up_request()).await;
            assert!(
                matches!(result, Err(CoreError::ReplyValidation(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[tokio::test]
    async fn upstream_failure_is_passed_through() {
        let service = Service::new(StubLLMClient::failing(CoreError::UpstreamStatus {
            status: 503,
            body: "overloaded".to_string(),
        }));

        let result = service.analyze_exercise_video(push_up_request()).await;
        assert!(matches!(
            result,
            Err(CoreError::UpstreamStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn empty_video_never_reaches_the_model() {
        let service = Service::new(StubLLMClient::replying(r#"{"repetitionCount": 1}"#));
        let request = VideoAnalysisRequest {
            video: EncodedMedia::encode(&[], Some("video/mp4")),
            exercise: ExerciseType::Squats,
        };

        let result = service.analyze_exercise_video(request).await;
        assert_eq!(result, Err(CoreError::MissingField("videoFile".to_string())));
        assert!(service.llm_client.calls().is_empty());
    }
}
