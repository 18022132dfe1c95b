use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, flow::ModelReply};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ExerciseType {
    #[serde(rename = "Push-ups")]
    PushUps,
    #[serde(rename = "Squats")]
    Squats,
    #[serde(rename = "Pull-ups")]
    PullUps,
    #[serde(rename = "Lunges")]
    Lunges,
    #[serde(rename = "Sit-ups")]
    SitUps,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 5] = [
        ExerciseType::PushUps,
        ExerciseType::Squats,
        ExerciseType::PullUps,
        ExerciseType::Lunges,
        ExerciseType::SitUps,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExerciseType::PushUps => "Push-ups",
            ExerciseType::Squats => "Squats",
            ExerciseType::PullUps => "Pull-ups",
            ExerciseType::Lunges => "Lunges",
            ExerciseType::SitUps => "Sit-ups",
        }
    }

    /// What counts as one full repetition.
    pub fn rep_criterion(&self) -> &'static str {
        match self {
            ExerciseType::PushUps => {
                "lower the body until the elbows bend to at least 90 degrees, then press back up until the arms are nearly straight"
            }
            ExerciseType::Squats => {
                "lower the hips until the thighs are at least parallel to the floor, then return to standing"
            }
            ExerciseType::PullUps => {
                "start from a full hang, pull up until the chin clears the bar, then lower back to a full hang"
            }
            ExerciseType::Lunges => {
                "step forward or backward, lower both knees to roughly 90 degrees and return to the start; each leg counts as one rep"
            }
            ExerciseType::SitUps => {
                "raise the torso from lying on the back until the chest is close to the knees, then lower back down"
            }
        }
    }

    fn key(&self) -> &'static str {
        match self {
            ExerciseType::PushUps => "pushup",
            ExerciseType::Squats => "squat",
            ExerciseType::PullUps => "pullup",
            ExerciseType::Lunges => "lunge",
            ExerciseType::SitUps => "situp",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExerciseType {
    type Err = CoreError;

    /// Accepts the display labels and loose spellings such as `push up` or `SQUAT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let normalized = normalized.strip_suffix('s').unwrap_or(&normalized);

        if normalized.is_empty() {
            return Err(CoreError::MissingField("exerciseType".to_string()));
        }

        ExerciseType::ALL
            .into_iter()
            .find(|exercise| exercise.key() == normalized)
            .ok_or_else(|| CoreError::UnsupportedExercise(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VideoAnalysisResult {
    pub repetition_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_feedback: Option<String>,
}

impl ModelReply for VideoAnalysisResult {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flow::parse_reply;

    #[test]
    fn parses_labels_and_loose_spellings() {
        assert_eq!("Push-ups".parse::<ExerciseType>().unwrap(), ExerciseType::PushUps);
        assert_eq!("push up".parse::<ExerciseType>().unwrap(), ExerciseType::PushUps);
        assert_eq!("SQUAT".parse::<ExerciseType>().unwrap(), ExerciseType::Squats);
        assert_eq!("sit_ups".parse::<ExerciseType>().unwrap(), ExerciseType::SitUps);
    }

    #[test]
    fn rejects_unknown_and_blank_labels() {
        assert_eq!(
            "Burpees".parse::<ExerciseType>(),
            Err(CoreError::UnsupportedExercise("Burpees".to_string()))
        );
        assert_eq!(
            "  ".parse::<ExerciseType>(),
            Err(CoreError::MissingField("exerciseType".to_string()))
        );
    }

    #[test]
    fn labels_round_trip_through_serde() {
        for exercise in ExerciseType::ALL {
            let json = serde_json::to_string(&exercise).unwrap();
            assert_eq!(json, format!("\"{}\"", exercise.label()));
            assert_eq!(exercise.label().parse::<ExerciseType>().unwrap(), exercise);
        }
    }

    #[test]
    fn result_serializes_in_wire_shape() {
        let result = VideoAnalysisResult {
            repetition_count: 12,
            form_feedback: None,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({ "repetitionCount": 12 })
        );
    }

    #[test]
    fn feedback_is_optional_in_replies() {
        let result: VideoAnalysisResult = parse_reply(r#"{"repetitionCount": 0}"#).unwrap();
        assert_eq!(result.repetition_count, 0);
        assert_eq!(result.form_feedback, None);
    }
}
