use serde_json::json;

/// Returns the JSON schema for exercise video analysis LLM responses
pub fn get_video_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "repetitionCount": {
                "type": "integer",
                "minimum": 0,
                "description": "Number of full, completed repetitions in the video"
            },
            "formFeedback": {
                "type": "string",
                "description": "Concise, actionable feedback; omit when form is good"
            }
        },
        "required": ["repetitionCount"]
    })
}
