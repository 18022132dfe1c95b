use serde_json::json;

pub fn get_video_suggestion_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "searchQueries": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Short video-platform search queries, most relevant first"
            }
        },
        "required": ["searchQueries"]
    })
}
