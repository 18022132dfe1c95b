use serde_json::json;

pub fn get_diet_plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "dietPlan": {
                "type": "string",
                "description": "A personalised 7-day diet plan, one section per day"
            }
        },
        "required": ["dietPlan"]
    })
}
