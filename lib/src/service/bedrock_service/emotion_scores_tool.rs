use serde_json::json;
use anyhow::Result;
use super::tools::{ToDocument, ToolDefinition};

pub const EMOTION_SCORES_TOOL_NAME: &str = "print_emotion_scores";


pub fn get_emotion_scores_tool_definition() -> Result<ToolDefinition> {
    let description = "Print emotion score of a given text.";

    let json_schema = json!({
        "type": "object",
        "properties": {
            "anger": {
                "type": "number",
                "description": "Score for anger, ranging from 0.0 to 1.0.",
            },
            "disgust": {
                "type": "number",
                "description": "Score for disgust, ranging from 0.0 to 1.0.",
            },
            "fear": {
                "type": "number",
                "description": "Score for fear, ranging from 0.0 to 1.0.",
            },
            "joy": {
                "type": "number",
                "description": "Score for joy, ranging from 0.0 to 1.0.",
            },
            "sadness": {
                "type": "number",
                "description": "Score for sadness, ranging from 0.0 to 1.0.",
            },
        },
        "required": ["anger", "disgust", "fear", "joy", "sadness"],
    });

    let schema = json_schema.to_document();
    Ok(ToolDefinition::new(EMOTION_SCORES_TOOL_NAME, description, &schema))
}
