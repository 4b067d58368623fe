//! Response schemas in the Gemini schema dialect.

use serde_json::{Value, json};

fn style_item() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": {"type": "STRING"},
            "description": {"type": "STRING"},
            "imagePrompt": {"type": "STRING"}
        },
        "required": ["name", "description", "imagePrompt"]
    })
}

/// Schema for a song analysis.
pub fn analysis() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "genre": {"type": "STRING"},
            "bpm": {"type": "NUMBER"},
            "synopsis": {"type": "STRING"},
            "characterDesign": {"type": "STRING"},
            "visualConsistencyGuide": {"type": "STRING"},
            "suggestedStyles": {"type": "ARRAY", "items": style_item()}
        },
        "required": [
            "genre",
            "bpm",
            "synopsis",
            "characterDesign",
            "visualConsistencyGuide",
            "suggestedStyles"
        ]
    })
}

/// Schema for a "more styles" batch.
pub fn more_styles() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "styles": {"type": "ARRAY", "items": style_item()}
        },
        "required": ["styles"]
    })
}

/// Schema for a storyboard plan.
pub fn storyboard_plan() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "scenes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": {"type": "NUMBER"},
                        "timestamp": {"type": "STRING"},
                        "lyrics": {"type": "STRING"},
                        "visualPrompt": {"type": "STRING"},
                        "videoPrompt": {"type": "STRING"}
                    },
                    "required": ["id", "timestamp", "lyrics", "visualPrompt", "videoPrompt"]
                }
            }
        },
        "required": ["scenes"]
    })
}
