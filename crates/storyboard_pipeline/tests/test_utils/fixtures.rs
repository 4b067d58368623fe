//! Canned structured responses.

use serde_json::json;

pub const GUIDE: &str = "Magenta and cyan neon, wet asphalt, always night";
pub const CHARACTER: &str = "A woman in a red bomber jacket with short silver hair";

/// Analysis with four styles.
pub fn analysis_json() -> String {
    json!({
        "genre": "Synthwave",
        "bpm": 112,
        "synopsis": "A late drive through a sleeping city toward the sea.",
        "characterDesign": CHARACTER,
        "visualConsistencyGuide": GUIDE,
        "suggestedStyles": [
            {"name": "Neon Noir", "description": "Rain and reflections", "imagePrompt": "neon noir, rain"},
            {"name": "Super 8", "description": "Grainy home movie", "imagePrompt": "super 8 film grain"},
            {"name": "Paper Cut", "description": "Layered paper", "imagePrompt": "paper cutout diorama"},
            {"name": "Ukiyo-e", "description": "Woodblock print", "imagePrompt": "ukiyo-e woodblock"}
        ]
    })
    .to_string()
}

/// A batch of `count` additional styles.
pub fn more_styles_json(count: usize) -> String {
    let styles: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "name": format!("Extra {}", i + 1),
                "description": "Another direction",
                "imagePrompt": format!("extra style {}", i + 1)
            })
        })
        .collect();
    json!({ "styles": styles }).to_string()
}

/// A plan with `count` scenes, ten seconds apart.
pub fn plan_json(count: usize) -> String {
    let scenes: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "id": i + 1,
                "timestamp": format!("{}:{:02}", (i * 10) / 60, (i * 10) % 60),
                "lyrics": format!("line {}", i + 1),
                "visualPrompt": format!("Wide shot {} of the highway", i + 1),
                "videoPrompt": "Slow dolly forward"
            })
        })
        .collect();
    json!({ "scenes": scenes }).to_string()
}
