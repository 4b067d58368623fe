//! Prompt builders.
//!
//! Scene, regenerate and thumbnail prompts all restate the consistency guide,
//! the protagonist and the style prompt, so every image request carries the
//! same visual contract.

use super::PlanRequest;
use storyboard_core::{SongAnalysis, StoryboardScene, VisualStyle};

/// Styles requested per analysis or "more styles" batch.
pub const STYLES_PER_BATCH: usize = 4;

/// Minimum scene count requested from the planner.
pub const MIN_SCENES: usize = 12;

/// Maximum scene count requested from the planner.
pub const MAX_SCENES: usize = 24;

const DIFFERENT_ANGLE_DIRECTIVE: &str =
    "Show this moment from a different camera angle and framing than the previous shot.";

/// Prompt for the song analysis.
pub fn analysis(title: &str, lyrics: &str) -> String {
    format!(
        "Analyze the song titled \"{title}\" in depth.\n\
         Lyrics:\n{lyrics}\n\n\
         Produce a JSON object with:\n\
         1. genre (string): the predominant genre.\n\
         2. bpm (number): an estimate of the tempo.\n\
         3. synopsis (string): a narrative and emotional summary of the song.\n\
         4. characterDesign (string): a detailed, consistent physical description of the protagonist.\n\
         5. visualConsistencyGuide (string): rules for lighting, color palette and atmosphere.\n\
         6. suggestedStyles (array): {STYLES_PER_BATCH} distinct visual styles grounded in the lyrics, \
         each with name, description and imagePrompt."
    )
}

/// Prompt for a batch of additional styles unlike `existing_names`.
pub fn more_styles(title: &str, lyrics: &str, existing_names: &[String]) -> String {
    format!(
        "Based on the song \"{title}\" ({lyrics}), generate {STYLES_PER_BATCH} ADDITIONAL visual styles \
         that are DIFFERENT from these: {existing}.\n\
         Return an array of JSON objects with name, description and imagePrompt.",
        existing = existing_names.join(", ")
    )
}

/// Prompt for the scene-by-scene plan.
pub fn plan(request: &PlanRequest<'_>) -> String {
    let mut prompt = format!(
        "Create a narrative storyboard plan that tells a COMPLETE STORY from beginning to end \
         for \"{title}\" ({duration}s).\n\n\
         Lyrics:\n{lyrics}\n\n\
         CONSISTENCY DATA:\n\
         - MAIN CHARACTER: {character}\n\
         - VISUAL GUIDE AND ATMOSPHERE: {guide}\n\
         - ART STYLE: {style_name} - {style_description}\n\n\
         INSTRUCTIONS:\n\
         - Cover 100% of the song.\n\
         - Between {MIN_SCENES} and {MAX_SCENES} scenes, ordered by timestamp (mm:ss).\n\
         - Every visualPrompt MUST include: [cinematic shot type], [detailed character action], \
         [environment], [lighting/style].",
        title = request.title,
        duration = request.duration_seconds,
        lyrics = request.lyrics,
        character = request.analysis.character_design,
        guide = request.analysis.visual_consistency_guide,
        style_name = request.style.name,
        style_description = request.style.description,
    );
    if let Some(notes) = request.director_notes.map(str::trim).filter(|n| !n.is_empty()) {
        prompt.push_str("\n\nDIRECTOR NOTES:\n");
        prompt.push_str(notes);
    }
    prompt
}

/// Composite image prompt for one scene.
pub fn scene(analysis: &SongAnalysis, style: &VisualStyle, scene: &StoryboardScene) -> String {
    format!(
        "{}. Protagonist: {}. Art style: {}. Current scene: {}",
        analysis.visual_consistency_guide,
        analysis.character_design,
        style.image_prompt,
        scene.visual_prompt
    )
}

/// Scene prompt asking for a fresh camera angle.
pub fn regenerate(analysis: &SongAnalysis, style: &VisualStyle, scene: &StoryboardScene) -> String {
    format!(
        "{}. {}",
        self::scene(analysis, style, scene),
        DIFFERENT_ANGLE_DIRECTIVE
    )
}

/// Title-card prompt for the video thumbnail.
pub fn thumbnail(title: &str, analysis: &SongAnalysis, style: &VisualStyle) -> String {
    format!(
        "Cinematic professional music video thumbnail for \"{}\". High resolution, emotional \
         atmosphere, {}. Protagonist: {}. {}. Title-card composition with space for typography.",
        title, analysis.visual_consistency_guide, analysis.character_design, style.image_prompt
    )
}
