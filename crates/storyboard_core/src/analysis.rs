//! Song analysis produced by the first pipeline step.

use crate::{StyleId, VisualStyle};
use serde::{Deserialize, Serialize};

/// Narrative and visual analysis of a song.
///
/// Created once by the analysis step. The only later mutation is appending
/// styles from a "more styles" round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongAnalysis {
    /// Predominant genre
    pub genre: String,
    /// Estimated tempo in beats per minute
    pub bpm: f64,
    /// Narrative and emotional summary
    pub synopsis: String,
    /// Physical description of the recurring protagonist
    pub character_design: String,
    /// Lighting, palette and atmosphere rules shared by every shot
    pub visual_consistency_guide: String,
    /// Style catalog in display order
    pub suggested_styles: Vec<VisualStyle>,
}

impl SongAnalysis {
    /// Look up a style by id.
    pub fn style(&self, id: &StyleId) -> Option<&VisualStyle> {
        self.suggested_styles.iter().find(|style| &style.id == id)
    }

    /// Names of every style in the catalog, in order.
    pub fn style_names(&self) -> Vec<String> {
        self.suggested_styles
            .iter()
            .map(|style| style.name.clone())
            .collect()
    }

    /// Return this analysis with `styles` appended after the existing catalog.
    pub fn with_appended_styles(mut self, styles: Vec<VisualStyle>) -> Self {
        self.suggested_styles.extend(styles);
        self
    }
}
