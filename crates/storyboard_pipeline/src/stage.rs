//! Pipeline state machine stages.

/// Where the pipeline is in a generation run.
///
/// ```text
/// Idle -> Analyzing -> StyleImaging -> AnalysisReady -> Planning
///      -> SceneImaging -> ThumbnailImaging -> StoryboardReady
/// ```
///
/// `GeneratingMoreStyles` loops back to `AnalysisReady` and
/// `RegeneratingShot` loops back to `StoryboardReady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum PipelineStage {
    /// Nothing generated yet
    #[default]
    #[display("idle")]
    Idle,
    /// Song analysis in flight
    #[display("analyzing")]
    Analyzing,
    /// Imaging style `index` of `total`
    #[display("style imaging {}/{}", index + 1, total)]
    StyleImaging {
        /// Zero-based style index within the batch
        index: usize,
        /// Styles in the batch
        total: usize,
    },
    /// Analysis published, styles imaged
    #[display("analysis ready")]
    AnalysisReady,
    /// Additional styles in flight
    #[display("generating more styles")]
    GeneratingMoreStyles,
    /// Storyboard plan in flight
    #[display("planning")]
    Planning,
    /// Imaging scene `index` of `total`
    #[display("scene imaging {}/{}", index + 1, total)]
    SceneImaging {
        /// Zero-based scene index
        index: usize,
        /// Scenes in the plan
        total: usize,
    },
    /// Thumbnail in flight
    #[display("thumbnail imaging")]
    ThumbnailImaging,
    /// Storyboard and thumbnail published
    #[display("storyboard ready")]
    StoryboardReady,
    /// Re-imaging one scene
    #[display("regenerating shot {}", index + 1)]
    RegeneratingShot {
        /// Zero-based scene index
        index: usize,
    },
}

impl PipelineStage {
    /// True while an operation is in flight.
    pub fn is_busy(&self) -> bool {
        !matches!(
            self,
            PipelineStage::Idle | PipelineStage::AnalysisReady | PipelineStage::StoryboardReady
        )
    }
}
