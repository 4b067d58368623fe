//! Progress notification.

use crate::PipelineStage;
use storyboard_core::PipelineProgress;

/// Receives every progress change of an orchestrator, including the final
/// clear when an operation ends.
///
/// Progress is advisory: observers display it, they never drive control flow.
pub trait ProgressObserver: Send + Sync {
    /// Called after the stage or progress message changes.
    fn on_progress(&self, stage: &PipelineStage, progress: &PipelineProgress);
}

impl<F> ProgressObserver for F
where
    F: Fn(&PipelineStage, &PipelineProgress) + Send + Sync,
{
    fn on_progress(&self, stage: &PipelineStage, progress: &PipelineProgress) {
        self(stage, progress)
    }
}
