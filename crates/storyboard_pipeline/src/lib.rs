//! Generation orchestration for the storyboard pipeline.
//!
//! [`PipelineOrchestrator`] sequences the dependent generation calls (song
//! analysis, style imaging, planning, scene imaging, thumbnail) and folds their
//! results into [`ProjectState`]. Results are assembled privately and published
//! only when an operation succeeds as a whole, so a failed operation leaves the
//! state exactly as it was.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observer;
mod orchestrator;
mod stage;
mod state;

pub use observer::ProgressObserver;
pub use orchestrator::{PipelineOptions, PipelineOrchestrator};
pub use stage::PipelineStage;
pub use state::ProjectState;
