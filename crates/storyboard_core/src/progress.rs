//! Pipeline progress indicator.

use serde::{Deserialize, Serialize};

/// Human-readable status of the pipeline operation in flight, if any.
///
/// Absent means no operation is running. The message is advisory only; the
/// presentation layer uses presence to disable triggering controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineProgress(Option<String>);

impl PipelineProgress {
    /// No operation in flight.
    pub fn idle() -> Self {
        Self(None)
    }

    /// An operation is in flight with the given status message.
    pub fn active(message: impl Into<String>) -> Self {
        Self(Some(message.into()))
    }

    /// The current status message.
    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// True while an operation is in flight.
    pub fn is_active(&self) -> bool {
        self.0.is_some()
    }
}
