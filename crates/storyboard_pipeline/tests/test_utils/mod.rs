//! Test utilities for orchestrator tests.

pub mod fixtures;
pub mod scripted_backend;

#[allow(unused_imports)]
pub use fixtures::{CHARACTER, GUIDE, analysis_json, more_styles_json, plan_json};
#[allow(unused_imports)]
pub use scripted_backend::ScriptedBackend;
