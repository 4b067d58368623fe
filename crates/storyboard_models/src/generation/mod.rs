//! Typed generation client over a backend.

mod client;
mod ids;
mod payload;
pub mod prompts;
pub mod schema;

pub use client::{GenerationClient, PlanRequest};
pub use ids::StyleIdSource;
