//! Test utilities for generation client tests.

pub mod mock_backend;

#[allow(unused_imports)]
pub use mock_backend::{MockBackend, MockReply};
