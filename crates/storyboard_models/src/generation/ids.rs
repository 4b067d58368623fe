//! Style id issuance.

use std::sync::atomic::{AtomicU64, Ordering};
use storyboard_core::StyleId;

/// Issues session-unique style ids.
///
/// Ids combine the wall clock in milliseconds with a per-source batch counter
/// and the style's index in its batch, so two batches never share an id even
/// within the same millisecond. Follow-up batches use a separate prefix.
///
/// # Examples
///
/// ```
/// use storyboard_models::StyleIdSource;
///
/// let ids = StyleIdSource::new();
/// let first = ids.initial_batch(2);
/// let more = ids.more_batch(2);
/// assert!(first[0].as_str().starts_with("style-"));
/// assert!(more[0].as_str().starts_with("style-more-"));
/// assert_ne!(first[0], first[1]);
/// ```
#[derive(Debug, Default)]
pub struct StyleIdSource {
    batches: AtomicU64,
}

impl StyleIdSource {
    /// A source with no batches issued yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids for a batch produced by song analysis.
    pub fn initial_batch(&self, count: usize) -> Vec<StyleId> {
        self.issue("style", count)
    }

    /// Ids for a "more styles" batch.
    pub fn more_batch(&self, count: usize) -> Vec<StyleId> {
        self.issue("style-more", count)
    }

    fn issue(&self, prefix: &str, count: usize) -> Vec<StyleId> {
        let batch = self.batches.fetch_add(1, Ordering::Relaxed);
        let millis = chrono::Utc::now().timestamp_millis();
        (0..count)
            .map(|index| StyleId::new(format!("{}-{}-{}-{}", prefix, millis, batch, index)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_across_batches() {
        let source = StyleIdSource::new();
        let mut seen = HashSet::new();
        for _ in 0..50 {
            for id in source.initial_batch(4).into_iter().chain(source.more_batch(4)) {
                assert!(seen.insert(id), "duplicate style id issued");
            }
        }
        assert_eq!(seen.len(), 400);
    }
}
