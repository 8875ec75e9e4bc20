use log::debug;
use serde::Serialize;

use crate::HubError;

/// Lifecycle of one fetch owned by a page container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    /// Ready with the value, or Failed with the error's display text.
    pub fn resolve(result: Result<T, HubError>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Token identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Monotonic request counter. Only the latest issued generation is current;
/// completions carrying any older one are stale and must be dropped.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new generation, superseding every earlier one.
    pub fn issue(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }

    /// Accept a completion only if it belongs to the latest request.
    pub fn accept<T>(&self, generation: Generation, response: T) -> Option<T> {
        if self.is_current(generation) {
            Some(response)
        } else {
            debug!(
                "Discarding stale response (generation {}, latest {})",
                generation.0, self.latest
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading() {
        let state: FetchState<Vec<u8>> = FetchState::default();
        assert!(state.is_loading());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_resolve_error_keeps_message() {
        let state: FetchState<()> =
            FetchState::resolve(Err(HubError::Unavailable("network down".to_string())));
        assert_eq!(state.error_message(), Some("network down"));
    }

    #[test]
    fn test_latest_generation_wins() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();

        assert!(first < second);
        assert!(!tracker.is_current(first));
        assert_eq!(tracker.accept(first, "old"), None);
        assert_eq!(tracker.accept(second, "new"), Some("new"));
    }

    #[test]
    fn test_serialized_shape() {
        let state = FetchState::Ready(vec![1, 2]);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["data"][1], 2);

        let failed: FetchState<()> = FetchState::Failed("boom".into());
        assert_eq!(serde_json::to_value(&failed).unwrap()["status"], "failed");
    }
}
