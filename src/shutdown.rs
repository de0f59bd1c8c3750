//! Cooperative shutdown flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

/// A clone-shareable flag that marks the process as shutting down.
///
/// Clones share the same underlying flag: typically one clone is
/// tripped from a signal handler (registration is the embedding
/// binary's concern) while workers poll [`is_requested`](Self::is_requested)
/// between units of work and drain when it flips.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    requested: Arc<AtomicBool>,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks shutdown as requested. Idempotent; only the first call
    /// logs.
    pub fn request(&self) {
        if !self.requested.swap(true, Ordering::SeqCst) {
            info!("shutdown requested");
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_untripped() {
        assert!(!ShutdownFlag::new().is_requested());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = ShutdownFlag::new();
        let clone = flag.clone();

        clone.request();
        assert!(flag.is_requested());
    }

    #[test]
    fn test_request_is_idempotent() {
        let flag = ShutdownFlag::new();
        flag.request();
        flag.request();
        assert!(flag.is_requested());
    }
}
