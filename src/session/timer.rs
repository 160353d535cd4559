//! Deferred opponent move.

use std::time::Instant;

/// An opponent move armed against one snapshot generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingMove {
    /// Generation of the snapshot the move was armed for.
    pub generation: u64,

    /// Earliest time the move may fire.
    pub due_at: Instant,
}

impl PendingMove {
    #[must_use]
    pub fn new(generation: u64, due_at: Instant) -> Self {
        Self { generation, due_at }
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_is_due() {
        let t0 = Instant::now();
        let pending = PendingMove::new(3, t0 + Duration::from_millis(10));

        assert!(!pending.is_due(t0));
        assert!(pending.is_due(t0 + Duration::from_millis(10)));
        assert!(pending.is_due(t0 + Duration::from_secs(1)));
    }
}
