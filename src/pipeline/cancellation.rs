// src/pipeline/cancellation.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("operation cancelled: {reason}")]
pub struct Cancelled {
    pub reason: String,
}

/// Gemeinsames Abbruchsignal: manuelles Flag und optionale Deadline.
/// Klone teilen sich dasselbe Flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Eine nicht darstellbare Deadline bedeutet: kein Zeitlimit.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn check(&self) -> Result<(), Cancelled> {
        if self.flag.load(Ordering::Relaxed) {
            return Err(Cancelled {
                reason: "cancelled by caller".to_string(),
            });
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(Cancelled {
                reason: "deadline exceeded".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_flag() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(token.check().is_ok());
        clone.cancel();
        let err = token.check().unwrap_err();
        assert_eq!(err.reason, "cancelled by caller");
    }

    #[test]
    fn test_past_deadline_trips() {
        let token = CancellationToken::new().with_deadline(Instant::now());
        let err = token.check().unwrap_err();
        assert_eq!(err.reason, "deadline exceeded");

        let relaxed = CancellationToken::new().with_timeout(Duration::from_secs(3600));
        assert!(relaxed.check().is_ok());

        let unbounded = CancellationToken::new().with_timeout(Duration::MAX);
        assert!(unbounded.check().is_ok());
    }
}
