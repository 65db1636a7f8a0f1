//! Request nonces
//!
//! The pool rejects replayed signatures, so every request carries the
//! current Unix time in seconds, bumped past the previous nonce when two
//! requests land in the same second.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of request nonces
pub trait NonceProvider: Send + Sync {
    fn next_nonce(&self) -> i64;
}

/// Unix timestamp in seconds, strictly increasing per provider
#[derive(Debug, Default)]
pub struct UnixTimeNonce {
    last: AtomicI64,
}

impl UnixTimeNonce {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceProvider for UnixTimeNonce {
    fn next_nonce(&self) -> i64 {
        let now = Utc::now().timestamp();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }
}

/// Always the same nonce; for reproducible signatures
#[derive(Debug, Clone, Copy)]
pub struct FixedNonce(pub i64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> i64 {
        self.0
    }
}
