//! Keyed, cancellable delayed tasks.
//!
//! A [`Debouncer`] holds at most one pending task per key. Scheduling a key
//! that already has a pending task supersedes it: the old token is
//! cancelled and the deadline moves to `now + quiet`. Nothing runs on its
//! own; the owner passes the current time to [`Debouncer::fire_due`], which
//! keeps the whole mechanism single-threaded and deterministic.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use signup_forms::debounce::Debouncer;
//!
//! let mut debouncer = Debouncer::new(Duration::milliseconds(1000));
//! let start = Utc::now();
//!
//! debouncer.schedule("email", start);
//! debouncer.schedule("email", start + Duration::milliseconds(600));
//!
//! // The first deadline has passed, but it was superseded.
//! assert!(debouncer.fire_due(start + Duration::milliseconds(1200)).is_empty());
//! assert_eq!(debouncer.fire_due(start + Duration::milliseconds(1600)).len(), 1);
//! ```

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

/// Identifies one scheduled task. Tokens are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DebounceToken(u64);

#[derive(Clone, Debug)]
struct Pending {
    token: DebounceToken,
    deadline: DateTime<Utc>,
}

/// Last-write-wins delayed tasks keyed by `K`.
#[derive(Clone, Debug)]
pub struct Debouncer<K> {
    quiet: Duration,
    pending: HashMap<K, Pending>,
    next_token: u64,
}

impl<K> Debouncer<K>
where
    K: Clone + Eq + Hash + std::fmt::Debug,
{
    /// Create a debouncer with the given quiet period.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: HashMap::new(),
            next_token: 0,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Schedule `key` to fire once `quiet` has elapsed without another
    /// schedule for the same key. Any pending task for `key` is cancelled.
    pub fn schedule(&mut self, key: K, now: DateTime<Utc>) -> DebounceToken {
        let token = DebounceToken(self.next_token);
        self.next_token += 1;
        let deadline = now + self.quiet;

        if let Some(previous) = self.pending.insert(key.clone(), Pending { token, deadline }) {
            trace!(key = ?key, superseded = previous.token.0, "debounced task superseded");
        }
        trace!(key = ?key, token = token.0, %deadline, "debounced task scheduled");
        token
    }

    /// Cancel the pending task for `key`, returning its token.
    pub fn cancel(&mut self, key: &K) -> Option<DebounceToken> {
        self.pending.remove(key).map(|p| p.token)
    }

    /// Cancel every pending task.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            trace!(count = self.pending.len(), "cancelling all debounced tasks");
        }
        self.pending.clear();
    }

    /// True while `token` is the live task for `key`.
    pub fn is_current(&self, key: &K, token: DebounceToken) -> bool {
        self.pending.get(key).is_some_and(|p| p.token == token)
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.values().map(|p| p.deadline).min()
    }

    /// Remove and return every task whose deadline is at or before `now`,
    /// earliest first.
    pub fn fire_due(&mut self, now: DateTime<Utc>) -> Vec<(K, DebounceToken)> {
        let mut due: Vec<(K, Pending)> = Vec::new();
        self.pending.retain(|key, pending| {
            if pending.deadline <= now {
                due.push((key.clone(), pending.clone()));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(_, p)| (p.deadline, p.token));

        due.into_iter()
            .map(|(key, pending)| {
                trace!(key = ?key, token = pending.token.0, "debounced task fired");
                (key, pending.token)
            })
            .collect()
    }
}
