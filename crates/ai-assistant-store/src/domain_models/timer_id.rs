//! Timer ID model
//!
//! Opaque handle of a timer owned by whoever drives the deferred feature sync.

use serde::{Deserialize, Serialize};

/// Newtype wrapper for timer handles. Zero means "no timer".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerId(u64);

impl TimerId {
    /// No pending timer
    pub const NONE: TimerId = TimerId(0);

    /// Create a TimerId from a raw value (use sparingly)
    pub fn from_raw(value: u64) -> Self {
        TimerId(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Whether this id refers to a pending timer
    pub fn is_set(&self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}
