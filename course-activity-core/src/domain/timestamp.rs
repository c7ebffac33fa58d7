use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in time in milliseconds, as reported by a [`Clock`](crate::Clock).
///
/// Only differences between two timestamps from the same clock are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_millis(millis: u64) -> Self {
        Timestamp(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Whole seconds elapsed since `earlier`, rounded down.
    ///
    /// Saturates at zero if the clock went backwards.
    pub fn whole_secs_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0) / 1000
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
