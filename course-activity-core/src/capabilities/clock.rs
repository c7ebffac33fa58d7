use crate::domain::Timestamp;
use instant::Instant;

/// Time source for duration measurement
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Monotonic clock anchored at first use.
///
/// Uses `instant::Instant` so it works in the browser when the
/// `instant/wasm-bindgen` feature is enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantClock;

impl Clock for InstantClock {
    fn now(&self) -> Timestamp {
        static ANCHOR: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();
        let anchor = ANCHOR.get_or_init(Instant::now);

        let elapsed = Instant::now().duration_since(*anchor);
        Timestamp::from_millis(elapsed.as_millis() as u64)
    }
}
