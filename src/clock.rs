//! Timestamp source for new messages.

use crate::message::Timestamp;

/// Wall clock as seen by the page.
pub trait Clock {
    fn now(&self) -> Timestamp;

    /// Minutes east of UTC at `at`, used for time-of-day labels.
    fn utc_offset_minutes(&self, _at: Timestamp) -> i32 {
        0
    }
}

/// Any `Fn() -> f64` returning epoch milliseconds is a UTC clock.
impl<F> Clock for F
where
    F: Fn() -> f64,
{
    fn now(&self) -> Timestamp {
        Timestamp(self())
    }
}
