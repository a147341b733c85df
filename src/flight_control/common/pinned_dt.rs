use chrono::{DateTime, TimeDelta, Utc};

/// A delay pinned to a fixed start instant.
#[derive(Debug, Clone, Copy)]
pub struct PinnedTimeDelay {
    start_time: DateTime<Utc>,
    delay: TimeDelta,
}

impl PinnedTimeDelay {
    pub fn new(start_time: DateTime<Utc>, delay: TimeDelta) -> Self { Self { start_time, delay } }
    /// End of the delay, saturated at the latest representable instant.
    pub fn get_end(&self) -> DateTime<Utc> {
        self.start_time.checked_add_signed(self.delay).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
    pub fn get_start(&self) -> DateTime<Utc> { self.start_time }
    pub fn delay(&self) -> TimeDelta { self.delay }
    pub fn time_left(&self, now: DateTime<Utc>) -> TimeDelta { self.get_end().signed_duration_since(now) }
    /// Returns `true` once `now` has reached the end of the delay.
    pub fn is_elapsed(&self, now: DateTime<Utc>) -> bool { now >= self.get_end() }
}
