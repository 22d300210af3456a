use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Recurring timer advanced by frame time rather than wall-clock callbacks.
///
/// The first period completes one full `interval` after creation; there is
/// no immediate fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autoplay {
    interval: Duration,
    elapsed: Duration,
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    /// Time left until the next period completes.
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.elapsed)
    }

    /// Adds `dt` and returns how many periods completed.
    ///
    /// A long frame can complete several periods at once; they are counted in
    /// one division and the remainder carries over. Saturates at `u64::MAX`.
    pub fn tick(&mut self, dt: Duration) -> u64 {
        if self.interval.is_zero() {
            return 0;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        let interval = self.interval.as_nanos();
        let elapsed = self.elapsed.as_nanos();
        let rest = elapsed % interval;
        self.elapsed = Duration::new((rest / NANOS_PER_SEC) as u64, (rest % NANOS_PER_SEC) as u32);
        u64::try_from(elapsed / interval).unwrap_or(u64::MAX)
    }
}
