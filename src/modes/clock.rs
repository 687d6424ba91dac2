use std::time::Duration;

use tokio::time::{interval, Interval, MissedTickBehavior};

/// Fixed-rate tick source.
///
/// Wraps a tokio interval so the simulation rate stays independent of the
/// render framerate. Missed deadlines are skipped rather than bursted, so
/// a stalled terminal never causes a flurry of catch-up moves.
pub struct TickClock {
    timer: Interval,
}

impl TickClock {
    pub fn from_rate(ticks_per_second: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / f64::from(ticks_per_second.max(1)));
        let mut timer = interval(period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { timer }
    }

    pub fn period(&self) -> Duration {
        self.timer.period()
    }

    /// Completes when the next tick deadline arrives.
    pub async fn tick(&mut self) {
        self.timer.tick().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_period_from_rate() {
        assert_eq!(TickClock::from_rate(8).period(), Duration::from_millis(125));
        assert_eq!(TickClock::from_rate(15).period().as_millis(), 66);
    }

    #[tokio::test]
    async fn test_zero_rate_clamped() {
        assert_eq!(TickClock::from_rate(0).period(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_at_fixed_period() {
        let mut clock = TickClock::from_rate(4);
        let start = tokio::time::Instant::now();

        clock.tick().await; // first tick completes immediately
        clock.tick().await;
        clock.tick().await;

        assert_eq!(start.elapsed(), Duration::from_millis(500));
    }
}
