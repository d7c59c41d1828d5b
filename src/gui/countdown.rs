//! Countdown Timer
//! Seconds-until-refresh counter and the wall-clock ticker that drives it.

use std::time::{Duration, Instant};

/// What a single one-second tick asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Show this many seconds until the next refresh.
    Display(u32),
    /// Countdown exhausted: draw a new price, then call [`Countdown::reset`].
    Refresh,
}

/// Counts down from `start`, showing `start..=1`, then requests a refresh.
#[derive(Debug, Clone)]
pub struct Countdown {
    start: u32,
    remaining: u32,
    shown: u32,
}

impl Countdown {
    pub fn new(start: u32) -> Self {
        Self {
            start,
            remaining: start,
            shown: start,
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.remaining == 0 {
            return Tick::Refresh;
        }
        self.shown = self.remaining;
        self.remaining -= 1;
        Tick::Display(self.shown)
    }

    pub fn reset(&mut self) {
        self.remaining = self.start;
    }

    /// Last value handed out by [`Tick::Display`].
    pub fn shown(&self) -> u32 {
        self.shown
    }
}

/// Fires once per `period` of wall-clock time.
///
/// Deadlines advance by whole periods so frame jitter does not accumulate.
/// After a stall longer than a period (window minimised, debugger) the ticker
/// fires once and re-anchors on `now` instead of replaying the missed ticks.
#[derive(Debug, Clone)]
pub struct SecondTicker {
    period: Duration,
    next: Instant,
}

impl SecondTicker {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }

    pub fn until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_cadence() {
        let mut countdown = Countdown::new(12);
        for expected in (1..=12).rev() {
            assert_eq!(countdown.tick(), Tick::Display(expected));
            assert_eq!(countdown.shown(), expected);
        }
        assert_eq!(countdown.tick(), Tick::Refresh);
        // Stays exhausted until reset
        assert_eq!(countdown.tick(), Tick::Refresh);
        assert_eq!(countdown.shown(), 1);

        countdown.reset();
        assert_eq!(countdown.tick(), Tick::Display(12));
    }

    #[test]
    fn test_zero_start_always_refreshes() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.tick(), Tick::Refresh);
        countdown.reset();
        assert_eq!(countdown.tick(), Tick::Refresh);
    }

    #[test]
    fn test_ticker_fires_each_period() {
        let t0 = Instant::now();
        let second = Duration::from_secs(1);
        let mut ticker = SecondTicker::new(second, t0);

        assert!(!ticker.poll(t0));
        assert!(!ticker.poll(t0 + Duration::from_millis(999)));
        assert!(ticker.poll(t0 + Duration::from_millis(1000)));
        assert!(!ticker.poll(t0 + Duration::from_millis(1500)));
        assert_eq!(
            ticker.until_next(t0 + Duration::from_millis(1500)),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn test_ticker_does_not_drift() {
        let t0 = Instant::now();
        let mut ticker = SecondTicker::new(Duration::from_secs(1), t0);

        // Late frames: the next deadline keeps the original phase
        assert!(ticker.poll(t0 + Duration::from_millis(1040)));
        assert!(!ticker.poll(t0 + Duration::from_millis(1990)));
        assert!(ticker.poll(t0 + Duration::from_millis(2010)));
    }

    #[test]
    fn test_ticker_resyncs_after_stall() {
        let t0 = Instant::now();
        let mut ticker = SecondTicker::new(Duration::from_secs(1), t0);

        let late = t0 + Duration::from_secs(30);
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late + Duration::from_millis(10)));
        assert_eq!(ticker.until_next(late), Duration::from_secs(1));
    }
}
