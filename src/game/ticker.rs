//! Cancelable fixed-period ticker driven by the frame clock.
//!
//! Each `start` opens a new generation. A `Tick` carries the generation it
//! was issued for, and anything holding a tick from an older generation can
//! no longer reschedule or be applied.

/// One due tick, tagged with the generation that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub generation: u64,
    /// Time (seconds) the tick was scheduled for
    pub due: f64,
}

#[derive(Debug, Clone)]
pub struct Ticker {
    period: f64,
    generation: u64,
    next_due: Option<f64>,
}

impl Ticker {
    /// `period` in seconds
    pub fn new(period: f64) -> Self {
        Self {
            period: period.max(0.0),
            generation: 0,
            next_due: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_scheduled(&self) -> bool {
        self.next_due.is_some()
    }

    /// Begin a new generation with its first tick one period from `now`.
    pub fn start(&mut self, now: f64) -> u64 {
        self.generation += 1;
        self.next_due = Some(now + self.period);
        self.generation
    }

    /// Hand out the pending tick if it is due. Nothing stays scheduled until
    /// `schedule_after` is called with it.
    pub fn poll(&mut self, now: f64) -> Option<Tick> {
        let due = self.next_due.filter(|due| *due <= now)?;
        self.next_due = None;
        Some(Tick {
            generation: self.generation,
            due,
        })
    }

    /// Arm the tick following `tick`, one period after it completed at
    /// `now`. Late frames shift the schedule instead of queueing ticks.
    /// Returns false for a stale tick.
    pub fn schedule_after(&mut self, tick: Tick, now: f64) -> bool {
        if !self.is_current(tick) {
            return false;
        }
        self.next_due = Some(now.max(tick.due) + self.period);
        true
    }

    pub fn is_current(&self, tick: Tick) -> bool {
        tick.generation == self.generation
    }

    /// Drop the pending deadline and invalidate every outstanding tick.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.next_due = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_ticker_never_fires() {
        let mut ticker = Ticker::new(0.2);
        assert!(!ticker.is_scheduled());
        assert_eq!(ticker.poll(100.0), None);
    }

    #[test]
    fn test_tick_fires_once_until_rescheduled() {
        let mut ticker = Ticker::new(0.2);
        ticker.start(1.0);

        assert_eq!(ticker.poll(1.1), None);
        let tick = ticker.poll(1.25).unwrap();
        assert!((tick.due - 1.2).abs() < 1e-9);
        assert_eq!(ticker.poll(5.0), None);

        assert!(ticker.schedule_after(tick, 1.25));
        assert_eq!(ticker.poll(1.4), None);
        assert!(ticker.poll(1.5).is_some());
    }

    #[test]
    fn test_late_poll_does_not_queue_missed_ticks() {
        let mut ticker = Ticker::new(0.2);
        ticker.start(0.0);

        // Frames stalled for five seconds: one tick, not twenty-five
        let tick = ticker.poll(5.0).unwrap();
        assert!((tick.due - 0.2).abs() < 1e-9);
        assert!(ticker.schedule_after(tick, 5.0));

        for frame in 1..12 {
            assert_eq!(ticker.poll(5.0 + frame as f64 / 60.0), None);
        }
        assert!(ticker.poll(5.21).is_some());
    }

    #[test]
    fn test_irregular_polls_keep_a_full_period_between_ticks() {
        let mut ticker = Ticker::new(0.2);
        ticker.start(0.0);

        let frames = [
            0.05, 0.19, 0.23, 0.31, 0.42, 0.44, 0.71, 0.72, 0.9, 0.93, 1.6, 1.61, 1.7, 1.83,
        ];
        let mut fired = Vec::new();
        for now in frames {
            if let Some(tick) = ticker.poll(now) {
                fired.push(now);
                ticker.schedule_after(tick, now);
            }
        }

        assert_eq!(fired, vec![0.23, 0.44, 0.71, 0.93, 1.6, 1.83]);
        for pair in fired.windows(2) {
            assert!(pair[1] - pair[0] >= 0.2);
        }
    }

    #[test]
    fn test_stale_tick_cannot_reschedule() {
        let mut ticker = Ticker::new(0.2);
        ticker.start(0.0);
        let old = ticker.poll(0.2).unwrap();

        ticker.start(0.3);
        assert!(!ticker.is_current(old));
        assert!(!ticker.schedule_after(old, 0.3));

        let fresh = ticker.poll(0.6).unwrap();
        assert_eq!(fresh.generation, ticker.generation());
    }

    #[test]
    fn test_cancel_invalidates_pending() {
        let mut ticker = Ticker::new(0.2);
        ticker.start(0.0);
        let tick = ticker.poll(0.2).unwrap();
        ticker.schedule_after(tick, 0.2);

        ticker.cancel();

        assert!(!ticker.is_scheduled());
        assert_eq!(ticker.poll(10.0), None);
        assert!(!ticker.schedule_after(tick, 10.0));
    }
}
