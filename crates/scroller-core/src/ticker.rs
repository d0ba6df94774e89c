use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Upper bound on ticks reported by a single [`Ticker::poll`].
///
/// After a stall (window hidden, debugger break) the schedule is re-based on
/// the current time instead of replaying every missed period.
pub const MAX_CATCH_UP: u32 = 128;

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Cancellable periodic task.
///
/// The ticker does not call anything itself: the owner polls it and runs one
/// tick per period that has come due. Each deadline is computed from the
/// previous one with the period in force when it fired, so changing the
/// period never moves a deadline that is already scheduled.
#[derive(Debug, Clone)]
pub struct Ticker<C = SystemClock> {
    clock: C,
    period: Duration,
    next_due: Option<Instant>,
}

impl<C: Clock> Ticker<C> {
    pub fn new(clock: C, period: Duration) -> Self {
        Self {
            clock,
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedules the first tick one period from now. Returns `false` if the
    /// ticker was already running, in which case nothing changes.
    pub fn start(&mut self) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(self.clock.now() + self.period);
        true
    }

    /// Cancels the pending tick. Returns whether the ticker was running.
    pub fn stop(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    pub fn set_period(&mut self, period: Duration) {
        self.period = period.max(Duration::from_millis(1));
    }

    /// Number of ticks that have come due since the last poll.
    pub fn poll(&mut self) -> u32 {
        let now = self.clock.now();
        let mut fired = 0;

        while let Some(due) = self.next_due {
            if due > now {
                break;
            }
            fired += 1;
            if fired == MAX_CATCH_UP {
                self.next_due = Some(now + self.period);
                break;
            }
            self.next_due = Some(due + self.period);
        }

        fired
    }

    /// Time left until the next tick, if one is scheduled.
    pub fn remaining(&self) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(self.clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn stopped_ticker_never_fires() {
        let clock = ManualClock::new();
        let mut ticker = Ticker::new(clock.clone(), ms(10));

        clock.advance(ms(1_000));
        assert_eq!(ticker.poll(), 0);
        assert!(!ticker.is_running());
    }

    #[test]
    fn fires_once_per_elapsed_period() {
        let clock = ManualClock::new();
        let mut ticker = Ticker::new(clock.clone(), ms(10));
        assert!(ticker.start());

        clock.advance(ms(9));
        assert_eq!(ticker.poll(), 0);

        clock.advance(ms(1));
        assert_eq!(ticker.poll(), 1);

        clock.advance(ms(35));
        assert_eq!(ticker.poll(), 3);
        assert_eq!(ticker.remaining(), Some(ms(5)));
    }

    #[test]
    fn start_is_a_no_op_while_running() {
        let clock = ManualClock::new();
        let mut ticker = Ticker::new(clock.clone(), ms(10));
        assert!(ticker.start());

        clock.advance(ms(8));
        assert!(!ticker.start());
        assert_eq!(ticker.remaining(), Some(ms(2)));
    }

    #[test]
    fn period_change_applies_after_the_pending_tick() {
        let clock = ManualClock::new();
        let mut ticker = Ticker::new(clock.clone(), ms(50));
        ticker.start();

        clock.advance(ms(10));
        ticker.set_period(ms(5));
        assert_eq!(ticker.remaining(), Some(ms(40)));

        clock.advance(ms(40));
        assert_eq!(ticker.poll(), 1);
        assert_eq!(ticker.remaining(), Some(ms(5)));

        clock.advance(ms(10));
        assert_eq!(ticker.poll(), 2);
    }

    #[test]
    fn catch_up_is_bounded_after_a_stall() {
        let clock = ManualClock::new();
        let mut ticker = Ticker::new(clock.clone(), ms(1));
        ticker.start();

        clock.advance(ms(10_000));
        assert_eq!(ticker.poll(), MAX_CATCH_UP);
        assert_eq!(ticker.remaining(), Some(ms(1)));
        assert_eq!(ticker.poll(), 0);
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let clock = ManualClock::new();
        let mut ticker = Ticker::new(clock.clone(), ms(10));
        ticker.start();

        assert!(ticker.stop());
        assert!(!ticker.stop());
        clock.advance(ms(100));
        assert_eq!(ticker.poll(), 0);
    }
}
