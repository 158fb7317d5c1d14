//! Virtual time and timer primitives
//!
//! The runtime advances a `Duration`-valued clock in fixed steps; timers
//! are plain values polled against it. `fire` hands back the *scheduled*
//! time of each elapsed deadline, so follow-up timers chain off the
//! schedule rather than the polling step and a coarse step replays the
//! same sequence a fine one would.

use std::time::Duration;

/// Session clock advanced by the runtime loop.
pub struct SessionClock {
    tick_count: u64,
    now: Duration,
}

impl SessionClock {
    pub fn new() -> Self {
        Self {
            tick_count: 0,
            now: Duration::ZERO,
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn advance(&mut self, step: Duration) -> Duration {
        self.tick_count += 1;
        self.now += step;
        self.now
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Periodic timer. The first deadline is one period after `start`.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    period: Duration,
    next_deadline: Duration,
}

impl Interval {
    pub fn starting_at(start: Duration, period: Duration) -> Self {
        Self {
            period,
            next_deadline: start + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_deadline(&self) -> Duration {
        self.next_deadline
    }

    /// Consume the next elapsed deadline, returning its scheduled time.
    /// Call in a loop to catch up after a coarse step.
    pub fn fire(&mut self, now: Duration) -> Option<Duration> {
        if self.next_deadline <= now {
            let at = self.next_deadline;
            self.next_deadline += self.period;
            Some(at)
        } else {
            None
        }
    }

    /// Number of deadlines elapsed since the last poll.
    pub fn poll(&mut self, now: Duration) -> u32 {
        let mut fires = 0;
        while self.fire(now).is_some() {
            fires += 1;
        }
        fires
    }
}

/// One-shot timer.
#[derive(Debug, Clone, Copy)]
pub struct Timeout {
    deadline: Duration,
    fired: bool,
}

impl Timeout {
    pub fn at(deadline: Duration) -> Self {
        Self {
            deadline,
            fired: false,
        }
    }

    pub fn after(now: Duration, delay: Duration) -> Self {
        Self::at(now + delay)
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }

    /// Fires exactly once, returning the scheduled deadline.
    pub fn fire(&mut self, now: Duration) -> Option<Duration> {
        if !self.fired && self.deadline <= now {
            self.fired = true;
            Some(self.deadline)
        } else {
            None
        }
    }
}

/// Trailing-edge debounce: coalesces a burst of calls into one delivery of
/// the most recent payload, once `wait` has passed without a new call.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    wait: Duration,
    pending: Option<(Duration, T)>,
}

impl<T> Debounce<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record a call. Any previously pending delivery is replaced and the
    /// quiet-period deadline restarts.
    pub fn call(&mut self, now: Duration, payload: T) {
        self.pending = Some((now + self.wait, payload));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deliver the pending payload once the quiet period has elapsed.
    pub fn fire(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => {
                self.pending.take().map(|(_, payload)| payload)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn clock_accumulates_steps() {
        let mut clock = SessionClock::new();
        clock.advance(ms(10));
        clock.advance(ms(10));
        assert_eq!(clock.now(), ms(20));
        assert_eq!(clock.tick_count(), 2);
    }

    #[test]
    fn interval_fires_on_schedule() {
        let mut interval = Interval::starting_at(ms(0), ms(50));
        assert_eq!(interval.fire(ms(49)), None);
        assert_eq!(interval.fire(ms(50)), Some(ms(50)));
        assert_eq!(interval.fire(ms(50)), None);
        assert_eq!(interval.fire(ms(100)), Some(ms(100)));
    }

    #[test]
    fn interval_catches_up_one_fire_per_period() {
        let mut interval = Interval::starting_at(ms(0), ms(50));
        // A coarse 125ms step still fires per elapsed deadline, with the
        // scheduled times preserved.
        assert_eq!(interval.fire(ms(125)), Some(ms(50)));
        assert_eq!(interval.fire(ms(125)), Some(ms(100)));
        assert_eq!(interval.fire(ms(125)), None);
        assert_eq!(interval.poll(ms(300)), 4);
    }

    #[test]
    fn timeout_fires_exactly_once() {
        let mut timeout = Timeout::after(ms(100), ms(200));
        assert_eq!(timeout.fire(ms(299)), None);
        assert_eq!(timeout.fire(ms(300)), Some(ms(300)));
        assert_eq!(timeout.fire(ms(400)), None);
        assert!(timeout.is_fired());
    }

    #[test]
    fn debounce_delivers_last_payload_once() {
        let mut debounce = Debounce::new(ms(10));
        // A burst of calls within the quiet period collapses to one
        // delivery carrying the last payload.
        debounce.call(ms(0), 1);
        debounce.call(ms(3), 2);
        debounce.call(ms(7), 3);
        assert_eq!(debounce.fire(ms(16)), None);
        assert_eq!(debounce.fire(ms(17)), Some(3));
        assert_eq!(debounce.fire(ms(30)), None);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn debounce_restarts_on_each_call() {
        let mut debounce = Debounce::new(ms(250));
        debounce.call(ms(0), "first");
        debounce.call(ms(200), "second");
        assert_eq!(debounce.fire(ms(250)), None);
        assert_eq!(debounce.fire(ms(450)), Some("second"));
    }
}
