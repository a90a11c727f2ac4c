//! A deterministic repeating timer.
//!
//! [`ManualTimer`] implements [`Scheduler`] without a clock: the embedding
//! event loop (or a test) reports elapsed time through
//! [`ManualTimer::advance`], which fires every tick that has come due.

use std::time::Duration;

use review_core::{Scheduler, Session, TickOutcome, ViewportHost};

/// Single-slot timer driven by explicit time steps.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    /// Time until the next tick, `None` when not registered.
    remaining: Option<Duration>,
    /// Ticks fired since creation.
    fired: usize,
}

impl ManualTimer {
    /// Creates an unregistered timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time left until the next tick.
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Total number of ticks fired.
    pub fn fired(&self) -> usize {
        self.fired
    }

    /// Lets `elapsed` pass, running `session.tick` each time the timer comes
    /// due. Returns the number of ticks fired.
    pub fn advance(
        &mut self,
        elapsed: Duration,
        session: &mut Session,
        host: &impl ViewportHost,
    ) -> usize {
        let mut budget = elapsed;
        let mut fired = 0;
        while let Some(remaining) = self.remaining {
            if remaining > budget {
                self.remaining = Some(remaining - budget);
                break;
            }
            budget -= remaining;
            fired += 1;
            self.remaining = match session.tick(host) {
                TickOutcome::Reschedule(delay) => Some(delay),
                TickOutcome::Stop => {
                    log::debug!("timer stopped");
                    None
                }
            };
        }
        self.fired += fired;
        fired
    }
}

impl Scheduler for ManualTimer {
    fn register(&mut self, first_interval: Duration) {
        if self.remaining.is_some() {
            log::warn!("timer already registered, ignoring");
            return;
        }
        self.remaining = Some(first_interval);
    }

    fn unregister(&mut self) {
        self.remaining = None;
    }

    fn is_registered(&self) -> bool {
        self.remaining.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ViewportCamera;
    use crate::screen::Screen;
    use review_core::Options;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_fires_on_interval() {
        let mut session = Session::default();
        let mut timer = ManualTimer::new();
        let screen = Screen::with_viewport(ViewportCamera::default());
        session.activate(&mut timer);

        assert_eq!(timer.advance(secs(1), &mut session, &screen), 0);
        assert_eq!(timer.advance(secs(1), &mut session, &screen), 1);
        assert_eq!(timer.advance(secs(5), &mut session, &screen), 2);
        assert_eq!(timer.remaining(), Some(secs(1)));
        assert_eq!(timer.fired(), 3);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_stops_after_deactivation() {
        let mut session = Session::default();
        let mut timer = ManualTimer::new();
        let screen = Screen::with_viewport(ViewportCamera::default());
        session.activate(&mut timer);
        session.deactivate();

        assert_eq!(timer.advance(secs(10), &mut session, &screen), 1);
        assert!(!timer.is_registered());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_register_is_single_slot() {
        let mut timer = ManualTimer::new();
        timer.register(secs(3));
        timer.register(secs(1));
        assert_eq!(timer.remaining(), Some(secs(3)));
        timer.unregister();
        assert!(!timer.is_registered());
    }

    #[test]
    fn test_uses_update_delay() {
        let mut options = Options::default();
        options.set_update_delay(7);
        let mut session = Session::new(options);
        let mut timer = ManualTimer::new();
        let screen = Screen::with_viewport(ViewportCamera::default());
        session.activate(&mut timer);
        assert_eq!(timer.remaining(), Some(secs(7)));
        assert_eq!(timer.advance(secs(20), &mut session, &screen), 2);
        assert_eq!(timer.remaining(), Some(secs(1)));
    }
}
