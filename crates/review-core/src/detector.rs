//! Dwell detection.
//!
//! The detector is fed one [`ViewSample`] per timer tick. A view counts as
//! dwelled on when two consecutive ticks observe exactly the same sample, so
//! the minimum dwell time equals the sampling interval. A single short pause
//! between ticks therefore never reaches the history.

use crate::history::RecentHistory;
use crate::sample::ViewSample;

/// What a single observation did to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// First observation since the detector was reset; nothing to compare.
    Primed,
    /// The view changed since the previous tick.
    Moved,
    /// A new entry was appended to the history.
    Committed {
        /// Index of the new entry (insertion order).
        index: usize,
        /// Number of old entries evicted to make room.
        evicted: usize,
    },
    /// An existing history entry matched and its repeat count was bumped.
    Repeated {
        /// Index of the matched entry (insertion order).
        index: usize,
        /// The entry's new repeat count.
        count: u32,
    },
}

/// Compares consecutive samples and records dwelled views.
#[derive(Debug, Clone, Default)]
pub struct DwellDetector {
    last: Option<ViewSample>,
}

impl DwellDetector {
    /// Creates a detector with an empty last-observed slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample stored by the previous observation.
    pub fn last_observed(&self) -> Option<&ViewSample> {
        self.last.as_ref()
    }

    /// Forgets the previous sample, so the next observation only primes.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Processes the sample of the current tick.
    pub fn observe(&mut self, current: ViewSample, history: &mut RecentHistory) -> Observation {
        let Some(previous) = self.last.replace(current) else {
            return Observation::Primed;
        };

        if current != previous {
            return Observation::Moved;
        }

        if let Some(index) = history.find_matching(&previous) {
            if let Some(count) = history.bump(index) {
                return Observation::Repeated { index, count };
            }
        }

        let (index, evicted) = history.commit(current);
        Observation::Committed { index, evicted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    fn sample(x: f32) -> ViewSample {
        ViewSample::default().with_location(Vec3::new(x, 0.0, 0.0))
    }

    fn feed(detector: &mut DwellDetector, history: &mut RecentHistory, xs: &[f32]) {
        for &x in xs {
            detector.observe(sample(x), history);
        }
    }

    fn summary(history: &RecentHistory) -> Vec<(f32, u32)> {
        history
            .iter()
            .map(|e| (e.sample.location.x, e.repeat_count))
            .collect()
    }

    #[test]
    fn test_first_tick_only_primes() {
        let mut detector = DwellDetector::new();
        let mut history = RecentHistory::new(5);
        assert_eq!(detector.observe(sample(1.0), &mut history), Observation::Primed);
        assert!(history.is_empty());
        assert_eq!(detector.last_observed(), Some(&sample(1.0)));
    }

    #[test]
    fn test_movement_does_not_commit() {
        let mut detector = DwellDetector::new();
        let mut history = RecentHistory::new(5);
        feed(&mut detector, &mut history, &[1.0]);
        assert_eq!(detector.observe(sample(2.0), &mut history), Observation::Moved);
        assert_eq!(detector.observe(sample(3.0), &mut history), Observation::Moved);
        assert!(history.is_empty());
        assert_eq!(detector.last_observed(), Some(&sample(3.0)));
    }

    #[test]
    fn test_second_identical_tick_commits() {
        let mut detector = DwellDetector::new();
        let mut history = RecentHistory::new(5);
        feed(&mut detector, &mut history, &[1.0]);
        assert_eq!(
            detector.observe(sample(1.0), &mut history),
            Observation::Committed { index: 0, evicted: 0 }
        );
        assert_eq!(
            detector.observe(sample(1.0), &mut history),
            Observation::Repeated { index: 0, count: 2 }
        );
    }

    #[test]
    fn test_capacity_two_scenario() {
        let mut detector = DwellDetector::new();
        let mut history = RecentHistory::new(2);

        feed(&mut detector, &mut history, &[1.0, 1.0]);
        assert_eq!(summary(&history), vec![(1.0, 1)]);

        feed(&mut detector, &mut history, &[2.0, 2.0]);
        assert_eq!(summary(&history), vec![(1.0, 1), (2.0, 1)]);

        feed(&mut detector, &mut history, &[3.0, 3.0]);
        assert_eq!(summary(&history), vec![(2.0, 1), (3.0, 1)]);
    }

    #[test]
    fn test_returning_to_old_view_bumps_it() {
        let mut detector = DwellDetector::new();
        let mut history = RecentHistory::new(5);
        feed(&mut detector, &mut history, &[1.0, 1.0, 2.0, 2.0, 1.0, 1.0]);
        assert_eq!(summary(&history), vec![(1.0, 2), (2.0, 1)]);
    }

    #[test]
    fn test_reset_requires_priming_again() {
        let mut detector = DwellDetector::new();
        let mut history = RecentHistory::new(5);
        feed(&mut detector, &mut history, &[1.0]);
        detector.reset();
        assert_eq!(detector.observe(sample(1.0), &mut history), Observation::Primed);
        assert!(history.is_empty());
    }

    proptest! {
        #[test]
        fn prop_identical_ticks_count(n in 2u32..40) {
            let mut detector = DwellDetector::new();
            let mut history = RecentHistory::new(10);
            for _ in 0..n {
                detector.observe(sample(4.0), &mut history);
            }
            prop_assert_eq!(history.len(), 1);
            prop_assert_eq!(history.get(0).unwrap().repeat_count, n - 1);
        }
    }
}
