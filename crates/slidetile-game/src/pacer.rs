use std::time::{Duration, Instant};

use slidetile_shuffler::ShuffleStep;

use crate::Game;

/// Spaces shuffle steps out in time.
///
/// The pacer is polled from the host's update loop with the current time and
/// reports when the next step is due. The first poll is always due; after
/// that each step waits at least `delay`. A host that falls behind gets one
/// step per poll rather than a burst, so every intermediate board is shown.
///
/// Pacing only decides *when* a step runs; the shuffled board depends on the
/// seed and step count alone.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use slidetile_game::ShufflePacer;
///
/// let mut pacer = ShufflePacer::new(Duration::from_millis(100));
/// let start = Instant::now();
///
/// assert!(pacer.poll(start));
/// assert!(!pacer.poll(start + Duration::from_millis(50)));
/// assert!(pacer.poll(start + Duration::from_millis(100)));
/// ```
#[derive(Debug, Clone)]
pub struct ShufflePacer {
    delay: Duration,
    next_due: Option<Instant>,
}

impl ShufflePacer {
    /// Creates a pacer that waits `delay` between steps.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_due: None,
        }
    }

    /// Returns the delay between steps.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns `true` if a step is due at `now`, and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now < due => false,
            _ => {
                self.next_due = Some(now + self.delay);
                true
            }
        }
    }

    /// Returns how long the host may sleep before the next step is due.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due
            .map_or(Duration::ZERO, |due| due.saturating_duration_since(now))
    }

    /// Makes the next poll due immediately.
    pub fn reset(&mut self) {
        self.next_due = None;
    }

    /// Applies one shuffle step to `game` if it is shuffling and a step is due.
    pub fn drive<T>(&mut self, game: &mut Game<T>, now: Instant) -> Option<ShuffleStep>
    where
        T: Clone + PartialEq,
    {
        if !game.is_busy() {
            self.reset();
            return None;
        }
        if !self.poll(now) {
            return None;
        }
        game.shuffle_step()
    }
}

#[cfg(test)]
mod tests {
    use slidetile_shuffler::ShuffleSeed;

    use super::*;

    #[test]
    fn test_steps_wait_for_delay() {
        let delay = Duration::from_millis(30);
        let mut pacer = ShufflePacer::new(delay);
        let start = Instant::now();

        assert_eq!(pacer.time_until_due(start), Duration::ZERO);
        assert!(pacer.poll(start));
        assert_eq!(pacer.time_until_due(start), delay);
        assert!(!pacer.poll(start + Duration::from_millis(29)));
        assert!(pacer.poll(start + delay));
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let mut pacer = ShufflePacer::new(Duration::from_millis(10));
        let start = Instant::now();
        assert!(pacer.poll(start));

        let late = start + Duration::from_secs(1);
        assert!(pacer.poll(late));
        assert!(!pacer.poll(late));
    }

    #[test]
    fn test_zero_delay_is_always_due() {
        let mut pacer = ShufflePacer::new(Duration::ZERO);
        let now = Instant::now();
        for _ in 0..5 {
            assert!(pacer.poll(now));
        }
    }

    #[test]
    fn test_drive_runs_shuffle_to_completion() {
        let mut game = Game::new(1..=15_u16, 4).unwrap();
        game.begin_shuffle(25, ShuffleSeed::from_bytes([2; 32])).unwrap();

        let mut pacer = ShufflePacer::new(Duration::from_millis(5));
        let mut now = Instant::now();
        let mut applied = 0;
        while game.is_busy() {
            if pacer.drive(&mut game, now).is_some() {
                applied += 1;
            }
            // A second poll at the same instant is not due.
            assert!(pacer.drive(&mut game, now).is_none());
            now += Duration::from_millis(5);
        }
        assert_eq!(applied, 25);
        assert!(pacer.drive(&mut game, now).is_none());

        let mut reference = Game::new(1..=15_u16, 4).unwrap();
        reference.begin_shuffle(25, ShuffleSeed::from_bytes([2; 32])).unwrap();
        reference.finish_shuffle();
        assert_eq!(game.board(), reference.board());
    }
}
