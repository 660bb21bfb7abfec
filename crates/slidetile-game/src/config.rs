use std::time::Duration;

use slidetile_shuffler::ShuffleSeed;

use crate::GameError;

/// Tunable parameters of a puzzle session.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use slidetile_game::GameConfig;
///
/// let config = GameConfig::default()
///     .grid_size(5)
///     .shuffle_steps(300)
///     .step_delay(Duration::ZERO)
///     .source("assets/puzzle.png");
///
/// assert_eq!(config.get_grid_size(), 5);
/// assert_eq!(config.get_source(), Some("assets/puzzle.png"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    grid_size: u8,
    shuffle_steps: usize,
    step_delay: Duration,
    source: Option<String>,
    seed: Option<ShuffleSeed>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            shuffle_steps: 100,
            step_delay: Duration::from_millis(100),
            source: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Sets the grid dimension N.
    #[must_use]
    pub fn grid_size(mut self, grid_size: u8) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets the number of random moves applied by a shuffle.
    #[must_use]
    pub fn shuffle_steps(mut self, steps: usize) -> Self {
        self.shuffle_steps = steps;
        self
    }

    /// Sets the delay between shuffle steps.
    #[must_use]
    pub fn step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Sets the source image handle (a path or URI understood by the host's loader).
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Fixes the shuffle seed, making every shuffle of the session reproducible.
    #[must_use]
    pub fn seed(mut self, seed: ShuffleSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the grid dimension N.
    #[must_use]
    pub fn get_grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Returns the number of moves per shuffle.
    #[must_use]
    pub fn get_shuffle_steps(&self) -> usize {
        self.shuffle_steps
    }

    /// Returns the delay between shuffle steps.
    #[must_use]
    pub fn get_step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Returns the source image handle, if set.
    #[must_use]
    pub fn get_source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns the fixed seed if one was set, or draws a fresh one.
    #[must_use]
    pub fn seed_or_random(&self) -> ShuffleSeed {
        self.seed.unwrap_or_else(ShuffleSeed::random)
    }

    /// Checks that the configuration describes a playable puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidGridSize`] if the grid dimension is below 2.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_size < 2 {
            return Err(GameError::InvalidGridSize {
                size: self.grid_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.get_grid_size(), 4);
        assert_eq!(config.get_shuffle_steps(), 100);
        assert_eq!(config.get_step_delay(), Duration::from_millis(100));
        assert_eq!(config.get_source(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fixed_seed_is_reused() {
        let seed = ShuffleSeed::from_bytes([8; 32]);
        let config = GameConfig::default().seed(seed);
        assert_eq!(config.seed_or_random(), seed);
        assert_eq!(config.seed_or_random(), seed);
    }

    #[test]
    fn test_source_handle_is_kept() {
        let config = GameConfig::default().source(String::from("pictures/harbor.jpg"));
        assert_eq!(config.get_source(), Some("pictures/harbor.jpg"));
        assert_eq!(config.clone().get_source(), config.get_source());
    }

    #[test]
    fn test_tiny_grid_is_rejected() {
        let result = GameConfig::default().grid_size(1).validate();
        assert!(matches!(result, Err(GameError::InvalidGridSize { size: 1 })));
    }
}
