use slidetile_core::{Board, Position};

use crate::{ShuffleSeed, ShuffleWalk};

/// What a completed shuffle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleSummary {
    /// The seed that drove the walk.
    pub seed: ShuffleSeed,
    /// Number of moves applied.
    pub steps: usize,
    /// The empty slot after the last move.
    pub empty_slot: Position,
}

/// Shuffles boards with a fixed number of random legal moves.
///
/// The step count sets the scramble depth only; any count, including zero,
/// yields a board reachable from the one it started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shuffler {
    steps: usize,
}

impl Shuffler {
    /// Creates a shuffler that applies `steps` moves per shuffle.
    #[must_use]
    pub const fn new(steps: usize) -> Self {
        Self { steps }
    }

    /// Returns the number of moves per shuffle.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Starts a walk with this shuffler's step count.
    #[must_use]
    pub fn walk(&self, seed: ShuffleSeed) -> ShuffleWalk {
        ShuffleWalk::new(self.steps, seed)
    }

    /// Shuffles `board` with a fresh random seed.
    pub fn shuffle<T>(&self, board: &mut Board<T>) -> ShuffleSummary {
        self.shuffle_with_seed(board, ShuffleSeed::random())
    }

    /// Shuffles `board` with the walk determined by `seed`.
    pub fn shuffle_with_seed<T>(&self, board: &mut Board<T>, seed: ShuffleSeed) -> ShuffleSummary {
        let mut walk = self.walk(seed);
        let steps = walk.run(board);
        log::debug!(
            "shuffled {0}x{0} board with {steps} moves (seed {seed})",
            board.size()
        );
        ShuffleSummary {
            seed,
            steps,
            empty_slot: board.empty_slot(),
        }
    }
}

/// Shuffles `board` with `steps` random legal moves driven by `seed`.
///
/// Equivalent to `Shuffler::new(steps).shuffle_with_seed(board, seed)`.
pub fn shuffle<T>(board: &mut Board<T>, steps: usize, seed: ShuffleSeed) -> ShuffleSummary {
    Shuffler::new(steps).shuffle_with_seed(board, seed)
}
