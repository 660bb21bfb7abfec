use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use slidetile_core::{Board, MoveOutcome, Position};

use crate::ShuffleSeed;

/// One transition produced by a [`ShuffleWalk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleStep {
    /// Zero-based index of this step within the walk.
    pub index: usize,
    /// Where the moved tile came from; the empty slot after the step.
    pub from: Position,
    /// Where the moved tile went; the empty slot before the step.
    pub to: Position,
}

/// A bounded random walk of legal moves, stepped one transition at a time.
///
/// Each step picks uniformly among the board's valid moves, including the
/// move that undoes the previous step. The walk holds no reference to the
/// board, so a caller can interleave steps with rendering, pause between
/// them, or drop the walk midway; every applied step is a complete move.
///
/// # Examples
///
/// ```
/// use slidetile_core::Board;
/// use slidetile_shuffler::{ShuffleSeed, ShuffleWalk};
///
/// let mut board = Board::new(1..=8, 3).unwrap();
/// let mut walk = ShuffleWalk::new(3, ShuffleSeed::from_bytes([1; 32]));
///
/// while let Some(step) = walk.step(&mut board) {
///     assert_eq!(board.empty_slot(), step.from);
/// }
/// assert!(walk.is_finished());
/// assert_eq!(walk.taken(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ShuffleWalk {
    rng: Pcg64,
    seed: ShuffleSeed,
    steps: usize,
    taken: usize,
}

impl ShuffleWalk {
    /// Creates a walk of `steps` moves driven by `seed`.
    #[must_use]
    pub fn new(steps: usize, seed: ShuffleSeed) -> Self {
        Self {
            rng: Pcg64::from_seed(*seed.as_bytes()),
            seed,
            steps,
            taken: 0,
        }
    }

    /// Returns the seed driving this walk.
    #[must_use]
    pub const fn seed(&self) -> ShuffleSeed {
        self.seed
    }

    /// Returns the total number of steps in the walk.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Returns how many steps have been applied.
    #[must_use]
    pub const fn taken(&self) -> usize {
        self.taken
    }

    /// Returns how many steps remain.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.steps - self.taken
    }

    /// Returns `true` once every step has been applied.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.taken == self.steps
    }

    /// Applies the next step to `board`.
    ///
    /// Returns `None` without touching the board once the walk is finished.
    pub fn step<T>(&mut self, board: &mut Board<T>) -> Option<ShuffleStep> {
        if self.is_finished() {
            return None;
        }
        let moves = board.valid_moves();
        let pick = moves[self.rng.random_range(0..moves.len())];
        let MoveOutcome::Moved { from, to } = board.apply_move(pick) else {
            unreachable!("valid move {pick} was ignored");
        };
        let step = ShuffleStep {
            index: self.taken,
            from,
            to,
        };
        self.taken += 1;
        log::trace!("shuffle step {}: {from} -> {to}", step.index);
        Some(step)
    }

    /// Applies every remaining step to `board` and returns how many were applied.
    pub fn run<T>(&mut self, board: &mut Board<T>) -> usize {
        let mut applied = 0;
        while self.step(board).is_some() {
            applied += 1;
        }
        applied
    }
}
