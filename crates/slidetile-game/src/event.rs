use slidetile_core::Position;
use slidetile_shuffler::{ShuffleSeed, ShuffleStep};

/// The lifecycle phase of a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GamePhase {
    /// Freshly created or restarted; the board is in solved order.
    Idle,
    /// A shuffle is in progress. User moves are ignored.
    Shuffling,
    /// The user is solving the puzzle.
    Playing,
    /// The user restored the solved arrangement. User moves are ignored until
    /// the next shuffle or restart.
    Solved,
}

/// A state change reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A user move slid the tile at `from` into `to`.
    Moved {
        /// The tile's previous position, now empty.
        from: Position,
        /// The tile's new position.
        to: Position,
    },
    /// A shuffle began.
    ShuffleStarted {
        /// Number of steps the shuffle will apply.
        steps: usize,
        /// The seed driving the shuffle.
        seed: ShuffleSeed,
    },
    /// One shuffle step was applied.
    ShuffleStepped(ShuffleStep),
    /// The shuffle applied all its steps.
    ShuffleFinished {
        /// Number of steps applied.
        steps: usize,
    },
    /// The shuffle was abandoned before its last step.
    ShuffleCancelled {
        /// Number of steps applied before cancellation.
        applied: usize,
        /// Number of steps that will never run.
        remaining: usize,
    },
    /// The board was reset to the solved arrangement.
    Restarted,
    /// The user solved the puzzle.
    Solved,
}
