//! Random-walk shuffling for sliding-tile boards.
//!
//! A shuffle starts from the solved board and applies a fixed number of legal
//! moves, each chosen uniformly among the tiles next to the empty slot. Every
//! step goes through [`Board::apply_move`], so the result is always reachable
//! from (and therefore solvable back to) the solved state.
//!
//! The walk is a plain synchronous generator: [`ShuffleWalk::step`] performs
//! exactly one transition per call, leaving any pacing between steps to the
//! caller. Walks are driven by a [`ShuffleSeed`], so a seed and a step count
//! reproduce the same shuffle.
//!
//! # Examples
//!
//! ```
//! use slidetile_core::Board;
//! use slidetile_shuffler::{ShuffleSeed, Shuffler};
//!
//! let mut board = Board::new(1..=15, 4).unwrap();
//! let solved = board.snapshot();
//!
//! let shuffler = Shuffler::new(200);
//! let summary = shuffler.shuffle_with_seed(&mut board, ShuffleSeed::from_bytes([7; 32]));
//! assert_eq!(summary.steps, 200);
//! assert_eq!(summary.empty_slot, board.empty_slot());
//!
//! // Same seed, same result.
//! let mut again = Board::from_arrangement(&solved);
//! shuffler.shuffle_with_seed(&mut again, summary.seed);
//! assert_eq!(again, board);
//! ```
//!
//! [`Board::apply_move`]: slidetile_core::Board::apply_move

pub use self::{
    seed::{ParseSeedError, ShuffleSeed},
    shuffler::{ShuffleSummary, Shuffler, shuffle},
    walk::{ShuffleStep, ShuffleWalk},
};

mod seed;
mod shuffler;
mod walk;
