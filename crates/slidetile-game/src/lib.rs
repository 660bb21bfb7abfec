//! Sliding-tile puzzle sessions.
//!
//! This crate ties the board, the tile slicer and the shuffler together into a
//! single engine object that a front-end drives:
//!
//! - [`Game`] owns the board, the solved arrangement and the busy flag. User
//!   moves, shuffle steps and solved detection all go through it.
//! - [`GameEvent`]s are queued for the host, which drains them after each
//!   update to repaint or react.
//! - [`ShufflePacer`] spaces shuffle steps out in time so intermediate boards
//!   can be shown; pacing never affects the resulting board.
//! - [`PendingGame`] waits for the source image to arrive, then slices it and
//!   builds the game.
//! - [`GameConfig`] gathers the tunable parameters.
//!
//! # Example
//!
//! ```
//! use slidetile_game::{Game, GameEvent, GamePhase};
//! use slidetile_shuffler::ShuffleSeed;
//!
//! let mut game = Game::new(1..=15_u16, 4).unwrap();
//! game.begin_shuffle(50, ShuffleSeed::from_bytes([4; 32])).unwrap();
//! assert!(game.is_busy());
//!
//! // User input is ignored while the shuffle runs.
//! let empty = game.empty_slot();
//! let neighbor = game.board().valid_moves()[0];
//! assert!(game.request_move(neighbor).is_ignored());
//! assert_eq!(game.empty_slot(), empty);
//!
//! while game.shuffle_step().is_some() {}
//! assert_eq!(game.phase(), GamePhase::Playing);
//! assert!(game.drain_events().any(|event| event == GameEvent::ShuffleFinished { steps: 50 }));
//! ```

pub use self::{
    config::GameConfig,
    error::GameError,
    event::{GameEvent, GamePhase},
    game::Game,
    pacer::ShufflePacer,
    pending::PendingGame,
};

mod config;
mod error;
mod event;
mod game;
mod pacer;
mod pending;
