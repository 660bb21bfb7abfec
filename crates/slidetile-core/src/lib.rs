//! Core data structures for sliding-tile puzzles.
//!
//! This crate provides the board state machine shared by shuffling, game
//! management and rendering front-ends. It is generic over the tile payload so
//! the same board drives image tiles, numbered tiles in tests, or anything else
//! that can be compared for identity.
//!
//! # Overview
//!
//! 1. **Coordinates**
//!    - [`position`]: [`Position`] (row, column) and [`Direction`].
//!
//! 2. **Board state**
//!    - [`cell`]: [`Cell`], either a tile or the empty marker.
//!    - [`board`]: [`Board`], the N×N grid with its empty slot, legal move
//!      enumeration and move application.
//!
//! 3. **Solved detection**
//!    - [`arrangement`]: [`Arrangement`], an immutable snapshot of the solved
//!      placement that boards are compared against.
//!
//! # Examples
//!
//! ```
//! use slidetile_core::{Board, MoveOutcome, Position};
//!
//! let mut board = Board::new(1..=15, 4).unwrap();
//! let solved = board.snapshot();
//!
//! assert_eq!(board.empty_slot(), Position::new(3, 3));
//! assert_eq!(
//!     board.valid_moves().as_slice(),
//!     &[Position::new(2, 3), Position::new(3, 2)]
//! );
//!
//! // Slide the tile above the empty slot down, then back up.
//! assert!(board.apply_move(Position::new(2, 3)).is_moved());
//! assert!(!board.is_solved(&solved));
//! assert!(board.apply_move(Position::new(3, 3)).is_moved());
//! assert!(board.is_solved(&solved));
//!
//! // Non-adjacent requests are ignored.
//! assert_eq!(board.apply_move(Position::new(0, 0)), MoveOutcome::Ignored);
//! ```

pub mod arrangement;
pub mod board;
pub mod cell;
pub mod position;

pub use self::{
    arrangement::Arrangement,
    board::{Board, BoardError, MoveOutcome, ValidMoves, valid_moves_from},
    cell::Cell,
    position::{Direction, Position},
};
