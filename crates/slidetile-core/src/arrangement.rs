//! Immutable solved-placement snapshots.

use std::sync::Arc;

use crate::{Board, Cell, Position};

/// An immutable snapshot of a board's placement.
///
/// An arrangement is captured once, right after a board is created in solved
/// order, and every later board state is compared against it. Clones share the
/// same storage.
///
/// # Examples
///
/// ```
/// use slidetile_core::{Board, Position};
///
/// let mut board = Board::new(1..=3, 2).unwrap();
/// let original = board.snapshot();
/// assert!(original.matches(&board));
///
/// board.apply_move(Position::new(0, 1));
/// assert!(!original.matches(&board));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arrangement<T> {
    size: u8,
    cells: Arc<[Cell<T>]>,
    empty: Position,
}

impl<T> Arrangement<T> {
    /// Captures the current placement of `board`.
    #[must_use]
    pub fn capture(board: &Board<T>) -> Self
    where
        T: Clone,
    {
        Self {
            size: board.size(),
            cells: board.cells().into(),
            empty: board.empty_slot(),
        }
    }

    /// Returns the grid dimension of the captured board.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the captured cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell<T>] {
        &self.cells
    }

    /// Returns the captured empty slot.
    #[must_use]
    pub const fn empty_slot(&self) -> Position {
        self.empty
    }

    /// Returns the captured cell at `pos`, or `None` if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell<T>> {
        if !pos.is_within(self.size) {
            return None;
        }
        self.cells.get(pos.index(self.size))
    }

    /// Returns `true` if `board` holds exactly this placement.
    ///
    /// Every cell is compared with the captured cell at the same position; the
    /// empty slots match when both are [`Cell::Empty`].
    #[must_use]
    pub fn matches(&self, board: &Board<T>) -> bool
    where
        T: PartialEq,
    {
        self.size == board.size() && *self.cells == *board.cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_detached_from_board() {
        let mut board = Board::new(1..=8, 3).unwrap();
        let original = board.snapshot();
        board.apply_move(Position::new(1, 2));

        assert_eq!(original.empty_slot(), Position::new(2, 2));
        assert_eq!(original.get(Position::new(1, 2)), Some(&Cell::Tile(6)));
        assert_eq!(original.get(Position::new(2, 2)), Some(&Cell::Empty));
        assert_eq!(original.get(Position::new(3, 0)), None);
        assert!(!original.matches(&board));
    }

    #[test]
    fn test_single_cell_difference_is_detected() {
        let board = Board::new(1..=8, 3).unwrap();
        let original = board.snapshot();

        // Same multiset of tiles, two of them swapped.
        let swapped = Board::new([2, 1, 3, 4, 5, 6, 7, 8], 3).unwrap();
        assert!(!original.matches(&swapped));
        assert_eq!(swapped.misplaced_count(&original), 2);

        let other_size = Board::new(1..=3, 2).unwrap();
        assert!(!original.matches(&other_size));
    }

    #[test]
    fn test_clones_share_storage() {
        let board = Board::new(1..=3, 2).unwrap();
        let original = board.snapshot();
        let copy = original.clone();
        assert!(Arc::ptr_eq(&original.cells, &copy.cells));
        assert_eq!(original, copy);
    }
}
