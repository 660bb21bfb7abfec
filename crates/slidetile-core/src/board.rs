//! The N×N board state machine.
//!
//! [`Board`] owns the cells of a square puzzle and the position of its single
//! empty slot. All mutation goes through [`Board::apply_move`], which swaps an
//! adjacent tile into the empty slot. Requests that are not legal moves are
//! ignored rather than rejected, so stray input never disturbs the board.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use tinyvec::ArrayVec;

use crate::{Arrangement, Cell, Direction, Position};

/// Legal move sources for an empty slot: at most four orthogonal neighbours.
pub type ValidMoves = ArrayVec<[Position; 4]>;

/// Errors that can occur while building a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The grid dimension is too small to hold a tile next to the empty slot.
    #[display("grid size must be at least 2, got {size}")]
    InvalidGridSize {
        /// The rejected grid dimension.
        size: u8,
    },
    /// The number of tiles does not fit the grid.
    #[display("expected {expected} tiles for the grid, got {actual}")]
    TileCountMismatch {
        /// Number of tiles the grid holds besides the empty slot.
        expected: usize,
        /// Number of tiles supplied.
        actual: usize,
    },
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The tile at `from` slid into `to`, and `from` became the empty slot.
    Moved {
        /// Where the tile was before the move (the new empty slot).
        from: Position,
        /// Where the tile is now (the previous empty slot).
        to: Position,
    },
    /// The request was not a legal move; nothing changed.
    Ignored,
}

/// Returns the positions that may slide into `empty` on a `size`×`size` board.
///
/// The result holds the in-bounds orthogonal neighbours of `empty` in
/// up, down, left, right order: two for a corner, three for an edge and four
/// for an interior cell.
///
/// # Examples
///
/// ```
/// use slidetile_core::{Position, valid_moves_from};
///
/// let moves = valid_moves_from(Position::new(3, 3), 4);
/// assert_eq!(moves.as_slice(), &[Position::new(2, 3), Position::new(3, 2)]);
///
/// let moves = valid_moves_from(Position::new(1, 2), 4);
/// assert_eq!(moves.len(), 4);
/// ```
#[must_use]
pub fn valid_moves_from(empty: Position, size: u8) -> ValidMoves {
    let mut moves = ValidMoves::new();
    for direction in Direction::ALL {
        if let Some(pos) = empty.neighbor(direction, size) {
            moves.push(pos);
        }
    }
    moves
}

/// A square sliding-tile board.
///
/// Cells are stored in row-major order. Exactly one cell is
/// [`Cell::Empty`], and [`Board::empty_slot`] always points at it.
///
/// # Example
///
/// ```
/// use slidetile_core::{Board, Cell, Position};
///
/// let board = Board::new(['a', 'b', 'c'], 2).unwrap();
/// assert_eq!(board.size(), 2);
/// assert_eq!(board[Position::new(0, 1)], Cell::Tile('b'));
/// assert_eq!(board[Position::new(1, 1)], Cell::Empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board<T> {
    size: u8,
    cells: Vec<Cell<T>>,
    empty: Position,
}

impl<T> Board<T> {
    /// Creates a board in solved order.
    ///
    /// Tiles are placed row-major and the bottom-right cell is the empty slot.
    /// `tiles` may hold either `size² - 1` tiles, or a full `size²` set whose
    /// last tile is discarded to clear the bottom-right cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidGridSize`] if `size < 2`, and
    /// [`BoardError::TileCountMismatch`] if the tile count fits neither form.
    ///
    /// # Example
    ///
    /// ```
    /// use slidetile_core::{Board, BoardError, Position};
    ///
    /// let board = Board::new(1..=8, 3).unwrap();
    /// assert_eq!(board.empty_slot(), Position::new(2, 2));
    ///
    /// // A full set of nine tiles also works: the last one is dropped.
    /// let board = Board::new(1..=9, 3).unwrap();
    /// assert_eq!(board.tile_count(), 8);
    ///
    /// assert!(matches!(
    ///     Board::new(1..=5, 3),
    ///     Err(BoardError::TileCountMismatch { expected: 8, actual: 5 })
    /// ));
    /// ```
    pub fn new<I>(tiles: I, size: u8) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = T>,
    {
        if size < 2 {
            return Err(BoardError::InvalidGridSize { size });
        }
        let cell_count = usize::from(size) * usize::from(size);
        let mut tiles = tiles.into_iter().collect::<Vec<_>>();
        if tiles.len() == cell_count {
            tiles.truncate(cell_count - 1);
        }
        if tiles.len() != cell_count - 1 {
            return Err(BoardError::TileCountMismatch {
                expected: cell_count - 1,
                actual: tiles.len(),
            });
        }

        let mut cells = tiles.into_iter().map(Cell::Tile).collect::<Vec<_>>();
        cells.push(Cell::Empty);
        Ok(Self {
            size,
            cells,
            empty: Position::new(size - 1, size - 1),
        })
    }

    /// Rebuilds a board holding exactly the placement captured in `arrangement`.
    #[must_use]
    pub fn from_arrangement(arrangement: &Arrangement<T>) -> Self
    where
        T: Clone,
    {
        Self {
            size: arrangement.size(),
            cells: arrangement.cells().to_vec(),
            empty: arrangement.empty_slot(),
        }
    }

    /// Returns the grid dimension N.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the number of tiles on the board (N² - 1).
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.len() - 1
    }

    /// Returns the position of the empty slot.
    #[must_use]
    pub const fn empty_slot(&self) -> Position {
        self.empty
    }

    /// Returns `true` if `pos` lies on this board.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size)
    }

    /// Returns the cell at `pos`, or `None` if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell<T>> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.index(self.size))
    }

    /// Returns the tile at `pos`, or `None` for the empty slot and off-board positions.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<&T> {
        self.get(pos).and_then(Cell::as_tile)
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell<T>] {
        &self.cells
    }

    /// Returns an iterator over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell<T>)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::from_index(i, size), cell))
    }

    /// Returns an iterator over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell<T>]> + '_ {
        self.cells.chunks(usize::from(self.size))
    }

    /// Returns the positions whose tiles may slide into the empty slot.
    ///
    /// See [`valid_moves_from`] for ordering. The result is never empty.
    #[must_use]
    pub fn valid_moves(&self) -> ValidMoves {
        valid_moves_from(self.empty, self.size)
    }

    /// Returns `true` if the tile at `from` may slide into the empty slot.
    #[must_use]
    pub fn is_valid_move(&self, from: Position) -> bool {
        self.contains(from) && from.is_adjacent(self.empty)
    }

    /// Slides the tile at `from` into the empty slot.
    ///
    /// The move is legal only when `from` is on the board and shares an edge
    /// with the empty slot. A legal move swaps the two cells and makes `from`
    /// the new empty slot. Any other request, including the empty slot itself,
    /// diagonal neighbours and off-board positions, is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use slidetile_core::{Board, Cell, MoveOutcome, Position};
    ///
    /// let mut board = Board::new(1..=15, 4).unwrap();
    /// let from = Position::new(2, 3);
    /// let tile = board[from].clone();
    ///
    /// let outcome = board.apply_move(from);
    /// assert_eq!(outcome, MoveOutcome::Moved { from, to: Position::new(3, 3) });
    /// assert_eq!(board.empty_slot(), from);
    /// assert_eq!(board[Position::new(3, 3)], tile);
    ///
    /// let before = board.clone();
    /// assert_eq!(board.apply_move(Position::new(0, 0)), MoveOutcome::Ignored);
    /// assert_eq!(board, before);
    /// ```
    pub fn apply_move(&mut self, from: Position) -> MoveOutcome {
        if !self.is_valid_move(from) {
            return MoveOutcome::Ignored;
        }
        let to = self.empty;
        self.cells.swap(from.index(self.size), to.index(self.size));
        self.empty = from;
        MoveOutcome::Moved { from, to }
    }

    /// Slides the tile next to the empty slot in `direction`.
    ///
    /// The tile moves towards `direction`, so [`Direction::Up`] moves the tile
    /// below the empty slot upwards. Ignored if no tile sits on that side.
    pub fn apply_direction(&mut self, direction: Direction) -> MoveOutcome {
        match self.empty.neighbor(direction.opposite(), self.size) {
            Some(from) => self.apply_move(from),
            None => MoveOutcome::Ignored,
        }
    }

    /// Returns the position of `tile`, or `None` if it is not on the board.
    #[must_use]
    pub fn position_of(&self, tile: &T) -> Option<Position>
    where
        T: PartialEq,
    {
        self.cells
            .iter()
            .position(|cell| cell.as_tile() == Some(tile))
            .map(|i| Position::from_index(i, self.size))
    }

    /// Captures the current placement as an immutable [`Arrangement`].
    #[must_use]
    pub fn snapshot(&self) -> Arrangement<T>
    where
        T: Clone,
    {
        Arrangement::capture(self)
    }

    /// Returns `true` if every cell matches `arrangement`.
    #[must_use]
    pub fn is_solved(&self, arrangement: &Arrangement<T>) -> bool
    where
        T: PartialEq,
    {
        arrangement.matches(self)
    }

    /// Returns the number of tiles not at their place in `arrangement`.
    ///
    /// The empty slot is not counted. Boards of a different size count every
    /// tile as misplaced.
    #[must_use]
    pub fn misplaced_count(&self, arrangement: &Arrangement<T>) -> usize
    where
        T: PartialEq,
    {
        if self.size != arrangement.size() {
            return self.tile_count();
        }
        self.cells
            .iter()
            .zip(arrangement.cells())
            .filter(|(cell, expected)| cell.is_tile() && cell != expected)
            .count()
    }
}

impl<T> Index<Position> for Board<T> {
    type Output = Cell<T>;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(
            self.contains(pos),
            "position {pos} is outside a {0}x{0} board",
            self.size
        );
        &self.cells[pos.index(self.size)]
    }
}

impl<T> Display for Board<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn numbered(size: u8) -> Board<u16> {
        let count = u16::from(size) * u16::from(size) - 1;
        Board::new(1..=count, size).expect("tile count matches grid")
    }

    fn assert_invariants(board: &Board<u16>) {
        let empties = board
            .iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect::<Vec<_>>();
        assert_eq!(empties, vec![board.empty_slot()]);

        let mut tiles = board
            .cells()
            .iter()
            .filter_map(Cell::as_tile)
            .copied()
            .collect::<Vec<_>>();
        tiles.sort_unstable();
        let expected = (1..=u16::try_from(board.tile_count()).unwrap()).collect::<Vec<_>>();
        assert_eq!(tiles, expected);
    }

    #[test]
    fn test_new_places_tiles_row_major() {
        let board = numbered(4);
        assert_eq!(board.size(), 4);
        assert_eq!(board.empty_slot(), Position::new(3, 3));
        assert_eq!(board[Position::new(0, 0)], Cell::Tile(1));
        assert_eq!(board[Position::new(0, 3)], Cell::Tile(4));
        assert_eq!(board[Position::new(1, 0)], Cell::Tile(5));
        assert_eq!(board[Position::new(3, 2)], Cell::Tile(15));
        assert_eq!(board[Position::new(3, 3)], Cell::Empty);
        assert_invariants(&board);
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert_eq!(
            Board::new(Vec::<u8>::new(), 1),
            Err(BoardError::InvalidGridSize { size: 1 })
        );
        assert_eq!(
            Board::new(Vec::<u8>::new(), 0),
            Err(BoardError::InvalidGridSize { size: 0 })
        );
        assert_eq!(
            Board::new(1..=10, 3),
            Err(BoardError::TileCountMismatch {
                expected: 8,
                actual: 10
            })
        );
    }

    #[test]
    fn test_full_tile_set_drops_last_tile() {
        let board = Board::new(0..16, 4).unwrap();
        assert_eq!(board.tile_count(), 15);
        assert_eq!(board.position_of(&15), None);
        assert_eq!(board.position_of(&14), Some(Position::new(3, 2)));
    }

    #[test]
    fn test_valid_moves_by_location() {
        for size in 2..=6 {
            let last = size - 1;
            for row in 0..size {
                for col in 0..size {
                    let moves = valid_moves_from(Position::new(row, col), size);
                    let on_row_edge = row == 0 || row == last;
                    let on_col_edge = col == 0 || col == last;
                    let expected = 4 - usize::from(on_row_edge) - usize::from(on_col_edge);
                    assert_eq!(moves.len(), expected, "size {size} at ({row}, {col})");
                    assert!(
                        moves
                            .iter()
                            .all(|pos| pos.is_within(size) && pos.is_adjacent(Position::new(row, col)))
                    );
                }
            }
        }
    }

    #[test]
    fn test_valid_moves_bottom_right_corner() {
        let board = numbered(4);
        assert_eq!(
            board.valid_moves().as_slice(),
            &[Position::new(2, 3), Position::new(3, 2)]
        );
    }

    #[test]
    fn test_move_and_move_back_restores_solved() {
        let mut board = numbered(4);
        let solved = board.snapshot();

        let outcome = board.apply_move(Position::new(2, 3));
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Position::new(2, 3),
                to: Position::new(3, 3)
            }
        );
        assert_eq!(board.empty_slot(), Position::new(2, 3));
        assert_eq!(board[Position::new(3, 3)], Cell::Tile(12));
        assert!(!board.is_solved(&solved));
        assert_eq!(board.misplaced_count(&solved), 1);

        // (2, 3) is now the empty slot itself; the reverse slide moves tile 12 back from (3, 3).
        assert!(board.apply_move(Position::new(2, 3)).is_ignored());
        assert_eq!(
            board.apply_move(Position::new(3, 3)),
            MoveOutcome::Moved {
                from: Position::new(3, 3),
                to: Position::new(2, 3)
            }
        );
        assert_eq!(board.empty_slot(), Position::new(3, 3));
        assert!(board.is_solved(&solved));
        assert_eq!(board.misplaced_count(&solved), 0);
    }

    #[test]
    fn test_illegal_moves_are_ignored() {
        let mut board = numbered(4);
        let before = board.clone();
        for pos in [
            Position::new(0, 0),
            Position::new(2, 2),
            Position::new(3, 3),
            Position::new(4, 3),
            Position::new(3, 4),
            Position::new(200, 200),
        ] {
            assert_eq!(board.apply_move(pos), MoveOutcome::Ignored);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_apply_direction() {
        let mut board = numbered(3);
        // Nothing below or right of the bottom-right hole.
        assert!(board.apply_direction(Direction::Up).is_ignored());
        assert!(board.apply_direction(Direction::Left).is_ignored());

        assert_eq!(
            board.apply_direction(Direction::Down),
            MoveOutcome::Moved {
                from: Position::new(1, 2),
                to: Position::new(2, 2)
            }
        );
        assert_eq!(
            board.apply_direction(Direction::Right),
            MoveOutcome::Moved {
                from: Position::new(1, 1),
                to: Position::new(1, 2)
            }
        );
        assert_eq!(board.empty_slot(), Position::new(1, 1));
        assert_invariants(&board);
    }

    #[test]
    fn test_from_arrangement_restores_snapshot() {
        let mut board = numbered(3);
        let solved = board.snapshot();
        board.apply_move(Position::new(1, 2));
        board.apply_move(Position::new(1, 1));

        let restored = Board::from_arrangement(&solved);
        assert!(restored.is_solved(&solved));
        assert_eq!(restored.empty_slot(), Position::new(2, 2));
        assert_eq!(restored, numbered(3));
    }

    #[test]
    fn test_display() {
        let board = numbered(2);
        assert_eq!(board.to_string(), "  1   2\n  3   .\n");
    }

    #[test]
    #[should_panic(expected = "position (2, 0) is outside a 2x2 board")]
    fn test_index_out_of_bounds_panics() {
        let board = numbered(2);
        let _ = &board[Position::new(2, 0)];
    }

    proptest! {
        #[test]
        fn prop_moves_preserve_invariants(
            size in 2u8..=6,
            requests in prop::collection::vec((0u8..8, 0u8..8), 0..200),
        ) {
            let mut board = numbered(size);
            for (row, col) in requests {
                let pos = Position::new(row, col);
                let before = board.clone();
                let was_valid = board.is_valid_move(pos);
                let outcome = board.apply_move(pos);
                prop_assert_eq!(outcome.is_moved(), was_valid);
                if !was_valid {
                    prop_assert_eq!(&board, &before);
                }
                assert_invariants(&board);
            }
        }

        #[test]
        fn prop_moves_are_reversible(
            size in 2u8..=5,
            picks in prop::collection::vec(0usize..4, 0..150),
        ) {
            let mut board = numbered(size);
            let solved = board.snapshot();
            let mut history = Vec::new();
            for pick in picks {
                let moves = board.valid_moves();
                let from = moves[pick % moves.len()];
                match board.apply_move(from) {
                    MoveOutcome::Moved { from, to } => history.push((from, to)),
                    MoveOutcome::Ignored => prop_assert!(false, "valid move was ignored"),
                }
            }
            for (_, to) in history.into_iter().rev() {
                prop_assert!(board.apply_move(to).is_moved());
            }
            prop_assert!(board.is_solved(&solved));
        }
    }
}
