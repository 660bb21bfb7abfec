//! Board coordinates and slide directions.

use std::fmt::{self, Display};

/// A cell coordinate on a square board, as a (row, column) pair.
///
/// Rows grow downwards and columns grow to the right; `(0, 0)` is the top-left
/// cell. A position carries no board size, so bounds are checked by the
/// operations that take one.
///
/// # Examples
///
/// ```
/// use slidetile_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
/// assert_eq!(pos.index(4), 11);
/// assert_eq!(Position::from_index(11, 4), pos);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from its row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row (y coordinate).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (x coordinate).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index of this position on a board of `size` columns.
    #[must_use]
    pub fn index(self, size: u8) -> usize {
        usize::from(self.row) * usize::from(size) + usize::from(self.col)
    }

    /// Converts a row-major index back into a position.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or if the index lies beyond a `size`×`size` board.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_index(index: usize, size: u8) -> Self {
        let size = usize::from(size);
        assert!(
            size > 0 && index < size * size,
            "index {index} is outside a {size}x{size} board"
        );
        Self::new((index / size) as u8, (index % size) as u8)
    }

    /// Returns `true` if this position lies on a `size`×`size` board.
    #[must_use]
    pub const fn is_within(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the Manhattan distance between two positions.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u16 {
        u16::from(self.row.abs_diff(other.row)) + u16::from(self.col.abs_diff(other.col))
    }

    /// Returns `true` if the two positions share an edge.
    ///
    /// Diagonal neighbours and identical positions are not adjacent.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::Position;
    ///
    /// let pos = Position::new(1, 1);
    /// assert!(pos.is_adjacent(Position::new(0, 1)));
    /// assert!(pos.is_adjacent(Position::new(1, 2)));
    /// assert!(!pos.is_adjacent(Position::new(0, 0)));
    /// assert!(!pos.is_adjacent(pos));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Returns the neighbouring position in `direction`, if it lies on a
    /// `size`×`size` board.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::{Direction, Position};
    ///
    /// let corner = Position::new(0, 0);
    /// assert_eq!(corner.neighbor(Direction::Up, 4), None);
    /// assert_eq!(corner.neighbor(Direction::Right, 4), Some(Position::new(0, 1)));
    /// ```
    #[must_use]
    pub fn neighbor(self, direction: Direction, size: u8) -> Option<Self> {
        let (d_row, d_col) = direction.offset();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let pos = Self::new(row, col);
        pos.is_within(size).then_some(pos)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal directions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions, in the order legal moves are enumerated.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the (row, column) offset of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the direction leading from `from` to the adjacent position `to`.
    ///
    /// Returns `None` if the positions are not adjacent.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        if !from.is_adjacent(to) {
            return None;
        }
        Some(if to.row() < from.row() {
            Self::Up
        } else if to.row() > from.row() {
            Self::Down
        } else if to.col() < from.col() {
            Self::Left
        } else {
            Self::Right
        })
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_covers_board() {
        for size in [2, 3, 4, 7] {
            for index in 0..usize::from(size) * usize::from(size) {
                let pos = Position::from_index(index, size);
                assert!(pos.is_within(size));
                assert_eq!(pos.index(size), index);
            }
        }
    }

    #[test]
    #[should_panic(expected = "index 16 is outside a 4x4 board")]
    fn test_from_index_out_of_range_panics() {
        let _ = Position::from_index(16, 4);
    }

    #[test]
    fn test_neighbor_respects_bounds() {
        let size = 3;
        let corner = Position::new(2, 2);
        assert_eq!(corner.neighbor(Direction::Down, size), None);
        assert_eq!(corner.neighbor(Direction::Right, size), None);
        assert_eq!(
            corner.neighbor(Direction::Up, size),
            Some(Position::new(1, 2))
        );
        assert_eq!(
            corner.neighbor(Direction::Left, size),
            Some(Position::new(2, 1))
        );

        let origin = Position::new(0, 0);
        assert_eq!(origin.neighbor(Direction::Up, size), None);
        assert_eq!(origin.neighbor(Direction::Left, size), None);
    }

    #[test]
    fn test_adjacency_excludes_diagonals() {
        let center = Position::new(2, 2);
        let adjacent = Direction::ALL
            .iter()
            .filter_map(|&dir| center.neighbor(dir, 5))
            .collect::<Vec<_>>();
        assert_eq!(adjacent.len(), 4);
        assert!(adjacent.iter().all(|&pos| center.is_adjacent(pos)));

        for diagonal in [(1, 1), (1, 3), (3, 1), (3, 3)] {
            assert!(!center.is_adjacent(Position::new(diagonal.0, diagonal.1)));
        }
        assert!(!center.is_adjacent(Position::new(2, 4)));
    }

    #[test]
    fn test_direction_between_and_opposite() {
        let from = Position::new(1, 1);
        for dir in Direction::ALL {
            let to = from.neighbor(dir, 3).expect("interior cell has all neighbours");
            assert_eq!(Direction::between(from, to), Some(dir));
            assert_eq!(Direction::between(to, from), Some(dir.opposite()));
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(Direction::between(from, Position::new(0, 0)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 2).to_string(), "(3, 2)");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
