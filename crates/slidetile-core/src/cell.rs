//! Board cell contents.

use std::fmt::{self, Display};

/// The content of a single board cell.
///
/// A board holds exactly one [`Cell::Empty`]; every other cell holds a tile.
/// The empty marker is an explicit variant so a tile payload can never be
/// mistaken for the hole.
///
/// # Examples
///
/// ```
/// use slidetile_core::Cell;
///
/// let tile = Cell::Tile(7);
/// assert!(tile.is_tile());
/// assert_eq!(tile.as_tile(), Some(&7));
///
/// let empty: Cell<u32> = Cell::Empty;
/// assert!(empty.is_empty());
/// assert_eq!(empty.as_tile(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Cell<T> {
    /// The cell holds a tile.
    Tile(T),
    /// The cell is the empty slot.
    Empty,
}

impl<T> Cell<T> {
    /// Returns a reference to the tile, or `None` for the empty slot.
    #[must_use]
    pub const fn as_tile(&self) -> Option<&T> {
        match self {
            Self::Tile(tile) => Some(tile),
            Self::Empty => None,
        }
    }

    /// Consumes the cell and returns its tile, if any.
    #[must_use]
    pub fn into_tile(self) -> Option<T> {
        match self {
            Self::Tile(tile) => Some(tile),
            Self::Empty => None,
        }
    }

    /// Maps the tile payload, keeping the empty marker as is.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Cell<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Tile(tile) => Cell::Tile(f(tile)),
            Self::Empty => Cell::Empty,
        }
    }
}

impl<T> From<Option<T>> for Cell<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Tile)
    }
}

impl<T> Display for Cell<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tile(tile) => Display::fmt(tile, f),
            Self::Empty => f.pad("."),
        }
    }
}
