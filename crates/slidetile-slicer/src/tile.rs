use std::{
    fmt::{self, Display},
    sync::Arc,
};

use image::RgbaImage;
use slidetile_core::Position;

use crate::TileRect;

/// An immutable handle to one tile of a sliced image.
///
/// Clones share the same pixel data. Equality is handle identity: clones of a
/// handle compare equal, while two separately sliced tiles never do, even if
/// their pixels happen to match.
///
/// `Display` prints the tile's 1-based number in row-major solved order, which
/// is how text front-ends label tiles.
#[derive(Clone)]
pub struct TileImage {
    inner: Arc<TileData>,
}

struct TileData {
    origin: Position,
    grid_size: u8,
    rect: TileRect,
    pixels: RgbaImage,
    encoded: Vec<u8>,
}

impl TileImage {
    pub(crate) fn new(
        origin: Position,
        grid_size: u8,
        rect: TileRect,
        pixels: RgbaImage,
        encoded: Vec<u8>,
    ) -> Self {
        Self {
            inner: Arc::new(TileData {
                origin,
                grid_size,
                rect,
                pixels,
                encoded,
            }),
        }
    }

    /// Returns the position this tile occupies in the solved puzzle.
    #[must_use]
    pub fn origin(&self) -> Position {
        self.inner.origin
    }

    /// Returns the grid dimension the tile was sliced for.
    #[must_use]
    pub fn grid_size(&self) -> u8 {
        self.inner.grid_size
    }

    /// Returns the 1-based row-major number of this tile in the solved puzzle.
    #[must_use]
    pub fn number(&self) -> usize {
        self.inner.origin.index(self.inner.grid_size) + 1
    }

    /// Returns the region of the source image this tile was cut from.
    #[must_use]
    pub fn rect(&self) -> TileRect {
        self.inner.rect
    }

    /// Returns the tile width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.inner.rect.width
    }

    /// Returns the tile height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.inner.rect.height
    }

    /// Returns the tile pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.inner.pixels
    }

    /// Returns the encoded raster blob produced by the rendering surface.
    #[must_use]
    pub fn encoded(&self) -> &[u8] {
        &self.inner.encoded
    }
}

impl PartialEq for TileImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for TileImage {}

impl fmt::Debug for TileImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileImage")
            .field("origin", &self.inner.origin)
            .field("rect", &self.inner.rect)
            .field("encoded_len", &self.inner.encoded.len())
            .finish_non_exhaustive()
    }
}

impl Display for TileImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.number(), f)
    }
}
