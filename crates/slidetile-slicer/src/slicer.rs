use image::imageops;
use slidetile_core::Position;

use crate::{PngSurface, SliceError, SourceImage, TileImage, TileSurface};

/// A pixel rectangle within the source image.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    /// Left edge, inclusive.
    pub x: u32,
    /// Top edge, inclusive.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Returns the source region of the tile at `pos` on a `grid_size` grid.
///
/// Column `x` spans `[x·w/N, (x+1)·w/N)` and row `y` spans `[y·h/N, (y+1)·h/N)`
/// in integer pixels. Neighbouring tiles share edges exactly and the whole
/// grid covers the image; when `w` or `h` is not a multiple of `N`, tile sizes
/// differ by at most one pixel.
///
/// # Panics
///
/// Panics if `grid_size` is zero.
///
/// # Examples
///
/// ```
/// use slidetile_core::Position;
/// use slidetile_slicer::{TileRect, tile_rect};
///
/// let rect = tile_rect(10, 10, 3, Position::new(2, 1));
/// assert_eq!(rect, TileRect { x: 3, y: 6, width: 3, height: 4 });
/// ```
#[must_use]
pub fn tile_rect(width: u32, height: u32, grid_size: u8, pos: Position) -> TileRect {
    assert!(grid_size > 0, "grid size must be positive");
    let (col, row) = (u16::from(pos.col()), u16::from(pos.row()));
    let x0 = split_point(width, grid_size, col);
    let x1 = split_point(width, grid_size, col + 1);
    let y0 = split_point(height, grid_size, row);
    let y1 = split_point(height, grid_size, row + 1);
    TileRect {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    }
}

#[expect(clippy::cast_possible_truncation)]
fn split_point(length: u32, grid_size: u8, i: u16) -> u32 {
    // exceeds `length` only for positions off the grid
    (u64::from(length) * u64::from(i) / u64::from(grid_size)) as u32
}

/// Slices `source` into `grid_size`² tiles encoded with [`PngSurface`].
///
/// See [`slice_with`].
///
/// # Errors
///
/// See [`slice_with`].
pub fn slice(source: &SourceImage, grid_size: u8) -> Result<Vec<TileImage>, SliceError> {
    slice_with(source, grid_size, &mut PngSurface)
}

/// Slices `source` into `grid_size`² tiles, encoding each through `surface`.
///
/// Tiles are returned in row-major order: index `y·N + x` holds the tile cut
/// from column `x`, row `y`, whose origin is `Position::new(y, x)`. The source
/// image is left untouched.
///
/// # Errors
///
/// - [`SliceError::InvalidGridSize`] if `grid_size < 2`.
/// - [`SliceError::InvalidDimensions`] if the image is narrower or shorter
///   than `grid_size` pixels.
/// - [`SliceError::Surface`] if the surface cannot be acquired or a tile
///   cannot be encoded.
pub fn slice_with<S>(
    source: &SourceImage,
    grid_size: u8,
    surface: &mut S,
) -> Result<Vec<TileImage>, SliceError>
where
    S: TileSurface + ?Sized,
{
    if grid_size < 2 {
        return Err(SliceError::InvalidGridSize { size: grid_size });
    }
    let (width, height) = (source.width(), source.height());
    if width < u32::from(grid_size) || height < u32::from(grid_size) {
        return Err(SliceError::InvalidDimensions {
            width,
            height,
            grid_size,
        });
    }

    let max_width = width.div_ceil(u32::from(grid_size));
    let max_height = height.div_ceil(u32::from(grid_size));
    surface.acquire(max_width, max_height)?;

    let cell_count = usize::from(grid_size) * usize::from(grid_size);
    let mut tiles = Vec::with_capacity(cell_count);
    for index in 0..cell_count {
        let origin = Position::from_index(index, grid_size);
        let rect = tile_rect(width, height, grid_size, origin);
        let pixels =
            imageops::crop_imm(source.pixels(), rect.x, rect.y, rect.width, rect.height).to_image();
        let encoded = surface.encode(&pixels)?;
        tiles.push(TileImage::new(origin, grid_size, rect, pixels, encoded));
    }

    log::debug!("sliced {width}x{height} image into {grid_size}x{grid_size} tiles");
    Ok(tiles)
}
