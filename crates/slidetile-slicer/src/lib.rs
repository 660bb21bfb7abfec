//! Image slicing for sliding-tile puzzles.
//!
//! This crate turns a decoded raster image into the N×N set of tile images a
//! puzzle board is built from. Each [`TileImage`] is an immutable, cheaply
//! clonable handle tagged with the [`Position`] it occupies in the solved
//! puzzle.
//!
//! - [`SourceImage`]: a decoded source picture with known, non-zero dimensions.
//! - [`slice`] / [`slice_with`]: partition a source into row-major tiles.
//! - [`TileSurface`]: the rendering surface that encodes each tile into the
//!   raster blob handed to the renderer; [`PngSurface`] is the default.
//!
//! # Examples
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use slidetile_core::Position;
//! use slidetile_slicer::{SourceImage, slice};
//!
//! let pixels = RgbaImage::from_pixel(40, 40, Rgba([200, 10, 10, 255]));
//! let source = SourceImage::from_rgba(pixels).unwrap();
//!
//! let tiles = slice(&source, 4).unwrap();
//! assert_eq!(tiles.len(), 16);
//! assert_eq!(tiles[5].origin(), Position::new(1, 1));
//! assert_eq!((tiles[5].width(), tiles[5].height()), (10, 10));
//! ```
//!
//! [`Position`]: slidetile_core::Position

pub use self::{
    error::{SliceError, SurfaceError},
    slicer::{TileRect, slice, slice_with, tile_rect},
    source::SourceImage,
    surface::{PngSurface, TileSurface},
    tile::TileImage,
};

mod error;
mod slicer;
mod source;
mod surface;
mod tile;
