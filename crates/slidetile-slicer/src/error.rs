/// Errors raised by a [`TileSurface`](crate::TileSurface).
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SurfaceError {
    /// The rendering surface could not be acquired.
    #[display("rendering surface unavailable: {reason}")]
    Unavailable {
        /// Why the surface could not be acquired.
        reason: String,
    },
    /// A tile could not be encoded.
    #[display("tile encoding failed: {source}")]
    Encode {
        /// The underlying encoder error.
        source: image::ImageError,
    },
}

/// Errors that abort slicing.
///
/// Every variant is fatal to puzzle initialization: no partial tile set is
/// ever returned.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SliceError {
    /// The source bytes could not be decoded into an image.
    #[display("failed to decode source image: {source}")]
    ImageLoad {
        /// The underlying decoder error.
        source: image::ImageError,
    },
    /// The grid dimension is too small for a puzzle.
    #[display("grid size must be at least 2, got {size}")]
    InvalidGridSize {
        /// The rejected grid dimension.
        size: u8,
    },
    /// The image has no pixels.
    #[display("source image is empty ({width}x{height})")]
    EmptyImage {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
    /// The image is too small to give every tile at least one pixel.
    #[display("a {width}x{height} image cannot be split into a {grid_size}x{grid_size} grid")]
    InvalidDimensions {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Requested grid dimension.
        grid_size: u8,
    },
    /// The rendering surface failed.
    #[display("failed to render tiles: {source}")]
    Surface {
        /// The underlying surface error.
        source: SurfaceError,
    },
}

impl From<SurfaceError> for SliceError {
    fn from(source: SurfaceError) -> Self {
        Self::Surface { source }
    }
}
