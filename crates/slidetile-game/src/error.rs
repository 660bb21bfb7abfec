use slidetile_core::BoardError;
use slidetile_slicer::SliceError;

/// Errors raised while setting up or driving a [`Game`](crate::Game).
///
/// Initialization errors are fatal to the session: the host should report
/// them instead of showing a board.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The image loader went away before delivering the source image.
    #[display("image loader disconnected before delivering the source image")]
    LoaderDisconnected,
    /// The source image could not be turned into tiles.
    #[display("{source}")]
    Slice {
        /// The underlying slicing error.
        source: SliceError,
    },
    /// The tiles could not be placed on a board.
    #[display("{source}")]
    Board {
        /// The underlying board error.
        source: BoardError,
    },
    /// The configured grid size is unusable.
    #[display("grid size must be at least 2, got {size}")]
    InvalidGridSize {
        /// The rejected grid dimension.
        size: u8,
    },
    /// A shuffle is already running.
    #[display("a shuffle is already in progress")]
    Busy,
}

impl GameError {
    /// Returns `true` if the source image never arrived or could not be decoded.
    #[must_use]
    pub fn is_image_load(&self) -> bool {
        matches!(
            self,
            Self::LoaderDisconnected
                | Self::Slice {
                    source: SliceError::ImageLoad { .. }
                }
        )
    }

    /// Returns `true` if the rendering surface could not be acquired or used.
    #[must_use]
    pub fn is_surface(&self) -> bool {
        matches!(
            self,
            Self::Slice {
                source: SliceError::Surface { .. }
            }
        )
    }
}

impl From<SliceError> for GameError {
    fn from(source: SliceError) -> Self {
        Self::Slice { source }
    }
}

impl From<BoardError> for GameError {
    fn from(source: BoardError) -> Self {
        Self::Board { source }
    }
}
