use image::RgbaImage;

use crate::SliceError;

/// A fully decoded source picture.
///
/// Construction guarantees both dimensions are non-zero. The pixels are never
/// modified by slicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    /// Decodes an encoded raster (PNG or JPEG) into a source image.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::ImageLoad`] if the bytes cannot be decoded, and
    /// [`SliceError::EmptyImage`] if the decoded image has no pixels.
    pub fn decode(bytes: &[u8]) -> Result<Self, SliceError> {
        let image =
            image::load_from_memory(bytes).map_err(|source| SliceError::ImageLoad { source })?;
        log::debug!(
            "decoded {}x{} source image from {} bytes",
            image.width(),
            image.height(),
            bytes.len()
        );
        Self::from_rgba(image.to_rgba8())
    }

    /// Wraps already decoded RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::EmptyImage`] if either dimension is zero.
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self, SliceError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(SliceError::EmptyImage { width, height });
        }
        Ok(Self { pixels })
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Returns the decoded pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
