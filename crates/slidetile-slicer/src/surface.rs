use image::{ExtendedColorType, ImageEncoder as _, RgbaImage, codecs::png::PngEncoder};

use crate::SurfaceError;

/// A rendering surface that turns tile pixels into encoded raster blobs.
///
/// The slicer acquires the surface once before producing any tile, then
/// encodes every tile through it. Failures are surfaced to the caller and
/// never retried.
pub trait TileSurface {
    /// Prepares the surface for tiles up to `max_width`×`max_height` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Unavailable`] if the surface cannot be used.
    fn acquire(&mut self, max_width: u32, max_height: u32) -> Result<(), SurfaceError> {
        let _ = (max_width, max_height);
        Ok(())
    }

    /// Encodes one tile.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile cannot be encoded.
    fn encode(&mut self, tile: &RgbaImage) -> Result<Vec<u8>, SurfaceError>;
}

/// The default surface: encodes each tile as an RGBA PNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngSurface;

impl TileSurface for PngSurface {
    fn encode(&mut self, tile: &RgbaImage) -> Result<Vec<u8>, SurfaceError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(
                tile.as_raw(),
                tile.width(),
                tile.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|source| SurfaceError::Encode { source })?;
        Ok(out)
    }
}
