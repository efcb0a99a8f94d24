//! Image decode/encode collaborators backed by the `image` crate.

use std::path::Path;

use image::{ImageReader, RgbImage};
use tracing::debug;

use crate::error::Error;
use crate::pixel::PixelBuffer;

/// Resolves a photo path to decoded RGB pixels.
///
/// Album loading goes through this trait so tests and embedders can swap in
/// their own resolution strategy.
pub trait PhotoDecoder {
    /// Decode the image at `path` into an RGB buffer.
    ///
    /// # Errors
    /// Returns [`Error::Decode`] when the file cannot be read or parsed.
    fn decode(&self, path: &Path) -> Result<PixelBuffer, Error>;
}

/// Filesystem decoder: sniffs the container format from content and
/// extension, then flattens any alpha channel away; the core only ever
/// works on 3-channel samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder;

impl PhotoDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> Result<PixelBuffer, Error> {
        let img = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| Error::Decode {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?
            .decode()
            .map_err(|err| Error::Decode {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
        debug!(
            photo = %path.display(),
            width = img.width(),
            height = img.height(),
            "decoded image"
        );
        Ok(PixelBuffer::from_rgb_image(img.into_rgb8()))
    }
}

/// Turn a pixel buffer back into an `image` bitmap for display or export.
#[must_use]
pub fn encode(buffer: &PixelBuffer) -> RgbImage {
    buffer.to_rgb_image()
}
