//! Raw RGB pixel storage shared by the adjustment engine and the album
//! store.

use image::{RgbImage, imageops};

use crate::error::Error;

/// An owned RGB image: interleaved `R,G,B` samples, row-major.
///
/// The sample vector always holds exactly `width * height * 3` bytes;
/// constructors enforce this. Buffers are never mutated after construction;
/// every tone adjustment allocates a fresh buffer so the pristine original
/// stays available to re-derive from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Construct a buffer from raw interleaved samples.
    ///
    /// # Errors
    /// Returns [`Error::BufferShape`] when `samples` does not hold
    /// `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, Error> {
        let expected = width as usize * height as usize * 3;
        if samples.len() != expected {
            return Err(Error::BufferShape {
                width,
                height,
                len: samples.len(),
                expected,
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// A zero-dimension buffer, the "no pixels" placeholder.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            samples: Vec::new(),
        }
    }

    /// Take ownership of a decoded `image` bitmap.
    #[must_use]
    pub fn from_rgb_image(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            samples: image.into_raw(),
        }
    }

    /// Copy the samples back into an `image` bitmap for display or export.
    #[must_use]
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_raw(self.width, self.height, self.samples.clone())
            .unwrap_or_else(|| RgbImage::new(self.width, self.height))
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Interleaved `R,G,B` samples, `width * height * 3` of them.
    #[must_use]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Whether the buffer holds no pixels at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// A copy scaled down to fit inside a `max_dim` square, preserving the
    /// aspect ratio. Buffers already small enough come back unscaled.
    #[must_use]
    pub fn thumbnail(&self, max_dim: u32) -> Self {
        if self.is_empty() || max_dim == 0 || (self.width <= max_dim && self.height <= max_dim) {
            return self.clone();
        }
        let (w, h) = fit_within(self.width, self.height, max_dim);
        Self::from_rgb_image(imageops::thumbnail(&self.to_rgb_image(), w, h))
    }

    /// Same-shape buffer around replacement samples. Callers guarantee the
    /// length matches.
    pub(crate) fn with_samples(&self, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), self.samples.len());
        Self {
            width: self.width,
            height: self.height,
            samples,
        }
    }
}

fn fit_within(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let scale = f64::from(max_dim) / f64::from(width.max(height));
    let w = (f64::from(width) * scale).round() as u32;
    let h = (f64::from(height) * scale).round() as u32;
    (w.max(1), h.max(1))
}
