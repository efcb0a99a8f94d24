//! Tone adjustments: brightness, saturation, contrast.
//!
//! Each operation is a pure function from one buffer to a new one. The
//! caller keeps the original and re-derives from it on every parameter
//! change, so adjustments never accumulate. The arithmetic is fixed
//! (per-channel, integer samples, round-then-clamp) and must stay exactly as
//! written so output matches existing data.

use crate::pixel::PixelBuffer;

pub const PARAM_MIN: i32 = -100;
pub const PARAM_MAX: i32 = 100;

/// Slider positions for the three tone channels, each in `[-100, 100]`.
/// Zero is neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToneParams {
    pub brightness: i32,
    pub saturation: i32,
    pub contrast: i32,
}

impl ToneParams {
    /// Force all three channels into the supported range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            brightness: self.brightness.clamp(PARAM_MIN, PARAM_MAX),
            saturation: self.saturation.clamp(PARAM_MIN, PARAM_MAX),
            contrast: self.contrast.clamp(PARAM_MIN, PARAM_MAX),
        }
    }
}

/// Apply brightness, then saturation, then contrast to `original`.
///
/// The stage order is fixed; every call starts from the caller's original
/// buffer, never from a previous result.
#[must_use]
pub fn adjust(original: &PixelBuffer, params: ToneParams) -> PixelBuffer {
    let params = params.clamped();
    let out = brightness(original, params.brightness);
    let out = saturation(&out, params.saturation);
    contrast(&out, params.contrast)
}

/// Add `value` to every sample, clamping to `[0, 255]`.
#[must_use]
pub fn brightness(buf: &PixelBuffer, value: i32) -> PixelBuffer {
    let value = value.clamp(PARAM_MIN, PARAM_MAX);
    let samples = buf
        .samples()
        .iter()
        .map(|&s| (i32::from(s) + value).clamp(0, 255) as u8)
        .collect();
    buf.with_samples(samples)
}

/// Scale each pixel's deviation from its luminance by `(value + 100) / 100`.
///
/// `-100` fully desaturates to gray, `0` is identity, `100` doubles the
/// deviation. The luminance weights are `0.3/0.59/0.11`, close to but not
/// BT.601; they are kept verbatim for output compatibility.
#[must_use]
pub fn saturation(buf: &PixelBuffer, value: i32) -> PixelBuffer {
    let value = value.clamp(PARAM_MIN, PARAM_MAX);
    let factor = f64::from(value + 100) / 100.0;
    let mut samples = Vec::with_capacity(buf.samples().len());
    for px in buf.samples().chunks_exact(3) {
        let r = f64::from(px[0]);
        let g = f64::from(px[1]);
        let b = f64::from(px[2]);
        let gray = 0.3 * r + 0.59 * g + 0.11 * b;
        for c in [r, g, b] {
            samples.push(clamp_sample(gray + factor * (c - gray)));
        }
    }
    buf.with_samples(samples)
}

/// Scale each sample's distance from mid-gray 128 by `(value + 100) / 100`.
///
/// Applied per-channel rather than on luminance; not colorimetrically
/// "correct", kept verbatim for output compatibility. `-100` collapses
/// everything to 128.
#[must_use]
pub fn contrast(buf: &PixelBuffer, value: i32) -> PixelBuffer {
    let value = value.clamp(PARAM_MIN, PARAM_MAX);
    let factor = f64::from(value + 100) / 100.0;
    let samples = buf
        .samples()
        .iter()
        .map(|&s| clamp_sample((f64::from(s) - 128.0) * factor + 128.0))
        .collect();
    buf.with_samples(samples)
}

fn clamp_sample(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
