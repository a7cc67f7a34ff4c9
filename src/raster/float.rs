//! Owned multi-channel `f64` image in row-major, interleaved layout.
//!
//! Accumulation works on samples normalized to `[0, 1]`; this is the buffer the bilinear sampler
//! reads from.
use crate::foundation::math::U8_MAX_F64;
use crate::raster::source::SourceImage;

/// Normalized float copy of a source image.
#[derive(Clone, Debug)]
pub struct ImageF64 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Channels per pixel
    pub channels: usize,
    /// Backing storage, `(y * w + x) * channels + c`
    pub data: Vec<f64>,
}

impl ImageF64 {
    /// Construct a zero-initialized buffer of size `w × h × channels`.
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        Self {
            w,
            h,
            channels,
            data: vec![0.0; w * h * channels],
        }
    }

    /// Divide every 8-bit sample by 255.
    pub fn from_source(img: &SourceImage) -> Self {
        Self {
            w: img.width(),
            h: img.height(),
            channels: img.channels(),
            data: img
                .samples()
                .iter()
                .map(|&v| f64::from(v) / U8_MAX_F64)
                .collect(),
        }
    }

    #[inline]
    /// Index of channel 0 of pixel `(x, y)` in `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * self.channels
    }

    #[inline]
    /// Channel values of pixel `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> &[f64] {
        assert!(x < self.w && y < self.h, "pixel ({x}, {y}) out of bounds");
        let i = self.idx(x, y);
        &self.data[i..i + self.channels]
    }
}
