use std::sync::Arc;

use crate::foundation::core::Homography;
use crate::foundation::error::{MosaicError, MosaicResult};

/// Highest channel count accepted for source images (gray, gray+alpha, RGB, RGBA).
pub const MAX_CHANNELS: usize = 4;

/// An 8-bit input image plus the placement that maps it into the mosaic frame.
///
/// Samples are interleaved and row-major (`(y * width + x) * channels + c`). The pixel data is
/// shared behind an [`Arc`], so cloning a `SourceImage` is cheap.
#[derive(Clone, Debug)]
pub struct SourceImage {
    name: String,
    width: usize,
    height: usize,
    channels: usize,
    data: Arc<Vec<u8>>,
    placement: Homography,
}

impl SourceImage {
    /// Wrap raw interleaved samples.
    ///
    /// Fails when `channels` is outside `1..=4`, the image is empty, or `data` does not hold
    /// exactly `width * height * channels` bytes.
    pub fn new(
        name: impl Into<String>,
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
        placement: Homography,
    ) -> MosaicResult<Self> {
        let name = name.into();
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(MosaicError::validation(format!(
                "image '{name}' has {channels} channels, expected 1..={MAX_CHANNELS}"
            )));
        }
        if width == 0 || height == 0 {
            return Err(MosaicError::validation(format!(
                "image '{name}' is empty ({width}x{height})"
            )));
        }
        let expected_len = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(channels))
            .ok_or_else(|| MosaicError::validation(format!("image '{name}' size overflow")))?;
        if data.len() != expected_len {
            return Err(MosaicError::validation(format!(
                "image '{name}' expects {expected_len} samples for {width}x{height}x{channels}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            name,
            width,
            height,
            channels,
            data: Arc::new(data),
            placement,
        })
    }

    /// Convert a decoded [`image::DynamicImage`], keeping its channel layout at 8 bits.
    ///
    /// Wider sample formats are narrowed to 8 bits; layouts with more than four channels do not
    /// exist in `image`, so the mapping is total.
    pub fn from_dynamic(
        name: impl Into<String>,
        img: &image::DynamicImage,
        placement: Homography,
    ) -> MosaicResult<Self> {
        let (width, height) = (img.width() as usize, img.height() as usize);
        let (channels, data) = match img.color().channel_count() {
            1 => (1, img.to_luma8().into_raw()),
            2 => (2, img.to_luma_alpha8().into_raw()),
            3 => (3, img.to_rgb8().into_raw()),
            _ => (4, img.to_rgba8().into_raw()),
        };
        Self::new(name, width, height, channels, data, placement)
    }

    /// Same pixels, different placement.
    pub fn with_placement(&self, placement: Homography) -> Self {
        Self {
            placement,
            ..self.clone()
        }
    }

    /// Diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Channels per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Placement transform (image-local pixels to mosaic frame).
    pub fn placement(&self) -> &Homography {
        &self.placement
    }

    /// Interleaved 8-bit samples.
    pub fn samples(&self) -> &[u8] {
        &self.data
    }

    /// Channel values of the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let start = (y * self.width + x) * self.channels;
        &self.data[start..start + self.channels]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/source.rs"]
mod tests;
