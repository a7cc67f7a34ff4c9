use anyhow::Context;

use crate::foundation::error::{MosaicError, MosaicResult};

/// An 8-bit composited image.
///
/// Samples are interleaved and row-major, like [`crate::SourceImage`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mosaic {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Channels per pixel.
    pub channels: usize,
    /// Interleaved 8-bit samples, tightly packed.
    pub data: Vec<u8>,
}

impl Mosaic {
    /// Allocate a black mosaic.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0; width * height * channels],
        }
    }

    /// Channel values of the pixel at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = (y * self.width + x) * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Drop the trailing channel, e.g. the opaque coverage channel added by normalization.
    pub fn without_last_channel(&self) -> MosaicResult<Self> {
        if self.channels < 2 {
            return Err(MosaicError::validation(
                "cannot drop the only channel of a mosaic",
            ));
        }
        let keep = self.channels - 1;
        let data = self
            .data
            .chunks_exact(self.channels)
            .flat_map(|px| px[..keep].iter().copied())
            .collect();
        Ok(Self {
            width: self.width,
            height: self.height,
            channels: keep,
            data,
        })
    }

    /// Convert into an [`image::DynamicImage`] matching the channel count.
    pub fn to_dynamic(&self) -> MosaicResult<image::DynamicImage> {
        let (w, h) = (
            u32::try_from(self.width).context("mosaic width exceeds u32")?,
            u32::try_from(self.height).context("mosaic height exceeds u32")?,
        );
        let data = self.data.clone();
        let img = match self.channels {
            1 => image::GrayImage::from_raw(w, h, data).map(image::DynamicImage::ImageLuma8),
            2 => image::GrayAlphaImage::from_raw(w, h, data)
                .map(image::DynamicImage::ImageLumaA8),
            3 => image::RgbImage::from_raw(w, h, data).map(image::DynamicImage::ImageRgb8),
            4 => image::RgbaImage::from_raw(w, h, data).map(image::DynamicImage::ImageRgba8),
            n => {
                return Err(MosaicError::validation(format!(
                    "no image layout for {n} channels"
                )));
            }
        };
        img.ok_or_else(|| MosaicError::validation("mosaic buffer does not match its dimensions"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mosaic.rs"]
mod tests;
