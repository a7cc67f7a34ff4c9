use serde::Serialize;

use crate::foundation::core::{Homography, translation};
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::geometry::bounds::bounding_box_of_transformed;
use crate::raster::source::SourceImage;

/// Size of the accumulation canvas and the shift that moves every placed image into it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CanvasGeometry {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Color channels shared by every source image.
    pub channels: usize,
    /// Width shared by every source image.
    pub image_width: usize,
    /// Translation taking the global minimum corner to `(0, 0)`.
    pub translation: Homography,
}

impl CanvasGeometry {
    /// Fit a canvas around the transformed corners of every image.
    ///
    /// Bounds come from [`crate::bounding_box_of_transformed`] and are already truncated to
    /// integers, so the `ceil`/`floor` below are no-ops and a single identity-placed `W×H`
    /// image yields a `(W-1)×(H-1)` canvas. This is kept as-is for output compatibility.
    pub fn from_images(images: &[SourceImage]) -> MosaicResult<Self> {
        let first = images.first().ok_or(MosaicError::EmptyInput)?;
        let channels = first.channels();
        let image_width = first.width();

        let (mut min_x, mut min_y) = (i64::MAX, i64::MAX);
        let (mut max_x, mut max_y) = (i64::MIN, i64::MIN);
        for img in images {
            if img.channels() != channels {
                return Err(MosaicError::dimension_mismatch(format!(
                    "image '{}' has {} channels, expected {channels}",
                    img.name(),
                    img.channels()
                )));
            }
            if img.width() != image_width {
                return Err(MosaicError::dimension_mismatch(format!(
                    "image '{}' is {} px wide, expected {image_width}",
                    img.name(),
                    img.width()
                )));
            }

            let bb = bounding_box_of_transformed(img, img.placement()).ok_or_else(|| {
                MosaicError::validation(format!(
                    "placement of image '{}' sends a corner to infinity",
                    img.name()
                ))
            })?;
            min_x = min_x.min(bb.min_x);
            min_y = min_y.min(bb.min_y);
            max_x = max_x.max(bb.max_x);
            max_y = max_y.max(bb.max_y);
        }

        let width = extent(min_x, max_x, "width")?;
        let height = extent(min_y, max_y, "height")?;
        // The accumulator holds `channels + 1` f64 values per pixel and a Vec may not exceed
        // isize::MAX bytes.
        width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(channels + 1))
            .and_then(|v| v.checked_mul(std::mem::size_of::<f64>()))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or_else(|| {
                MosaicError::validation(format!("canvas {width}x{height} is too large"))
            })?;

        tracing::debug!(width, height, min_x, min_y, "accumulation canvas");

        Ok(Self {
            width,
            height,
            channels,
            image_width,
            translation: translation(-(min_x as f64), -(min_y as f64)),
        })
    }

    /// `translation · placement` for `img`: image-local pixels to canvas pixels.
    pub fn combined_transform(&self, img: &SourceImage) -> Homography {
        self.translation * img.placement()
    }
}

fn extent(min: i64, max: i64, axis: &str) -> MosaicResult<usize> {
    let span = (max as f64).ceil() - (min as f64).floor();
    if span < 1.0 || span > usize::MAX as f64 {
        return Err(MosaicError::validation(format!(
            "canvas {axis} {span} is not a positive pixel count"
        )));
    }
    Ok(span as usize)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/canvas.rs"]
mod tests;
