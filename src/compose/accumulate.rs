use rayon::prelude::*;

use crate::foundation::core::Homography;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::geometry::sample::bilinear_sample;
use crate::raster::float::ImageF64;
use crate::raster::source::{MAX_CHANNELS, SourceImage};

/// Running per-pixel sums of weighted color and weight.
///
/// Each pixel holds `channels + 1` values: the weighted color sum for every channel followed by
/// the total weight. Allocated zeroed once per composition and mutated only through `&mut`.
#[derive(Clone, Debug, PartialEq)]
pub struct AccumulationBuffer {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<f64>,
}

impl AccumulationBuffer {
    /// Zero-filled buffer for a `width × height` canvas of `channels` color channels.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0.0; width * height * (channels + 1)],
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Color channels, excluding the weight channel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Values per pixel (`channels + 1`).
    pub fn stride(&self) -> usize {
        self.channels + 1
    }

    /// Weighted color sums followed by the weight sum for pixel `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> &[f64] {
        let start = (y * self.width + x) * self.stride();
        &self.data[start..start + self.stride()]
    }

    /// Accumulated weight at `(x, y)`.
    pub fn weight(&self, x: usize, y: usize) -> f64 {
        self.pixel(x, y)[self.channels]
    }

    /// Raw interleaved storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

/// Horizontal hat weight for canvas column `x`.
///
/// `min(x, blend_width, canvas_width - x) / blend_width`: ramps from 0 at the left edge to 1
/// over `blend_width` columns, stays flat, and ramps back toward the right edge. Depends only
/// on the canvas column, never on which image contributes.
pub fn hat_weight(x: usize, canvas_width: usize, blend_width: f64) -> f64 {
    let left = x as f64;
    let right = canvas_width as f64 - left;
    left.min(blend_width).min(right) / blend_width
}

/// Resample `img` through `m` and add its hat-weighted colors into `acc`.
///
/// `m` maps image-local pixels to canvas pixels (placement followed by the canvas
/// translation). Every canvas pixel is pulled back through `m⁻¹`; pixels whose source falls
/// outside `[0, W-1) × [0, H-1)` contribute nothing.
pub fn accumulate_blend(
    img: &SourceImage,
    acc: &mut AccumulationBuffer,
    m: &Homography,
    blend_width: f64,
) -> MosaicResult<()> {
    let pass = BlendPass::prepare(img, acc, m, blend_width)?;
    let stride = acc.stride();
    let row_len = acc.width * stride;
    if row_len == 0 {
        return Ok(());
    }
    for (y, row) in acc.as_mut_slice().chunks_mut(row_len).enumerate() {
        pass.accumulate_row(y, row, stride);
    }
    Ok(())
}

/// Row-partitioned [`accumulate_blend`]; each canvas row is written by exactly one worker of the
/// current rayon pool.
pub(crate) fn accumulate_blend_par(
    img: &SourceImage,
    acc: &mut AccumulationBuffer,
    m: &Homography,
    blend_width: f64,
) -> MosaicResult<()> {
    let pass = BlendPass::prepare(img, acc, m, blend_width)?;
    let stride = acc.stride();
    let row_len = acc.width * stride;
    if row_len == 0 {
        return Ok(());
    }
    acc.as_mut_slice()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| pass.accumulate_row(y, row, stride));
    Ok(())
}

struct BlendPass {
    src: ImageF64,
    inv: Homography,
    canvas_width: usize,
    blend_width: f64,
}

impl BlendPass {
    fn prepare(
        img: &SourceImage,
        acc: &AccumulationBuffer,
        m: &Homography,
        blend_width: f64,
    ) -> MosaicResult<Self> {
        if !blend_width.is_finite() || blend_width <= 0.0 {
            return Err(MosaicError::validation(format!(
                "blend width must be a positive number of pixels, got {blend_width}"
            )));
        }
        if img.channels() != acc.channels {
            return Err(MosaicError::dimension_mismatch(format!(
                "image '{}' has {} channels, accumulator expects {}",
                img.name(),
                img.channels(),
                acc.channels
            )));
        }
        let inv = m.try_inverse().ok_or_else(|| {
            MosaicError::not_invertible(format!(
                "combined transform of image '{}' is singular",
                img.name()
            ))
        })?;

        tracing::trace!(image = img.name(), "accumulating");
        Ok(Self {
            src: ImageF64::from_source(img),
            inv,
            canvas_width: acc.width,
            blend_width,
        })
    }

    fn accumulate_row(&self, y: usize, row: &mut [f64], stride: usize) {
        let channels = self.src.channels;
        let max_x = self.src.w as f64 - 1.0;
        let max_y = self.src.h as f64 - 1.0;
        let mut color = [0.0f64; MAX_CHANNELS];

        for (x, px) in row.chunks_exact_mut(stride).enumerate() {
            let v = self.inv * nalgebra::Vector3::new(x as f64, y as f64, 1.0);
            let src_x = v[0] / v[2];
            let src_y = v[1] / v[2];

            if !src_x.is_finite() || !src_y.is_finite() {
                continue;
            }
            if src_x < 0.0 || src_x >= max_x || src_y < 0.0 || src_y >= max_y {
                continue;
            }

            bilinear_sample(&self.src, src_x, src_y, &mut color);
            let weight = hat_weight(x, self.canvas_width, self.blend_width);

            for (a, &c) in px[..channels].iter_mut().zip(&color[..channels]) {
                *a += c * weight;
            }
            px[channels] += weight;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/accumulate.rs"]
mod tests;
