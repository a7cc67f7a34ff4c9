use rayon::prelude::*;

use crate::compose::accumulate::{AccumulationBuffer, accumulate_blend, accumulate_blend_par};
use crate::compose::canvas::CanvasGeometry;
use crate::foundation::error::MosaicResult;
use crate::foundation::math::{WEIGHT_EPSILON, unit_to_u8_trunc};
use crate::raster::mosaic::Mosaic;
use crate::raster::source::SourceImage;

/// Accumulate every image into a fresh buffer sized by `geometry`.
///
/// Each image is warped with `geometry.translation · placement`. All images are applied, in
/// order; addition makes the normalized result order-independent.
pub fn paste_images(
    images: &[SourceImage],
    geometry: &CanvasGeometry,
    blend_width: f64,
) -> MosaicResult<AccumulationBuffer> {
    paste_images_impl(images, geometry, blend_width, false)
}

pub(crate) fn paste_images_impl(
    images: &[SourceImage],
    geometry: &CanvasGeometry,
    blend_width: f64,
    parallel: bool,
) -> MosaicResult<AccumulationBuffer> {
    let mut acc = AccumulationBuffer::new(geometry.width, geometry.height, geometry.channels);
    for img in images {
        let m = geometry.combined_transform(img);
        if parallel {
            accumulate_blend_par(img, &mut acc, &m, blend_width)?;
        } else {
            accumulate_blend(img, &mut acc, &m, blend_width)?;
        }
    }
    Ok(acc)
}

/// Divide accumulated colors by their weights and convert to 8 bits.
///
/// The output has `channels + 1` channels: the normalized colors plus a fully opaque last
/// channel in place of the weight. Weights are floored at `1e-8`, so pixels no image touched
/// come out black. Values are truncated, not rounded.
pub fn normalize_blend(acc: &AccumulationBuffer) -> Mosaic {
    let mut out = Mosaic::new(acc.width(), acc.height(), acc.stride());
    normalize_into(acc, &mut out, false);
    out
}

pub(crate) fn normalize_blend_par(acc: &AccumulationBuffer) -> Mosaic {
    let mut out = Mosaic::new(acc.width(), acc.height(), acc.stride());
    normalize_into(acc, &mut out, true);
    out
}

fn normalize_into(acc: &AccumulationBuffer, out: &mut Mosaic, parallel: bool) {
    let stride = acc.stride();
    let channels = acc.channels();
    let opaque = unit_to_u8_trunc(1.0);
    let normalize_px = |(dst, src): (&mut [u8], &[f64])| {
        let weight = src[channels].max(WEIGHT_EPSILON);
        for (d, &s) in dst[..channels].iter_mut().zip(&src[..channels]) {
            *d = unit_to_u8_trunc(s / weight);
        }
        dst[channels] = opaque;
    };

    if parallel {
        out.data
            .par_chunks_exact_mut(stride)
            .zip(acc.as_slice().par_chunks_exact(stride))
            .for_each(normalize_px);
    } else {
        out.data
            .chunks_exact_mut(stride)
            .zip(acc.as_slice().chunks_exact(stride))
            .for_each(normalize_px);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composite.rs"]
mod tests;
