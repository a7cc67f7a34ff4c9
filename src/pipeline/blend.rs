use serde::Serialize;

use crate::compose::canvas::CanvasGeometry;
use crate::compose::composite::{normalize_blend, normalize_blend_par, paste_images_impl};
use crate::drift::correction::correction_transform;
use crate::drift::params::DriftParams;
use crate::foundation::core::Affine;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::geometry::warp::{warp_affine, warp_affine_par};
use crate::pipeline::options::BlendOptions;
use crate::raster::mosaic::Mosaic;
use crate::raster::source::SourceImage;

/// Diagnostics from one composition run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlendReport {
    /// Canvas fitted around all placed images.
    pub geometry: CanvasGeometry,
    /// Reference points used for drift correction.
    pub drift: DriftParams,
    /// Affine applied to the normalized canvas (identity for flat mosaics).
    pub correction: Affine,
    /// Final mosaic width in pixels.
    pub output_width: usize,
    /// Final mosaic height in pixels.
    pub output_height: usize,
}

/// Composite `images` into a single mosaic.
///
/// Pipeline:
/// 1. [`CanvasGeometry::from_images`] fits the canvas.
/// 2. [`crate::paste_images`] accumulates every image with hat weights.
/// 3. [`crate::normalize_blend`] resolves weights into 8-bit colors.
/// 4. [`DriftParams::from_images`] and [`crate::correction_transform`] build the correcting
///    affine.
/// 5. [`crate::warp_affine`] crops/warps to `canvas_width - image_width` columns in 360 mode,
///    or the full canvas width otherwise.
///
/// The result has the channel count of the inputs, plus the opaque coverage channel when
/// [`BlendOptions::keep_alpha`] is set.
pub fn blend_images(images: &[SourceImage], opts: &BlendOptions) -> MosaicResult<Mosaic> {
    blend_images_with_report(images, opts).map(|(mosaic, _)| mosaic)
}

/// Like [`blend_images`], also returning the [`BlendReport`] with the correcting transform.
#[tracing::instrument(skip(images), fields(image_count = images.len()))]
pub fn blend_images_with_report(
    images: &[SourceImage],
    opts: &BlendOptions,
) -> MosaicResult<(Mosaic, BlendReport)> {
    opts.validate()?;
    let geometry = CanvasGeometry::from_images(images)?;

    let output_width = if opts.is_360 {
        geometry
            .width
            .checked_sub(geometry.image_width)
            .filter(|&w| w > 0)
            .ok_or_else(|| {
                MosaicError::unsupported_mode(format!(
                    "360 output needs a canvas wider than one image ({} <= {})",
                    geometry.width, geometry.image_width
                ))
            })?
    } else {
        geometry.width
    };
    let output_height = geometry.height;

    let drift = DriftParams::from_images(images, &geometry.translation, geometry.image_width)?;
    let correction = correction_transform(&drift, opts.is_360)?;
    tracing::debug!(
        x_init = drift.x_init,
        y_init = drift.y_init,
        x_final = drift.x_final,
        y_final = drift.y_final,
        coeffs = ?correction.as_coeffs(),
        "drift correction"
    );

    let warped = if opts.threading.parallel {
        let pool = build_thread_pool(opts.threading.threads)?;
        pool.install(|| -> MosaicResult<Mosaic> {
            let acc = paste_images_impl(images, &geometry, opts.blend_width, true)?;
            let composite = normalize_blend_par(&acc);
            drop(acc);
            warp_affine_par(&composite, correction, output_width, output_height)
        })?
    } else {
        let acc = paste_images_impl(images, &geometry, opts.blend_width, false)?;
        let composite = normalize_blend(&acc);
        drop(acc);
        warp_affine(&composite, correction, output_width, output_height)?
    };

    let mosaic = if opts.keep_alpha {
        warped
    } else {
        warped.without_last_channel()?
    };

    let report = BlendReport {
        geometry,
        drift,
        correction,
        output_width,
        output_height,
    };
    Ok((mosaic, report))
}

// `threads` is already checked by `BlendOptions::validate`.
fn build_thread_pool(threads: Option<usize>) -> MosaicResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/blend.rs"]
mod tests;
