use crate::drift::params::DriftParams;
use crate::foundation::core::Affine;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::foundation::math::HOMOGENEOUS_EPS;

/// Affine taking accumulator coordinates to final panorama coordinates.
///
/// Flat mosaics are left untouched. For a 360° mosaic the first image's reference point becomes
/// the new left edge, and a vertical shear `s = -drift_y / span_x` makes the last reference
/// point land at the height of the first:
///
/// ```text
/// x' = x - x_init
/// y' = y + s · (x - x_init)
/// ```
///
/// With the output cropped to `canvas_width - image_width` columns, this trims exactly one
/// image width of wrap-around overlap. The trim is split at the reference points: `x_init`
/// columns (the left half of the first image) go from the left, and the rest of the image
/// width goes from the right, past the last reference point. Both output edges therefore cut
/// through the same scene content.
///
/// The sequence must run left to right (`x_final > x_init`). A right-to-left sequence would be
/// shifted out of the output window, so it is rejected with [`MosaicError::UnsupportedMode`],
/// as are coincident reference points.
pub fn correction_transform(drift: &DriftParams, is_360: bool) -> MosaicResult<Affine> {
    if !is_360 {
        return Ok(Affine::IDENTITY);
    }

    let span = drift.span_x();
    if !span.is_finite() || span.abs() <= HOMOGENEOUS_EPS {
        return Err(MosaicError::unsupported_mode(format!(
            "360 drift correction needs distinct first/last reference points, span is {span}"
        )));
    }
    if span < 0.0 {
        return Err(MosaicError::unsupported_mode(format!(
            "360 drift correction needs a left-to-right sequence, last reference point is {} px \
             left of the first",
            -span
        )));
    }
    let shear = -drift.drift_y() / span;
    let x0 = drift.x_init;

    // kurbo coefficients: [a, b, c, d, e, f] with x' = a*x + c*y + e, y' = b*x + d*y + f
    Ok(Affine::new([1.0, shear, 0.0, 1.0, -x0, -shear * x0]))
}

#[cfg(test)]
#[path = "../../tests/unit/drift/correction.rs"]
mod tests;
