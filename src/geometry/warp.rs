use rayon::prelude::*;

use crate::foundation::core::{Affine, Point};
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::foundation::math::{HOMOGENEOUS_EPS, round_to_u8};
use crate::raster::mosaic::Mosaic;

const MAX_WARP_CHANNELS: usize = 8;

/// Resample `src` through the forward affine `a` into an `out_w × out_h` mosaic.
///
/// `a` maps source coordinates to destination coordinates; each destination pixel is pulled from
/// `a⁻¹ · (x, y)` with bilinear interpolation. Neighbours outside `src` read as zero, so pixels
/// mapped entirely off the source come out black.
pub fn warp_affine(src: &Mosaic, a: Affine, out_w: usize, out_h: usize) -> MosaicResult<Mosaic> {
    warp_affine_impl(src, a, out_w, out_h, false)
}

/// Row-parallel variant of [`warp_affine`]; runs on the current rayon pool.
pub(crate) fn warp_affine_par(
    src: &Mosaic,
    a: Affine,
    out_w: usize,
    out_h: usize,
) -> MosaicResult<Mosaic> {
    warp_affine_impl(src, a, out_w, out_h, true)
}

fn warp_affine_impl(
    src: &Mosaic,
    a: Affine,
    out_w: usize,
    out_h: usize,
    parallel: bool,
) -> MosaicResult<Mosaic> {
    let det = a.determinant();
    if !det.is_finite() || det.abs() <= HOMOGENEOUS_EPS {
        return Err(MosaicError::not_invertible(format!(
            "correction transform {:?} has determinant {det}",
            a.as_coeffs()
        )));
    }
    if src.channels == 0 || src.channels > MAX_WARP_CHANNELS {
        return Err(MosaicError::validation(format!(
            "warp supports 1..={MAX_WARP_CHANNELS} channels, got {}",
            src.channels
        )));
    }
    out_w
        .checked_mul(out_h)
        .and_then(|v| v.checked_mul(src.channels))
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or_else(|| {
            MosaicError::validation(format!("warp output {out_w}x{out_h} is too large"))
        })?;
    let inv = a.inverse();

    let mut dst = Mosaic::new(out_w, out_h, src.channels);
    let row_len = out_w * src.channels;
    if row_len == 0 {
        return Ok(dst);
    }

    if parallel {
        dst.data
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| warp_row(src, inv, y, row));
    } else {
        for (y, row) in dst.data.chunks_mut(row_len).enumerate() {
            warp_row(src, inv, y, row);
        }
    }
    Ok(dst)
}

fn warp_row(src: &Mosaic, inv: Affine, y: usize, row: &mut [u8]) {
    let ch = src.channels;
    for (x, px) in row.chunks_exact_mut(ch).enumerate() {
        let p = inv * Point::new(x as f64, y as f64);
        sample_zero_border(src, p.x, p.y, px);
    }
}

fn sample_zero_border(src: &Mosaic, x: f64, y: f64, out: &mut [u8]) {
    if !x.is_finite() || !y.is_finite() {
        return;
    }
    let xf = x.floor();
    let yf = y.floor();
    let dx = x - xf;
    let dy = y - yf;
    let x0 = xf as i64;
    let y0 = yf as i64;

    let taps = [
        (x0, y0, (1.0 - dx) * (1.0 - dy)),
        (x0 + 1, y0, dx * (1.0 - dy)),
        (x0, y0 + 1, (1.0 - dx) * dy),
        (x0 + 1, y0 + 1, dx * dy),
    ];

    let mut acc = [0.0f64; MAX_WARP_CHANNELS];
    let acc = &mut acc[..src.channels];
    for (tx, ty, wt) in taps {
        if wt == 0.0 || tx < 0 || ty < 0 || tx >= src.width as i64 || ty >= src.height as i64 {
            continue;
        }
        let px = src.pixel(tx as usize, ty as usize);
        for (a, &v) in acc.iter_mut().zip(px) {
            *a += f64::from(v) * wt;
        }
    }
    for (o, &a) in out.iter_mut().zip(acc.iter()) {
        *o = round_to_u8(a);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/warp.rs"]
mod tests;
