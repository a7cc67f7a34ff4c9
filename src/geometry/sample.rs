use crate::raster::float::ImageF64;

/// Bilinearly interpolate `img` at `(x, y)`, writing one value per channel into `out`.
///
/// The four lattice neighbours are `(x0, y0)`, `(x0+1, y0)`, `(x0, y0+1)` and `(x0+1, y0+1)` with
/// `x0 = floor(x)`, `y0 = floor(y)`; each is weighted by the product of `(1 - d)` or `d` along
/// both axes. No bounds handling is done here: callers reject coordinates whose `+1` neighbours
/// fall outside the image.
///
/// # Panics
/// Panics if a neighbour lies outside `img` or `out` is shorter than `img.channels`.
pub fn bilinear_sample(img: &ImageF64, x: f64, y: f64, out: &mut [f64]) {
    let xf = x.floor();
    let yf = y.floor();
    let x0 = xf as usize;
    let y0 = yf as usize;
    let dx = x - xf;
    let dy = y - yf;

    let p00 = img.pixel(x0, y0);
    let p10 = img.pixel(x0 + 1, y0);
    let p01 = img.pixel(x0, y0 + 1);
    let p11 = img.pixel(x0 + 1, y0 + 1);

    // Each term is evaluated as `(p * wx) * wy` so sums stay bit-identical to the reference blend.
    for (c, o) in out[..img.channels].iter_mut().enumerate() {
        let top_left = p00[c] * (1.0 - dx) * (1.0 - dy);
        let top_right = p10[c] * dx * (1.0 - dy);
        let bottom_left = p01[c] * (1.0 - dx) * dy;
        let bottom_right = p11[c] * dx * dy;
        *o = top_left + top_right + bottom_left + bottom_right;
    }
}
