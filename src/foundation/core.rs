pub use kurbo::{Affine, Point, Vec2};

/// 3x3 projective transform acting on homogeneous column vectors `(x, y, 1)`.
pub type Homography = nalgebra::Matrix3<f64>;

/// Pure 2D translation in homogeneous form.
pub fn translation(tx: f64, ty: f64) -> Homography {
    Homography::new(1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0)
}

/// Lift a `kurbo` affine into its 3x3 homogeneous matrix.
///
/// `kurbo` stores `[a, b, c, d, e, f]` for `x' = a*x + c*y + e` and `y' = b*x + d*y + f`.
pub fn affine_to_homography(a: Affine) -> Homography {
    let [a, b, c, d, e, f] = a.as_coeffs();
    Homography::new(a, c, e, b, d, f, 0.0, 0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
