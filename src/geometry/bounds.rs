use nalgebra::Vector3;
use serde::Serialize;

use crate::foundation::core::{Homography, Point};
use crate::foundation::math::HOMOGENEOUS_EPS;
use crate::raster::source::SourceImage;

/// Integer axis-aligned bounds of a transformed image, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    /// Smallest x over the transformed corners.
    pub min_x: i64,
    /// Smallest y over the transformed corners.
    pub min_y: i64,
    /// Largest x over the transformed corners.
    pub max_x: i64,
    /// Largest y over the transformed corners.
    pub max_y: i64,
}

/// Map `(x, y)` through `m` and dehomogenize.
///
/// Returns `None` for points sent to infinity or to non-finite coordinates.
pub fn project_point(m: &Homography, x: f64, y: f64) -> Option<Point> {
    let v = m * Vector3::new(x, y, 1.0);
    let w = v[2];
    if !w.is_finite() || w.abs() <= HOMOGENEOUS_EPS || !v[0].is_finite() || !v[1].is_finite() {
        return None;
    }
    Some(Point::new(v[0] / w, v[1] / w))
}

/// Bounds of `img`'s four corner pixels after applying `m`.
///
/// Corners are the pixel centers `(0, 0)`, `(0, H-1)`, `(W-1, H-1)` and `(W-1, 0)`. Extremes are
/// truncated toward zero, not rounded, so fractional bounds are slightly under-covered; canvas
/// sizes downstream depend on this exact behavior.
pub fn bounding_box_of_transformed(img: &SourceImage, m: &Homography) -> Option<BoundingBox> {
    let (w, h) = ((img.width() - 1) as f64, (img.height() - 1) as f64);
    let corners = [(0.0, 0.0), (0.0, h), (w, h), (w, 0.0)];

    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for (x, y) in corners {
        let p = project_point(m, x, y)?;
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    Some(BoundingBox {
        min_x: min.x.trunc() as i64,
        min_y: min.y.trunc() as i64,
        max_x: max.x.trunc() as i64,
        max_y: max.y.trunc() as i64,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bounds.rs"]
mod tests;
