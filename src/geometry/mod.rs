//! Pure geometric helpers: projection, transformed bounds, bilinear sampling and the final
//! affine resampling pass.

pub(crate) mod bounds;
pub(crate) mod sample;
pub(crate) mod warp;
