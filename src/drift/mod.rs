//! Wrap-around drift measurement and the correcting affine.

pub(crate) mod correction;
pub(crate) mod params;
