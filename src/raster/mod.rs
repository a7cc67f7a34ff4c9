//! Pixel containers: 8-bit inputs with placements, the normalized float working copy, and the
//! 8-bit output mosaic.

pub(crate) mod float;
pub(crate) mod mosaic;
pub(crate) mod source;
