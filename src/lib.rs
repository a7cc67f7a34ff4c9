//! mosaic-blend composites overlapping, perspective-placed images into one panoramic mosaic.
//!
//! # Pipeline overview
//!
//! 1. **Fit**: `&[SourceImage] -> CanvasGeometry` (canvas size + translation to the origin)
//! 2. **Accumulate**: every image is inverse-mapped, bilinearly sampled and added into an
//!    [`AccumulationBuffer`] with a horizontal hat weight
//! 3. **Normalize**: weighted sums become 8-bit colors ([`normalize_blend`])
//! 4. **Correct**: an affine removes 360° vertical drift and trims the wrap-around overlap
//!    ([`correction_transform`], [`warp_affine`])
//!
//! [`blend_images`] runs all four steps.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the optional row-parallel mode produces byte-identical output.
//! - **No IO**: decoding and encoding stay with the caller; [`SourceImage::from_dynamic`] and
//!   [`Mosaic::to_dynamic`] bridge to the `image` crate in memory.
//!
//! # Known quirk
//!
//! Transformed corner bounds are truncated toward zero before the canvas is sized with
//! `ceil`/`floor`, so an identity-placed `W×H` image yields a `(W-1)×(H-1)` canvas. This is kept
//! deliberately; changing it changes output sizes.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod drift;
mod foundation;
mod geometry;
mod pipeline;
mod raster;

pub use compose::accumulate::{AccumulationBuffer, accumulate_blend, hat_weight};
pub use compose::canvas::CanvasGeometry;
pub use compose::composite::{normalize_blend, paste_images};
pub use drift::correction::correction_transform;
pub use drift::params::DriftParams;
pub use foundation::core::{Affine, Homography, Point, Vec2, affine_to_homography, translation};
pub use foundation::error::{MosaicError, MosaicResult};
pub use geometry::bounds::{BoundingBox, bounding_box_of_transformed, project_point};
pub use geometry::sample::bilinear_sample;
pub use geometry::warp::warp_affine;
pub use pipeline::blend::{BlendReport, blend_images, blend_images_with_report};
pub use pipeline::options::{BlendOptions, BlendThreading};
pub use raster::float::ImageF64;
pub use raster::mosaic::Mosaic;
pub use raster::source::{MAX_CHANNELS, SourceImage};
