//! Canvas fitting, weighted accumulation and normalization.
//!
//! Composition is a fold: every image adds `(color · weight, weight)` into one shared
//! [`AccumulationBuffer`](crate::AccumulationBuffer), and normalization turns the sums back into
//! colors.

pub(crate) mod accumulate;
pub(crate) mod canvas;
pub(crate) mod composite;
