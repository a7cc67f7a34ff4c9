//! Top-level orchestration and its configuration.

pub(crate) mod blend;
pub(crate) mod options;
