use serde::{Deserialize, Serialize};

use crate::foundation::error::{MosaicError, MosaicResult};

/// Threading controls for a composition run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendThreading {
    /// Split per-pixel work across rows on a dedicated rayon pool when `true`.
    pub parallel: bool,
    /// Worker count for the pool; `None` lets rayon decide.
    pub threads: Option<usize>,
}

/// Parameters of [`crate::blend_images`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlendOptions {
    /// Width in pixels of the hat ramp at each vertical canvas edge.
    pub blend_width: f64,
    /// Treat the sequence as a 360° loop: trim the closing overlap and remove vertical drift.
    #[serde(default)]
    pub is_360: bool,
    /// Keep the opaque coverage channel appended by normalization.
    #[serde(default)]
    pub keep_alpha: bool,
    /// Threading controls.
    #[serde(default)]
    pub threading: BlendThreading,
}

impl BlendOptions {
    /// Sequential, flat-mosaic options with the given blend width.
    pub fn new(blend_width: f64) -> Self {
        Self {
            blend_width,
            is_360: false,
            keep_alpha: false,
            threading: BlendThreading::default(),
        }
    }

    /// Check option invariants.
    pub fn validate(&self) -> MosaicResult<()> {
        if !self.blend_width.is_finite() || self.blend_width <= 0.0 {
            return Err(MosaicError::validation(format!(
                "blend_width must be > 0, got {}",
                self.blend_width
            )));
        }
        if self.threading.threads == Some(0) {
            return Err(MosaicError::validation("threading.threads must be > 0"));
        }
        Ok(())
    }

    /// Parse and validate options from JSON.
    pub fn from_json_str(s: &str) -> MosaicResult<Self> {
        let opts: Self = serde_json::from_str(s).map_err(|e| MosaicError::serde(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/options.rs"]
mod tests;
