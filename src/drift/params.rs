use serde::{Deserialize, Serialize};

use crate::foundation::core::Homography;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::geometry::bounds::project_point;
use crate::raster::source::SourceImage;

/// Canvas-frame reference points of the first and last image.
///
/// Each point is the middle of the image's top edge, `(0.5 · image_width, 0)`, mapped through
/// `translation · placement`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriftParams {
    /// x of the first image's reference point.
    pub x_init: f64,
    /// y of the first image's reference point.
    pub y_init: f64,
    /// x of the last image's reference point.
    pub x_final: f64,
    /// y of the last image's reference point.
    pub y_final: f64,
}

impl DriftParams {
    /// Measure the reference points. Images between the first and the last are ignored; a
    /// single image supplies both points.
    pub fn from_images(
        images: &[SourceImage],
        translation: &Homography,
        image_width: usize,
    ) -> MosaicResult<Self> {
        let first = images.first().ok_or(MosaicError::EmptyInput)?;
        let last = images.last().ok_or(MosaicError::EmptyInput)?;

        let reference = |img: &SourceImage| {
            let m = translation * img.placement();
            project_point(&m, 0.5 * image_width as f64, 0.0).ok_or_else(|| {
                MosaicError::validation(format!(
                    "reference point of image '{}' maps to infinity",
                    img.name()
                ))
            })
        };
        let init = reference(first)?;
        let fin = reference(last)?;

        Ok(Self {
            x_init: init.x,
            y_init: init.y,
            x_final: fin.x,
            y_final: fin.y,
        })
    }

    /// Vertical drift accumulated from the first to the last image.
    pub fn drift_y(&self) -> f64 {
        self.y_final - self.y_init
    }

    /// Horizontal distance between the reference points.
    pub fn span_x(&self) -> f64 {
        self.x_final - self.x_init
    }
}
