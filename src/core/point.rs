//! XY point value type.

use serde::{Deserialize, Serialize};

use crate::core::dataset::XyDataset;
use crate::error::Result;

/// A single (x, y) sample.
///
/// Used at dataset-construction boundaries; datasets store coordinates as
/// parallel columns internally.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct XyPoint {
    /// X coordinate (the ordered axis, e.g. time)
    pub x: f64,
    /// Y coordinate (the measured value)
    pub y: f64,
}

impl XyPoint {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Repackage an ordered point slice as a dataset.
    ///
    /// Fails like [`XyDataset::new`] when the x values are not strictly
    /// increasing.
    pub fn as_dataset(points: &[XyPoint]) -> Result<XyDataset> {
        XyDataset::from_points(points)
    }
}
