//! Importance-driven splitting backed by the Visvalingam simplifier.

use serde::{Deserialize, Serialize};

use crate::core::XyDataset;
use crate::error::{Error, Result};
use crate::simplify::simplify_indices;
use crate::split::{check_split_input, Splitter};

/// Partitions a dataset at the points a Visvalingam simplification retains.
///
/// The smaller the threshold, the more detail the simplifier keeps and the
/// finer the resulting splits. A threshold high enough to simplify the data
/// down to its two endpoints yields a single segment.
///
/// Choose the threshold based on the dimensions of the input x and y data;
/// it is an area, in x-units times y-units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisvalingamSplitter {
    importance_threshold: f64,
}

impl VisvalingamSplitter {
    /// Create a splitter with the given importance threshold.
    ///
    /// Negative (or NaN) thresholds are rejected.
    pub fn new(importance_threshold: f64) -> Result<Self> {
        if importance_threshold.is_nan() || importance_threshold < 0.0 {
            return Err(Error::InvalidThreshold {
                value: importance_threshold,
            });
        }
        Ok(Self {
            importance_threshold,
        })
    }

    /// The configured importance threshold.
    #[inline]
    pub fn importance_threshold(&self) -> f64 {
        self.importance_threshold
    }
}

impl Splitter for VisvalingamSplitter {
    fn compute_splits(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<usize>> {
        check_split_input(xs, ys)?;

        let dataset = XyDataset::new(xs.to_vec(), ys.to_vec())?;
        let mut boundaries = simplify_indices(&dataset, self.importance_threshold)?;

        // The simplifier retains both endpoints for any valid input; a miss
        // here is a bug in the algorithm, not bad caller data.
        if boundaries.first() != Some(&0) || boundaries.last() != Some(&(xs.len() - 1)) {
            return Err(Error::InternalInvariant(
                "simplifier dropped a dataset endpoint",
            ));
        }

        // Convert the last retained index into an exclusive end boundary so
        // the final point is not dropped from the last segment.
        if let Some(last) = boundaries.last_mut() {
            *last += 1;
        }
        Ok(boundaries)
    }
}
