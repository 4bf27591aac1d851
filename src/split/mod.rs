//! Splitter strategies for partitioning datasets.
//!
//! A [`Splitter`] turns an XY dataset into a *boundary array*: a strictly
//! increasing list of segment start indices whose final entry is one past
//! the last valid index, so `boundary[i]..boundary[i+1]` delimits segment i
//! and the segments cover the dataset with no gaps and no overlaps.
//!
//! Two strategies are provided:
//! - [`VisvalingamSplitter`]: cuts at the visually important points a
//!   Visvalingam simplification retains
//! - [`PiecewiseLinearSplitter`]: cuts wherever a single least-squares line
//!   stops describing the data well

mod piecewise;
mod visvalingam;

pub use piecewise::PiecewiseLinearSplitter;
pub use visvalingam::VisvalingamSplitter;

use crate::core::{check_input_data, XyDataset};
use crate::error::{Error, Result};

/// Shared precondition for all splitters: valid columns and enough points
/// for at least one segment to exist.
///
/// Implementations of [`Splitter`] outside this crate should call this at
/// the top of `compute_splits`.
pub fn check_split_input(xs: &[f64], ys: &[f64]) -> Result<()> {
    check_input_data(xs, ys)?;
    if xs.len() < 2 {
        return Err(Error::TooFewPoints {
            len: xs.len(),
            min: 2,
        });
    }
    Ok(())
}

/// Strategy trait for computing segment boundaries.
///
/// Configuration is fixed at construction and never mutated, and
/// implementations hold no per-call state, so one instance may be shared
/// across threads and invoked on independent datasets in parallel.
///
/// # Example
/// ```
/// use rekha_split::{Splitter, VisvalingamSplitter, XyDataset};
///
/// let data = XyDataset::new(
///     vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
///     vec![0.0, 0.0, 10.0, 0.0, 0.0, 0.0],
/// ).unwrap();
///
/// let splitter = VisvalingamSplitter::new(12.0).unwrap();
/// let boundaries = splitter.compute_splits_for(&data).unwrap();
/// assert_eq!(boundaries, vec![0, 2, 6]);
///
/// let pieces = splitter.split(&data).unwrap();
/// assert_eq!(pieces.len(), 2);
/// ```
pub trait Splitter: Send + Sync {
    /// Compute the boundary array for a pair of coordinate columns.
    ///
    /// Every implementation enforces the shared precondition checked by
    /// [`check_split_input`]: equal column lengths, strictly increasing x,
    /// and at least 2 points.
    fn compute_splits(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<usize>>;

    /// Compute the boundary array for a dataset.
    fn compute_splits_for(&self, dataset: &XyDataset) -> Result<Vec<usize>> {
        self.compute_splits(dataset.xs(), dataset.ys())
    }

    /// Partition a dataset into contiguous sub-datasets.
    fn split(&self, dataset: &XyDataset) -> Result<Vec<XyDataset>> {
        dataset.split_with(self)
    }
}
