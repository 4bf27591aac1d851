//! Piecewise-linear splitting by recursive worst-residual bisection.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fitting::LinearFit;
use crate::split::{check_split_input, Splitter};

/// Splits a dataset into stretches that are each well described by a single
/// least-squares line.
///
/// A segment is split when some point deviates from the segment's fitted
/// line by more than `error_threshold` (in y-units). The cut lands just
/// after the worst point and both halves are refit recursively. Segments
/// with fewer than 4 points are never split, so every segment keeps at
/// least 2 points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseLinearSplitter {
    error_threshold: f64,
}

impl PiecewiseLinearSplitter {
    /// Create a splitter with the given residual threshold.
    ///
    /// Negative (or NaN) thresholds are rejected.
    pub fn new(error_threshold: f64) -> Result<Self> {
        if error_threshold.is_nan() || error_threshold < 0.0 {
            return Err(Error::InvalidThreshold {
                value: error_threshold,
            });
        }
        Ok(Self { error_threshold })
    }

    /// The configured residual threshold.
    #[inline]
    pub fn error_threshold(&self) -> f64 {
        self.error_threshold
    }

    fn split_recursive(
        &self,
        xs: &[f64],
        ys: &[f64],
        start: usize,
        end: usize,
        breakpoints: &mut Vec<usize>,
    ) -> Result<()> {
        if end - start < 4 {
            return Ok(()); // both halves need at least 2 points
        }

        let fit = LinearFit::new(&xs[start..end], &ys[start..end])?;

        let mut worst = start;
        let mut worst_deviation = 0.0f64;
        for i in start..end {
            let deviation = (ys[i] - fit.predict(xs[i])).abs();
            if deviation > worst_deviation {
                worst_deviation = deviation;
                worst = i;
            }
        }

        if worst_deviation <= self.error_threshold {
            return Ok(());
        }

        // Cut just after the worst point, keeping two points on each side.
        let cut = (worst + 1).clamp(start + 2, end - 2);
        breakpoints.push(cut);

        self.split_recursive(xs, ys, start, cut, breakpoints)?;
        self.split_recursive(xs, ys, cut, end, breakpoints)
    }
}

impl Splitter for PiecewiseLinearSplitter {
    fn compute_splits(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<usize>> {
        check_split_input(xs, ys)?;

        let mut breakpoints = vec![0];
        self.split_recursive(xs, ys, 0, xs.len(), &mut breakpoints)?;
        breakpoints.push(xs.len());
        breakpoints.sort_unstable();
        breakpoints.dedup();

        debug!(
            "piecewise split of {} points into {} segments",
            xs.len(),
            breakpoints.len() - 1
        );
        Ok(breakpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::XyDataset;

    #[test]
    fn test_unequal_sizes_rejected() {
        let splitter = PiecewiseLinearSplitter::new(5.0).unwrap();
        let err = splitter
            .compute_splits(&[1.0, 2.0, 3.0], &[1.0, 2.0])
            .unwrap_err();
        assert_eq!(err, Error::LengthMismatch { xs_len: 3, ys_len: 2 });
    }

    #[test]
    fn test_out_of_order_x_rejected() {
        let splitter = PiecewiseLinearSplitter::new(5.0).unwrap();
        assert!(splitter
            .compute_splits(&[3.0, 2.0, 1.0], &[1.0, 2.0, 3.0])
            .is_err());
    }

    #[test]
    fn test_in_order_x_accepted() {
        let splitter = PiecewiseLinearSplitter::new(5.0).unwrap();
        splitter
            .compute_splits(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0])
            .unwrap();
    }

    #[test]
    fn test_splits_two_sawteeth_correctly() {
        let splitter = PiecewiseLinearSplitter::new(1.0).unwrap();

        // 2 sawtooth ramps
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let ys = [2.0, 4.0, 6.0, 8.0, 10.0, 1.0, 2.0, 3.0, 4.0, 5.0];

        let splits = splitter.compute_splits(&xs, &ys).unwrap();
        assert_eq!(splits, vec![0, 5, 10]);

        assert_eq!(&xs[splits[0]..splits[1]], &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(&ys[splits[0]..splits[1]], &[2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(&xs[splits[1]..splits[2]], &[6.0, 7.0, 8.0, 9.0, 10.0]);
        assert_eq!(&ys[splits[1]..splits[2]], &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_straight_lines_are_not_split() {
        let splitter = PiecewiseLinearSplitter::new(1.0).unwrap();

        let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let ys = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0];

        let splits = splitter.compute_splits(&xs, &ys).unwrap();
        assert_eq!(splits, vec![0, 10]);
    }

    #[test]
    fn test_splits_dataset_with_4_entries() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, -10.0, 90.0, 80.0];

        let splitter = PiecewiseLinearSplitter::new(5.0).unwrap();
        let splits = splitter.compute_splits(&xs, &ys).unwrap();

        assert_eq!(splits, vec![0, 2, 4]);
        assert_eq!(&xs[splits[0]..splits[1]], &[1.0, 2.0]);
        assert_eq!(&xs[splits[1]..splits[2]], &[3.0, 4.0]);
    }

    #[test]
    fn test_split_produces_partition() {
        let data = XyDataset::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
            vec![2.0, 4.0, 6.0, 8.0, 10.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        )
        .unwrap();

        let splitter = PiecewiseLinearSplitter::new(1.0).unwrap();
        let pieces = splitter.split(&data).unwrap();

        assert_eq!(pieces.len(), 2);
        let total: usize = pieces.iter().map(|p| p.len()).sum();
        assert_eq!(total, data.len());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        assert!(PiecewiseLinearSplitter::new(-0.5).is_err());
    }
}
