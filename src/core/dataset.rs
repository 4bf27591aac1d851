//! The XY dataset entity and its input validation.

use serde::{Deserialize, Serialize};

use crate::core::point::XyPoint;
use crate::error::{Error, Result};
use crate::fitting::LinearFit;
use crate::split::Splitter;

/// Confirm a pair of coordinate columns is usable: equal lengths and a
/// strictly increasing x column.
///
/// This is the shared precondition of [`XyDataset::new`] and of every
/// [`Splitter`] implementation.
pub fn check_input_data(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            xs_len: xs.len(),
            ys_len: ys.len(),
        });
    }
    check_ordering(xs)
}

/// Confirm the x column is strictly increasing.
///
/// The comparison is inverted so a NaN anywhere in the column also fails.
pub fn check_ordering(xs: &[f64]) -> Result<()> {
    for i in 1..xs.len() {
        if !(xs[i - 1] < xs[i]) {
            return Err(Error::UnsortedX { index: i });
        }
    }
    Ok(())
}

/// Unvalidated column pair that funnels deserialization through
/// [`XyDataset::new`], so the ordering invariant survives a round-trip.
#[derive(Deserialize)]
struct RawColumns {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl TryFrom<RawColumns> for XyDataset {
    type Error = Error;

    fn try_from(raw: RawColumns) -> Result<Self> {
        XyDataset::new(raw.xs, raw.ys)
    }
}

/// An immutable, strictly-ordered XY dataset.
///
/// Coordinates are stored as parallel columns of equal length; the x column
/// is strictly increasing. Construction validates both properties and fails
/// with an invalid-input error otherwise. All slicing and splitting
/// operations produce new datasets, never in-place edits, so one dataset may
/// be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColumns")]
pub struct XyDataset {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl XyDataset {
    /// Create a dataset from parallel coordinate columns.
    ///
    /// # Example
    /// ```
    /// use rekha_split::XyDataset;
    ///
    /// let data = XyDataset::new(vec![0.0, 1.0, 2.0], vec![5.0, 5.5, 5.0]).unwrap();
    /// assert_eq!(data.len(), 3);
    ///
    /// // Unsorted x values are rejected at construction
    /// assert!(XyDataset::new(vec![0.0, 2.0, 1.0], vec![0.0, 0.0, 0.0]).is_err());
    /// ```
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        check_input_data(&xs, &ys)?;
        Ok(Self { xs, ys })
    }

    /// Create a dataset from an ordered point slice.
    pub fn from_points(points: &[XyPoint]) -> Result<Self> {
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        Self::new(xs, ys)
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True if the dataset has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The x column.
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The y column.
    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Bounds-checked x accessor.
    pub fn x(&self, index: usize) -> Result<f64> {
        self.xs
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index, len: self.len() })
    }

    /// Bounds-checked y accessor.
    pub fn y(&self, index: usize) -> Result<f64> {
        self.ys
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index, len: self.len() })
    }

    /// Bounds-checked point accessor.
    pub fn point(&self, index: usize) -> Result<XyPoint> {
        Ok(XyPoint::new(self.x(index)?, self.y(index)?))
    }

    /// Span of the x column (last x minus first x; 0 for fewer than 2 points).
    pub fn x_span(&self) -> f64 {
        match (self.xs.first(), self.xs.last()) {
            (Some(first), Some(last)) if self.len() >= 2 => last - first,
            _ => 0.0,
        }
    }

    /// Iterate the samples as points.
    pub fn points(&self) -> impl Iterator<Item = XyPoint> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| XyPoint::new(x, y))
    }

    /// A new dataset covering the index window `start..end`.
    ///
    /// Empty or out-of-bounds windows are rejected.
    pub fn subrange(&self, start: usize, end: usize) -> Result<XyDataset> {
        if start >= end || end > self.len() {
            return Err(Error::InvalidSubrange {
                start,
                end,
                len: self.len(),
            });
        }
        Ok(Self {
            xs: self.xs[start..end].to_vec(),
            ys: self.ys[start..end].to_vec(),
        })
    }

    /// Partition this dataset with a [`Splitter`].
    ///
    /// Delegates to the splitter for the boundary array, then materializes
    /// one [`subrange`](Self::subrange) per consecutive boundary pair. The
    /// pieces cover the dataset with no gaps and no overlaps.
    pub fn split_with<S>(&self, splitter: &S) -> Result<Vec<XyDataset>>
    where
        S: Splitter + ?Sized,
    {
        let boundaries = splitter.compute_splits(self.xs(), self.ys())?;

        let mut pieces = Vec::with_capacity(boundaries.len().saturating_sub(1));
        for pair in boundaries.windows(2) {
            pieces.push(self.subrange(pair[0], pair[1])?);
        }
        Ok(pieces)
    }

    /// Numeric derivative dy/dx with the same x column.
    ///
    /// Forward difference at the first point, backward difference at the
    /// last, centered difference in between. Datasets with fewer than 2
    /// points get an all-zero derivative.
    pub fn take_derivative(&self) -> XyDataset {
        let n = self.len();
        let mut dys = vec![0.0; n];

        if n >= 2 {
            dys[0] = (self.ys[1] - self.ys[0]) / (self.xs[1] - self.xs[0]);
            dys[n - 1] = (self.ys[n - 1] - self.ys[n - 2]) / (self.xs[n - 1] - self.xs[n - 2]);
            for i in 1..n - 1 {
                dys[i] = (self.ys[i + 1] - self.ys[i - 1]) / (self.xs[i + 1] - self.xs[i - 1]);
            }
        }

        Self {
            xs: self.xs.clone(),
            ys: dys,
        }
    }

    /// Least-squares line fit over the whole dataset.
    pub fn approximate_fit(&self) -> Result<LinearFit> {
        LinearFit::new(&self.xs, &self.ys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> XyDataset {
        XyDataset::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 1.0, 1.0, 1.0]).unwrap()
    }

    #[test]
    fn test_constructor() {
        let data = sample();
        assert_eq!(data.xs(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(data.ys(), &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(data.len(), 4);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        let data = XyDataset::new(vec![], vec![]).unwrap();
        assert!(data.is_empty());
        assert_eq!(data.x_span(), 0.0);
    }

    #[test]
    fn test_constructor_rejects_length_mismatch() {
        let err = XyDataset::new(vec![1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { xs_len: 2, ys_len: 3 });
    }

    #[test]
    fn test_constructor_rejects_unsorted_x() {
        let err = XyDataset::new(vec![0.0, 2.0, 1.0], vec![0.0, 0.0, 0.0]).unwrap_err();
        assert_eq!(err, Error::UnsortedX { index: 2 });
    }

    #[test]
    fn test_constructor_rejects_duplicate_x() {
        // 2 copies of the same value should fail
        let err = XyDataset::new(vec![1.0, 2.0, 3.0, 3.0], vec![0.0; 4]).unwrap_err();
        assert_eq!(err, Error::UnsortedX { index: 3 });
    }

    #[test]
    fn test_constructor_rejects_nan_x() {
        assert!(XyDataset::new(vec![0.0, f64::NAN, 2.0], vec![0.0; 3]).is_err());
    }

    #[test]
    fn test_check_input_accepts_good_data() {
        check_input_data(&[2.0, 3.0, 4.0], &[20.0, -10.0, 400.0]).unwrap();
        check_ordering(&[1.0, 2.0, 3.0]).unwrap();
    }

    #[test]
    fn test_accessors() {
        let data = sample();
        assert_eq!(data.x(0).unwrap(), 1.0);
        assert_eq!(data.y(3).unwrap(), 1.0);
        assert_eq!(data.point(1).unwrap(), XyPoint::new(2.0, 1.0));

        assert_eq!(
            data.x(4).unwrap_err(),
            Error::IndexOutOfRange { index: 4, len: 4 }
        );
    }

    #[test]
    fn test_x_span() {
        assert_relative_eq!(sample().x_span(), 3.0);
    }

    #[test]
    fn test_subrange() {
        let data = sample();
        let piece = data.subrange(1, 3).unwrap();
        assert_eq!(piece.xs(), &[2.0, 3.0]);

        assert!(data.subrange(2, 2).is_err());
        assert!(data.subrange(3, 1).is_err());
        assert!(data.subrange(0, 5).is_err());
    }

    #[test]
    fn test_take_derivative() {
        let data = XyDataset::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 1.0, 1.0, 5.0]).unwrap();
        let derivative = data.take_derivative();

        assert_eq!(derivative.xs(), data.xs());
        assert_relative_eq!(derivative.y(0).unwrap(), 0.0);
        assert_relative_eq!(derivative.y(1).unwrap(), 0.0);
        assert_relative_eq!(derivative.y(2).unwrap(), 2.0);
        assert_relative_eq!(derivative.y(3).unwrap(), 4.0);
    }

    #[test]
    fn test_approximate_fit() {
        let fit = sample().approximate_fit().unwrap();
        assert_relative_eq!(fit.average_y(), 1.0);
        assert_relative_eq!(fit.slope(), 0.0);
    }

    #[test]
    fn test_points_iterator() {
        let points: Vec<XyPoint> = sample().points().collect();
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], XyPoint::new(3.0, 1.0));
    }
}
