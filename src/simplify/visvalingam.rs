//! Visvalingam-Whyatt effective-area simplification.
//!
//! The algorithm repeatedly removes the interior point whose triangle with
//! its current surviving neighbors has the smallest area, until every
//! surviving interior point meets the importance threshold. A point's
//! *effective area* is the triangle area it carried at the moment of removal,
//! clamped so the sequence of recorded areas never decreases.
//!
//! The surviving-neighbor list is an index-linked arena (removed points are
//! unlinked, not deleted) and the pending removals live in a min-heap with
//! version-stamped entries, so stale areas are skipped lazily instead of
//! being rekeyed in place.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::core::{XyDataset, XyPoint};
use crate::error::{Error, Result};

/// Area of the triangle spanned by three points.
///
/// Collinear points yield 0.
#[inline]
pub fn triangle_area(a: XyPoint, b: XyPoint, c: XyPoint) -> f64 {
    0.5 * ((a.x - b.x) * (c.y - b.y) - (c.x - b.x) * (a.y - b.y)).abs()
}

/// Pending removal in the priority queue.
///
/// Ordered ascending by (area, index), so the smallest area is removed first
/// and equal areas resolve lowest-index-first, keeping runs deterministic.
/// The stamp identifies whether the entry still matches the point's current
/// area; it does not participate in the ordering.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    area: f64,
    index: usize,
    stamp: u32,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.area
            .total_cmp(&other.area)
            .then(self.index.cmp(&other.index))
    }
}

#[inline]
fn area_at(xs: &[f64], ys: &[f64], left: usize, mid: usize, right: usize) -> f64 {
    triangle_area(
        XyPoint::new(xs[left], ys[left]),
        XyPoint::new(xs[mid], ys[mid]),
        XyPoint::new(xs[right], ys[right]),
    )
}

fn check_threshold(threshold: f64) -> Result<()> {
    if threshold.is_nan() || threshold < 0.0 {
        return Err(Error::InvalidThreshold { value: threshold });
    }
    Ok(())
}

/// Indices of the points a Visvalingam simplification retains.
///
/// Returns the sorted indices of every point whose effective area meets the
/// threshold. The first and last index are always retained; datasets with
/// fewer than 3 points come back whole, since no interior point exists to
/// remove. Negative (or NaN) thresholds are rejected.
///
/// Returning indices rather than coordinate values lets callers map the
/// result back onto the original dataset without any floating-point
/// equality lookups.
pub fn simplify_indices(dataset: &XyDataset, threshold: f64) -> Result<Vec<usize>> {
    check_threshold(threshold)?;

    let n = dataset.len();
    if n < 3 {
        return Ok((0..n).collect());
    }

    let xs = dataset.xs();
    let ys = dataset.ys();

    // Surviving-neighbor links; endpoints never leave the list.
    let mut prev: Vec<usize> = (0..n).map(|i| i.saturating_sub(1)).collect();
    let mut next: Vec<usize> = (1..=n).collect();
    let mut area = vec![f64::INFINITY; n];
    let mut stamp = vec![0u32; n];
    let mut removed = vec![false; n];

    let mut heap = BinaryHeap::with_capacity(n);
    for i in 1..n - 1 {
        area[i] = area_at(xs, ys, i - 1, i, i + 1);
        heap.push(Reverse(Candidate {
            area: area[i],
            index: i,
            stamp: 0,
        }));
    }

    let mut last_effective = 0.0f64;
    let mut removed_count = 0usize;

    while let Some(Reverse(candidate)) = heap.pop() {
        if removed[candidate.index] || candidate.stamp != stamp[candidate.index] {
            continue; // stale entry
        }
        if candidate.area >= threshold {
            break; // every surviving interior point is important enough
        }

        // The stored area was already clamped when it was recomputed, so the
        // removal record stays non-decreasing.
        last_effective = last_effective.max(candidate.area);
        trace!(
            "removing index {} with effective area {}",
            candidate.index,
            last_effective
        );

        removed[candidate.index] = true;
        removed_count += 1;

        let left = prev[candidate.index];
        let right = next[candidate.index];
        next[left] = right;
        prev[right] = left;

        // The two now-adjacent survivors changed neighbors; refresh them.
        for m in [left, right] {
            if m == 0 || m == n - 1 {
                continue;
            }
            let raw = area_at(xs, ys, prev[m], m, next[m]);
            area[m] = raw.max(last_effective);
            stamp[m] += 1;
            heap.push(Reverse(Candidate {
                area: area[m],
                index: m,
                stamp: stamp[m],
            }));
        }
    }

    debug!(
        "simplified {} points to {} at threshold {}",
        n,
        n - removed_count,
        threshold
    );

    Ok((0..n).filter(|&i| !removed[i]).collect())
}

/// The key-point dataset a Visvalingam simplification retains.
///
/// Same contract as [`simplify_indices`], materialized as a dataset: the
/// output is a subsequence of the input's points and always includes both
/// endpoints.
///
/// # Example
/// ```
/// use rekha_split::{simplify, XyDataset};
///
/// // Collinear interior points carry zero area and vanish at any positive
/// // threshold.
/// let line = XyDataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 2.0, 3.0]).unwrap();
/// let keys = simplify(&line, 0.5).unwrap();
/// assert_eq!(keys.xs(), &[0.0, 3.0]);
/// ```
pub fn simplify(dataset: &XyDataset, threshold: f64) -> Result<XyDataset> {
    let kept = simplify_indices(dataset, threshold)?;

    let xs = dataset.xs();
    let ys = dataset.ys();
    XyDataset::new(
        kept.iter().map(|&i| xs[i]).collect(),
        kept.iter().map(|&i| ys[i]).collect(),
    )
}
