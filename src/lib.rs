//! # Rekha-Split: XY Dataset Simplification and Segmentation
//!
//! A library for reducing dense, strictly-ordered 2D point sequences
//! (time-series, spatial tracks) to their visually important points, and for
//! partitioning the original data into contiguous segments at those points.
//!
//! ## Features
//!
//! - **Visvalingam-Whyatt simplification**: iterative least-important-point
//!   removal driven by triangle area, with deterministic tie-breaking and a
//!   monotone effective-area record
//! - **Index-threaded results**: the simplifier reports retained *indices*,
//!   so segment boundaries never depend on floating-point value lookups
//! - **Pluggable splitting strategies**: a [`Splitter`] trait with
//!   importance-driven and piecewise-linear implementations, usable behind
//!   trait objects
//! - **Pure and shareable**: datasets are immutable values and splitters
//!   hold no per-call state, so instances can be shared across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use rekha_split::{Splitter, VisvalingamSplitter, XyDataset};
//!
//! // A flat track with one sharp spike at x = 2
//! let data = XyDataset::new(
//!     vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
//!     vec![0.0, 0.0, 10.0, 0.0, 0.0, 0.0],
//! ).unwrap();
//!
//! // Split wherever simplification keeps a point
//! let splitter = VisvalingamSplitter::new(12.0).unwrap();
//! let segments = splitter.split(&data).unwrap();
//!
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].xs(), &[0.0, 1.0]);
//! assert_eq!(segments[1].xs(), &[2.0, 3.0, 4.0, 5.0]);
//! ```
//!
//! ## Data Flow
//!
//! ```text
//!   ┌─────────────┐     ┌──────────────────┐     ┌───────────────────┐
//!   │  XyDataset  │────►│    Simplifier    │────►│ retained indices  │
//!   │ (validated) │     │ (effective area) │     │ (incl. endpoints) │
//!   └─────────────┘     └──────────────────┘     └─────────┬─────────┘
//!                                                          │
//!                                                          ▼
//!   ┌──────────────────┐     ┌────────────────┐     ┌──────────────┐
//!   │  Vec<XyDataset>  │◄────│   subrange()   │◄────│ boundary     │
//!   │  (segments)      │     │  per boundary  │     │ array [0..n] │
//!   └──────────────────┘     └────────────────┘     └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`core`]: fundamental types ([`XyPoint`], [`XyDataset`]) and validation
//! - [`simplify`](mod@crate::simplify): the effective-area reduction algorithm
//! - [`split`]: the [`Splitter`] strategy trait and its implementations
//! - [`fitting`]: least-squares line fitting used by the piecewise splitter
//! - [`error`]: the crate error type

pub mod core;
pub mod error;
pub mod fitting;
pub mod simplify;
pub mod split;

// Re-export main types at crate root
pub use self::core::{check_input_data, check_ordering, XyDataset, XyPoint};
pub use self::error::{Error, Result};
pub use self::fitting::LinearFit;
pub use self::simplify::{simplify, simplify_indices, triangle_area};
pub use self::split::{
    check_split_input, PiecewiseLinearSplitter, Splitter, VisvalingamSplitter,
};
