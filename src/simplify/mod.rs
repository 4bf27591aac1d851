//! Dataset simplification.
//!
//! The one algorithm implemented here is Visvalingam-Whyatt effective-area
//! reduction; see [`simplify`] and [`simplify_indices`].

mod visvalingam;

pub use visvalingam::{simplify, simplify_indices, triangle_area};
