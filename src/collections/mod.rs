//! Specialized data structures.
//!
//! # Available Structures
//!
//! - [`DisjointSet`]: Disjoint-set forest over hashable elements with path compression

mod disjoint_set;

pub use disjoint_set::{DisjointSet, Iter, IterSets};
