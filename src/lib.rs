//! # disjoint-set
//!
//! A generic disjoint-set (union-find) structure for partitioning a growing
//! universe of elements into equivalence classes.
//!
//! Any `Eq + Hash + Clone` value can be an element. Elements are added
//! implicitly the first time they are referenced and are never removed.
//!
//! ## Modules
//!
//! - [`collections`] — [`DisjointSet`] and its iterators
//!
//! ## Design Philosophy
//!
//! - **Total operations**: unknown elements are inserted, never rejected
//! - **Stable survivor rule**: `union(x, y)` keeps `y`'s representative
//! - **No unnecessary dependencies**: Pure Rust, std only
//! - **Property-based testing**: equivalence-relation and partition
//!   invariants verified via proptest

pub mod collections;

pub use collections::DisjointSet;
