//! Adaptive quadtree spatial partition.
//!
//! The quadtree recursively subdivides a rectangular domain wherever the
//! density of boundary samples exceeds a threshold, bounded by a hard
//! maximum depth. Subdivision is density-driven, not geometry-driven: it
//! only ever looks at the sample positions, never at shape semantics, which
//! keeps the partition stage shape-agnostic.
//!
//! # Overview
//!
//! - [`Bounds`] — an axis-aligned rectangle with inclusive containment.
//! - [`Cell`] — one region of the tree, stored in an array-backed arena and
//!   addressed by [`CellId`].
//! - [`Quadtree`] — the arena plus the subdivision algorithm.
//!
//! Leaf cells are the unit of mesh output: each one becomes exactly one
//! quadrilateral element during mesh generation (see [`crate::mesh`]).

mod bounds;
mod cell;
mod index;
mod tree;

pub use bounds::Bounds;
pub use cell::Cell;
pub use index::{CellId, ElementId, NodeId};
pub use tree::Quadtree;
