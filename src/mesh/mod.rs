//! Mesh output: nodes, elements, and the generation walk.
//!
//! Mesh generation converts a finished quadtree into a [`QuadMesh`]: a list
//! of deduplicated [`Node`]s and one quadrilateral [`Element`] per leaf
//! cell, each tagged with the set of materials occupying it.
//!
//! # Node identity
//!
//! Two adjacent leaves sharing an edge must resolve their shared corners to
//! the same node ids. The [`NodeRegistry`] guarantees this by quantizing
//! coordinates to a configurable epsilon before using them as dedup keys,
//! and the registry is threaded through the entire depth-first walk so the
//! guarantee holds tree-wide, not just within one branch.

mod generate;
mod materials;
mod registry;

pub use generate::{generate_mesh, Element, Node, QuadMesh};
pub use materials::classify_cell;
pub use registry::NodeRegistry;
