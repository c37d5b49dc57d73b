//! # Quadmesh
//!
//! Adaptive quadtree mesh generation for rectangular 2D domains containing
//! material regions.
//!
//! Quadmesh recursively subdivides a domain wherever boundary points sampled
//! from its shapes cluster, then converts the resulting leaf cells into a
//! deduplicated node list and a list of quadrilateral elements tagged with
//! the materials occupying them.
//!
//! ## Features
//!
//! - **Density-driven subdivision**: cells split while they hold more
//!   boundary samples than a threshold, bounded by a hard maximum depth
//! - **Tree-wide node identity**: adjacent cells resolve shared corners to
//!   the same node ids via quantized-coordinate deduplication
//! - **Material classification**: each element carries the set of materials
//!   present in its cell, from retained samples and corner containment
//! - **Composite shapes**: solids and holes combined by signed containment
//!   counting
//!
//! ## Quick Start
//!
//! ```
//! use quadmesh::prelude::*;
//!
//! // A circular inclusion of material 1 in a 100 x 100 domain.
//! let shapes = vec![Shape::circle(50.0, 50.0, 20.0, 1, 20)];
//! let mut domain = DomainBox::new(100.0, 100.0, shapes, MeshOptions::default()).unwrap();
//!
//! // Subdivide wherever a cell holds more than one boundary sample.
//! domain.partition(1);
//!
//! let mesh = domain.generate_mesh();
//! for element in &mesh.elements {
//!     let corners = mesh.element_corners(element.id);
//!     println!("{:?}: {:?} materials {:?}", element.id, corners[0], element.materials);
//! }
//! ```
//!
//! ## Pipeline
//!
//! Shapes → [`geometry::sample_boundaries`] → tagged samples →
//! [`DomainBox::partition`] (recursive quadtree subdivision) →
//! [`DomainBox::generate_mesh`] (leaf walk emitting nodes + elements).
//!
//! All of it is single-threaded and synchronous: the node registry and the
//! element counter are threaded sequentially through one depth-first
//! traversal, so no locking is involved anywhere.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod quadtree;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use quadmesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::domain::{DomainBox, MeshOptions};
    pub use crate::error::{MeshError, Result};
    pub use crate::geometry::{sample_boundaries, BoundarySample, Composite, Shape};
    pub use crate::mesh::{generate_mesh, Element, Node, QuadMesh};
    pub use crate::quadtree::{Bounds, Cell, CellId, ElementId, NodeId, Quadtree};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
