//! The domain facade: a rectangular extent, its shapes, and the quadtree.

use std::collections::BTreeSet;

use crate::error::{MeshError, Result};
use crate::geometry::{sample_boundaries, BoundarySample, Shape};
use crate::mesh::{generate_mesh, QuadMesh};
use crate::quadtree::{Bounds, Quadtree};

/// Configuration for partitioning and mesh generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshOptions {
    /// Hard recursion ceiling for subdivision, independent of density.
    pub max_depth: usize,
    /// Epsilon used to quantize coordinates for node deduplication.
    pub quantization: f64,
}

impl MeshOptions {
    /// Set the maximum subdivision depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the node-dedup quantization epsilon.
    pub fn with_quantization(mut self, quantization: f64) -> Self {
        self.quantization = quantization;
        self
    }
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            max_depth: 5,
            quantization: 1e-6,
        }
    }
}

/// A rectangular meshing domain spanning `(0, 0)` to `(width, height)`.
///
/// Owns the shapes and the quadtree for one meshing run. The usual flow is
/// [`DomainBox::partition`] followed by [`DomainBox::generate_mesh`];
/// calling `generate_mesh` before any partition is not an error and yields
/// the degenerate one-element mesh covering the whole domain.
///
/// # Example
///
/// ```
/// use quadmesh::prelude::*;
///
/// let shapes = vec![Shape::circle(50.0, 50.0, 20.0, 1, 20)];
/// let mut domain = DomainBox::new(100.0, 100.0, shapes, MeshOptions::default()).unwrap();
/// domain.partition(1);
/// let mesh = domain.generate_mesh();
/// assert!(mesh.num_elements() >= 1);
/// ```
#[derive(Debug, Clone)]
pub struct DomainBox {
    width: f64,
    height: f64,
    shapes: Vec<Shape>,
    tree: Quadtree,
    options: MeshOptions,
}

impl DomainBox {
    /// Create a domain box.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidDomain`] for non-finite or non-positive
    /// extents and [`MeshError::InvalidParameter`] for a non-finite or
    /// non-positive quantization epsilon.
    pub fn new(width: f64, height: f64, shapes: Vec<Shape>, options: MeshOptions) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(MeshError::InvalidDomain { width, height });
        }
        if !(options.quantization.is_finite() && options.quantization > 0.0) {
            return Err(MeshError::invalid_param(
                "quantization",
                options.quantization,
                "must be a positive finite epsilon",
            ));
        }
        let tree = Quadtree::new(Bounds::from_extent(width, height), options.max_depth);
        Ok(Self {
            width,
            height,
            shapes,
            tree,
            options,
        })
    }

    /// Domain width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Domain height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The shapes occupying the domain.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The underlying quadtree.
    pub fn quadtree(&self) -> &Quadtree {
        &self.tree
    }

    /// Sample the domain's shapes and partition the quadtree.
    ///
    /// A cell splits while it holds more than `threshold` samples and its
    /// depth is below the configured `max_depth`.
    pub fn partition(&mut self, threshold: usize) {
        let samples = sample_boundaries(&self.shapes);
        self.tree.partition(&samples, threshold);
    }

    /// Partition from pre-tagged samples instead of the owned shapes.
    ///
    /// Useful when samples come from an external source; classification
    /// during [`DomainBox::generate_mesh`] still consults the owned shapes
    /// for corner containment.
    pub fn partition_samples(&mut self, samples: &[BoundarySample], threshold: usize) {
        self.tree.partition(samples, threshold);
    }

    /// Generate the mesh for the current partition.
    pub fn generate_mesh(&self) -> QuadMesh {
        generate_mesh(&self.tree, &self.shapes, self.options.quantization)
    }

    /// Classify each mesh node by the shapes containing it.
    ///
    /// Returns one material set per node, indexed by node id. Nodes in
    /// background regions get an empty set.
    pub fn node_materials(&self, mesh: &QuadMesh) -> Vec<BTreeSet<i32>> {
        mesh.nodes
            .iter()
            .map(|node| {
                self.shapes
                    .iter()
                    .filter(|shape| shape.contains(&node.position))
                    .map(|shape| shape.material())
                    .collect()
            })
            .collect()
    }
}
