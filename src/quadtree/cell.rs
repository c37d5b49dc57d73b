//! Quadtree cells.

use crate::geometry::BoundarySample;

use super::bounds::Bounds;
use super::index::CellId;

/// One axis-aligned rectangular region of the quadtree.
///
/// Cells live in the tree's arena and reference their children by id. A
/// leaf retains the boundary samples that fell into it; a branch has handed
/// all of its samples down to its children.
#[derive(Debug, Clone)]
pub struct Cell {
    bounds: Bounds,
    depth: usize,
    samples: Vec<BoundarySample>,
    children: Option<[CellId; 4]>,
}

impl Cell {
    pub(crate) fn new(bounds: Bounds, depth: usize, samples: Vec<BoundarySample>) -> Self {
        Self {
            bounds,
            depth,
            samples,
            children: None,
        }
    }

    /// The region this cell covers.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Subdivision depth; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Boundary samples retained by this cell. Empty for branches.
    pub fn samples(&self) -> &[BoundarySample] {
        &self.samples
    }

    /// Child cell ids in bottom-left, bottom-right, top-right, top-left
    /// order, or `None` for a leaf.
    pub fn children(&self) -> Option<[CellId; 4]> {
        self.children
    }

    /// Whether this cell is a leaf (has no children).
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub(crate) fn take_samples(&mut self) -> Vec<BoundarySample> {
        std::mem::take(&mut self.samples)
    }

    pub(crate) fn set_children(&mut self, children: [CellId; 4]) {
        self.children = Some(children);
    }
}
