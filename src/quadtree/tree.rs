//! The quadtree: adaptive subdivision driven by sample density.

use crate::geometry::BoundarySample;

use super::bounds::Bounds;
use super::cell::Cell;
use super::index::CellId;

/// An adaptive quadtree over a rectangular domain.
///
/// Cells are stored in an array-backed arena with the root at index 0.
/// Partitioning is append-only: cells are created during subdivision and
/// never removed until the next [`Quadtree::partition`] call resets the
/// arena.
///
/// A cell subdivides iff its depth is below `max_depth` and it holds more
/// samples than the threshold; otherwise it becomes a leaf retaining its
/// samples. Subdivision redistributes the parent's samples into the children
/// whose bounds contain them, using an inclusive range test, so samples on a
/// split line land in every touching child.
#[derive(Debug, Clone)]
pub struct Quadtree {
    cells: Vec<Cell>,
    bounds: Bounds,
    max_depth: usize,
}

impl Quadtree {
    /// Create a tree covering `bounds`, consisting of a single empty root
    /// leaf.
    pub fn new(bounds: Bounds, max_depth: usize) -> Self {
        Self {
            cells: vec![Cell::new(bounds, 0, Vec::new())],
            bounds,
            max_depth,
        }
    }

    /// The root cell id.
    pub fn root(&self) -> CellId {
        CellId::new(0)
    }

    /// Look up a cell by id.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// The domain bounds this tree covers.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The hard recursion ceiling.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Total number of cells, branches included.
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Insert the samples and recursively subdivide by density.
    ///
    /// Resets the arena to a fresh root holding all samples, then splits
    /// every cell holding more than `threshold` samples until the threshold
    /// or `max_depth` is reached. Always terminates: depth strictly
    /// increases and is bounded.
    pub fn partition(&mut self, samples: &[BoundarySample], threshold: usize) {
        self.cells.clear();
        self.cells.push(Cell::new(self.bounds, 0, samples.to_vec()));
        self.subdivide(self.root(), threshold);
    }

    fn subdivide(&mut self, id: CellId, threshold: usize) {
        let cell = &self.cells[id.index()];
        if cell.depth() >= self.max_depth || cell.samples().len() <= threshold {
            return;
        }

        let depth = cell.depth();
        let quadrants = cell.bounds().quadrants();
        let samples = self.cells[id.index()].take_samples();

        let mut children = [self.root(); 4];
        for (slot, quadrant) in children.iter_mut().zip(quadrants.iter()) {
            let retained: Vec<BoundarySample> = samples
                .iter()
                .filter(|s| quadrant.contains(&s.position))
                .copied()
                .collect();
            *slot = CellId::new(self.cells.len());
            self.cells.push(Cell::new(*quadrant, depth + 1, retained));
        }
        self.cells[id.index()].set_children(children);

        for child in children {
            self.subdivide(child, threshold);
        }
    }

    /// All leaf cell ids in depth-first order, children visited in
    /// bottom-left, bottom-right, top-right, top-left order.
    pub fn leaves(&self) -> Vec<CellId> {
        let mut out = Vec::new();
        self.collect_leaves(self.root(), &mut out);
        out
    }

    fn collect_leaves(&self, id: CellId, out: &mut Vec<CellId>) {
        match self.cell(id).children() {
            None => out.push(id),
            Some(children) => {
                for child in children {
                    self.collect_leaves(child, out);
                }
            }
        }
    }
}
