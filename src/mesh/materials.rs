//! Material classification of leaf cells.

use std::collections::BTreeSet;

use crate::geometry::Shape;
use crate::quadtree::Cell;

/// Determine the set of materials present in a leaf cell.
///
/// The result is the union of two sources:
/// 1. the materials of the boundary samples the cell retained, and
/// 2. the material of every shape whose containment test is true at any of
///    the cell's four corners.
///
/// Testing all four corners rather than only the centroid trades precision
/// for recall: a shape that only brushes one corner still tags the cell,
/// while cells near shape boundaries may pick up an extra material. An
/// empty result marks a background/void cell and is a valid outcome.
///
/// Pure function of its inputs; classifying the same finished tree twice
/// yields identical sets.
pub fn classify_cell(cell: &Cell, shapes: &[Shape]) -> BTreeSet<i32> {
    let mut materials: BTreeSet<i32> = cell.samples().iter().map(|s| s.material).collect();
    for corner in cell.bounds().corners() {
        for shape in shapes {
            if shape.contains(&corner) {
                materials.insert(shape.material());
            }
        }
    }
    materials
}

#[cfg(test)]
mod tests {
    use nalgebra::Point2;

    use crate::geometry::{sample_boundaries, BoundarySample};
    use crate::quadtree::{Bounds, Quadtree};

    use super::*;

    fn leaf_with_samples(bounds: Bounds, samples: Vec<BoundarySample>) -> Quadtree {
        let mut tree = Quadtree::new(bounds, 0);
        tree.partition(&samples, 0);
        tree
    }

    #[test]
    fn test_sample_materials_included() {
        let samples = vec![BoundarySample {
            position: Point2::new(5.0, 5.0),
            material: 3,
        }];
        let tree = leaf_with_samples(Bounds::from_extent(10.0, 10.0), samples);
        let materials = classify_cell(tree.cell(tree.root()), &[]);
        assert_eq!(materials, BTreeSet::from([3]));
    }

    #[test]
    fn test_corner_containment_included() {
        // The circle covers only the bottom-left corner of the cell.
        let shape = Shape::circle(0.0, 0.0, 2.0, 5, 8);
        let tree = leaf_with_samples(Bounds::from_extent(10.0, 10.0), Vec::new());
        let materials = classify_cell(tree.cell(tree.root()), &[shape]);
        assert_eq!(materials, BTreeSet::from([5]));
    }

    #[test]
    fn test_empty_classification_is_valid() {
        let shape = Shape::circle(50.0, 50.0, 1.0, 1, 8);
        let tree = leaf_with_samples(Bounds::from_extent(10.0, 10.0), Vec::new());
        let materials = classify_cell(tree.cell(tree.root()), &[shape]);
        assert!(materials.is_empty());
    }

    #[test]
    fn test_union_of_samples_and_corners() {
        let samples = vec![BoundarySample {
            position: Point2::new(5.0, 5.0),
            material: 1,
        }];
        let shape = Shape::square(0.0, 0.0, 4.0, 2, 8);
        let tree = leaf_with_samples(Bounds::from_extent(10.0, 10.0), samples);
        let materials = classify_cell(tree.cell(tree.root()), &[shape]);
        assert_eq!(materials, BTreeSet::from([1, 2]));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let shapes = vec![
            Shape::circle(3.0, 3.0, 5.0, 1, 16),
            Shape::square(8.0, 8.0, 6.0, 2, 8),
        ];
        let samples = sample_boundaries(&shapes);
        let tree = leaf_with_samples(Bounds::from_extent(10.0, 10.0), samples);
        let first = classify_cell(tree.cell(tree.root()), &shapes);
        let second = classify_cell(tree.cell(tree.root()), &shapes);
        assert_eq!(first, second);
    }
}
