//! Boundary sampling.
//!
//! Converts a collection of shapes into a flat sequence of material-tagged
//! boundary samples. The sample sequence is what drives quadtree density;
//! the mesher never sees the shapes again until material classification.

use nalgebra::Point2;

use super::shape::Shape;

/// A boundary point tagged with the material of the shape that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySample {
    /// Position of the sample.
    pub position: Point2<f64>,
    /// Material of the producing shape.
    pub material: i32,
}

/// Sample the boundaries of all shapes into a flat tagged sequence.
///
/// Output preserves shape input order, then per-shape sample order, so
/// repeated runs over the same scene produce identical sequences. An empty
/// shape list yields an empty sequence.
pub fn sample_boundaries(shapes: &[Shape]) -> Vec<BoundarySample> {
    shapes
        .iter()
        .flat_map(|shape| {
            let material = shape.material();
            shape
                .boundary_points()
                .into_iter()
                .map(move |position| BoundarySample { position, material })
        })
        .collect()
}
