//! Shape definitions and boundary sampling.
//!
//! Shapes are the geometric input to mesh generation. The mesher consumes
//! them through two capabilities only: boundary-point sampling (which drives
//! quadtree density) and point containment (which drives material
//! classification). Each shape carries an integer material tag; negative
//! materials conventionally mark voids.
//!
//! # Example
//!
//! ```
//! use quadmesh::geometry::{sample_boundaries, Shape};
//!
//! let shapes = vec![Shape::circle(50.0, 50.0, 20.0, 1, 20)];
//! let samples = sample_boundaries(&shapes);
//! assert_eq!(samples.len(), 20);
//! assert_eq!(samples[0].material, 1);
//! ```

mod sampler;
mod shape;

pub use sampler::{sample_boundaries, BoundarySample};
pub use shape::{Circle, Composite, Rectangle, Shape, Square};
