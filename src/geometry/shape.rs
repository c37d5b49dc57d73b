//! Geometric shape variants.
//!
//! A closed set of shape variants sits behind a small capability surface:
//! [`Shape::boundary_points`], [`Shape::contains`], and [`Shape::material`].
//! The mesher never inspects shape internals, so adding a variant only
//! touches this module.

use nalgebra::Point2;

/// A circle defined by center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Center of the circle.
    pub center: Point2<f64>,
    /// Radius of the circle.
    pub radius: f64,
    /// Material tag.
    pub material: i32,
    /// Number of boundary points emitted by sampling.
    pub resolution: usize,
}

/// An axis-aligned square defined by center and side length.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    /// Center of the square.
    pub center: Point2<f64>,
    /// Side length.
    pub side: f64,
    /// Material tag.
    pub material: i32,
    /// Number of boundary points emitted by sampling.
    pub resolution: usize,
}

/// An axis-aligned rectangle defined by center, width, and height.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Center of the rectangle.
    pub center: Point2<f64>,
    /// Full width.
    pub width: f64,
    /// Full height.
    pub height: f64,
    /// Material tag.
    pub material: i32,
    /// Number of boundary points emitted by sampling.
    pub resolution: usize,
}

/// A shape assembled from solid and hole parts.
///
/// Containment folds a signed count over the parts (`+1` for a solid part
/// containing the point, `-1` for a hole); the point is inside iff the count
/// is positive. Boundary points of all parts, holes included, are emitted
/// under the composite's own material.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    /// Material tag for the assembled shape.
    pub material: i32,
    parts: Vec<(Shape, bool)>,
}

impl Composite {
    /// Create an empty composite with the given material.
    pub fn new(material: i32) -> Self {
        Self {
            material,
            parts: Vec::new(),
        }
    }

    /// Add a part. `is_hole` subtracts the part's area from the composite.
    pub fn add_part(&mut self, part: Shape, is_hole: bool) {
        self.parts.push((part, is_hole));
    }

    /// The parts of this composite, in insertion order.
    pub fn parts(&self) -> &[(Shape, bool)] {
        &self.parts
    }
}

/// A geometric shape occupying a material region of the domain.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// An axis-aligned square.
    Square(Square),
    /// An axis-aligned rectangle.
    Rectangle(Rectangle),
    /// A multi-part shape with optional holes.
    Composite(Composite),
}

impl Shape {
    /// Create a circle shape.
    pub fn circle(cx: f64, cy: f64, radius: f64, material: i32, resolution: usize) -> Self {
        Shape::Circle(Circle {
            center: Point2::new(cx, cy),
            radius,
            material,
            resolution,
        })
    }

    /// Create a square shape.
    pub fn square(cx: f64, cy: f64, side: f64, material: i32, resolution: usize) -> Self {
        Shape::Square(Square {
            center: Point2::new(cx, cy),
            side,
            material,
            resolution,
        })
    }

    /// Create a rectangle shape.
    pub fn rectangle(
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        material: i32,
        resolution: usize,
    ) -> Self {
        Shape::Rectangle(Rectangle {
            center: Point2::new(cx, cy),
            width,
            height,
            material,
            resolution,
        })
    }

    /// The shape's material tag.
    pub fn material(&self) -> i32 {
        match self {
            Shape::Circle(c) => c.material,
            Shape::Square(s) => s.material,
            Shape::Rectangle(r) => r.material,
            Shape::Composite(c) => c.material,
        }
    }

    /// Sample points along the shape's boundary.
    ///
    /// The emitted order is deterministic per variant: circles walk the
    /// perimeter counter-clockwise from angle 0; squares walk from the
    /// bottom-left corner; rectangles interleave one point per side per
    /// step. Composites concatenate their parts' points in insertion order,
    /// hole parts included.
    pub fn boundary_points(&self) -> Vec<Point2<f64>> {
        match self {
            Shape::Circle(c) => circle_points(c),
            Shape::Square(s) => square_points(s),
            Shape::Rectangle(r) => rectangle_points(r),
            Shape::Composite(c) => c
                .parts
                .iter()
                .flat_map(|(part, _)| part.boundary_points())
                .collect(),
        }
    }

    /// Whether the point lies inside the shape (boundary inclusive).
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        match self {
            Shape::Circle(c) => (point - c.center).norm() <= c.radius,
            Shape::Square(s) => {
                (point.x - s.center.x).abs() <= s.side / 2.0
                    && (point.y - s.center.y).abs() <= s.side / 2.0
            }
            Shape::Rectangle(r) => {
                (point.x - r.center.x).abs() <= r.width / 2.0
                    && (point.y - r.center.y).abs() <= r.height / 2.0
            }
            Shape::Composite(c) => {
                let mut count = 0i32;
                for (part, is_hole) in &c.parts {
                    if part.contains(point) {
                        count += if *is_hole { -1 } else { 1 };
                    }
                }
                count > 0
            }
        }
    }
}

fn circle_points(c: &Circle) -> Vec<Point2<f64>> {
    (0..c.resolution)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / c.resolution as f64;
            Point2::new(
                c.center.x + c.radius * angle.cos(),
                c.center.y + c.radius * angle.sin(),
            )
        })
        .collect()
}

fn square_points(s: &Square) -> Vec<Point2<f64>> {
    let half = s.side / 2.0;
    (0..s.resolution)
        .map(|i| {
            let t = i as f64 / s.resolution as f64;
            // Walk the perimeter in quarters: bottom, right, top, left.
            if t < 0.25 {
                Point2::new(s.center.x - half + s.side * t * 4.0, s.center.y - half)
            } else if t < 0.5 {
                Point2::new(s.center.x + half, s.center.y - half + s.side * (t - 0.25) * 4.0)
            } else if t < 0.75 {
                Point2::new(s.center.x + half - s.side * (t - 0.5) * 4.0, s.center.y + half)
            } else {
                Point2::new(s.center.x - half, s.center.y + half - s.side * (t - 0.75) * 4.0)
            }
        })
        .collect()
}

fn rectangle_points(r: &Rectangle) -> Vec<Point2<f64>> {
    let (hw, hh) = (r.width / 2.0, r.height / 2.0);
    let per_side = r.resolution / 4;
    let mut points = Vec::with_capacity(per_side * 4);
    for i in 0..per_side {
        let t = i as f64 / per_side as f64;
        points.push(Point2::new(r.center.x - hw + r.width * t, r.center.y - hh));
        points.push(Point2::new(r.center.x + hw, r.center.y - hh + r.height * t));
        points.push(Point2::new(r.center.x + hw - r.width * t, r.center.y + hh));
        points.push(Point2::new(r.center.x - hw, r.center.y + hh - r.height * t));
    }
    points
}
