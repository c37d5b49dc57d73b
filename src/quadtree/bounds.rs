//! Axis-aligned rectangular bounds.

use nalgebra::Point2;

/// An axis-aligned rectangle, the region covered by one quadtree cell.
///
/// Containment is inclusive on all four edges. This matters during
/// subdivision: a sample lying exactly on an internal split line belongs to
/// every touching child, so it is deliberately duplicated rather than
/// assigned to one of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Bottom-left corner.
    pub min: Point2<f64>,
    /// Top-right corner.
    pub max: Point2<f64>,
}

impl Bounds {
    /// Create bounds from two corners.
    pub fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self { min, max }
    }

    /// Bounds spanning `(0, 0)` to `(width, height)`.
    pub fn from_extent(width: f64, height: f64) -> Self {
        Self::new(Point2::new(0.0, 0.0), Point2::new(width, height))
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Midpoint of the rectangle.
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Whether the point lies within the rectangle, edges inclusive.
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// The four corners in counter-clockwise order:
    /// bottom-left, bottom-right, top-right, top-left.
    pub fn corners(&self) -> [Point2<f64>; 4] {
        [
            Point2::new(self.min.x, self.min.y),
            Point2::new(self.max.x, self.min.y),
            Point2::new(self.max.x, self.max.y),
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// Split at the midpoint into four child bounds, in the same
    /// counter-clockwise order as [`Bounds::corners`]:
    /// bottom-left, bottom-right, top-right, top-left.
    pub fn quadrants(&self) -> [Bounds; 4] {
        let mid = self.center();
        [
            Bounds::new(self.min, mid),
            Bounds::new(Point2::new(mid.x, self.min.y), Point2::new(self.max.x, mid.y)),
            Bounds::new(mid, self.max),
            Bounds::new(Point2::new(self.min.x, mid.y), Point2::new(mid.x, self.max.y)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let b = Bounds::from_extent(10.0, 10.0);
        assert!(b.contains(&Point2::new(0.0, 0.0)));
        assert!(b.contains(&Point2::new(10.0, 10.0)));
        assert!(b.contains(&Point2::new(10.0, 5.0)));
        assert!(!b.contains(&Point2::new(10.0 + 1e-12, 5.0)));
        assert!(!b.contains(&Point2::new(-1e-12, 5.0)));
    }

    #[test]
    fn test_corners_ccw_order() {
        let b = Bounds::from_extent(4.0, 2.0);
        let [bl, br, tr, tl] = b.corners();
        assert_eq!(bl, Point2::new(0.0, 0.0));
        assert_eq!(br, Point2::new(4.0, 0.0));
        assert_eq!(tr, Point2::new(4.0, 2.0));
        assert_eq!(tl, Point2::new(0.0, 2.0));
    }

    #[test]
    fn test_quadrants_share_midpoint() {
        let b = Bounds::from_extent(8.0, 8.0);
        let [bl, br, tr, tl] = b.quadrants();
        let mid = Point2::new(4.0, 4.0);
        assert_eq!(bl.max, mid);
        assert_eq!(br.min, Point2::new(4.0, 0.0));
        assert_eq!(br.max, Point2::new(8.0, 4.0));
        assert_eq!(tr.min, mid);
        assert_eq!(tl.min, Point2::new(0.0, 4.0));
        assert_eq!(tl.max, Point2::new(4.0, 8.0));
    }

    #[test]
    fn test_split_line_point_in_multiple_quadrants() {
        let b = Bounds::from_extent(8.0, 8.0);
        let on_split = Point2::new(4.0, 4.0);
        let holders = b
            .quadrants()
            .iter()
            .filter(|q| q.contains(&on_split))
            .count();
        assert_eq!(holders, 4);

        let on_vertical = Point2::new(4.0, 1.0);
        let holders = b
            .quadrants()
            .iter()
            .filter(|q| q.contains(&on_vertical))
            .count();
        assert_eq!(holders, 2);
    }
}
