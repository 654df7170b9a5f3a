//! Core geometric types shared by the curve generator and the renderer

/// A 2D point in the curve's coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are finite (no NaN or infinity)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned bounding box of a point set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Compute the bounding box of a non-empty point slice.
    ///
    /// Returns `None` for an empty slice.
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = BoundingBox::new(first.x, first.y, first.x, first.y);
        for point in &points[1..] {
            bounds = bounds.expand_to_include(*point);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// True when every point coincides: the box has no extent on either axis
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_points_empty() {
        assert_eq!(BoundingBox::of_points(&[]), None);
    }

    #[test]
    fn test_of_points_single() {
        let bounds = BoundingBox::of_points(&[Point::new(3.0, -2.0)]).unwrap();
        assert_eq!(bounds, BoundingBox::new(3.0, -2.0, 3.0, -2.0));
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn test_of_points_extent() {
        let points = vec![
            Point::new(-1.0, 4.0),
            Point::new(5.0, -3.0),
            Point::new(2.0, 2.0),
        ];
        let bounds = BoundingBox::of_points(&points).unwrap();
        assert_eq!(bounds.width(), 6.0);
        assert_eq!(bounds.height(), 7.0);
        assert_eq!(bounds.center(), Point::new(2.0, 0.5));
        assert!(!bounds.is_degenerate());
    }

    #[test]
    fn test_expand_to_include() {
        let bounds = BoundingBox::new(0.0, 0.0, 1.0, 1.0).expand_to_include(Point::new(-2.0, 3.0));
        assert_eq!(bounds, BoundingBox::new(-2.0, 0.0, 1.0, 3.0));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }
}
