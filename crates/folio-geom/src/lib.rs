//! Geometry Primitives
//!
//! Points, sizes and rectangles shared by the style, layout and paint
//! passes. Everything is `f64` and `Copy`.

/// A point in device pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a box
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rectangle geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create from a location and a size
    pub fn new(location: Point, size: Size) -> Self {
        Self {
            x: location.x,
            y: location.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Create with dimensions
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create from the four edges
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Top-left corner
    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Dimensions
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Top edge (same as y)
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Left edge (same as x)
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Check if point is inside
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Check if rects intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);

        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.left(), 10.0);
    }

    #[test]
    fn test_from_ltrb() {
        let rect = Rect::from_ltrb(10.0, 20.0, 110.0, 70.0);
        assert_eq!(rect, Rect::from_xywh(10.0, 20.0, 100.0, 50.0));
    }

    #[test]
    fn test_location_size_round_trip() {
        let rect = Rect::new(Point::new(5.0, 6.0), Size::new(30.0, 40.0));
        assert_eq!(rect.location(), Point::new(5.0, 6.0));
        assert_eq!(rect.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_contains_point() {
        let rect = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);

        assert!(rect.contains_point(50.0, 50.0));
        assert!(!rect.contains_point(150.0, 50.0));
    }

    #[test]
    fn test_intersects() {
        let rect1 = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let rect2 = Rect::from_xywh(50.0, 50.0, 100.0, 100.0);
        let rect3 = Rect::from_xywh(200.0, 200.0, 50.0, 50.0);

        assert!(rect1.intersects(&rect2));
        assert!(!rect1.intersects(&rect3));
    }
}
