//! Axis-aligned geometry shared by targets and the ball

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, `(x, y)` is the top-left corner in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size whose top edge is centered on `center_x`
    pub fn centered_at(center_x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(center_x - width / 2.0, y, width, height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A circle, borrowed from whatever owns the position and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Circle vs rectangle overlap test
///
/// Compares the circle's bounding box against the rectangle, so a circle near
/// a corner can report a hit without actually touching it. Rim feel depends on
/// this, keep it as a box test. Touching edges do not count.
#[inline]
pub fn is_colliding(circle: Circle, rect: &Rect) -> bool {
    circle.center.x + circle.radius > rect.x
        && circle.center.x - circle.radius < rect.right()
        && circle.center.y + circle.radius > rect.y
        && circle.center.y - circle.radius < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_circle_collides() {
        let rect = Rect::new(100.0, 100.0, 5.0, 10.0);
        let circle = Circle::new(Vec2::new(95.0, 105.0), 10.0);
        assert!(is_colliding(circle, &rect));
    }

    #[test]
    fn test_distant_circle_misses() {
        let rect = Rect::new(100.0, 100.0, 5.0, 10.0);
        assert!(!is_colliding(Circle::new(Vec2::new(50.0, 105.0), 10.0), &rect));
        assert!(!is_colliding(Circle::new(Vec2::new(102.0, 200.0), 10.0), &rect));
    }

    #[test]
    fn test_touching_edge_is_not_a_collision() {
        let rect = Rect::new(100.0, 100.0, 5.0, 10.0);
        // Right extent exactly on the left edge
        let circle = Circle::new(Vec2::new(90.0, 105.0), 10.0);
        assert!(!is_colliding(circle, &rect));
    }

    #[test]
    fn test_corner_uses_bounding_box() {
        // True distance from corner (100, 100) is ~11.3 > radius, but boxes overlap
        let rect = Rect::new(100.0, 100.0, 20.0, 20.0);
        let circle = Circle::new(Vec2::new(92.0, 92.0), 10.0);
        assert!(circle.center.distance(Vec2::new(100.0, 100.0)) > circle.radius);
        assert!(is_colliding(circle, &rect));
    }

    #[test]
    fn test_rect_helpers() {
        let rect = Rect::centered_at(200.0, 50.0, 80.0, 10.0);
        assert_eq!(rect.x, 160.0);
        assert_eq!(rect.right(), 240.0);
        assert_eq!(rect.bottom(), 60.0);
    }
}
