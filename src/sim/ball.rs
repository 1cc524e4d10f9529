//! The ball: integration, perspective sizing and boundary collisions

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Circle;
use crate::consts::*;

/// Whether physics is acting on the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallState {
    /// Waiting at the canvas center for the player to grab it
    #[default]
    Idle,
    /// Thrown, gravity and drag are active
    Flying,
}

/// Apparent radius at height `y`: full size at the top, half size at the bottom
#[inline]
pub fn perspective_radius(original_radius: f32, y: f32, canvas_height: f32) -> f32 {
    original_radius * (1.0 - (y / canvas_height) * PERSPECTIVE_FACTOR)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    /// Apparent radius, recomputed from `original_radius` every frame
    pub radius: f32,
    pub original_radius: f32,
    /// Visual spin in radians
    pub rotation: f32,
    pub state: BallState,
}

impl Ball {
    pub fn new(pos: Vec2, original_radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: original_radius,
            original_radius,
            rotation: 0.0,
            state: BallState::Idle,
        }
    }

    pub fn is_flying(&self) -> bool {
        self.state == BallState::Flying
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Screen-space top of the ball
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    /// Pick test for starting a drag
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }

    /// Hand the ball to physics with the given velocity
    pub fn launch(&mut self, vel: Vec2) {
        self.vel = vel;
        self.state = BallState::Flying;
    }

    /// Park the ball at `pos` with no velocity
    pub fn reset_to(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.state = BallState::Idle;
    }

    /// One semi-implicit Euler step under gravity and air drag
    pub fn integrate(&mut self) {
        self.vel.y += GRAVITY;
        self.vel *= AIR_RESISTANCE;
        self.pos += self.vel;
        self.rotation += self.vel.x * ROTATION_SCALE;
    }

    pub fn update_radius(&mut self, canvas_height: f32) {
        self.radius = perspective_radius(self.original_radius, self.pos.y, canvas_height);
    }

    /// Bounce off the left/right canvas edges. Returns true on a bounce.
    pub fn collide_side_walls(&mut self, canvas_width: f32) -> bool {
        let past_left = self.pos.x - self.radius < 0.0;
        if past_left || self.pos.x + self.radius > canvas_width {
            self.vel.x *= WALL_RESTITUTION;
            self.pos.x = if past_left {
                self.radius
            } else {
                canvas_width - self.radius
            };
            return true;
        }
        false
    }

    /// Bounce off the top canvas edge. Returns true on a bounce.
    pub fn collide_ceiling(&mut self) -> bool {
        if self.top() < 0.0 {
            self.vel.y *= WALL_RESTITUTION;
            self.pos.y = self.radius;
            return true;
        }
        false
    }

    /// Whole ball has dropped below the canvas
    pub fn is_below_floor(&self, canvas_height: f32) -> bool {
        self.top() > canvas_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perspective_radius_endpoints() {
        assert_eq!(perspective_radius(30.0, 0.0, 800.0), 30.0);
        assert_eq!(perspective_radius(30.0, 400.0, 800.0), 22.5);
        assert_eq!(perspective_radius(30.0, 800.0, 800.0), 15.0);
    }

    #[test]
    fn test_integrate_applies_gravity_then_drag() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), BALL_RADIUS);
        ball.launch(Vec2::new(10.0, -5.0));
        ball.integrate();

        let expected_vx = 10.0 * AIR_RESISTANCE;
        let expected_vy = (-5.0 + GRAVITY) * AIR_RESISTANCE;
        assert!((ball.vel.x - expected_vx).abs() < 1e-5);
        assert!((ball.vel.y - expected_vy).abs() < 1e-5);
        assert!((ball.pos.x - (100.0 + expected_vx)).abs() < 1e-4);
        assert!((ball.pos.y - (100.0 + expected_vy)).abs() < 1e-4);
        assert!((ball.rotation - expected_vx * ROTATION_SCALE).abs() < 1e-5);
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut ball = Ball::new(Vec2::new(10.0, 300.0), BALL_RADIUS);
        ball.radius = 20.0;
        ball.vel = Vec2::new(-10.0, 0.0);

        assert!(ball.collide_side_walls(800.0));
        assert_eq!(ball.pos.x, 20.0);
        assert!((ball.vel.x - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut ball = Ball::new(Vec2::new(795.0, 300.0), BALL_RADIUS);
        ball.radius = 20.0;
        ball.vel = Vec2::new(12.0, 0.0);

        assert!(ball.collide_side_walls(800.0));
        assert_eq!(ball.pos.x, 780.0);
        assert!((ball.vel.x + 9.6).abs() < 1e-5);
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut ball = Ball::new(Vec2::new(400.0, 5.0), BALL_RADIUS);
        ball.radius = 25.0;
        ball.vel = Vec2::new(0.0, -10.0);

        assert!(ball.collide_ceiling());
        assert_eq!(ball.pos.y, 25.0);
        assert!((ball.vel.y - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_no_bounce_inside_bounds() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), BALL_RADIUS);
        ball.vel = Vec2::new(3.0, -3.0);
        assert!(!ball.collide_side_walls(800.0));
        assert!(!ball.collide_ceiling());
        assert_eq!(ball.vel, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_floor_requires_whole_ball_below() {
        let mut ball = Ball::new(Vec2::new(400.0, 610.0), BALL_RADIUS);
        ball.radius = 15.0;
        assert!(!ball.is_below_floor(600.0));
        ball.pos.y = 616.0;
        assert!(ball.is_below_floor(600.0));
    }

    #[test]
    fn test_contains_point() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), BALL_RADIUS);
        ball.radius = 10.0;
        assert!(ball.contains_point(Vec2::new(106.0, 108.0)));
        assert!(!ball.contains_point(Vec2::new(108.0, 108.0)));
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), BALL_RADIUS);
        ball.launch(Vec2::new(4.0, -9.0));
        assert!(ball.is_flying());

        ball.reset_to(Vec2::new(400.0, 300.0));
        assert_eq!(ball.state, BallState::Idle);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    }
}
