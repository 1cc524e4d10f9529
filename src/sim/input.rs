//! Pointer gesture handling
//!
//! The ball is flung slingshot style: the launch vector points from where the
//! pointer was released back toward where the drag started.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use crate::consts::{DRAG_DIVISOR, MAX_INITIAL_VELOCITY};

/// Device the pointer event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Canvas-local pointer sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    pub pos: Vec2,
}

impl PointerInput {
    pub fn mouse(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Mouse,
            pos: Vec2::new(x, y),
        }
    }

    pub fn touch(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Touch,
            pos: Vec2::new(x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        start: Vec2,
        /// Latest pointer position, for aim feedback
        current: Vec2,
    },
}

/// Launch velocity for a drag from `start` to `end`, clamped per axis
pub fn release_velocity(start: Vec2, end: Vec2) -> Vec2 {
    let v = (start - end) / DRAG_DIVISOR;
    v.clamp(
        Vec2::splat(-MAX_INITIAL_VELOCITY),
        Vec2::splat(MAX_INITIAL_VELOCITY),
    )
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DragController {
    pub state: DragState,
}

impl DragController {
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start and current points of an active drag
    pub fn aim(&self) -> Option<(Vec2, Vec2)> {
        match self.state {
            DragState::Dragging { start, current } => Some((start, current)),
            DragState::Idle => None,
        }
    }

    /// Begin dragging if the pointer landed on the ball. Returns true if a drag started.
    pub fn pointer_down(&mut self, input: PointerInput, ball: &Ball) -> bool {
        if !ball.contains_point(input.pos) {
            return false;
        }
        self.state = DragState::Dragging {
            start: input.pos,
            current: input.pos,
        };
        log::debug!("Drag started ({:?}) at {:?}", input.kind, input.pos);
        true
    }

    pub fn pointer_move(&mut self, input: PointerInput) {
        if let DragState::Dragging { current, .. } = &mut self.state {
            *current = input.pos;
        }
    }

    /// Finish the drag and throw the ball. Returns the launch velocity, or
    /// `None` if no drag was in progress.
    pub fn pointer_up(&mut self, input: PointerInput, ball: &mut Ball) -> Option<Vec2> {
        let DragState::Dragging { start, .. } = self.state else {
            return None;
        };

        let vel = release_velocity(start, input.pos);
        ball.launch(vel);
        self.state = DragState::Idle;
        log::debug!("Ball released ({:?}) with velocity {:?}", input.kind, vel);
        Some(vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_RADIUS;
    use crate::sim::BallState;

    fn idle_ball() -> Ball {
        Ball::new(Vec2::new(400.0, 300.0), BALL_RADIUS)
    }

    #[test]
    fn test_press_outside_ball_is_ignored() {
        let mut drag = DragController::default();
        let ball = idle_ball();

        assert!(!drag.pointer_down(PointerInput::mouse(10.0, 10.0), &ball));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_slingshot_release() {
        let mut drag = DragController::default();
        let mut ball = idle_ball();

        assert!(drag.pointer_down(PointerInput::mouse(400.0, 300.0), &ball));
        assert!(drag.is_dragging());

        let vel = drag.pointer_up(PointerInput::mouse(300.0, 350.0), &mut ball);

        assert_eq!(vel, Some(Vec2::new(10.0, -5.0)));
        assert_eq!(ball.vel, Vec2::new(10.0, -5.0));
        assert_eq!(ball.state, BallState::Flying);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_release_is_clamped_per_axis() {
        let vel = release_velocity(Vec2::new(0.0, 0.0), Vec2::new(-1000.0, 90.0));
        assert_eq!(vel, Vec2::new(MAX_INITIAL_VELOCITY, -9.0));

        let vel = release_velocity(Vec2::new(0.0, 0.0), Vec2::new(500.0, -500.0));
        assert_eq!(vel, Vec2::new(-MAX_INITIAL_VELOCITY, MAX_INITIAL_VELOCITY));
    }

    #[test]
    fn test_release_without_drag_does_nothing() {
        let mut drag = DragController::default();
        let mut ball = idle_ball();

        assert_eq!(drag.pointer_up(PointerInput::touch(0.0, 0.0), &mut ball), None);
        assert_eq!(ball.state, BallState::Idle);
    }

    #[test]
    fn test_zero_length_drag_still_throws() {
        let mut drag = DragController::default();
        let mut ball = idle_ball();

        drag.pointer_down(PointerInput::touch(405.0, 305.0), &ball);
        let vel = drag.pointer_up(PointerInput::touch(405.0, 305.0), &mut ball);

        assert_eq!(vel, Some(Vec2::ZERO));
        assert!(ball.is_flying());
    }

    #[test]
    fn test_move_tracks_aim_only() {
        let mut drag = DragController::default();
        let ball = idle_ball();

        drag.pointer_move(PointerInput::mouse(1.0, 1.0));
        assert_eq!(drag.aim(), None);

        drag.pointer_down(PointerInput::mouse(400.0, 300.0), &ball);
        drag.pointer_move(PointerInput::mouse(380.0, 340.0));
        assert_eq!(
            drag.aim(),
            Some((Vec2::new(400.0, 300.0), Vec2::new(380.0, 340.0)))
        );
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn release_never_exceeds_max_speed(
                sx in -5000.0f32..5000.0,
                sy in -5000.0f32..5000.0,
                ex in -5000.0f32..5000.0,
                ey in -5000.0f32..5000.0,
            ) {
                let vel = release_velocity(Vec2::new(sx, sy), Vec2::new(ex, ey));

                prop_assert!(vel.x.abs() <= MAX_INITIAL_VELOCITY);
                prop_assert!(vel.y.abs() <= MAX_INITIAL_VELOCITY);
                // Inside the clamp the throw is opposite the pull
                if (sx - ex).abs() < MAX_INITIAL_VELOCITY * DRAG_DIVISOR {
                    prop_assert!((vel.x - (sx - ex) / DRAG_DIVISOR).abs() < 1e-3);
                }
            }
        }
    }
}
