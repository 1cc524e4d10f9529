//! Game session state
//!
//! Everything the frame loop and the pointer handlers share lives in
//! `GameState`. Both run on the same thread, so there is no locking here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallState};
use super::input::DragController;
use super::targets::{Court, RimSide};
use crate::consts::BALL_RADIUS;

/// Something the host should react to after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball dropped through the hoop
    Scored { score: u32 },
    /// Ball left the bottom of the canvas. `score` is the streak that just ended.
    Missed { score: u32 },
    /// A miss ended a streak longer than the previous best
    BestScore { best: u32 },
    /// Ball bounced off one end of the rim
    RimHit { side: RimSide },
}

/// Current streak and all-time best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub current: u32,
    pub best: u32,
}

impl Scoreboard {
    pub fn with_best(best: u32) -> Self {
        Self { current: 0, best }
    }

    /// Count a basket, returns the new streak
    pub fn record_basket(&mut self) -> u32 {
        self.current += 1;
        self.current
    }

    /// End the streak. Returns the new best if it was beaten.
    pub fn record_miss(&mut self) -> Option<u32> {
        let beaten = self.current > self.best;
        if beaten {
            self.best = self.current;
        }
        self.current = 0;
        beaten.then_some(self.best)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub court: Court,
    pub ball: Ball,
    pub drag: DragController,
    pub scoreboard: Scoreboard,
    /// Frames simulated so far
    pub frame: u64,
}

impl GameState {
    pub fn new(canvas_width: f32, canvas_height: f32, best_score: u32) -> Self {
        let center = Vec2::new(canvas_width / 2.0, canvas_height / 2.0);
        Self {
            canvas_width,
            canvas_height,
            court: Court::layout(canvas_width),
            ball: Ball::new(center, BALL_RADIUS),
            drag: DragController::default(),
            scoreboard: Scoreboard::with_best(best_score),
            frame: 0,
        }
    }

    pub fn canvas_center(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Physics only runs on a thrown ball that is not being held
    pub fn physics_active(&self) -> bool {
        self.ball.state == BallState::Flying && !self.drag.is_dragging()
    }

    /// Put the ball back at the center, waiting for a throw
    pub fn reset_ball(&mut self) {
        let center = self.canvas_center();
        self.ball.reset_to(center);
    }

    /// Adopt a new canvas size and rebuild the court around it
    pub fn resize(&mut self, canvas_width: f32, canvas_height: f32) {
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
        self.court = Court::layout(canvas_width);
        if self.ball.state == BallState::Idle && !self.drag.is_dragging() {
            self.reset_ball();
        }
    }
}
