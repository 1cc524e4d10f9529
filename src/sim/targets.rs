//! Static court fixtures: backboard, rim and support beam
//!
//! Everything here is laid out from the canvas size and never moves until the
//! canvas is resized. Only the rim takes part in collisions.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geometry::{Rect, is_colliding};
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backboard {
    pub rect: Rect,
    /// Decorative target square painted below the board
    pub inner_square: Rect,
}

impl Backboard {
    pub fn new(center_x: f32, y: f32, width: f32, height: f32) -> Self {
        let side = width * 0.4;
        Self {
            rect: Rect::centered_at(center_x, y, width, height),
            inner_square: Rect::new(center_x - width * 0.2, y + height + BACKBOARD_GAP, side, side),
        }
    }
}

/// Which end of the rim a ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RimSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rim {
    /// Horizontal center
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub left_zone: Rect,
    pub right_zone: Rect,
}

impl Rim {
    pub fn new(center_x: f32, y: f32, width: f32, height: f32) -> Self {
        let left = center_x - width / 2.0;
        Self {
            x: center_x,
            y,
            width,
            height,
            left_zone: Rect::new(left, y, RIM_ZONE_WIDTH, height),
            right_zone: Rect::new(left + width - RIM_ZONE_WIDTH, y, RIM_ZONE_WIDTH, height),
        }
    }

    /// Full rim rectangle
    pub fn rect(&self) -> Rect {
        Rect::centered_at(self.x, self.y, self.width, self.height)
    }

    /// Bounce a descending ball off either end of the rim.
    ///
    /// Both ends are tested every call. The gap between them is open so the
    /// ball can drop through. Returns the sides that were hit.
    pub fn check_collision(&self, ball: &mut Ball) -> Vec<RimSide> {
        let mut hits = Vec::new();

        if ball.vel.y > 0.0 && is_colliding(ball.circle(), &self.left_zone) {
            Self::bounce(ball);
            ball.pos.x = self.left_zone.x - ball.radius;
            hits.push(RimSide::Left);
        }

        if ball.vel.y > 0.0 && is_colliding(ball.circle(), &self.right_zone) {
            Self::bounce(ball);
            ball.pos.x = self.right_zone.right() + ball.radius;
            hits.push(RimSide::Right);
        }

        hits
    }

    fn bounce(ball: &mut Ball) {
        ball.vel.x *= RIM_RESTITUTION_X;
        ball.vel.y *= RIM_RESTITUTION_Y;
    }

    /// A descending ball whose center is between the rim ends and whose top
    /// is inside the rim band has gone through the hoop
    pub fn is_scoring(&self, ball: &Ball) -> bool {
        let half = self.width / 2.0;
        let top = ball.top();
        ball.vel.y > 0.0
            && ball.pos.x > self.x - half
            && ball.pos.x < self.x + half
            && top > self.y
            && top < self.y + self.height
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportBeam {
    pub rect: Rect,
}

impl SupportBeam {
    pub fn new(center_x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::centered_at(center_x, y, width, height),
        }
    }
}

/// All fixtures for one canvas size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    pub backboard: Backboard,
    pub rim: Rim,
    pub support_beam: SupportBeam,
}

impl Court {
    /// Lay out the court for a canvas of the given width. Vertical positions
    /// are fixed pixel offsets from the top, so height plays no part.
    pub fn layout(canvas_width: f32) -> Self {
        let center_x = canvas_width / 2.0;
        let backboard = Backboard::new(
            center_x,
            BACKBOARD_Y,
            canvas_width * BACKBOARD_WIDTH_RATIO,
            BACKBOARD_HEIGHT,
        );
        let rim = Rim::new(
            center_x,
            backboard.rect.bottom() + BACKBOARD_GAP,
            backboard.rect.width * RIM_WIDTH_RATIO,
            RIM_HEIGHT,
        );
        let support_beam = SupportBeam::new(
            rim.x,
            rim.y + rim.height,
            SUPPORT_BEAM_WIDTH,
            SUPPORT_BEAM_HEIGHT,
        );

        Self {
            backboard,
            rim,
            support_beam,
        }
    }
}
