//! Scene description as canvas-style draw commands

use glam::Vec2;

use super::vertex::colors;
use crate::settings::Settings;
use crate::sim::{Ball, Court, GameState, Rect};

/// Seam line width in pixels
const SEAM_WIDTH: f32 = 2.0;
/// Inner square outline width in pixels
const SQUARE_LINE_WIDTH: f32 = 2.0;

/// One drawing primitive, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear { color: [f32; 4] },
    FillRect { rect: Rect, color: [f32; 4] },
    StrokeRect { rect: Rect, color: [f32; 4], line_width: f32 },
    FillCircle { center: Vec2, radius: f32, color: [f32; 4] },
    Line { from: Vec2, to: Vec2, color: [f32; 4], width: f32 },
    /// Push the current transform
    Save,
    /// Pop back to the last saved transform
    Restore,
    Translate(Vec2),
    Rotate(f32),
}

/// Commands for the static fixtures: backboard, rim, then beam
pub fn court(court: &Court, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::FillRect {
        rect: court.backboard.rect,
        color: colors::BACKBOARD,
    });
    out.push(DrawCommand::StrokeRect {
        rect: court.backboard.inner_square,
        color: colors::BACKBOARD_SQUARE,
        line_width: SQUARE_LINE_WIDTH,
    });
    out.push(DrawCommand::FillRect {
        rect: court.rim.rect(),
        color: colors::RIM,
    });
    out.push(DrawCommand::FillRect {
        rect: court.support_beam.rect,
        color: colors::SUPPORT_BEAM,
    });
}

/// Commands for the ball, spun around its own center
pub fn ball(ball: &Ball, out: &mut Vec<DrawCommand>) {
    let r = ball.radius;
    out.push(DrawCommand::Save);
    out.push(DrawCommand::Translate(ball.pos));
    out.push(DrawCommand::Rotate(ball.rotation));
    out.push(DrawCommand::FillCircle {
        center: Vec2::ZERO,
        radius: r,
        color: colors::BALL,
    });
    out.push(DrawCommand::Line {
        from: Vec2::new(-r, 0.0),
        to: Vec2::new(r, 0.0),
        color: colors::BALL_SEAM,
        width: SEAM_WIDTH,
    });
    out.push(DrawCommand::Line {
        from: Vec2::new(0.0, -r),
        to: Vec2::new(0.0, r),
        color: colors::BALL_SEAM,
        width: SEAM_WIDTH,
    });
    out.push(DrawCommand::Restore);
}

/// Full frame: clear, fixtures, aim guide, ball
pub fn frame(state: &GameState, settings: &Settings) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(16);
    out.push(DrawCommand::Clear {
        color: colors::BACKGROUND,
    });
    court(&state.court, &mut out);

    if settings.aim_guide {
        if let Some((start, current)) = state.drag.aim() {
            // Show where the ball will head, mirrored through the grab point
            out.push(DrawCommand::Line {
                from: state.ball.pos,
                to: state.ball.pos + (start - current),
                color: colors::AIM_GUIDE,
                width: SEAM_WIDTH,
            });
        }
    }

    ball(&state.ball, &mut out);
    out
}
