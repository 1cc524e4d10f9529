//! Shape generation for 2D primitives
//!
//! Turns draw commands into a triangle list in canvas pixels, applying the
//! save/restore transform stack the same way a 2D canvas context does.

use glam::{Affine2, Vec2};
use std::f32::consts::PI;

use super::scene::DrawCommand;
use super::vertex::{Vertex, colors};
use crate::sim::Rect;

/// Triangles for one frame plus the color to clear to
#[derive(Debug, Clone)]
pub struct Tessellation {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
}

/// Two triangles covering the quad `a b c d` (in winding order)
fn quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, c, d, a] {
        out.push(Vertex::new(p.x, p.y, color));
    }
}

fn rect_corners(rect: &Rect) -> [Vec2; 4] {
    [
        Vec2::new(rect.x, rect.y),
        Vec2::new(rect.right(), rect.y),
        Vec2::new(rect.right(), rect.bottom()),
        Vec2::new(rect.x, rect.bottom()),
    ]
}

/// Filled rectangle
pub fn rect(out: &mut Vec<Vertex>, xf: &Affine2, rect: &Rect, color: [f32; 4]) {
    let corners = rect_corners(rect).map(|p| xf.transform_point2(p));
    quad(out, corners, color);
}

/// Thick line segment
pub fn line(out: &mut Vec<Vertex>, xf: &Affine2, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    let corners = [from + perp, to + perp, to - perp, from - perp].map(|p| xf.transform_point2(p));
    quad(out, corners, color);
}

/// Rectangle outline centered on the rectangle's edges
pub fn stroke_rect(out: &mut Vec<Vertex>, xf: &Affine2, r: &Rect, width: f32, color: [f32; 4]) {
    let half = width / 2.0;
    // Top and bottom span the full width including corners
    rect(out, xf, &Rect::new(r.x - half, r.y - half, r.width + width, width), color);
    rect(out, xf, &Rect::new(r.x - half, r.bottom() - half, r.width + width, width), color);
    rect(out, xf, &Rect::new(r.x - half, r.y + half, width, r.height - width), color);
    rect(out, xf, &Rect::new(r.right() - half, r.y + half, width, r.height - width), color);
}

/// Generate vertices for a filled circle
pub fn circle(
    out: &mut Vec<Vertex>,
    xf: &Affine2,
    center: Vec2,
    radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    let c = xf.transform_point2(center);
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let p1 = xf.transform_point2(center + Vec2::new(theta1.cos(), theta1.sin()) * radius);
        let p2 = xf.transform_point2(center + Vec2::new(theta2.cos(), theta2.sin()) * radius);

        // Triangle from center to edge
        out.push(Vertex::new(c.x, c.y, color));
        out.push(Vertex::new(p1.x, p1.y, color));
        out.push(Vertex::new(p2.x, p2.y, color));
    }
}

/// Tessellate a command list. `circle_segments` controls circle smoothness.
pub fn tessellate(commands: &[DrawCommand], circle_segments: u32) -> Tessellation {
    let mut clear_color = colors::BACKGROUND;
    let mut vertices = Vec::new();
    let mut current = Affine2::IDENTITY;
    let mut stack = Vec::new();

    for cmd in commands {
        match *cmd {
            DrawCommand::Clear { color } => {
                clear_color = color;
                vertices.clear();
            }
            DrawCommand::FillRect { rect: r, color } => rect(&mut vertices, &current, &r, color),
            DrawCommand::StrokeRect {
                rect: r,
                color,
                line_width,
            } => stroke_rect(&mut vertices, &current, &r, line_width, color),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => circle(&mut vertices, &current, center, radius, color, circle_segments),
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => line(&mut vertices, &current, from, to, width, color),
            DrawCommand::Save => stack.push(current),
            DrawCommand::Restore => {
                // Unbalanced restore is a no-op, as on a canvas
                if let Some(saved) = stack.pop() {
                    current = saved;
                }
            }
            DrawCommand::Translate(offset) => {
                current = current * Affine2::from_translation(offset);
            }
            DrawCommand::Rotate(angle) => current = current * Affine2::from_angle(angle),
        }
    }

    Tessellation {
        clear_color,
        vertices,
    }
}
