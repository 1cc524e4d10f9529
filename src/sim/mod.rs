//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - One step per display frame, velocities in pixels/frame
//! - No rendering or platform dependencies
//! - Pointer handlers and the frame loop share `GameState` on one thread

pub mod ball;
pub mod geometry;
pub mod input;
pub mod state;
pub mod targets;
pub mod tick;

pub use ball::{Ball, BallState, perspective_radius};
pub use geometry::{Circle, Rect, is_colliding};
pub use input::{DragController, DragState, PointerInput, PointerKind, release_velocity};
pub use state::{GameEvent, GameState, Scoreboard};
pub use targets::{Backboard, Court, Rim, RimSide, SupportBeam};
pub use tick::tick;
