//! Hoop Shot - A drag-and-release basketball arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ball physics, rim collisions, scoring)
//! - `renderer`: Draw command generation and WebGPU pipeline
//! - `platform`: Browser/native collaborators (score display, storage, pointer coords)
//! - `persistence`: Best score load/save
//! - `game`: Simulation loop driver tying the above together

pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
///
/// Velocities are in pixels per frame; the simulation advances one step per
/// display refresh.
pub mod consts {
    /// Downward acceleration added to `vy` every frame
    pub const GRAVITY: f32 = 0.5;
    /// Multiplicative drag applied to both velocity components every frame
    pub const AIR_RESISTANCE: f32 = 0.99;
    /// Per-axis cap on the launch velocity
    pub const MAX_INITIAL_VELOCITY: f32 = 20.0;
    /// Pixels of drag per unit of launch velocity
    pub const DRAG_DIVISOR: f32 = 10.0;

    /// Ball radius at the very top of the canvas
    pub const BALL_RADIUS: f32 = 30.0;
    /// Fraction of the radius lost at the bottom of the canvas
    pub const PERSPECTIVE_FACTOR: f32 = 0.5;
    /// Spin (radians) per pixel of horizontal travel
    pub const ROTATION_SCALE: f32 = 0.05;

    /// Velocity multiplier on wall and ceiling bounces
    pub const WALL_RESTITUTION: f32 = -0.8;
    /// Horizontal velocity multiplier on rim bounces
    pub const RIM_RESTITUTION_X: f32 = -0.5;
    /// Vertical velocity multiplier on rim bounces
    pub const RIM_RESTITUTION_Y: f32 = -0.8;

    /// Backboard top edge (pixels from canvas top)
    pub const BACKBOARD_Y: f32 = 50.0;
    pub const BACKBOARD_HEIGHT: f32 = 10.0;
    /// Backboard width as a fraction of canvas width
    pub const BACKBOARD_WIDTH_RATIO: f32 = 0.4;
    /// Gap between the backboard and rim / inner square
    pub const BACKBOARD_GAP: f32 = 10.0;

    /// Rim width as a fraction of backboard width
    pub const RIM_WIDTH_RATIO: f32 = 0.3;
    pub const RIM_HEIGHT: f32 = 10.0;
    /// Width of the bounce zone at each end of the rim
    pub const RIM_ZONE_WIDTH: f32 = 5.0;

    pub const SUPPORT_BEAM_WIDTH: f32 = 10.0;
    pub const SUPPORT_BEAM_HEIGHT: f32 = 100.0;
}
