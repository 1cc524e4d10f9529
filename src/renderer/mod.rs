//! Rendering module
//!
//! The scene is described as a list of canvas-style draw commands built from a
//! read-only view of the game state, then tessellated into triangles for WebGPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::DrawCommand;
pub use shapes::{Tessellation, tessellate};
pub use vertex::Vertex;
