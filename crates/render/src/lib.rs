//! Rendering Adapter: renderer-agnostic frame pipeline.
//!
//! Turns the camera, projection and scene into per-frame matrices and shader
//! inputs, and defines the `Renderer` trait backends implement.
//!
//! # Invariants
//! - Renderers never mutate the camera or the scene.
//! - Frame state is rebuilt every frame; nothing is cached between frames.

pub mod frame;
pub mod lighting;
mod renderer;

pub use frame::{FrameView, GlobalUniforms, ObjectUniforms};
pub use lighting::{Surface, phong};
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "deskscene-render v0.1.0"
}
