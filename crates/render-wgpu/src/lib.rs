//! wgpu render backend for the desk scene.
//!
//! Draws every scene object with a single Phong pipeline and uploads the
//! texture library once at startup.
//!
//! # Invariants
//! - The renderer never mutates the scene or the camera.
//! - Object uniforms are rewritten every frame, so an orbiting light and the
//!   lamp that marks it never lag by a frame.
//! - `WgpuRenderer::release` destroys the GPU textures instead of waiting for
//!   drop.

mod gpu;
mod shaders;
mod texture;

pub use gpu::WgpuRenderer;
pub use shaders::SCENE_SHADER;
pub use texture::{GpuTexture, texture_bind_group_layout};
