//! Desk scene content: meshes, materials, object placement and the point light.
//!
//! # Invariants
//! - Geometry is static; only the light moves.
//! - The light orbit is independent of the camera.

pub mod light;
pub mod mesh;
pub mod scene;

pub use light::{LightOrbit, OrbitEvent, OrbitState, PointLight};
pub use mesh::{MeshData, MeshKind, Vertex};
pub use scene::{Material, Scene, SceneObject, TextureSlot};

pub fn crate_info() -> &'static str {
    "deskscene-scene v0.1.0"
}
