//! Fly camera for the desk scene viewer.
//!
//! Orientation is tracked as yaw/pitch Euler angles in degrees. Input arrives
//! already reduced to movement directions, pointer deltas and scroll ticks.
//!
//! # Invariants
//! - `front`, `right` and `up` are orthonormal after every update.
//! - Constrained pitch stays within ±89°; zoom stays within [1°, 45°].
//! - The camera never depends on a window or graphics backend.

mod camera;
mod projection;

pub use camera::{
    Camera, CameraMovement, DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW,
    DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, PITCH_LIMIT,
};
pub use projection::{Projection, ProjectionMode};

pub fn crate_info() -> &'static str {
    "deskscene-camera v0.1.0"
}
