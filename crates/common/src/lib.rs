//! Shared types and configuration for the desk scene viewer.

pub mod config;
pub mod types;

pub use config::{
    CameraSettings, ConfigError, LightSettings, ProjectionSettings, ViewerConfig, WindowSettings,
};
pub use types::Transform;

pub fn crate_info() -> &'static str {
    "deskscene-common v0.1.0"
}
