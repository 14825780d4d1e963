use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or validating a viewer configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level viewer configuration. Every field has a default, so a config
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub projection: ProjectionSettings,
    pub light: LightSettings,
    /// Directory holding the scene's texture images.
    pub asset_dir: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            camera: CameraSettings::default(),
            projection: ProjectionSettings::default(),
            light: LightSettings::default(),
            asset_dir: PathBuf::from("assets/textures"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Desk Scene".into(),
            width: 800,
            height: 600,
        }
    }
}

/// Initial camera placement and its movement constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: Vec3,
    pub world_up: Vec3,
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    /// World units per second.
    pub movement_speed: f32,
    /// Degrees per pixel of pointer motion.
    pub mouse_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.2, 4.0),
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    pub near: f32,
    pub far: f32,
    /// Start in orthographic mode instead of perspective.
    pub orthographic: bool,
    /// Half-height of the orthographic view volume at full zoom-out.
    pub ortho_extent: f32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
            orthographic: false,
            ortho_extent: 2.0,
        }
    }
}

/// Point light and its orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    pub position: Vec3,
    pub color: Vec3,
    pub ambient_strength: f32,
    pub orbit_center: Vec3,
    pub orbit_axis: Vec3,
    /// Degrees per second.
    pub angular_velocity: f32,
    /// Whether the light starts out orbiting. It waits for a start event by default.
    pub orbiting: bool,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.5, 2.5, 3.0),
            color: Vec3::ONE,
            ambient_strength: 0.15,
            orbit_center: Vec3::ZERO,
            orbit_axis: Vec3::Y,
            angular_velocity: 45.0,
            orbiting: false,
        }
    }
}

impl ViewerConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&data)?;
        tracing::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.projection;
        if p.near.is_nan() || p.near <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "projection.near must be positive, got {}",
                p.near
            )));
        }
        if p.far.is_nan() || p.far <= p.near {
            return Err(ConfigError::Invalid(format!(
                "projection.far ({}) must exceed projection.near ({})",
                p.far, p.near
            )));
        }
        if p.ortho_extent.is_nan() || p.ortho_extent <= 0.0 {
            return Err(ConfigError::Invalid(
                "projection.ortho_extent must be positive".into(),
            ));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".into()));
        }
        if self.camera.movement_speed < 0.0 || self.camera.mouse_sensitivity < 0.0 {
            return Err(ConfigError::Invalid(
                "camera speed and sensitivity must be non-negative".into(),
            ));
        }
        if self.camera.world_up.length_squared() == 0.0 {
            return Err(ConfigError::Invalid("camera.world_up must be non-zero".into()));
        }
        if self.light.orbit_axis.length_squared() == 0.0 {
            return Err(ConfigError::Invalid("light.orbit_axis must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.camera.yaw, -90.0);
        assert_eq!(config.camera.movement_speed, 2.5);
        assert!(!config.light.orbiting);
        assert_eq!(config.light.position, Vec3::new(0.5, 2.5, 3.0));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ViewerConfig::from_json(
            r#"{ "camera": { "position": [0.0, 2.0, 5.0] }, "light": { "orbiting": true } }"#,
        )
        .unwrap();
        assert_eq!(config.camera.position, Vec3::new(0.0, 2.0, 5.0));
        assert_eq!(config.camera.mouse_sensitivity, 0.1);
        assert!(config.light.orbiting);
        assert_eq!(config.light.angular_velocity, 45.0);
        assert_eq!(config.window, WindowSettings::default());
    }

    #[test]
    fn rejects_inverted_clip_planes() {
        let err = ViewerConfig::from_json(r#"{ "projection": { "near": 10.0, "far": 1.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_orbit_axis() {
        let mut config = ViewerConfig::default();
        config.light.orbit_axis = Vec3::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, r#"{{ "window": {{ "width": 1280, "height": 720 }} }}"#).unwrap();
        let config = ViewerConfig::load(tmp.path()).unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.title, "Desk Scene");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ViewerConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
