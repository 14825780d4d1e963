use crate::camera::MAX_ZOOM;
use deskscene_common::ProjectionSettings;
use glam::Mat4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Perspective => "perspective",
            Self::Orthographic => "orthographic",
        }
    }
}

/// Projection parameters that do not belong to the camera itself. The field of
/// view comes from the camera's zoom at the time the matrix is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub mode: ProjectionMode,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Half-height of the orthographic volume at maximum zoom.
    pub ortho_extent: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_settings(&ProjectionSettings::default(), 4.0 / 3.0)
    }
}

impl Projection {
    pub fn new(aspect: f32, near: f32, far: f32) -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            aspect,
            near,
            far,
            ortho_extent: ProjectionSettings::default().ortho_extent,
        }
    }

    pub fn from_settings(settings: &ProjectionSettings, aspect: f32) -> Self {
        let mode = if settings.orthographic {
            ProjectionMode::Orthographic
        } else {
            ProjectionMode::Perspective
        };
        Self {
            mode,
            aspect,
            near: settings.near,
            far: settings.far,
            ortho_extent: settings.ortho_extent,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        tracing::debug!("projection mode: {}", self.mode.label());
    }

    /// Clip-space matrix for a vertical field of view of `zoom_degrees`.
    /// Depth maps to [0, 1].
    pub fn matrix(&self, zoom_degrees: f32) -> Mat4 {
        match self.mode {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh(zoom_degrees.to_radians(), self.aspect, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let half_height = self.ortho_extent * zoom_degrees / MAX_ZOOM;
                let half_width = half_height * self.aspect;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }
}
