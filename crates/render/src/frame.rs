use bytemuck::{Pod, Zeroable};
use deskscene_camera::{Camera, Projection, ProjectionMode};
use deskscene_scene::{Scene, SceneObject};
use glam::{Mat4, Vec3, Vec4};

/// Camera matrices for one frame. Built fresh every frame from the camera's
/// current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    pub view: Mat4,
    pub projection: Mat4,
    /// Eye position in world space, used for specular highlights.
    pub eye: Vec3,
    /// Field of view in degrees.
    pub zoom: f32,
    pub mode: ProjectionMode,
}

impl FrameView {
    pub fn new(camera: &Camera, projection: &Projection) -> Self {
        Self {
            view: camera.view_matrix(),
            projection: projection.matrix(camera.zoom()),
            eye: camera.position,
            zoom: camera.zoom(),
            mode: projection.mode,
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Whether a world-space point lands inside the view volume.
    pub fn contains(&self, point: Vec3) -> bool {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return false;
        }
        let ndc = clip.truncate() / clip.w;
        ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && (0.0..=1.0).contains(&ndc.z)
    }
}

/// Scene-wide shader inputs. Matches `Globals` in the WGSL shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GlobalUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view_position: [f32; 4],
    pub light_position: [f32; 4],
    /// rgb = light color, a = ambient strength.
    pub light_color: [f32; 4],
}

impl GlobalUniforms {
    pub fn new(frame: &FrameView, scene: &Scene) -> Self {
        let light = scene.light();
        Self {
            view_proj: frame.view_projection().to_cols_array_2d(),
            view_position: frame.eye.extend(1.0).to_array(),
            light_position: scene.orbit().position().extend(1.0).to_array(),
            light_color: light.color.extend(light.ambient_strength).to_array(),
        }
    }
}

/// Per-object shader inputs. Matches `Object` in the WGSL shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model's linear part, padded to 4x4.
    pub normal_matrix: [[f32; 4]; 4],
    pub base_color: [f32; 4],
    /// x = specular strength, y = shininess, z = 1 when lit, w unused.
    pub params: [f32; 4],
}

impl ObjectUniforms {
    pub fn new(object: &SceneObject) -> Self {
        let material = &object.material;
        Self {
            model: object.transform.model_matrix().to_cols_array_2d(),
            normal_matrix: Mat4::from_mat3(object.transform.normal_matrix()).to_cols_array_2d(),
            base_color: material.base_color,
            params: Vec4::new(
                material.specular_strength,
                material.shininess,
                if material.lit { 1.0 } else { 0.0 },
                0.0,
            )
            .to_array(),
        }
    }
}
