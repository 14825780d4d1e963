use crate::light::{LightOrbit, PointLight};
use crate::mesh::MeshKind;
use deskscene_common::{LightSettings, Transform};
use glam::{Quat, Vec3};
use std::collections::BTreeSet;

/// The fixed images the scene samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextureSlot {
    DeskWood,
    MonitorScreen,
    Keyboard,
    Photo,
}

impl TextureSlot {
    pub const ALL: [Self; 4] = [
        Self::DeskWood,
        Self::MonitorScreen,
        Self::Keyboard,
        Self::Photo,
    ];

    /// File name inside the asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::DeskWood => "desk.jpg",
            Self::MonitorScreen => "screen.png",
            Self::Keyboard => "keyboard.jpg",
            Self::Photo => "photo.jpg",
        }
    }
}

/// Surface parameters for Phong shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Multiplied with the texture sample (or used alone when untextured).
    pub base_color: [f32; 4],
    pub texture: Option<TextureSlot>,
    pub specular_strength: f32,
    pub shininess: f32,
    /// Unlit surfaces skip lighting and show their albedo.
    pub lit: bool,
}

impl Material {
    pub fn solid(base_color: [f32; 4]) -> Self {
        Self {
            base_color,
            texture: None,
            specular_strength: 0.5,
            shininess: 32.0,
            lit: true,
        }
    }

    pub fn textured(slot: TextureSlot) -> Self {
        Self {
            texture: Some(slot),
            ..Self::solid([1.0, 1.0, 1.0, 1.0])
        }
    }

    pub fn emissive(base_color: [f32; 4]) -> Self {
        Self {
            lit: false,
            ..Self::solid(base_color)
        }
    }

    pub fn with_specular(mut self, strength: f32, shininess: f32) -> Self {
        self.specular_strength = strength;
        self.shininess = shininess;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: &'static str,
    pub mesh: MeshKind,
    pub transform: Transform,
    pub material: Material,
}

const STAND_GRAY: [f32; 4] = [0.25, 0.25, 0.27, 1.0];
const BEZEL_BLACK: [f32; 4] = [0.05, 0.05, 0.06, 1.0];
const FRAME_WOOD: [f32; 4] = [0.45, 0.28, 0.15, 1.0];
const LAMP_SCALE: f32 = 0.15;

/// The desk scene: static objects plus one orbiting point light.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    objects: Vec<SceneObject>,
    light: PointLight,
    orbit: LightOrbit,
}

impl Scene {
    /// Desk with a monitor on a stand, a keyboard and a tilted photo frame.
    /// The desk top sits at y = 0.
    pub fn desk(light: &LightSettings) -> Self {
        let mut objects = vec![
            SceneObject {
                name: "desk",
                mesh: MeshKind::Cuboid,
                transform: Transform::from_position(Vec3::new(0.0, -0.05, 0.0))
                    .with_scale(Vec3::new(4.0, 0.1, 2.0)),
                material: Material::textured(TextureSlot::DeskWood).with_specular(0.2, 16.0),
            },
            SceneObject {
                name: "monitor_stand_base",
                mesh: MeshKind::Cuboid,
                transform: Transform::from_position(Vec3::new(0.0, 0.015, -0.55))
                    .with_scale(Vec3::new(0.5, 0.03, 0.3)),
                material: Material::solid(STAND_GRAY),
            },
            SceneObject {
                name: "monitor_stand_neck",
                mesh: MeshKind::Cuboid,
                transform: Transform::from_position(Vec3::new(0.0, 0.3, -0.62))
                    .with_scale(Vec3::new(0.08, 0.55, 0.05)),
                material: Material::solid(STAND_GRAY),
            },
            SceneObject {
                name: "monitor_body",
                mesh: MeshKind::Cuboid,
                transform: Transform::from_position(Vec3::new(0.0, 0.85, -0.58))
                    .with_scale(Vec3::new(1.6, 0.9, 0.06)),
                material: Material::solid(BEZEL_BLACK).with_specular(0.6, 64.0),
            },
            SceneObject {
                name: "monitor_screen",
                mesh: MeshKind::Plane,
                transform: Transform::from_position(Vec3::new(0.0, 0.85, -0.549))
                    .with_scale(Vec3::new(1.5, 0.82, 1.0)),
                material: Material::textured(TextureSlot::MonitorScreen).with_specular(0.8, 128.0),
            },
            SceneObject {
                name: "keyboard",
                mesh: MeshKind::Cuboid,
                transform: Transform::from_position(Vec3::new(0.0, 0.02, 0.35))
                    .with_scale(Vec3::new(1.0, 0.04, 0.32)),
                material: Material::textured(TextureSlot::Keyboard).with_specular(0.3, 32.0),
            },
        ];
        objects.extend(photo_frame(Vec3::new(1.4, 0.2, -0.3)));

        let scene = Self {
            objects,
            light: PointLight {
                color: light.color,
                ambient_strength: light.ambient_strength,
            },
            orbit: LightOrbit::from_settings(light),
        };
        tracing::debug!("built desk scene with {} objects", scene.objects.len());
        scene
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn orbit(&self) -> &LightOrbit {
        &self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut LightOrbit {
        &mut self.orbit
    }

    /// Small unlit cube marking the light's current position.
    pub fn lamp(&self) -> SceneObject {
        let c = self.light.color;
        SceneObject {
            name: "lamp",
            mesh: MeshKind::Cuboid,
            transform: Transform::from_position(self.orbit.position())
                .with_scale(Vec3::splat(LAMP_SCALE)),
            material: Material::emissive([c.x, c.y, c.z, 1.0]),
        }
    }

    /// Advance animation by `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32) {
        self.orbit.advance(delta_time);
    }

    pub fn textures_used(&self) -> BTreeSet<TextureSlot> {
        self.objects
            .iter()
            .filter_map(|o| o.material.texture)
            .collect()
    }

    pub fn meshes_used(&self) -> BTreeSet<MeshKind> {
        self.objects
            .iter()
            .map(|o| o.mesh)
            .chain(std::iter::once(MeshKind::Cuboid))
            .collect()
    }
}

/// Frame and photo, turned toward the viewer and leaned back slightly.
fn photo_frame(position: Vec3) -> [SceneObject; 2] {
    let rotation = Quat::from_rotation_y(-20.0_f32.to_radians())
        * Quat::from_rotation_x(-10.0_f32.to_radians());
    let frame_depth = 0.03;
    // Photo sits just proud of the frame's front face.
    let photo_offset = rotation * Vec3::new(0.0, 0.0, frame_depth / 2.0 + 0.001);
    [
        SceneObject {
            name: "photo_frame",
            mesh: MeshKind::Cuboid,
            transform: Transform::from_position(position)
                .with_rotation(rotation)
                .with_scale(Vec3::new(0.3, 0.4, frame_depth)),
            material: Material::solid(FRAME_WOOD).with_specular(0.3, 16.0),
        },
        SceneObject {
            name: "photo",
            mesh: MeshKind::Plane,
            transform: Transform::from_position(position + photo_offset)
                .with_rotation(rotation)
                .with_scale(Vec3::new(0.26, 0.36, 1.0)),
            material: Material::textured(TextureSlot::Photo).with_specular(0.5, 64.0),
        },
    ]
}
