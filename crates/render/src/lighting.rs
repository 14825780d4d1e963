//! CPU reference of the Phong model evaluated by the fragment shader.

use deskscene_scene::{Material, PointLight};
use glam::{Vec3, Vec4};

/// One surface sample to shade. Vectors are in world space.
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub position: Vec3,
    pub normal: Vec3,
    /// Texture sample times the material's base color.
    pub albedo: Vec4,
}

/// `(ambient + diffuse + specular) * albedo`, alpha passed through.
/// Unlit materials return the albedo unchanged.
pub fn phong(
    surface: &Surface,
    material: &Material,
    light: &PointLight,
    light_position: Vec3,
    eye: Vec3,
) -> Vec4 {
    if !material.lit {
        return surface.albedo;
    }

    let n = surface.normal.normalize();
    let light_dir = (light_position - surface.position).normalize();
    let view_dir = (eye - surface.position).normalize();
    let reflect_dir = reflect(-light_dir, n);

    let ambient = light.ambient_strength * light.color;
    let diffuse = n.dot(light_dir).max(0.0) * light.color;
    let specular = material.specular_strength
        * view_dir.dot(reflect_dir).max(0.0).powf(material.shininess)
        * light.color;

    let rgb = (ambient + diffuse + specular) * surface.albedo.truncate();
    rgb.extend(surface.albedo.w)
}

/// Reflect incident direction `i` about normal `n` (same as WGSL `reflect`).
fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - 2.0 * n.dot(i) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface {
            position: Vec3::ZERO,
            normal: Vec3::Y,
            albedo: Vec4::new(0.5, 0.5, 0.5, 1.0),
        }
    }

    fn light() -> PointLight {
        PointLight {
            color: Vec3::ONE,
            ambient_strength: 0.1,
        }
    }

    #[test]
    fn light_behind_surface_leaves_only_ambient() {
        let material = Material::solid([1.0; 4]);
        let c = phong(
            &surface(),
            &material,
            &light(),
            Vec3::new(0.0, -5.0, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
        );
        assert!(c.abs_diff_eq(Vec4::new(0.05, 0.05, 0.05, 1.0), 1e-6), "got {c}");
    }

    #[test]
    fn head_on_light_and_eye_reach_full_intensity() {
        let material = Material::solid([1.0; 4]).with_specular(0.5, 32.0);
        let above = Vec3::new(0.0, 3.0, 0.0);
        let c = phong(&surface(), &material, &light(), above, above);
        // (0.1 + 1.0 + 0.5) * 0.5
        assert!(c.abs_diff_eq(Vec4::new(0.8, 0.8, 0.8, 1.0), 1e-5), "got {c}");
    }

    #[test]
    fn grazing_light_dims_diffuse() {
        let material = Material::solid([1.0; 4]).with_specular(0.0, 32.0);
        let eye = Vec3::new(0.0, 5.0, 0.0);
        let overhead = phong(&surface(), &material, &light(), Vec3::new(0.0, 2.0, 0.0), eye);
        let grazing = phong(&surface(), &material, &light(), Vec3::new(2.0, 0.2, 0.0), eye);
        assert!(grazing.x < overhead.x);
        assert!(grazing.x > 0.05);
    }

    #[test]
    fn specular_falls_off_away_from_reflection() {
        let material = Material::solid([1.0; 4]).with_specular(1.0, 64.0);
        let light_pos = Vec3::new(-1.0, 1.0, 0.0);
        let mirror_eye = Vec3::new(1.0, 1.0, 0.0);
        let off_eye = Vec3::new(-1.0, 1.0, 1.0);
        let hot = phong(&surface(), &material, &light(), light_pos, mirror_eye);
        let cold = phong(&surface(), &material, &light(), light_pos, off_eye);
        assert!(hot.x > cold.x + 0.4);
    }

    #[test]
    fn unlit_passes_albedo_through() {
        let material = Material::emissive([1.0; 4]);
        let c = phong(&surface(), &material, &light(), Vec3::ZERO, Vec3::ONE);
        assert_eq!(c, surface().albedo);
    }

    #[test]
    fn light_color_tints_result() {
        let material = Material::solid([1.0; 4]).with_specular(0.0, 1.0);
        let red = PointLight {
            color: Vec3::new(1.0, 0.0, 0.0),
            ambient_strength: 0.1,
        };
        let c = phong(&surface(), &material, &red, Vec3::new(0.0, 2.0, 0.0), Vec3::Y);
        assert!(c.x > 0.0);
        assert_eq!(c.y, 0.0);
        assert_eq!(c.z, 0.0);
    }
}
