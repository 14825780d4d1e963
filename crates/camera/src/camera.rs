use deskscene_common::CameraSettings;
use glam::{Mat4, Vec3};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch bound (degrees) applied when mouse-look constrains pitch.
pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = DEFAULT_ZOOM;

/// Direction of a keyboard-driven camera translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl CameraMovement {
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];
}

/// Euler-angle fly camera.
///
/// Yaw and pitch are kept in degrees. The `front`/`right`/`up` triad is derived
/// from them and is recomputed on every orientation change, so it is always
/// orthonormal. `position` has no invariant and may be moved freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    world_up: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Camera at `position` looking down -Z with +Y as world up.
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            world_up,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::with_orientation(
            settings.position,
            settings.world_up,
            settings.yaw,
            settings.pitch,
        )
        .with_movement_speed(settings.movement_speed)
        .with_mouse_sensitivity(settings.mouse_sensitivity)
    }

    pub fn with_movement_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Look-at transform from world space into eye space: the eye sits at the
    /// origin looking down -Z with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Translate by `movement_speed * delta_time` along the axis for `direction`.
    /// Up and Down follow the world up axis, not the camera's tilted up vector.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.world_up * velocity,
            CameraMovement::Down => self.position -= self.world_up * velocity,
        }
    }

    /// Apply a pointer delta in pixels. `y_offset` must already be inverted by
    /// the caller (previous y minus current y) so that moving up looks up.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Narrow (positive ticks) or widen (negative ticks) the field of view.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn sweep() -> impl Iterator<Item = Camera> {
        let yaws = (0..=400).map(|i| -1000.0 + i as f32 * 5.0);
        yaws.flat_map(|yaw| {
            (0..=36).map(move |j| {
                let pitch = -88.9 + j as f32 * (177.8 / 36.0);
                Camera::with_orientation(Vec3::ZERO, Vec3::Y, yaw, pitch)
            })
        })
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let cam = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(cam.right().abs_diff_eq(Vec3::X, EPS));
        assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(cam.zoom(), DEFAULT_ZOOM);
        assert_eq!(cam.movement_speed(), DEFAULT_SPEED);
        assert_eq!(cam.mouse_sensitivity(), DEFAULT_SENSITIVITY);
    }

    #[test]
    fn triad_is_unit_length() {
        for cam in sweep() {
            for v in [cam.front(), cam.right(), cam.up()] {
                assert!(
                    (v.length() - 1.0).abs() < EPS,
                    "yaw={} pitch={} |v|={}",
                    cam.yaw(),
                    cam.pitch(),
                    v.length()
                );
            }
        }
    }

    #[test]
    fn triad_is_orthogonal() {
        for cam in sweep() {
            assert!(cam.front().dot(cam.right()).abs() < EPS);
            assert!(cam.front().dot(cam.up()).abs() < EPS);
            assert!(cam.right().dot(cam.up()).abs() < EPS);
        }
    }

    #[test]
    fn triad_stays_orthonormal_through_mouse_look() {
        let mut cam = Camera::default();
        for step in 0..500 {
            let dx = ((step * 37) % 101) as f32 - 50.0;
            let dy = ((step * 53) % 89) as f32 - 44.0;
            cam.process_mouse_movement(dx, dy, true);
            assert!((cam.front().length() - 1.0).abs() < EPS);
            assert!(cam.front().dot(cam.right()).abs() < EPS);
            assert!(cam.right().dot(cam.up()).abs() < EPS);
        }
    }

    #[test]
    fn pitch_clamps_at_upper_bound() {
        let mut cam = Camera::default();
        for _ in 0..10 {
            cam.process_mouse_movement(0.0, 10_000.0, true);
            assert!(cam.pitch() <= PITCH_LIMIT);
        }
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        assert!(cam.front().y > 0.99);
    }

    #[test]
    fn pitch_clamps_at_lower_bound() {
        let mut cam = Camera::default();
        for _ in 0..10 {
            cam.process_mouse_movement(0.0, -10_000.0, true);
        }
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn unconstrained_pitch_is_not_clamped() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 1_000.0, false);
        assert_eq!(cam.pitch(), 100.0);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(36_000.0, 0.0, true);
        assert_eq!(cam.yaw(), DEFAULT_YAW + 3_600.0);
        // A whole number of turns lands back on the starting direction.
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut cam = Camera::default();
        for _ in 0..5 {
            cam.process_mouse_scroll(100.0);
        }
        assert_eq!(cam.zoom(), MIN_ZOOM);

        for _ in 0..5 {
            cam.process_mouse_scroll(-100.0);
        }
        assert_eq!(cam.zoom(), MAX_ZOOM);
    }

    #[test]
    fn scroll_narrows_field_of_view() {
        let mut cam = Camera::default();
        cam.process_mouse_scroll(5.0);
        assert_eq!(cam.zoom(), 40.0);
        cam.process_mouse_scroll(-2.0);
        assert_eq!(cam.zoom(), 42.0);
    }

    #[test]
    fn forward_movement_is_deterministic() {
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        cam.process_keyboard(CameraMovement::Forward, 1.0);
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), EPS));
    }

    #[test]
    fn opposite_directions_cancel() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let mut cam = Camera::with_orientation(start, Vec3::Y, 30.0, 20.0);
        for (a, b) in [
            (CameraMovement::Forward, CameraMovement::Backward),
            (CameraMovement::Left, CameraMovement::Right),
            (CameraMovement::Up, CameraMovement::Down),
        ] {
            cam.process_keyboard(a, 0.4);
            cam.process_keyboard(b, 0.4);
        }
        assert!(cam.position.abs_diff_eq(start, EPS));
    }

    #[test]
    fn strafing_follows_right_vector() {
        let mut cam = Camera::new(Vec3::ZERO).with_movement_speed(1.0);
        cam.process_keyboard(CameraMovement::Right, 2.0);
        assert!(cam.position.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
        cam.process_keyboard(CameraMovement::Left, 3.0);
        assert!(cam.position.abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn vertical_motion_ignores_pitch() {
        let mut cam = Camera::new(Vec3::ZERO);
        cam.process_mouse_movement(0.0, 450.0, true);
        assert!((cam.pitch() - 45.0).abs() < EPS);
        assert!(!cam.up().abs_diff_eq(Vec3::Y, 0.1));

        cam.process_keyboard(CameraMovement::Up, 1.0);
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, DEFAULT_SPEED, 0.0), EPS));

        cam.process_keyboard(CameraMovement::Down, 2.0);
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, -DEFAULT_SPEED, 0.0), EPS));
    }

    #[test]
    fn zero_delta_time_does_not_move() {
        let mut cam = Camera::new(Vec3::ONE);
        for dir in CameraMovement::ALL {
            cam.process_keyboard(dir, 0.0);
        }
        assert_eq!(cam.position, Vec3::ONE);
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let mut cam = Camera::new(Vec3::new(-2.0, 1.5, 7.0));
        cam.process_mouse_movement(123.0, -77.0, true);
        let view = cam.view_matrix();
        assert!(view.transform_point3(cam.position).abs_diff_eq(Vec3::ZERO, 1e-4));
        assert!(view.transform_vector3(cam.front()).abs_diff_eq(Vec3::NEG_Z, 1e-4));
        assert!(view.transform_vector3(cam.up()).abs_diff_eq(Vec3::Y, 1e-4));
    }

    #[test]
    fn view_matrix_tracks_movement() {
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let before = cam.view_matrix();
        cam.process_keyboard(CameraMovement::Forward, 0.5);
        let after = cam.view_matrix();
        assert_ne!(before, after);
        assert!(after.transform_point3(cam.position).abs_diff_eq(Vec3::ZERO, EPS));
    }

    #[test]
    fn settings_configure_constants() {
        let settings = CameraSettings {
            movement_speed: 5.0,
            mouse_sensitivity: 0.2,
            ..CameraSettings::default()
        };
        let mut cam = Camera::from_settings(&settings);
        assert_eq!(cam.position, settings.position);
        assert_eq!(cam.world_up(), Vec3::Y);

        cam.process_mouse_movement(10.0, 0.0, true);
        assert!((cam.yaw() - (settings.yaw + 2.0)).abs() < EPS);

        let start = cam.position;
        cam.process_keyboard(CameraMovement::Up, 1.0);
        assert!((cam.position - start).abs_diff_eq(Vec3::new(0.0, 5.0, 0.0), EPS));
    }
}
