use deskscene_camera::{Camera, CameraMovement};
use glam::Vec2;
use std::collections::BTreeSet;

/// Input gathered between two rendered frames.
///
/// Held movement keys persist across frames; look and scroll deltas are
/// consumed by [`apply`](Self::apply).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    held: BTreeSet<CameraMovement>,
    look: Vec2,
    scroll: f32,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, direction: CameraMovement) {
        self.held.insert(direction);
    }

    pub fn release(&mut self, direction: CameraMovement) {
        self.held.remove(&direction);
    }

    /// Drop every held key, e.g. when the window loses focus and release
    /// events will never arrive.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, direction: CameraMovement) -> bool {
        self.held.contains(&direction)
    }

    pub fn add_look(&mut self, delta: Vec2) {
        self.look += delta;
    }

    pub fn add_scroll(&mut self, ticks: f32) {
        self.scroll += ticks;
    }

    pub fn pending_look(&self) -> Vec2 {
        self.look
    }

    pub fn pending_scroll(&self) -> f32 {
        self.scroll
    }

    /// Feed this frame's input to the camera: movement for every held key,
    /// then mouse-look with pitch constrained, then zoom.
    pub fn apply(&mut self, camera: &mut Camera, delta_time: f32) {
        for direction in &self.held {
            camera.process_keyboard(*direction, delta_time);
        }
        if self.look != Vec2::ZERO {
            camera.process_mouse_movement(self.look.x, self.look.y, true);
        }
        if self.scroll != 0.0 {
            camera.process_mouse_scroll(self.scroll);
        }
        self.look = Vec2::ZERO;
        self.scroll = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn held_keys_move_every_frame() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let mut input = FrameInput::new();
        input.press(CameraMovement::Forward);
        input.apply(&mut camera, 0.5);
        input.apply(&mut camera, 0.5);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));

        input.release(CameraMovement::Forward);
        input.apply(&mut camera, 1.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));
    }

    #[test]
    fn look_and_scroll_are_consumed() {
        let mut camera = Camera::default();
        let mut input = FrameInput::new();
        input.add_look(Vec2::new(50.0, 0.0));
        input.add_look(Vec2::new(50.0, 100.0));
        input.add_scroll(3.0);
        input.apply(&mut camera, 0.016);

        assert!((camera.yaw() - (-80.0)).abs() < 1e-4);
        assert!((camera.pitch() - 10.0).abs() < 1e-4);
        assert_eq!(camera.zoom(), 42.0);
        assert_eq!(input.pending_look(), Vec2::ZERO);
        assert_eq!(input.pending_scroll(), 0.0);

        let before = camera.clone();
        input.apply(&mut camera, 0.016);
        assert_eq!(camera, before);
    }

    #[test]
    fn look_is_pitch_constrained() {
        let mut camera = Camera::default();
        let mut input = FrameInput::new();
        input.add_look(Vec2::new(0.0, 5_000.0));
        input.apply(&mut camera, 0.0);
        assert_eq!(camera.pitch(), deskscene_camera::PITCH_LIMIT);
    }

    #[test]
    fn release_all_stops_motion() {
        let mut camera = Camera::default();
        let mut input = FrameInput::new();
        input.press(CameraMovement::Left);
        input.press(CameraMovement::Up);
        assert!(input.is_held(CameraMovement::Up));
        input.release_all();
        input.apply(&mut camera, 1.0);
        assert_eq!(camera.position, Vec3::ZERO);
    }
}
