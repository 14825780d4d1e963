use deskscene_assets::TextureLibrary;
use deskscene_camera::{Camera, Projection};
use deskscene_common::ViewerConfig;
use deskscene_input::{Action, FrameInput, Key, KeyBindings, PointerTracker};
use deskscene_render::FrameView;
use deskscene_scene::{OrbitEvent, OrbitState, Scene};
use egui::Context as EguiContext;
use std::time::Instant;

/// Longest frame step fed to the camera and the light.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Key reference shown at the bottom of the overlay.
pub const HELP_LINES: &[&str] = &[
    "WASD: Move | Q/E: Up/Down | Mouse: Look | Wheel: Zoom",
    "P: Projection | J/K: Start/Stop orbit",
    "F1: Toggle overlay | Esc: Quit",
];

/// Everything the viewer mutates between frames.
pub struct AppState {
    pub camera: Camera,
    pub projection: Projection,
    pub scene: Scene,
    pub bindings: KeyBindings,
    pub pointer: PointerTracker,
    pub input: FrameInput,
    pub textures: TextureLibrary,
    pub show_overlay: bool,
    pub last_frame: Instant,
}

impl AppState {
    pub fn new(config: &ViewerConfig, textures: TextureLibrary) -> Self {
        let window = &config.window;
        let aspect = window.width as f32 / window.height.max(1) as f32;
        Self {
            camera: Camera::from_settings(&config.camera),
            projection: Projection::from_settings(&config.projection, aspect),
            scene: Scene::desk(&config.light),
            bindings: KeyBindings::default(),
            pointer: PointerTracker::new(),
            input: FrameInput::new(),
            textures,
            show_overlay: false,
            last_frame: Instant::now(),
        }
    }

    /// Time since the previous frame, capped at [`MAX_FRAME_DT`].
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame = now;
        dt
    }

    pub fn update(&mut self, dt: f32) {
        self.input.apply(&mut self.camera, dt);
        self.scene.update(dt);
    }

    pub fn frame_view(&self) -> FrameView {
        FrameView::new(&self.camera, &self.projection)
    }

    /// Returns true when the key asks the viewer to quit.
    pub fn handle_key(&mut self, key: Key, pressed: bool) -> bool {
        let Some(action) = self.bindings.action(key) else {
            return false;
        };

        match action {
            Action::Move(direction) if pressed => self.input.press(direction),
            Action::Move(direction) => self.input.release(direction),
            _ if !pressed => {}
            Action::ToggleProjection => self.projection.toggle_mode(),
            Action::StartOrbit => {
                self.scene.orbit_mut().handle(OrbitEvent::Start);
            }
            Action::StopOrbit => {
                self.scene.orbit_mut().handle(OrbitEvent::Stop);
            }
            Action::ToggleOverlay => self.toggle_overlay(),
            Action::Quit => return true,
        }
        false
    }

    pub fn toggle_overlay(&mut self) {
        self.show_overlay = !self.show_overlay;
        // The cursor jumps when grab changes; don't turn that into a look.
        self.pointer.reset();
        tracing::debug!("overlay {}", if self.show_overlay { "shown" } else { "hidden" });
    }

    /// Pointer moved to window coordinates `(x, y)`.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let delta = self.pointer.track(x, y);
        if !self.show_overlay {
            self.input.add_look(delta);
        }
    }

    pub fn scrolled(&mut self, ticks: f32) {
        if !self.show_overlay {
            self.input.add_scroll(ticks);
        }
    }

    /// Release events never arrive for keys held while focus is elsewhere.
    pub fn focus_lost(&mut self) {
        self.input.release_all();
        self.pointer.reset();
    }

    pub fn draw_ui(&mut self, ctx: &EguiContext) {
        if !self.show_overlay {
            return;
        }

        egui::SidePanel::left("overlay")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Desk Scene");
                ui.separator();

                let p = self.camera.position;
                ui.label(format!("Camera: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
                ui.label(format!(
                    "Yaw: {:.1}  Pitch: {:.1}",
                    self.camera.yaw(),
                    self.camera.pitch()
                ));
                ui.label(format!("Zoom: {:.1}", self.camera.zoom()));
                ui.horizontal(|ui| {
                    ui.label(format!("Projection: {}", self.projection.mode.label()));
                    if ui.button("Toggle (P)").clicked() {
                        self.projection.toggle_mode();
                    }
                });
                ui.separator();

                let orbit = self.scene.orbit();
                let l = orbit.position();
                ui.label(format!("Light: ({:.2}, {:.2}, {:.2})", l.x, l.y, l.z));
                match orbit.state() {
                    OrbitState::Orbiting => {
                        ui.label("Orbiting");
                        if ui.button("Stop (K)").clicked() {
                            self.scene.orbit_mut().handle(OrbitEvent::Stop);
                        }
                    }
                    OrbitState::Stationary => {
                        ui.label("Stationary");
                        if ui.button("Start (J)").clicked() {
                            self.scene.orbit_mut().handle(OrbitEvent::Start);
                        }
                    }
                }
                ui.separator();

                ui.label(format!("Objects: {}", self.scene.objects().len()));
                let missing = self.textures.missing();
                if !missing.is_empty() {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        format!("{} texture(s) using fallback", missing.len()),
                    );
                    for slot in missing {
                        ui.small(slot.file_name());
                    }
                }

                ui.separator();
                for line in HELP_LINES {
                    ui.small(*line);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskscene_camera::{CameraMovement, ProjectionMode};

    fn state() -> AppState {
        AppState::new(&ViewerConfig::default(), TextureLibrary::default())
    }

    #[test]
    fn movement_keys_hold_until_released() {
        let mut s = state();
        assert!(!s.handle_key(Key::W, true));
        assert!(s.input.is_held(CameraMovement::Forward));

        let z = s.camera.position.z;
        s.update(0.1);
        assert!(s.camera.position.z < z);

        s.handle_key(Key::W, false);
        assert!(!s.input.is_held(CameraMovement::Forward));
    }

    #[test]
    fn discrete_actions_fire_on_press_only() {
        let mut s = state();
        s.handle_key(Key::P, true);
        assert_eq!(s.projection.mode, ProjectionMode::Orthographic);
        s.handle_key(Key::P, false);
        assert_eq!(s.projection.mode, ProjectionMode::Orthographic);

        assert_eq!(s.scene.orbit().state(), OrbitState::Stationary);
        s.handle_key(Key::J, true);
        assert_eq!(s.scene.orbit().state(), OrbitState::Orbiting);
        s.handle_key(Key::J, false);
        assert_eq!(s.scene.orbit().state(), OrbitState::Orbiting);
        s.handle_key(Key::K, true);
        assert_eq!(s.scene.orbit().state(), OrbitState::Stationary);
    }

    #[test]
    fn escape_quits() {
        let mut s = state();
        assert!(s.handle_key(Key::Escape, true));
        assert!(!s.handle_key(Key::Escape, false));
    }

    #[test]
    fn overlay_blocks_look_and_scroll() {
        let mut s = state();
        s.handle_key(Key::F1, true);
        assert!(s.show_overlay);

        s.pointer_moved(10.0, 10.0);
        s.pointer_moved(50.0, 50.0);
        s.scrolled(3.0);
        assert_eq!(s.input.pending_look(), glam::Vec2::ZERO);
        assert_eq!(s.input.pending_scroll(), 0.0);
    }

    #[test]
    fn first_pointer_sample_after_toggle_is_ignored() {
        let mut s = state();
        s.pointer_moved(100.0, 100.0);
        s.toggle_overlay();
        s.toggle_overlay();
        s.pointer_moved(400.0, 300.0);
        assert_eq!(s.input.pending_look(), glam::Vec2::ZERO);

        s.pointer_moved(410.0, 290.0);
        assert_eq!(s.input.pending_look(), glam::Vec2::new(10.0, 10.0));
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut s = state();
        s.handle_key(Key::A, true);
        s.handle_key(Key::E, true);
        s.focus_lost();
        assert!(!s.input.is_held(CameraMovement::Left));
        assert!(!s.input.is_held(CameraMovement::Up));
        assert!(!s.pointer.is_seeded());
    }

    #[test]
    fn light_orbits_with_frame_updates() {
        let mut s = state();
        let before = s.scene.orbit().position();
        s.update(0.1);
        assert_eq!(s.scene.orbit().position(), before);

        s.handle_key(Key::J, true);
        s.update(0.1);
        assert_ne!(s.scene.orbit().position(), before);

        s.handle_key(Key::K, true);
        let parked = s.scene.orbit().position();
        s.update(0.1);
        assert_eq!(s.scene.orbit().position(), parked);
    }

    #[test]
    fn help_matches_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.action(Key::Q),
            Some(Action::Move(CameraMovement::Up))
        );
        assert_eq!(
            bindings.action(Key::E),
            Some(Action::Move(CameraMovement::Down))
        );
        assert_eq!(bindings.action(Key::P), Some(Action::ToggleProjection));
        assert_eq!(bindings.action(Key::J), Some(Action::StartOrbit));
        assert_eq!(bindings.action(Key::K), Some(Action::StopOrbit));

        let help = HELP_LINES.join("\n");
        for entry in [
            "Q/E: Up/Down",
            "P: Projection",
            "J/K: Start/Stop orbit",
            "F1",
            "Esc",
        ] {
            assert!(help.contains(entry), "help is missing {entry}");
        }
    }

    #[test]
    fn frame_dt_is_capped() {
        let mut s = state();
        s.last_frame = Instant::now() - std::time::Duration::from_secs(2);
        assert_eq!(s.tick(), MAX_FRAME_DT);
        assert!(s.tick() < MAX_FRAME_DT);
    }
}
