use crate::frame::FrameView;
use deskscene_scene::{OrbitState, Scene, SceneObject};
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and a frame view, then produces output. It
/// never mutates the scene or the camera.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the scene as seen through `frame`.
    fn render(&self, scene: &Scene, frame: &FrameView) -> Self::Output;
}

/// Text renderer for the CLI, logs and tests.
///
/// Describes the camera, the light and every object with its world-space and
/// eye-space position and whether its origin is inside the view volume.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn object_line(out: &mut String, object: &SceneObject, frame: &FrameView) {
        let p = object.transform.position;
        let e = frame.view.transform_point3(p);
        let visibility = if frame.contains(p) { "visible" } else { "culled" };
        let _ = writeln!(
            out,
            "  {:<20} {:<6} pos=({:.2}, {:.2}, {:.2}) eye=({:.2}, {:.2}, {:.2}) {visibility}",
            object.name,
            object.mesh.label(),
            p.x,
            p.y,
            p.z,
            e.x,
            e.y,
            e.z,
        );
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, frame: &FrameView) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Frame (zoom={:.1}, projection={}) ===",
            frame.zoom,
            frame.mode.label()
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2})",
            frame.eye.x, frame.eye.y, frame.eye.z
        );

        let orbit = scene.orbit();
        let state = match orbit.state() {
            OrbitState::Orbiting => "orbiting",
            OrbitState::Stationary => "stationary",
        };
        let l = orbit.position();
        let _ = writeln!(
            out,
            "Light: pos=({:.2}, {:.2}, {:.2}) {state}",
            l.x, l.y, l.z
        );

        let _ = writeln!(out, "Objects: {}", scene.objects().len());
        for object in scene.objects() {
            Self::object_line(&mut out, object, frame);
        }
        Self::object_line(&mut out, &scene.lamp(), frame);

        out
    }
}
