use deskscene_common::LightSettings;
use glam::{Quat, Vec3};

/// Color and ambient contribution of the scene's point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub ambient_strength: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            ambient_strength: 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitState {
    Orbiting,
    Stationary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitEvent {
    Start,
    Stop,
}

/// Position of the point light and its constant-velocity orbit.
///
/// `Start` always leads to `Orbiting` and `Stop` always to `Stationary`,
/// whatever the current state. Stopping leaves the light where it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightOrbit {
    state: OrbitState,
    position: Vec3,
    center: Vec3,
    axis: Vec3,
    /// Degrees per second.
    angular_velocity: f32,
}

impl LightOrbit {
    /// A zero `axis` falls back to +Y.
    pub fn new(position: Vec3, center: Vec3, axis: Vec3, angular_velocity: f32) -> Self {
        Self {
            state: OrbitState::Orbiting,
            position,
            center,
            axis: axis.try_normalize().unwrap_or(Vec3::Y),
            angular_velocity,
        }
    }

    pub fn from_settings(settings: &LightSettings) -> Self {
        let mut orbit = Self::new(
            settings.position,
            settings.orbit_center,
            settings.orbit_axis,
            settings.angular_velocity,
        );
        if !settings.orbiting {
            orbit.state = OrbitState::Stationary;
        }
        orbit
    }

    pub fn state(&self) -> OrbitState {
        self.state
    }

    pub fn is_orbiting(&self) -> bool {
        self.state == OrbitState::Orbiting
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Apply an event. Returns whether the state changed.
    pub fn handle(&mut self, event: OrbitEvent) -> bool {
        let next = match event {
            OrbitEvent::Start => OrbitState::Orbiting,
            OrbitEvent::Stop => OrbitState::Stationary,
        };
        let changed = next != self.state;
        if changed {
            tracing::debug!("light orbit {:?} -> {:?}", self.state, next);
            self.state = next;
        }
        changed
    }

    /// Rotate the light about the orbit axis by `angular_velocity * delta_time`
    /// degrees. No-op while stationary.
    pub fn advance(&mut self, delta_time: f32) {
        match self.state {
            OrbitState::Stationary => {}
            OrbitState::Orbiting => {
                let angle = (self.angular_velocity * delta_time).to_radians();
                let rotation = Quat::from_axis_angle(self.axis, angle);
                self.position = self.center + rotation * (self.position - self.center);
            }
        }
    }
}
