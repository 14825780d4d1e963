use deskscene_camera::CameraMovement;
use std::collections::BTreeMap;

/// Keys the viewer reacts to. The window layer maps its native key codes onto
/// this set, so nothing below it depends on a windowing crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    P,
    J,
    K,
    F1,
    Escape,
}

/// A high-level intent produced from raw key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Translate the camera while the key is held.
    Move(CameraMovement),
    /// Switch between perspective and orthographic projection.
    ToggleProjection,
    /// Resume the light orbit.
    StartOrbit,
    /// Freeze the light where it is.
    StopOrbit,
    /// Show or hide the debug overlay.
    ToggleOverlay,
    /// Close the viewer.
    Quit,
}

impl Action {
    /// Held actions apply every frame; the rest fire once per key press.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Move(_))
    }
}

/// Key to action mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: BTreeMap<Key, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = BTreeMap::from([
            (Key::W, Action::Move(CameraMovement::Forward)),
            (Key::S, Action::Move(CameraMovement::Backward)),
            (Key::A, Action::Move(CameraMovement::Left)),
            (Key::D, Action::Move(CameraMovement::Right)),
            (Key::Q, Action::Move(CameraMovement::Up)),
            (Key::E, Action::Move(CameraMovement::Down)),
            (Key::P, Action::ToggleProjection),
            (Key::J, Action::StartOrbit),
            (Key::K, Action::StopOrbit),
            (Key::F1, Action::ToggleOverlay),
            (Key::Escape, Action::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Bindings with nothing mapped.
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    pub fn action(&self, key: Key) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key`, returning the action it replaced.
    pub fn bind(&mut self, key: Key, action: Action) -> Option<Action> {
        self.bindings.insert(key, action)
    }

    pub fn unbind(&mut self, key: Key) -> Option<Action> {
        self.bindings.remove(&key)
    }

    /// Keys bound to `action`, in key order.
    pub fn keys_for(&self, action: Action) -> Vec<Key> {
        self.bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Key, Action)> + '_ {
        self.bindings.iter().map(|(k, a)| (*k, *a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_every_direction() {
        let bindings = KeyBindings::default();
        for dir in CameraMovement::ALL {
            assert_eq!(
                bindings.keys_for(Action::Move(dir)).len(),
                1,
                "{dir:?} should have exactly one key"
            );
        }
    }

    #[test]
    fn default_wasd_layout() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.action(Key::W),
            Some(Action::Move(CameraMovement::Forward))
        );
        assert_eq!(
            bindings.action(Key::Q),
            Some(Action::Move(CameraMovement::Up))
        );
        assert_eq!(bindings.action(Key::Escape), Some(Action::Quit));
    }

    #[test]
    fn orbit_uses_two_distinct_keys() {
        let bindings = KeyBindings::default();
        let start = bindings.keys_for(Action::StartOrbit);
        let stop = bindings.keys_for(Action::StopOrbit);
        assert_eq!(start, vec![Key::J]);
        assert_eq!(bindings.action(Key::J), Some(Action::StartOrbit));
        assert_eq!(stop, vec![Key::K]);
    }

    #[test]
    fn rebinding_returns_previous_action() {
        let mut bindings = KeyBindings::default();
        let old = bindings.bind(Key::P, Action::Quit);
        assert_eq!(old, Some(Action::ToggleProjection));
        assert_eq!(bindings.action(Key::P), Some(Action::Quit));
        assert_eq!(bindings.unbind(Key::P), Some(Action::Quit));
        assert_eq!(bindings.action(Key::P), None);
    }

    #[test]
    fn only_movement_is_continuous() {
        assert!(Action::Move(CameraMovement::Left).is_continuous());
        assert!(!Action::ToggleProjection.is_continuous());
        assert!(!Action::Quit.is_continuous());
    }

    #[test]
    fn empty_bindings_map_nothing() {
        let bindings = KeyBindings::empty();
        assert_eq!(bindings.iter().count(), 0);
        assert_eq!(bindings.action(Key::W), None);
    }
}
