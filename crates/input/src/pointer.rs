use glam::Vec2;

/// Turns absolute pointer positions into look deltas.
///
/// The first sample after creation or [`reset`](Self::reset) only seeds the
/// last position, so the camera never jumps when the pointer first enters the
/// window. The y delta is inverted (screen y grows downward) so that moving the
/// pointer up looks up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    last: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, x: f32, y: f32) -> Vec2 {
        let current = Vec2::new(x, y);
        match self.last.replace(current) {
            None => Vec2::ZERO,
            Some(previous) => Vec2::new(current.x - previous.x, previous.y - current.y),
        }
    }

    /// Forget the last position; the next sample seeds again.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn is_seeded(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_suppressed() {
        let mut tracker = PointerTracker::new();
        assert!(!tracker.is_seeded());
        assert_eq!(tracker.track(400.0, 300.0), Vec2::ZERO);
        assert!(tracker.is_seeded());
    }

    #[test]
    fn moving_up_yields_positive_y() {
        let mut tracker = PointerTracker::new();
        tracker.track(400.0, 300.0);
        assert_eq!(tracker.track(410.0, 280.0), Vec2::new(10.0, 20.0));
        assert_eq!(tracker.track(405.0, 290.0), Vec2::new(-5.0, -10.0));
    }

    #[test]
    fn reset_reseeds() {
        let mut tracker = PointerTracker::new();
        tracker.track(0.0, 0.0);
        tracker.reset();
        assert_eq!(tracker.track(500.0, 500.0), Vec2::ZERO);
        assert_eq!(tracker.track(501.0, 500.0), Vec2::new(1.0, 0.0));
    }
}
