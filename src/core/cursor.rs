use glam::Vec2;

/// Pointer position as seen by one animator.
///
/// `target` follows raw pointer events; `current` chases it a fixed fraction of
/// the remaining distance per tick, so it converges without overshooting.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub target: Vec2,
    pub current: Vec2,
}

impl CursorState {
    pub fn new(at: Vec2) -> Self {
        Self {
            target: at,
            current: at,
        }
    }

    #[inline]
    pub fn set_target(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.target = Vec2::new(x, y);
        }
    }

    /// Move `current` toward `target` by `factor` (0..=1) of the gap.
    #[inline]
    pub fn smooth(&mut self, factor: f32) -> Vec2 {
        let k = factor.clamp(0.0, 1.0);
        self.current += (self.target - self.current) * k;
        self.current
    }
}
