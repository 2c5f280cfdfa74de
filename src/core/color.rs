/// 8-bit RGB triple rendered to CSS `rgba()` strings for the 2D context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

// Palette
pub const BACKGROUND: Rgb = Rgb(10, 14, 26);
pub const CYAN: Rgb = Rgb(0, 212, 255);
pub const GREEN: Rgb = Rgb(0, 255, 136);

impl Rgb {
    #[inline]
    pub fn rgba(self, alpha: f32) -> String {
        let a = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
        format!("rgba({}, {}, {}, {:.3})", self.0, self.1, self.2, a)
    }
}
