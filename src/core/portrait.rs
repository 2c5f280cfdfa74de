use rand::Rng;

pub const COORDS_RESET: &str = "X:0 Y:0";

pub const GLITCH_COLORS: [&str; 3] = ["#ff3366", "#00ff88", "#ffaa00"];
pub const GLITCH_CHANCE: f64 = 0.1;
pub const GLITCH_MAX_SHIFT_PX: f32 = 2.0;

/// Coordinate readout for a pointer at `(x, y)` relative to the viewport's
/// top-left corner.
pub fn coords_label(x: f64, y: f64) -> String {
    format!("X:{} Y:{}", x.floor() as i64, y.floor() as i64)
}

/// Readout for a pointer seen by an enclosing element: `None` while the
/// pointer is outside the `width` x `height` viewport.
pub fn readout(x: f64, y: f64, width: f64, height: f64) -> Option<String> {
    let (fx, fy) = (x.floor(), y.floor());
    (fx >= 0.0 && fy >= 0.0 && fx <= width && fy <= height).then(|| coords_label(x, y))
}

/// Momentary colour shift and jitter applied to the portrait.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glitch {
    pub color: &'static str,
    pub dx: f32,
    pub dy: f32,
}

impl Glitch {
    pub fn transform(&self) -> String {
        format!("translate({:.2}px, {:.2}px)", self.dx, self.dy)
    }
}

/// One roll of the ambient glitch timer.
pub fn roll_glitch<R: Rng + ?Sized>(rng: &mut R) -> Option<Glitch> {
    if !rng.gen_bool(GLITCH_CHANCE) {
        return None;
    }
    let color = GLITCH_COLORS[rng.gen_range(0..GLITCH_COLORS.len())];
    let span = GLITCH_MAX_SHIFT_PX;
    Some(Glitch {
        color,
        dx: rng.gen_range(-span..span),
        dy: rng.gen_range(-span..span),
    })
}
