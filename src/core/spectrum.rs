use super::color::{Rgb, CYAN, GREEN};
use super::constants::*;

/// Which party's audio the bars show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Remote agent audio (session output).
    Agent,
    /// Local microphone audio (session input).
    User,
}

impl Channel {
    pub fn color(self) -> Rgb {
        match self {
            Channel::Agent => GREEN,
            Channel::User => CYAN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    Active { channel: Channel, samples: &'a [u8] },
    Idle,
}

impl Selection<'_> {
    pub fn color(&self) -> Rgb {
        match self {
            Selection::Active { channel, .. } => channel.color(),
            Selection::Idle => CYAN,
        }
    }
}

#[inline]
pub fn has_energy(samples: &[u8]) -> bool {
    samples.iter().any(|&v| v > 0)
}

/// Priority rule: agent output wins whenever it carries any energy, then user
/// input, else idle. Never a mix.
pub fn select<'a>(outbound: Option<&'a [u8]>, inbound: Option<&'a [u8]>) -> Selection<'a> {
    match (outbound, inbound) {
        (Some(out), _) if has_energy(out) => Selection::Active {
            channel: Channel::Agent,
            samples: out,
        },
        (_, Some(inp)) if has_energy(inp) => Selection::Active {
            channel: Channel::User,
            samples: inp,
        },
        _ => Selection::Idle,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alpha: f32,
}

/// Geometry of the visualizer canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub width: f32,
    pub height: f32,
}

impl BarLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: clean(width),
            height: clean(height),
        }
    }

    #[inline]
    pub fn bar_width(&self) -> f32 {
        (self.width / BAR_COUNT as f32 - BAR_GAP).max(0.0)
    }

    /// Bar `i` of the given height, vertically centered.
    #[inline]
    fn bar(&self, i: usize, height: f32, alpha: f32) -> Bar {
        let w = self.bar_width();
        Bar {
            x: i as f32 * (w + BAR_GAP),
            y: (self.height - height) / 2.0,
            width: w,
            height,
            alpha,
        }
    }

    /// Bars for a live frequency frame.
    pub fn active_bars(&self, samples: &[u8]) -> [Bar; BAR_COUNT] {
        std::array::from_fn(|i| {
            let v = sample_for_bar(samples, i) as f32 / 255.0;
            let h = (v * self.height * BAR_HEIGHT_FRACTION).max(BAR_MIN_HEIGHT);
            self.bar(i, h, BAR_ALPHA_BASE + v * BAR_ALPHA_SPAN)
        })
    }

    /// Ambient ripple at wall-clock `t_sec`.
    pub fn idle_bars(&self, t_sec: f64) -> [Bar; BAR_COUNT] {
        std::array::from_fn(|i| {
            let phase = t_sec * IDLE_RATE as f64 + i as f64 * IDLE_PHASE_PER_BAR as f64;
            let v = IDLE_LEVEL_BASE + phase.sin() as f32 * IDLE_LEVEL_SWING;
            let h = (v * self.height).max(BAR_MIN_HEIGHT);
            self.bar(i, h, IDLE_ALPHA)
        })
    }

    /// Flat strip shown while no session is live.
    pub fn resting_bars(&self) -> [Bar; BAR_COUNT] {
        std::array::from_fn(|i| self.bar(i, BAR_MIN_HEIGHT, RESTING_ALPHA))
    }

    /// Top edges of the scanline bands.
    pub fn scanlines(&self) -> impl Iterator<Item = f32> {
        let h = self.height;
        (0..)
            .map(|k| k as f32 * SCANLINE_PERIOD)
            .take_while(move |&y| y < h)
    }
}

/// Down-sample `samples` to one value per bar without reading out of bounds.
///
/// Arrays at least `BAR_COUNT` long use an integer stride from the start;
/// shorter arrays are stretched across the bars.
#[inline]
pub fn sample_for_bar(samples: &[u8], bar: usize) -> u8 {
    let len = samples.len();
    if len == 0 {
        return 0;
    }
    let stride = len / BAR_COUNT;
    let idx = if stride >= 1 {
        bar * stride
    } else {
        bar * len / BAR_COUNT
    };
    samples[idx.min(len - 1)]
}
