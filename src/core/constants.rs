// Tuning constants for the two animators.
//
// Kept free of crate-internal imports so host tests can `include!` this file.

// ---------------- Particle field ----------------

// Grid spacing between particle origins (css px)
pub const GRID_CELL_SIZE: f32 = 50.0;
// Particle base size is drawn from [MIN, MIN + SPAN)
pub const PARTICLE_SIZE_MIN: f32 = 2.0;
pub const PARTICLE_SIZE_SPAN: f32 = 3.0;

// Per-tick increments
pub const FIELD_TIME_STEP: f32 = 0.01;
pub const PARTICLE_PHASE_STEP: f32 = 0.02;

// Fraction of the remaining distance the tracked cursor covers each tick
pub const CURSOR_SMOOTHING: f32 = 0.1;

// Cursor repulsion: linear falloff, zero at the radius
pub const REPEL_RADIUS: f32 = 200.0;
pub const REPEL_STRENGTH: f32 = 2.0;

// Spring back to origin and velocity decay
pub const SPRING_K: f32 = 0.02;
pub const FRICTION: f32 = 0.9;

// Pulsing draw
pub const PULSE_ALPHA_BASE: f32 = 0.5;
pub const PULSE_ALPHA_SPAN: f32 = 0.3;
pub const PULSE_RADIUS_SPAN: f32 = 0.5;

// Proximity links
pub const LINK_RADIUS: f32 = 80.0;
// Each pair is stroked once, so this is the full opacity of a link
pub const LINK_ALPHA_MAX: f32 = 0.2;
pub const LINK_LINE_WIDTH: f64 = 0.5;

// Translucent clear that leaves motion trails
pub const TRAIL_ALPHA: f32 = 0.15;

// Analog static overlay
pub const STATIC_PROBABILITY: f64 = 0.001;
pub const STATIC_MAX_BOOST: f32 = 50.0;

// ---------------- Spectrum visualizer ----------------

pub const BAR_COUNT: usize = 32;
pub const BAR_GAP: f32 = 2.0;
pub const BAR_MIN_HEIGHT: f32 = 2.0;
// Tallest bar relative to canvas height
pub const BAR_HEIGHT_FRACTION: f32 = 0.85;
pub const BAR_ALPHA_BASE: f32 = 0.3;
pub const BAR_ALPHA_SPAN: f32 = 0.7;
pub const BAR_GLOW_ALPHA: f32 = 0.5;
pub const BAR_GLOW_BLUR: f64 = 6.0;

// Ambient ripple while a session is live but silent
pub const IDLE_LEVEL_BASE: f32 = 0.05;
pub const IDLE_LEVEL_SWING: f32 = 0.03;
pub const IDLE_RATE: f32 = 1.5; // radians per second
pub const IDLE_PHASE_PER_BAR: f32 = 0.3;
pub const IDLE_ALPHA: f32 = 0.25;

// Flat strip while no session is live
pub const RESTING_ALPHA: f32 = 0.2;

// Scanline overlay
pub const SCANLINE_PERIOD: f32 = 4.0;
pub const SCANLINE_THICKNESS: f32 = 2.0;
pub const SCANLINE_ALPHA: f32 = 0.15;
