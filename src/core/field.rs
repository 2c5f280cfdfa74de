use super::constants::*;
use super::cursor::CursorState;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;

/// Physics and layout parameters for [`ParticleField`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    pub cell_size: f32,
    pub cursor_smoothing: f32,
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub spring: f32,
    pub friction: f32,
    pub phase_step: f32,
    pub link_radius: f32,
    pub static_probability: f64,
    pub static_max_boost: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            cell_size: GRID_CELL_SIZE,
            cursor_smoothing: CURSOR_SMOOTHING,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            spring: SPRING_K,
            friction: FRICTION,
            phase_step: PARTICLE_PHASE_STEP,
            link_radius: LINK_RADIUS,
            static_probability: STATIC_PROBABILITY,
            static_max_boost: STATIC_MAX_BOOST,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Grid anchor; fixed for the particle's lifetime.
    pub origin: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub phase: f32,
}

impl Particle {
    pub fn at(origin: Vec2, size: f32, phase: f32) -> Self {
        Self {
            position: origin,
            origin,
            velocity: Vec2::ZERO,
            size,
            phase,
        }
    }

    /// Advance one tick: repulsion from `cursor`, spring to origin, friction,
    /// integration, phase.
    pub fn step(&mut self, cursor: Vec2, params: &FieldParams) {
        let d = cursor - self.position;
        let dist = d.length();
        // dist == 0 has no direction to push along
        if dist > 0.0 && dist < params.repel_radius {
            let force = (params.repel_radius - dist) / params.repel_radius;
            self.velocity -= d / dist * force * params.repel_strength;
        }
        self.velocity += (self.origin - self.position) * params.spring;
        self.velocity *= params.friction;
        self.position += self.velocity;
        self.phase += params.phase_step;
    }

    #[inline]
    pub fn pulse_alpha(&self) -> f32 {
        PULSE_ALPHA_BASE + self.phase.sin() * PULSE_ALPHA_SPAN
    }

    #[inline]
    pub fn pulse_radius(&self) -> f32 {
        (self.size + (self.phase * 2.0).sin() * PULSE_RADIUS_SPAN).max(0.0)
    }
}

/// A line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

type Buckets = FnvHashMap<(i32, i32), SmallVec<[usize; 8]>>;

pub struct ParticleField {
    params: FieldParams,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    cursor: CursorState,
    time: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams, width: f32, height: f32, rng: StdRng) -> Self {
        let mut field = Self {
            params,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            cursor: CursorState::default(),
            time: 0.0,
            rng,
        };
        field.resize(width, height);
        field
    }

    /// Discard the grid and rebuild it for the new surface size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
        let (cols, rows) = grid_dims(self.width, self.height, self.params.cell_size);

        let mut particles = Vec::with_capacity(cols * rows);
        for i in 0..cols {
            for j in 0..rows {
                let origin = Vec2::new(
                    i as f32 * self.params.cell_size,
                    j as f32 * self.params.cell_size,
                );
                let size = PARTICLE_SIZE_MIN + self.rng.gen::<f32>() * PARTICLE_SIZE_SPAN;
                let phase = self.rng.gen::<f32>();
                particles.push(Particle::at(origin, size, phase));
            }
        }
        self.particles = particles;
        log::debug!(
            "[field] grid {}x{} -> {} particles",
            cols,
            rows,
            self.particles.len()
        );
    }

    pub fn tick(&mut self) {
        self.time += FIELD_TIME_STEP;
        let cursor = self.cursor.smooth(self.params.cursor_smoothing);
        let params = self.params;
        for p in self.particles.iter_mut() {
            p.step(cursor, &params);
        }
    }

    /// Proximity pairs `0 < dist < link_radius`, each unordered pair once.
    pub fn links(&self) -> Vec<Link> {
        let radius = self.params.link_radius;
        if !(radius > 0.0) {
            return Vec::new();
        }
        let buckets = self.bucket_positions(radius);
        let mut out = Vec::new();
        for (a, p) in self.particles.iter().enumerate() {
            let (cx, cy) = bucket_of(p.position, radius);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let Some(members) = buckets.get(&(cx + dx, cy + dy)) else {
                        continue;
                    };
                    for &b in members.iter().filter(|&&b| b > a) {
                        let q = &self.particles[b];
                        let dist = p.position.distance(q.position);
                        if dist > 0.0 && dist < radius {
                            out.push(Link {
                                a,
                                b,
                                from: p.position,
                                to: q.position,
                                alpha: LINK_ALPHA_MAX * (1.0 - dist / radius),
                            });
                        }
                    }
                }
            }
        }
        out
    }

    fn bucket_positions(&self, radius: f32) -> Buckets {
        let mut buckets = Buckets::default();
        for (i, p) in self.particles.iter().enumerate() {
            buckets
                .entry(bucket_of(p.position, radius))
                .or_default()
                .push(i);
        }
        buckets
    }

    /// Sparse analog static over an RGBA buffer; returns the number of
    /// pixels touched.
    pub fn apply_static(&mut self, rgba: &mut [u8]) -> usize {
        let p = self.params.static_probability;
        let max_boost = self.params.static_max_boost;
        let mut touched = 0;
        for px in rgba.chunks_exact_mut(4) {
            if self.rng.gen::<f64>() < p {
                let noise = self.rng.gen::<f32>() * max_boost;
                for c in px.iter_mut().take(3) {
                    *c = (*c as f32 + noise).round().min(255.0) as u8;
                }
                touched += 1;
            }
        }
        touched
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut CursorState {
        &mut self.cursor
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}

#[inline]
pub fn grid_dims(width: f32, height: f32, cell: f32) -> (usize, usize) {
    if !(cell > 0.0) {
        return (0, 0);
    }
    let cols = (sanitize_extent(width) / cell).ceil() as usize;
    let rows = (sanitize_extent(height) / cell).ceil() as usize;
    (cols, rows)
}

#[inline]
fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[inline]
fn bucket_of(p: Vec2, side: f32) -> (i32, i32) {
    ((p.x / side).floor() as i32, (p.y / side).floor() as i32)
}
