//! Deterministic decorative placement.
//!
//! Every position is a pure function of the particle index and the field
//! bounds: `seed = i * k`, `x = (sin(seed) * 0.5 + 0.5) * width`,
//! `y = (cos(seed) * 0.5 + 0.5) * height`. Repeated renders therefore emit
//! bit-identical coordinates.

use serde::Serialize;

/// Angular scale for start positions. Close to the golden angle in degrees.
pub const GOLDEN_SCALE: f64 = 137.508;
/// Scale for drift targets.
pub const TARGET_SCALE: f64 = 239.117;
/// Scale for per-particle drift duration.
pub const DURATION_SCALE: f64 = 317.234;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Periodic timing: `base + (i % cycle) * step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cadence {
    pub base: f64,
    pub cycle: usize,
    pub step: f64,
}

impl Cadence {
    pub const fn new(base: f64, cycle: usize, step: f64) -> Self {
        Self { base, cycle, step }
    }

    pub fn at(&self, index: usize) -> f64 {
        if self.cycle == 0 {
            return self.base;
        }
        self.base + (index % self.cycle) as f64 * self.step
    }
}

/// Maps `sin`/`cos` of the seed into the unit square.
fn unit_point(seed: f64) -> (f64, f64) {
    (seed.sin() * 0.5 + 0.5, seed.cos() * 0.5 + 0.5)
}

/// Position of particle `index` inside `bounds` for angular scale `k`.
pub fn place(index: usize, k: f64, bounds: Bounds) -> Point {
    let (ux, uy) = unit_point(index as f64 * k);
    Point {
        x: ux * bounds.width,
        y: uy * bounds.height,
    }
}

/// Rounds to hundredths, for fields rendered with fixed precision.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Looping particle field
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub duration: f64,
    pub delay: f64,
}

/// A fixed field of looping background particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleField {
    pub count: usize,
    pub bounds: Bounds,
    pub duration: Cadence,
    pub delay: Cadence,
    pub round_coordinates: bool,
}

impl ParticleField {
    pub fn particle(&self, index: usize) -> Particle {
        let Point { x, y } = place(index, GOLDEN_SCALE, self.bounds);
        let (x, y) = if self.round_coordinates {
            (round_hundredths(x), round_hundredths(y))
        } else {
            (x, y)
        };

        Particle {
            index,
            x,
            y,
            duration: self.duration.at(index),
            delay: self.delay.at(index),
        }
    }

    pub fn particles(&self) -> Vec<Particle> {
        (0..self.count).map(|i| self.particle(i)).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Drift field (hero)
// ────────────────────────────────────────────────────────────────────────────

/// A particle travelling back and forth between two fixed points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DriftParticle {
    pub index: usize,
    pub start: Point,
    pub target: Point,
    pub duration: f64,
}

/// Drift duration lies in `[10, 20]` seconds.
pub fn drift_particle(index: usize, bounds: Bounds) -> DriftParticle {
    let (unit, _) = unit_point(index as f64 * DURATION_SCALE);
    DriftParticle {
        index,
        start: place(index, GOLDEN_SCALE, bounds),
        target: place(index, TARGET_SCALE, bounds),
        duration: 10.0 + unit * 10.0,
    }
}

pub fn drift_field(count: usize, bounds: Bounds) -> Vec<DriftParticle> {
    (0..count).map(|i| drift_particle(i, bounds)).collect()
}
