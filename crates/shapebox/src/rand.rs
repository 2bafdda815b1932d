//! Seeded shape sampling (replay tokens + box filling).
//!
//! Purpose
//! - Produce reproducible heterogeneous shapes for the CLI demo, benches, and
//!   randomized tests.
//!
//! Model
//! - A `ReplayToken { seed, index }` is mixed into a single `StdRng`; the same
//!   token always yields the same shape.
//! - The variant is drawn uniformly from `SampleCfg::kinds`, sizes uniformly
//!   from `[size_min, size_max]`. Polygons take one jittered angle per sector around
//!   the origin, so they are star-shaped and simple.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::SAMPLE_SIZE_MAX;
use crate::container::ShapeBox;
use crate::shapes::{Circle, Polygon, Rectangle, Shape, ShapeError, ShapeKind, Square, Triangle};

/// Sampler configuration.
#[derive(Clone, Debug)]
pub struct SampleCfg {
    /// Lower bound for radius/side/width/height and polygon radii.
    pub size_min: f64,
    pub size_max: f64,
    /// Inclusive vertex-count range for polygons. Both ends must be >= 3.
    pub polygon_vertices: (usize, usize),
    /// Variants to draw from (uniform).
    pub kinds: Vec<ShapeKind>,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            size_min: 0.5,
            size_max: 3.0,
            polygon_vertices: (3, 8),
            kinds: ShapeKind::ALL.to_vec(),
        }
    }
}

impl SampleCfg {
    pub fn validate(&self) -> Result<(), ShapeError> {
        if !(self.size_min.is_finite() && self.size_max.is_finite()) {
            return Err(ShapeError::invalid("size bounds must be finite"));
        }
        if self.size_min < 0.0 {
            return Err(ShapeError::invalid("size_min must be >= 0"));
        }
        if self.size_min > self.size_max {
            return Err(ShapeError::invalid("size_min <= size_max required"));
        }
        if self.size_max > SAMPLE_SIZE_MAX {
            return Err(ShapeError::invalid(format!("size_max must be <= {SAMPLE_SIZE_MAX:e}")));
        }
        let (lo, hi) = self.polygon_vertices;
        if lo < 3 || lo > hi {
            return Err(ShapeError::invalid("polygon_vertices must satisfy 3 <= min <= max"));
        }
        if self.kinds.is_empty() {
            return Err(ShapeError::invalid("need at least one shape kind"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Full 256-bit key: seed in bytes 0..8, index in bytes 8..16.
    #[inline]
    fn to_std_rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Draw one shape for `tok`.
pub fn draw_shape(cfg: &SampleCfg, tok: ReplayToken) -> Result<Box<dyn Shape>, ShapeError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let kind = cfg.kinds[rng.gen_range(0..cfg.kinds.len())];
    let shape: Box<dyn Shape> = match kind {
        ShapeKind::Circle => Box::new(Circle::new(draw_size(cfg, &mut rng))?),
        ShapeKind::Rectangle => {
            let w = draw_size(cfg, &mut rng);
            let h = draw_size(cfg, &mut rng);
            Box::new(Rectangle::new(w, h)?)
        }
        ShapeKind::Square => Box::new(Square::new(draw_size(cfg, &mut rng))?),
        ShapeKind::Triangle => Box::new(Triangle::new(draw_size(cfg, &mut rng))?),
        ShapeKind::Polygon => Box::new(draw_polygon(cfg, &mut rng)?),
    };
    Ok(shape)
}

#[inline]
fn draw_size(cfg: &SampleCfg, rng: &mut StdRng) -> f64 {
    rng.gen_range(cfg.size_min..=cfg.size_max)
}

fn draw_polygon(cfg: &SampleCfg, rng: &mut StdRng) -> Result<Polygon, ShapeError> {
    let (lo, hi) = cfg.polygon_vertices;
    let n = rng.gen_range(lo..=hi);
    let delta = std::f64::consts::TAU / n as f64;
    // Jitter stays inside each sector, so angles remain strictly increasing.
    let r_floor = cfg.size_min.max(1e-6);
    let r_ceil = cfg.size_max.max(r_floor);
    let pts: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let th = (k as f64 + rng.gen_range(0.1..0.9)) * delta;
            let r = rng.gen_range(r_floor..=r_ceil);
            Vector2::new(r * th.cos(), r * th.sin())
        })
        .collect();
    Polygon::new(pts)
}

/// Draw shapes with indices `0, 1, ...` under `seed` until `bx` is full.
/// Returns how many shapes were added.
pub fn fill_box(bx: &mut ShapeBox, cfg: &SampleCfg, seed: u64) -> Result<usize, ShapeError> {
    cfg.validate()?;
    let mut added = 0usize;
    let mut index = 0u64;
    while !bx.is_full() {
        let shape = draw_shape(cfg, ReplayToken { seed, index })?;
        if bx.add(shape).is_err() {
            break;
        }
        added += 1;
        index += 1;
    }
    tracing::debug!(seed, added, len = bx.len(), "fill_box");
    Ok(added)
}
