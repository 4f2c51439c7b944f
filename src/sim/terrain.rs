//! Procedural terrain with flat landing pads
//!
//! The ground is a bounded random walk sampled every `TERRAIN_STEP` pixels.
//! Pads are flattened shelves stamped onto the walk after it is built.
//! World space has its origin top-left with y increasing downward, so a
//! "higher" hill has a smaller y.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A single terrain height sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainPoint {
    pub x: f32,
    pub y: f32,
}

/// A flat span where safe landings are permitted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingPad {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Surface height (equals the terrain sample at the left edge)
    pub y: f32,
}

impl LandingPad {
    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Whether `x` lies on the pad (edges inclusive)
    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        x >= self.x && x <= self.right()
    }
}

/// Height profile sampled at fixed horizontal spacing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainProfile {
    /// Samples ordered by strictly increasing x
    pub points: Vec<TerrainPoint>,
    /// Baseline returned for queries outside the sampled range
    pub ground_y: f32,
}

impl TerrainProfile {
    /// Terrain height at `x`, linearly interpolated between the bracketing samples.
    ///
    /// Falls back to `ground_y` outside `[first.x, last.x]`.
    pub fn height_at(&self, x: f32) -> f32 {
        let upper = self.points.partition_point(|p| p.x <= x);
        if upper == 0 {
            return self.ground_y;
        }
        if upper == self.points.len() {
            return match self.points.last() {
                Some(last) if last.x == x => last.y,
                _ => self.ground_y,
            };
        }

        let a = self.points[upper - 1];
        let b = self.points[upper];
        let t = (x - a.x) / (b.x - a.x);
        // Exact on flat shelves, where a.y == b.y
        a.y + (b.y - a.y) * t
    }

    /// Highest allowed surface (smallest y)
    #[inline]
    pub fn ceiling(&self) -> f32 {
        self.ground_y - TERRAIN_MAX_HEIGHT
    }

    /// Lowest allowed surface (largest y)
    #[inline]
    pub fn floor(&self) -> f32 {
        self.ground_y - TERRAIN_MIN_HEIGHT
    }
}

/// Terrain for one episode: the profile plus its pads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terrain {
    pub profile: TerrainProfile,
    pub pads: Vec<LandingPad>,
}

impl Terrain {
    /// Returns the first pad spanning `x`, if any
    pub fn pad_at(&self, x: f32) -> Option<&LandingPad> {
        self.pads.iter().find(|pad| pad.contains(x))
    }

    #[inline]
    pub fn is_on_pad(&self, x: f32) -> bool {
        self.pad_at(x).is_some()
    }

    #[inline]
    pub fn height_at(&self, x: f32) -> f32 {
        self.profile.height_at(x)
    }
}

/// Maximum random-walk step for a difficulty
pub fn roughness(difficulty: u32) -> f32 {
    TERRAIN_BASE_ROUGHNESS + TERRAIN_ROUGHNESS_PER_DIFFICULTY * difficulty as f32
}

/// Number of pads placed for a difficulty
pub fn pad_count(difficulty: u32) -> usize {
    (BASE_PAD_COUNT + 1).saturating_sub(difficulty).max(1) as usize
}

/// Pad width for a difficulty
pub fn pad_width(difficulty: u32) -> f32 {
    (BASE_PAD_WIDTH - PAD_WIDTH_PER_DIFFICULTY * difficulty as f32).max(MIN_PAD_WIDTH)
}

/// Samples that must be flattened so the whole pad width sits on a level shelf
pub fn pad_sample_span(width: f32) -> usize {
    (width / TERRAIN_STEP).ceil() as usize + 1
}

/// Generate a fresh terrain profile and its pads.
///
/// Pads are placed at independently drawn sample indices, so two pads may
/// coincide or overlap. A later pad re-flattens any samples it shares with
/// an earlier one.
pub fn generate_terrain<R: Rng + ?Sized>(
    world_width: f32,
    ground_y: f32,
    difficulty: u32,
    rng: &mut R,
) -> Terrain {
    let mut profile = TerrainProfile {
        points: Vec::new(),
        ground_y,
    };
    let (ceiling, floor) = (profile.ceiling(), profile.floor());
    let half_step = roughness(difficulty) / 2.0;

    // Non-finite geometry yields an empty profile; every query then falls back to ground_y
    let sample_count = if world_width.is_finite() && world_width > 0.0 && ground_y.is_finite() {
        // Samples at x = 0, STEP, ... strictly below world_width
        let mut count = (world_width / TERRAIN_STEP).ceil() as usize;
        while (count as f32) * TERRAIN_STEP < world_width {
            count += 1;
        }
        while count > 0 && ((count - 1) as f32) * TERRAIN_STEP >= world_width {
            count -= 1;
        }
        count
    } else {
        log::warn!(
            "Cannot sample terrain for world_width={}, ground_y={}",
            world_width,
            ground_y
        );
        0
    };

    let mut last_y = ground_y - TERRAIN_START_HEIGHT;
    profile.points.reserve(sample_count);
    for i in 0..sample_count {
        let y = (last_y + rng.random_range(-half_step..=half_step)).clamp(ceiling, floor);
        profile.points.push(TerrainPoint {
            x: i as f32 * TERRAIN_STEP,
            y,
        });
        last_y = y;
    }
    let points = &mut profile.points;

    let width = pad_width(difficulty);
    let span = pad_sample_span(width);
    let count = pad_count(difficulty);
    let mut pads = Vec::with_capacity(count);

    if !points.is_empty() {
        let index_range = points.len().saturating_sub(span).max(1);
        for _ in 0..count {
            let start = rng.random_range(0..index_range);
            let shelf_y = points[start].y;
            let end = (start + span).min(points.len());
            for point in &mut points[start..end] {
                point.y = shelf_y;
            }
            pads.push(LandingPad {
                x: points[start].x,
                width,
                y: shelf_y,
            });
        }
    }

    log::debug!(
        "Terrain generated: difficulty={}, samples={}, pads={} x {}px",
        difficulty,
        points.len(),
        pads.len(),
        width
    );

    Terrain { profile, pads }
}
