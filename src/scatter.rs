//! Scatter diffusion and the static particle sets.
//!
//! The body of the heart is three point clouds built once at construction:
//! the outline sampled on the curve, a tight edge layer scattered a little
//! inward from every outline point, and a loose center layer scattered far
//! inward from random outline points.

use std::collections::HashSet;

use glam::DVec2;

use crate::config::HeartConfig;
use crate::curve::heart_curve_px;
use crate::random::RandomSource;

/// Upper bound on the scatter fraction: a point may reach the center but
/// never cross it.
pub const MAX_SCATTER_RATIO: f64 = 1.0;

/// Moves `point` toward `center` by an exponentially distributed fraction of
/// its offset, drawn independently per axis.
///
/// Each fraction is `-beta * ln(u)` with `u` uniform in `(0, 1)`, so its mean
/// is `beta`. Larger `beta` spreads points deeper into the heart.
pub fn scatter_inward(point: DVec2, center: DVec2, beta: f64, rng: &mut impl RandomSource) -> DVec2 {
    let ratio = DVec2::new(
        exponential_ratio(beta, rng.open_unit()),
        exponential_ratio(beta, rng.open_unit()),
    );
    point - ratio * (point - center)
}

/// `-beta * ln(u)`, capped at [`MAX_SCATTER_RATIO`].
#[inline]
pub fn exponential_ratio(beta: f64, u: f64) -> f64 {
    (-beta * u.ln()).min(MAX_SCATTER_RATIO)
}

/// Insertion-ordered set of points, deduplicated by exact coordinate.
///
/// Ordering matters: it is what makes a seeded build reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<DVec2>,
    seen: HashSet<(u64, u64)>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Adds `point` unless an identical coordinate is already present.
    /// Returns whether it was added.
    pub fn insert(&mut self, point: DVec2) -> bool {
        // -0.0 and 0.0 are the same coordinate.
        let key = ((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits());
        if self.seen.insert(key) {
            self.points.push(point);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, point: DVec2) -> bool {
        self.seen
            .contains(&((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[DVec2] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DVec2> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a DVec2;
    type IntoIter = std::slice::Iter<'a, DVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// The three static layers of the heart body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSets {
    pub outline: PointSet,
    pub edge_diffusion: PointSet,
    pub center_diffusion: PointSet,
}

impl ParticleSets {
    /// Samples the outline and scatters both diffusion layers from it.
    pub fn build(config: &HeartConfig, rng: &mut impl RandomSource) -> Self {
        let center = config.center();

        let mut outline = PointSet::with_capacity(config.outline_samples);
        for _ in 0..config.outline_samples {
            let t = rng.angle();
            outline.insert(heart_curve_px(t, config.enlarge_ratio, center));
        }

        let mut edge_diffusion =
            PointSet::with_capacity(outline.len() * config.edge_samples_per_point);
        for &point in &outline {
            for _ in 0..config.edge_samples_per_point {
                edge_diffusion.insert(scatter_inward(point, center, config.edge_beta, rng));
            }
        }

        let mut center_diffusion = PointSet::with_capacity(config.center_samples);
        if !outline.is_empty() {
            let sources = outline.as_slice();
            for _ in 0..config.center_samples {
                let point = sources[rng.index(sources.len())];
                center_diffusion.insert(scatter_inward(point, center, config.center_beta, rng));
            }
        }

        Self {
            outline,
            edge_diffusion,
            center_diffusion,
        }
    }

    /// Total points across all three layers.
    pub fn len(&self) -> usize {
        self.outline.len() + self.edge_diffusion.len() + self.center_diffusion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
