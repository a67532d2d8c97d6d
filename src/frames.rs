//! Per-frame particle snapshots.
//!
//! A frame is the static body layers pulled by that frame's pulse, plus a
//! halo generated from scratch. [`build_frame`] produces one; the
//! [`Heart`](crate::Heart) calls it once per frame index at construction and
//! keeps the results.

use std::ops::RangeInclusive;

use glam::DVec2;

use crate::config::HeartConfig;
use crate::curve::{attract_toward, heart_curve_px, shrink_toward};
use crate::pulse::Pulse;
use crate::random::RandomSource;
use crate::scatter::{ParticleSets, PointSet};

/// Which part of the heart a particle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Outer glow, regenerated per frame.
    Halo,
    /// Points on the heart curve.
    Outline,
    /// Tight scatter just inside the outline.
    EdgeDiffusion,
    /// Loose scatter filling the heart.
    CenterDiffusion,
}

impl Layer {
    pub const ALL: [Layer; 4] = [
        Layer::Halo,
        Layer::Outline,
        Layer::EdgeDiffusion,
        Layer::CenterDiffusion,
    ];
}

/// One renderable particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub size: u32,
    pub layer: Layer,
}

/// Every particle of one animation frame, halo first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimatedFrame {
    particles: Vec<Particle>,
}

impl AnimatedFrame {
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of particles on `layer`.
    pub fn count(&self, layer: Layer) -> usize {
        self.particles.iter().filter(|p| p.layer == layer).count()
    }
}

impl<'a> IntoIterator for &'a AnimatedFrame {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

/// Builds the particle list for frame `frame`.
pub fn build_frame(
    frame: usize,
    config: &HeartConfig,
    sets: &ParticleSets,
    rng: &mut impl RandomSource,
) -> AnimatedFrame {
    let pulse = Pulse::at(frame, &config.halo);
    log::debug!(
        "frame {frame}: ratio {:.3}, halo radius {}, halo trials {}",
        pulse.ratio,
        pulse.halo_radius,
        pulse.halo_count
    );

    let mut particles = Vec::with_capacity(pulse.halo_count + sets.len());
    push_halo(&mut particles, &pulse, config, rng);

    let center = config.center();
    let body = [
        (&sets.outline, Layer::Outline, &config.outline_sizes),
        (&sets.edge_diffusion, Layer::EdgeDiffusion, &config.diffusion_sizes),
        (&sets.center_diffusion, Layer::CenterDiffusion, &config.diffusion_sizes),
    ];
    for (points, layer, sizes) in body {
        push_body(&mut particles, points, layer, sizes, center, pulse.ratio, rng);
    }

    AnimatedFrame { particles }
}

fn push_halo(
    particles: &mut Vec<Particle>,
    pulse: &Pulse,
    config: &HeartConfig,
    rng: &mut impl RandomSource,
) {
    let halo = &config.halo;
    let center = config.center();
    let reach = i32::try_from(halo.jitter).unwrap_or(i32::MAX);
    let mut seen = PointSet::with_capacity(pulse.halo_count);

    for _ in 0..pulse.halo_count {
        let t = rng.angle();
        let on_curve = heart_curve_px(t, halo.scale, center);
        let ring = shrink_toward(on_curve, center, pulse.halo_radius as f64);
        if !seen.insert(ring) {
            continue;
        }
        let jitter = DVec2::new(
            rng.int_inclusive(-reach, reach) as f64,
            rng.int_inclusive(-reach, reach) as f64,
        );
        let size = halo.sizes[rng.index(halo.sizes.len())];
        particles.push(Particle {
            position: ring + jitter,
            size,
            layer: Layer::Halo,
        });
    }
}

fn push_body(
    particles: &mut Vec<Particle>,
    points: &PointSet,
    layer: Layer,
    sizes: &RangeInclusive<u32>,
    center: DVec2,
    ratio: f64,
    rng: &mut impl RandomSource,
) {
    for &point in points {
        let jitter = DVec2::new(
            rng.int_inclusive(-1, 1) as f64,
            rng.int_inclusive(-1, 1) as f64,
        );
        let position = attract_toward(point, center, ratio, jitter);
        let size = rng.int_inclusive(*sizes.start() as i32, *sizes.end() as i32) as u32;
        particles.push(Particle {
            position,
            size,
            layer,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;

    fn small_config() -> HeartConfig {
        HeartConfig::default()
            .with_outline_samples(400)
            .with_center_samples(600)
    }

    #[test]
    fn test_layers_are_ordered_halo_first() {
        let config = small_config();
        let mut rng = seeded(1);
        let sets = ParticleSets::build(&config, &mut rng);
        let frame = build_frame(0, &config, &sets, &mut rng);

        let order: Vec<Layer> = frame.iter().map(|p| p.layer).collect();
        let rank = |l: &Layer| Layer::ALL.iter().position(|x| x == l).unwrap_or(usize::MAX);
        assert!(order.windows(2).all(|w| rank(&w[0]) <= rank(&w[1])));
    }

    #[test]
    fn test_body_counts_match_static_sets() {
        let config = small_config();
        let mut rng = seeded(2);
        let sets = ParticleSets::build(&config, &mut rng);
        let frame = build_frame(3, &config, &sets, &mut rng);

        assert_eq!(frame.count(Layer::Outline), sets.outline.len());
        assert_eq!(frame.count(Layer::EdgeDiffusion), sets.edge_diffusion.len());
        assert_eq!(frame.count(Layer::CenterDiffusion), sets.center_diffusion.len());
        assert_eq!(
            frame.len(),
            frame.count(Layer::Halo) + sets.len()
        );
    }

    #[test]
    fn test_halo_is_deduplicated_trials() {
        let config = small_config();
        let mut rng = seeded(3);
        let sets = ParticleSets::build(&config, &mut rng);
        for f in 0..5 {
            let frame = build_frame(f, &config, &sets, &mut rng);
            let halo = frame.count(Layer::Halo);
            let trials = Pulse::at(f, &config.halo).halo_count;
            assert!(halo > 0 && halo <= trials);
        }
    }

    #[test]
    fn test_sizes_within_layer_ranges() {
        let config = small_config();
        let mut rng = seeded(4);
        let sets = ParticleSets::build(&config, &mut rng);
        let frame = build_frame(1, &config, &sets, &mut rng);
        for p in &frame {
            let ok = match p.layer {
                Layer::Halo => config.halo.sizes.contains(&p.size),
                Layer::Outline => config.outline_sizes.contains(&p.size),
                _ => config.diffusion_sizes.contains(&p.size),
            };
            assert!(ok, "{:?} with size {}", p.layer, p.size);
        }
    }

    #[test]
    fn test_halo_size_one_dominates_in_glow() {
        let config = small_config();
        let mut rng = seeded(5);
        let sets = ParticleSets::build(&config, &mut rng);
        let frame = build_frame(1, &config, &sets, &mut rng);
        let ones = frame.iter().filter(|p| p.layer == Layer::Halo && p.size == 1).count();
        let twos = frame.iter().filter(|p| p.layer == Layer::Halo && p.size == 2).count();
        assert!(ones > twos);
    }

    #[test]
    fn test_rest_frame_only_jitters_body() {
        // Frame 0 has ratio 0: body particles move by the ±1 px jitter alone.
        let config = small_config();
        let mut rng = seeded(6);
        let sets = ParticleSets::build(&config, &mut rng);
        let frame = build_frame(0, &config, &sets, &mut rng);
        let outline: Vec<&Particle> = frame.iter().filter(|p| p.layer == Layer::Outline).collect();
        for (particle, source) in outline.iter().zip(sets.outline.iter()) {
            let delta = (particle.position - *source).abs();
            assert!(delta.x <= 1.0 && delta.y <= 1.0);
        }
    }

    #[test]
    fn test_pulse_contracts_and_expands_body() {
        let config = small_config();
        let center = config.center();
        let mut rng = seeded(7);
        let sets = ParticleSets::build(&config, &mut rng);
        let mean = |frame: &AnimatedFrame| {
            let body: Vec<f64> = frame
                .iter()
                .filter(|p| p.layer == Layer::Outline)
                .map(|p| p.position.distance(center))
                .collect();
            body.iter().sum::<f64>() / body.len() as f64
        };
        // Frame 1 pulls in (positive ratio), frame 4 pushes out.
        let contracted = mean(&build_frame(1, &config, &sets, &mut rng));
        let expanded = mean(&build_frame(4, &config, &sets, &mut rng));
        assert!(contracted < expanded);
    }

    #[test]
    fn test_halo_jitter_extremes_build() {
        let mut config = small_config();
        let mut rng = seeded(9);
        let sets = ParticleSets::build(&config, &mut rng);

        config.halo.jitter = 0;
        let still = build_frame(0, &config, &sets, &mut rng);
        assert!(still.count(Layer::Halo) > 0);
        // Without jitter the deduplicated rings stay distinct.
        let mut rings = PointSet::new();
        for p in still.iter().filter(|p| p.layer == Layer::Halo) {
            assert!(rings.insert(p.position));
        }

        config.halo.jitter = u32::MAX;
        assert!(config.validate().is_ok());
        let wild = build_frame(1, &config, &sets, &mut rng);
        assert!(wild.count(Layer::Halo) > 0);
    }

    #[test]
    fn test_halo_sits_outside_the_body() {
        let config = small_config();
        let center = config.center();
        let mut rng = seeded(8);
        let sets = ParticleSets::build(&config, &mut rng);
        let frame = build_frame(1, &config, &sets, &mut rng);
        let mean = |layer: Layer| {
            let d: Vec<f64> = frame
                .iter()
                .filter(|p| p.layer == layer)
                .map(|p| p.position.distance(center))
                .collect();
            d.iter().sum::<f64>() / d.len() as f64
        };
        assert!(mean(Layer::Halo) > mean(Layer::CenterDiffusion));
    }
}
