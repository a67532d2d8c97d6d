//! The heart generator and its frame cache.

use glam::DVec2;

use crate::background::{scatter_background, BackgroundParticle};
use crate::config::HeartConfig;
use crate::error::ConfigError;
use crate::frames::{build_frame, AnimatedFrame, Layer};
use crate::random::{self, RandomSource};
use crate::scatter::ParticleSets;

/// A fully precomputed heart animation.
///
/// Construction samples the static body layers, builds every frame and
/// scatters the background, all up front. Afterwards the heart is read-only:
/// playback is a lookup into the cache.
///
/// ```ignore
/// let heart = Heart::from_seed(HeartConfig::default(), 7)?;
/// assert_eq!(heart.frame_count(), 20);
/// let same = heart.frame(3) == heart.frame(23);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    config: HeartConfig,
    sets: ParticleSets,
    frames: Vec<AnimatedFrame>,
    background: Vec<BackgroundParticle>,
}

impl Heart {
    /// Builds a heart with an entropy-seeded generator.
    pub fn new(config: HeartConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, &mut random::from_entropy())
    }

    /// Builds a heart that is identical for identical `seed`s.
    pub fn from_seed(config: HeartConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, &mut random::seeded(seed))
    }

    /// Builds a heart drawing every random value from `rng`.
    pub fn with_rng(config: HeartConfig, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        config.validate()?;

        let sets = ParticleSets::build(&config, rng);
        log::info!(
            "sampled {} outline, {} edge and {} center particles",
            sets.outline.len(),
            sets.edge_diffusion.len(),
            sets.center_diffusion.len()
        );

        let frames: Vec<AnimatedFrame> = (0..config.frame_count)
            .map(|f| build_frame(f, &config, &sets, rng))
            .collect();
        let halo = frames.iter().map(|f| f.count(Layer::Halo));
        log::info!(
            "cached {} frames ({} particles in frame 0, halo {}..={})",
            frames.len(),
            frames.first().map_or(0, AnimatedFrame::len),
            halo.clone().min().unwrap_or(0),
            halo.max().unwrap_or(0)
        );

        let background = scatter_background(&config, rng);

        Ok(Self {
            config,
            sets,
            frames,
            background,
        })
    }

    /// Cached frame for playback position `index`, wrapping around.
    #[inline]
    pub fn frame(&self, index: u64) -> &AnimatedFrame {
        &self.frames[(index % self.frames.len() as u64) as usize]
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[AnimatedFrame] {
        &self.frames
    }

    pub fn particle_sets(&self) -> &ParticleSets {
        &self.sets
    }

    pub fn background_particles(&self) -> &[BackgroundParticle] {
        &self.background
    }

    pub fn config(&self) -> &HeartConfig {
        &self.config
    }

    pub fn center(&self) -> DVec2 {
        self.config.center()
    }
}
