//! Heart configuration.
//!
//! Everything that shapes the animation is a field of [`HeartConfig`]: the
//! canvas, sample counts, halo behavior, colors and timing. The value is
//! immutable once handed to [`Heart`](crate::Heart); the center is derived
//! from the canvas and never changes afterwards.
//!
//! Two presets reproduce the two looks the generator ships with:
//!
//! ```ignore
//! let glow = HeartConfig::glow();        // default: orange, pulsing colors, embers
//! let classic = HeartConfig::classic();  // flat pink, denser halo jitter
//!
//! let small = HeartConfig::default()
//!     .with_frame_count(10)
//!     .with_outline_samples(500);
//! ```

use std::ops::RangeInclusive;
use std::time::Duration;

use glam::DVec2;

use crate::color::Palette;
use crate::error::ConfigError;

/// Parameters of the outer halo, regenerated for every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HaloConfig {
    /// Heart-curve scale the halo is sampled at, a little wider than the body.
    pub scale: f64,
    /// Trials per frame at rest.
    pub count_base: f64,
    /// Extra trials per frame at the peak of the pulse, weighted by `curve²`.
    pub count_swing: f64,
    /// Ring push at rest.
    pub radius_base: f64,
    /// Ring push added across the pulse, weighted by `1 + curve`.
    pub radius_swing: f64,
    /// Per-axis jitter added to each surviving halo point, in pixels.
    pub jitter: u32,
    /// Sizes a halo particle picks from uniformly; repeat a value to weight it.
    pub sizes: Vec<u32>,
}

impl HaloConfig {
    pub fn glow() -> Self {
        Self {
            scale: 11.7,
            count_base: 2800.0,
            count_swing: 4200.0,
            radius_base: 4.0,
            radius_swing: 6.0,
            jitter: 10,
            sizes: vec![1, 1, 2],
        }
    }

    pub fn classic() -> Self {
        Self {
            scale: 11.6,
            count_base: 3000.0,
            count_swing: 4000.0,
            radius_base: 4.0,
            radius_swing: 6.0,
            jitter: 14,
            sizes: vec![1, 2, 2],
        }
    }
}

/// Complete description of one heart animation.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Scale applied to the unit heart curve for the outline.
    pub enlarge_ratio: f64,
    /// Number of precomputed animation frames.
    pub frame_count: usize,
    /// Angle samples taken on the heart curve for the outline.
    pub outline_samples: usize,
    /// Edge-diffusion scatters per outline point.
    pub edge_samples_per_point: usize,
    /// Scatter strength for the edge layer.
    pub edge_beta: f64,
    /// Center-diffusion draws from random outline points.
    pub center_samples: usize,
    /// Scatter strength for the center layer.
    pub center_beta: f64,
    pub halo: HaloConfig,
    /// Size range of outline particles.
    pub outline_sizes: RangeInclusive<u32>,
    /// Extra side length outline squares are drawn with.
    pub outline_boost: u32,
    /// Size range of both diffusion layers.
    pub diffusion_sizes: RangeInclusive<u32>,
    pub palette: Palette,
    /// Ambient particles scattered over the whole canvas.
    pub background_particles: usize,
    /// Size range of ambient particles.
    pub background_sizes: RangeInclusive<u32>,
    /// Delay between two rendered frames.
    pub frame_delay: Duration,
    /// Host window title.
    pub title: String,
}

impl HeartConfig {
    /// Orange heart, pulsing colors, background embers.
    pub fn glow() -> Self {
        Self {
            width: 980,
            height: 640,
            enlarge_ratio: 11.0,
            frame_count: 20,
            outline_samples: 2200,
            edge_samples_per_point: 3,
            edge_beta: 0.05,
            center_samples: 4500,
            center_beta: 0.17,
            halo: HaloConfig::glow(),
            outline_sizes: 1..=3,
            outline_boost: 1,
            diffusion_sizes: 1..=2,
            palette: Palette::glow(),
            background_particles: 120,
            background_sizes: 1..=2,
            frame_delay: Duration::from_millis(120),
            title: "Heart for Girlfriend, again...".to_string(),
        }
    }

    /// Flat pink heart with no background layer.
    pub fn classic() -> Self {
        Self {
            outline_samples: 2000,
            center_samples: 4000,
            halo: HaloConfig::classic(),
            outline_boost: 0,
            palette: Palette::classic(),
            background_particles: 0,
            frame_delay: Duration::from_millis(160),
            title: "H.E.A.R.T".to_string(),
            ..Self::glow()
        }
    }

    /// Fixed center every force is measured from.
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_frame_count(mut self, frames: usize) -> Self {
        self.frame_count = frames;
        self
    }

    pub fn with_outline_samples(mut self, samples: usize) -> Self {
        self.outline_samples = samples;
        self
    }

    pub fn with_center_samples(mut self, samples: usize) -> Self {
        self.center_samples = samples;
        self
    }

    pub fn with_halo(mut self, halo: HaloConfig) -> Self {
        self.halo = halo;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_background_particles(mut self, count: usize) -> Self {
        self.background_particles = count;
        self
    }

    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Reject configurations the generator cannot animate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if self.frame_count == 0 {
            return Err(ConfigError::NoFrames);
        }
        if self.outline_samples == 0 {
            return Err(ConfigError::NoOutlineSamples);
        }
        if self.frame_delay.is_zero() {
            return Err(ConfigError::ZeroDelay);
        }
        for (name, value) in [
            ("enlarge_ratio", self.enlarge_ratio),
            ("halo.scale", self.halo.scale),
            ("edge_beta", self.edge_beta),
            ("center_beta", self.center_beta),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.halo.sizes.is_empty() {
            return Err(ConfigError::NoHaloSizes);
        }
        for (name, range) in [
            ("outline_sizes", &self.outline_sizes),
            ("diffusion_sizes", &self.diffusion_sizes),
            ("background_sizes", &self.background_sizes),
        ] {
            if range.is_empty() {
                return Err(ConfigError::EmptySizeRange { name });
            }
        }
        Ok(())
    }
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self::glow()
    }
}
