//! # pulseheart - a procedurally generated, pulsing particle heart
//!
//! A heart drawn from thousands of particles that beats, breathes a glowing
//! halo and twinkles against a field of embers. Everything is computed up
//! front; playback is a cyclic replay of cached frames.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pulseheart::prelude::*;
//!
//! fn main() -> Result<(), HeartError> {
//!     pulseheart::run(HeartConfig::default())
//! }
//! ```
//!
//! Or drive your own surface:
//!
//! ```ignore
//! let heart = Heart::from_seed(HeartConfig::classic(), 42)?;
//! let renderer = Renderer::new();
//! renderer.render_frame(&heart, &mut my_canvas, frame);
//! ```
//!
//! ## How a heart is built
//!
//! 1. **Outline**: angles sampled on the parametric heart curve
//!    ([`curve::heart_curve`]), snapped to pixels and deduplicated.
//! 2. **Diffusion**: every outline point scattered slightly inward (edge
//!    layer), and random outline points scattered deep inward (center layer),
//!    by exponentially distributed fractions ([`scatter::scatter_inward`]).
//! 3. **Frames**: for each frame index the [`pulse`] oscillator decides how
//!    far the body is pulled in or pushed out and how wide and dense the halo
//!    is. The halo is regenerated, the body layers are displaced and
//!    jittered, and the result is cached.
//! 4. **Playback**: [`Heart::frame`] wraps the index around the cache, and the
//!    [`Renderer`] colors every layer from the [`color::Palette`].
//!
//! All randomness flows through [`random::RandomSource`]; a fixed seed gives
//! a bit-identical heart.
//!
//! ## Presets
//!
//! | Preset | Look |
//! |--------|------|
//! | [`HeartConfig::glow`] (default) | orange, pulsing colors, cream halo, background embers, 120 ms frames |
//! | [`HeartConfig::classic`] | flat pink, wider halo jitter, no background, 160 ms frames |

pub mod background;
pub mod color;
pub mod config;
pub mod curve;
pub mod error;
pub mod frames;
pub mod gpu;
mod heart;
pub mod pulse;
pub mod random;
pub mod render;
pub mod scatter;
pub mod time;
pub mod window;

pub use background::BackgroundParticle;
pub use color::{lerp_color, Palette, Rgb};
pub use config::{HaloConfig, HeartConfig};
pub use error::{ConfigError, GpuError, HeartError};
pub use frames::{AnimatedFrame, Layer, Particle};
pub use glam::DVec2;
pub use heart::Heart;
pub use render::{Canvas, Renderer};
pub use scatter::ParticleSets;
pub use time::FrameClock;
pub use window::{run, run_heart};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use pulseheart::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Palette, Rgb};
    pub use crate::config::{HaloConfig, HeartConfig};
    pub use crate::error::{ConfigError, HeartError};
    pub use crate::frames::{AnimatedFrame, Layer, Particle};
    pub use crate::render::{Canvas, Renderer};
    pub use crate::time::FrameClock;
    pub use crate::Heart;
    pub use glam::DVec2;
}
