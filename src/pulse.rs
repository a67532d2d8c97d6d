//! The shared oscillator behind the heartbeat.
//!
//! One periodic [`curve`] drives everything that breathes: how far the body
//! is pulled in or pushed out, how wide the halo ring sits and how many halo
//! trials a frame gets. Frame `f` samples the oscillator at `f / 10 · π`, so
//! a full beat spans five frames.

use std::f64::consts::{PI, TAU};

use crate::config::HaloConfig;

/// Frames per `π` of oscillator phase.
pub const FRAMES_PER_PI: f64 = 10.0;

/// Scale from oscillator value to body displacement ratio.
pub const PULSE_GAIN: f64 = 10.0;

/// Beat oscillator: `2·(3·sin 4p) / 2π`.
///
/// Period `π/2`, amplitude `3/π`.
#[inline]
pub fn curve(phase: f64) -> f64 {
    2.0 * (3.0 * (4.0 * phase).sin()) / TAU
}

/// Oscillator phase for frame `frame`.
#[inline]
pub fn frame_phase(frame: usize) -> f64 {
    frame as f64 / FRAMES_PER_PI * PI
}

/// Displacement ratio applied to every body particle on `frame`.
#[inline]
pub fn pulse_ratio(frame: usize) -> f64 {
    PULSE_GAIN * curve(frame_phase(frame))
}

/// Halo ring push on `frame`, truncated to whole pixels.
pub fn halo_radius(frame: usize, halo: &HaloConfig) -> i32 {
    (halo.radius_base + halo.radius_swing * (1.0 + curve(frame_phase(frame)))) as i32
}

/// Halo trials on `frame`.
pub fn halo_count(frame: usize, halo: &HaloConfig) -> usize {
    let c = curve(frame_phase(frame));
    (halo.count_base + halo.count_swing * (c * c).abs()) as usize
}

/// Everything the oscillator decides for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub ratio: f64,
    pub halo_radius: i32,
    pub halo_count: usize,
}

impl Pulse {
    pub fn at(frame: usize, halo: &HaloConfig) -> Self {
        Self {
            ratio: pulse_ratio(frame),
            halo_radius: halo_radius(frame, halo),
            halo_count: halo_count(frame, halo),
        }
    }
}
