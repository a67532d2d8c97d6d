//! Error types for pulseheart.
//!
//! Building a heart can only fail on a bad configuration. Everything else
//! that can go wrong belongs to the host: event loop, window and GPU setup.

use thiserror::Error;

/// A configuration the generator refuses to animate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Canvas with a zero dimension.
    #[error("canvas must be non-empty, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    /// Nothing to cache.
    #[error("frame count must be at least 1")]
    NoFrames,
    /// No outline means no diffusion layers either.
    #[error("outline sample count must be at least 1")]
    NoOutlineSamples,
    /// The frame clock would spin.
    #[error("frame delay must be non-zero")]
    ZeroDelay,
    /// A scale or scatter strength that is zero, negative or not finite.
    #[error("`{name}` must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    /// Halo particles have nothing to pick their size from.
    #[error("halo size list is empty")]
    NoHaloSizes,
    /// A particle size range with no values in it.
    #[error("`{name}` size range is empty")]
    EmptySizeRange { name: &'static str },
}

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
    /// The surface reports no usable texture format.
    #[error("surface exposes no texture formats for this adapter")]
    NoSurfaceFormat,
}

/// Errors that can occur while running the animation window.
#[derive(Debug, Error)]
pub enum HeartError {
    /// The configuration was rejected before anything was built.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// Failed to create or run the event loop.
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create the window.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::EmptyCanvas { width: 0, height: 640 };
        assert_eq!(err.to_string(), "canvas must be non-empty, got 0x640");

        let err = ConfigError::NonPositive { name: "edge_beta", value: -1.0 };
        assert_eq!(err.to_string(), "`edge_beta` must be a positive finite number, got -1");
    }

    #[test]
    fn test_config_error_converts_into_heart_error() {
        let err: HeartError = ConfigError::NoFrames.into();
        assert!(matches!(err, HeartError::Config(ConfigError::NoFrames)));
        assert_eq!(err.to_string(), "invalid configuration: frame count must be at least 1");
    }
}
