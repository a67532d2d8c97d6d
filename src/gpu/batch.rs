//! CPU-side quad list the GPU draws in one instanced call.

use bytemuck::{Pod, Zeroable};

use crate::color::Rgb;
use crate::render::Canvas;

/// Quad is a filled square.
pub const SHAPE_SQUARE: u32 = 0;
/// Quad is a filled circle inscribed in its square.
pub const SHAPE_CIRCLE: u32 = 1;

/// One instanced quad, laid out for the vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    /// Top-left corner in canvas pixels.
    pub origin: [f32; 2],
    /// Side length in canvas pixels.
    pub size: f32,
    /// [`SHAPE_SQUARE`] or [`SHAPE_CIRCLE`].
    pub shape: u32,
    /// Linear RGBA.
    pub color: [f32; 4],
}

/// A [`Canvas`] that records quads for [`GpuState::render`](super::GpuState::render).
#[derive(Debug, Clone)]
pub struct QuadBatch {
    size: (u32, u32),
    clear: Rgb,
    instances: Vec<QuadInstance>,
}

impl QuadBatch {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            clear: Rgb::BLACK,
            instances: Vec::new(),
        }
    }

    pub fn instances(&self) -> &[QuadInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Color the frame is cleared to.
    pub fn clear_color(&self) -> Rgb {
        self.clear
    }

    fn push(&mut self, x: f32, y: f32, size: f32, shape: u32, color: Rgb) {
        self.instances.push(QuadInstance {
            origin: [x, y],
            size,
            shape,
            color: color.to_linear_rgba(),
        });
    }
}

impl Canvas for QuadBatch {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn clear(&mut self, color: Rgb) {
        self.clear = color;
        self.instances.clear();
    }

    fn fill_rect(&mut self, x: f32, y: f32, size: f32, color: Rgb) {
        self.push(x, y, size, SHAPE_SQUARE, color);
    }

    fn fill_circle(&mut self, x: f32, y: f32, size: f32, color: Rgb) {
        self.push(x, y, size, SHAPE_CIRCLE, color);
    }
}
