//! Drawing a cached frame onto any surface.
//!
//! The renderer knows nothing about windows or GPUs. Hosts implement
//! [`Canvas`] with four primitives and call [`Renderer::render_frame`] once
//! per tick with an ever-increasing frame counter:
//!
//! ```ignore
//! let renderer = Renderer::new();
//! let mut frame = 0;
//! loop {
//!     renderer.render_frame(&heart, &mut canvas, frame);
//!     frame += 1;
//!     sleep(heart.config().frame_delay);
//! }
//! ```

use crate::color::{FrameColors, Rgb};
use crate::frames::Layer;
use crate::Heart;

/// Drawing surface provided by the host.
pub trait Canvas {
    /// Surface size in canvas pixels.
    fn size(&self) -> (u32, u32);

    /// Wipe everything drawn so far.
    fn clear(&mut self, color: Rgb);

    /// Filled axis-aligned square with its top-left corner at `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, size: f32, color: Rgb);

    /// Filled circle inscribed in the square at `(x, y)` with side `size`.
    fn fill_circle(&mut self, x: f32, y: f32, size: f32, color: Rgb);
}

/// Replays a [`Heart`]'s cached frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub const fn new() -> Self {
        Self
    }

    /// Clears `canvas` and draws frame `frame`.
    ///
    /// The particles come from `heart.frame(frame)` (wrapping). Colors use the
    /// raw counter, so the color pulse does not restart with the particle loop.
    pub fn render_frame<C: Canvas + ?Sized>(&self, heart: &Heart, canvas: &mut C, frame: u64) {
        let config = heart.config();
        let palette = &config.palette;
        let colors = FrameColors::for_frame(palette, frame);

        canvas.clear(palette.canvas);

        for particle in heart.frame(frame) {
            let (color, size) = match particle.layer {
                Layer::Halo => (colors.halo, particle.size),
                Layer::Outline => (colors.outline, particle.size + config.outline_boost),
                Layer::EdgeDiffusion => (colors.edge, particle.size),
                Layer::CenterDiffusion => (colors.center, particle.size),
            };
            canvas.fill_rect(
                particle.position.x as f32,
                particle.position.y as f32,
                size as f32,
                color,
            );
        }

        for (i, ember) in heart.background_particles().iter().enumerate() {
            canvas.fill_circle(
                ember.position.x as f32,
                ember.position.y as f32,
                ember.size as f32,
                palette.twinkle(i, frame),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeartConfig;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear(Rgb),
        Rect { x: f32, y: f32, size: f32, color: Rgb },
        Circle { x: f32, y: f32, size: f32, color: Rgb },
    }

    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
    }

    impl Canvas for RecordingCanvas {
        fn size(&self) -> (u32, u32) {
            (980, 640)
        }

        fn clear(&mut self, color: Rgb) {
            self.ops.clear();
            self.ops.push(Op::Clear(color));
        }

        fn fill_rect(&mut self, x: f32, y: f32, size: f32, color: Rgb) {
            self.ops.push(Op::Rect { x, y, size, color });
        }

        fn fill_circle(&mut self, x: f32, y: f32, size: f32, color: Rgb) {
            self.ops.push(Op::Circle { x, y, size, color });
        }
    }

    fn heart() -> Heart {
        let config = HeartConfig::default()
            .with_frame_count(4)
            .with_outline_samples(200)
            .with_center_samples(300)
            .with_background_particles(10);
        Heart::from_seed(config, 9).unwrap()
    }

    #[test]
    fn test_one_primitive_per_particle() {
        let heart = heart();
        let mut canvas = RecordingCanvas::default();
        Renderer::new().render_frame(&heart, &mut canvas, 2);

        assert_eq!(canvas.ops[0], Op::Clear(Rgb::BLACK));
        let rects = canvas.ops.iter().filter(|op| matches!(op, Op::Rect { .. })).count();
        let circles = canvas.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).count();
        assert_eq!(rects, heart.frame(2).len());
        assert_eq!(circles, 10);
        assert_eq!(canvas.ops.len(), 1 + rects + circles);
    }

    fn assert_outline_boost(heart: &Heart, boost: u32) {
        let mut canvas = RecordingCanvas::default();
        Renderer::new().render_frame(heart, &mut canvas, 0);

        let frame = heart.frame(0);
        for (particle, op) in frame.iter().zip(canvas.ops.iter().skip(1)) {
            let Op::Rect { size, .. } = op else {
                panic!("expected a rect, got {op:?}");
            };
            let expected = match particle.layer {
                Layer::Outline => particle.size + boost,
                _ => particle.size,
            };
            assert_eq!(*size, expected as f32);
        }
    }

    #[test]
    fn test_glow_outline_is_drawn_one_pixel_larger() {
        assert_outline_boost(&heart(), 1);
    }

    #[test]
    fn test_classic_outline_keeps_its_size() {
        let config = HeartConfig::classic()
            .with_frame_count(2)
            .with_outline_samples(200)
            .with_center_samples(300);
        let heart = Heart::from_seed(config, 9).unwrap();
        assert_eq!(heart.config().outline_boost, 0);
        assert_outline_boost(&heart, 0);
    }

    #[test]
    fn test_layers_get_their_frame_colors() {
        let heart = heart();
        let mut canvas = RecordingCanvas::default();
        Renderer::new().render_frame(&heart, &mut canvas, 5);

        let colors = FrameColors::for_frame(&heart.config().palette, 5);
        for (particle, op) in heart.frame(5).iter().zip(canvas.ops.iter().skip(1)) {
            let Op::Rect { color, .. } = op else {
                panic!("expected a rect, got {op:?}");
            };
            let expected = match particle.layer {
                Layer::Halo => colors.halo,
                Layer::Outline => colors.outline,
                Layer::EdgeDiffusion => colors.edge,
                Layer::CenterDiffusion => colors.center,
            };
            assert_eq!(*color, expected);
        }
    }

    #[test]
    fn test_wrapped_frames_draw_same_geometry() {
        let heart = heart();
        let mut a = RecordingCanvas::default();
        let mut b = RecordingCanvas::default();
        Renderer::new().render_frame(&heart, &mut a, 1);
        Renderer::new().render_frame(&heart, &mut b, 5);

        let geometry = |ops: &[Op]| -> Vec<(f32, f32, f32)> {
            ops.iter()
                .filter_map(|op| match op {
                    Op::Rect { x, y, size, .. } => Some((*x, *y, *size)),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(geometry(&a.ops), geometry(&b.ops));
    }
}
