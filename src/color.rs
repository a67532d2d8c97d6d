//! Color interpolation and the per-frame palette.
//!
//! Colors live in 8-bit sRGB space, exactly as they are specified
//! (`#ff8a3d` and friends). Interpolation happens per channel in that space
//! and truncates toward zero. The GPU host converts to linear floats at the
//! last moment with [`Rgb::to_linear_rgba`].

use std::fmt;

/// An 8-bit-per-channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` literal.
    ///
    /// ```ignore
    /// let orange = Rgb::hex(0xff8a3d);
    /// assert_eq!(orange, Rgb::new(0xff, 0x8a, 0x3d));
    /// ```
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// `#rrggbb` form.
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear-light RGBA floats for an sRGB render target.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            1.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear blend from `a` to `b`.
///
/// `t` is clamped to `[0, 1]`, so every result is a valid color. Each
/// channel is `a + (b - a) * t` truncated toward zero, which makes both
/// endpoints exact.
pub fn lerp_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let channel = |x: u8, y: u8| {
        let x = x as f64;
        (x + (y as f64 - x) * t) as u8
    };
    Rgb {
        r: channel(a.r, b.r),
        g: channel(a.g, b.g),
        b: channel(a.b, b.b),
    }
}

/// A pair of colors swept by a phase in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    pub dim: Rgb,
    pub bright: Rgb,
}

impl ColorPair {
    pub const fn new(dim: Rgb, bright: Rgb) -> Self {
        Self { dim, bright }
    }

    /// Both ends the same color: the pair never changes.
    pub const fn flat(color: Rgb) -> Self {
        Self {
            dim: color,
            bright: color,
        }
    }

    #[inline]
    pub fn at(&self, phase: f64) -> Rgb {
        lerp_color(self.dim, self.bright, phase)
    }
}

/// A color mixed into the base color by a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub color: Rgb,
    pub amount: f64,
}

impl Tint {
    pub const fn new(color: Rgb, amount: f64) -> Self {
        Self { color, amount }
    }

    /// A tint that leaves the base untouched.
    pub const NONE: Tint = Tint::new(Rgb::BLACK, 0.0);

    #[inline]
    pub fn apply(&self, base: Rgb) -> Rgb {
        lerp_color(base, self.color, self.amount)
    }
}

/// Every color the renderer needs, as a function of the frame counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Canvas clear color.
    pub canvas: Rgb,
    /// Outline color, pulsing between `dim` and `bright`.
    pub base: ColorPair,
    /// Halo color, pulsing in step with `base`.
    pub halo: ColorPair,
    /// Edge diffusion layer: base mixed toward this tint.
    pub edge: Tint,
    /// Center diffusion layer: base mixed toward this tint.
    pub center: Tint,
    /// Ambient background particles.
    pub background: ColorPair,
    /// Fraction of the background sweep the twinkle may reach.
    pub twinkle_strength: f64,
    /// Angular speed of the body pulse, radians per frame.
    pub pulse_speed: f64,
    /// Angular speed of the background twinkle, radians per frame.
    pub twinkle_speed: f64,
}

impl Palette {
    /// Warm orange heart with a cream halo and glowing embers.
    pub fn glow() -> Self {
        Self {
            canvas: Rgb::BLACK,
            base: ColorPair::new(Rgb::hex(0xb54711), Rgb::hex(0xff8a3d)),
            halo: ColorPair::new(Rgb::hex(0xffe0c2), Rgb::hex(0xff9d50)),
            edge: Tint::new(Rgb::hex(0xffd7b0), 0.3),
            center: Tint::new(Rgb::WHITE, 0.1),
            background: ColorPair::new(Rgb::hex(0x251000), Rgb::hex(0xff9d50)),
            twinkle_strength: 0.25,
            pulse_speed: 0.4,
            twinkle_speed: 0.3,
        }
    }

    /// One flat pink for every layer.
    pub fn classic() -> Self {
        let pink = Rgb::hex(0xe77c8e);
        Self {
            canvas: Rgb::BLACK,
            base: ColorPair::flat(pink),
            halo: ColorPair::flat(pink),
            edge: Tint::NONE,
            center: Tint::NONE,
            background: ColorPair::flat(pink),
            twinkle_strength: 0.0,
            pulse_speed: 0.4,
            twinkle_speed: 0.3,
        }
    }

    /// Body pulse phase in `[0, 1]`.
    #[inline]
    pub fn pulse_phase(&self, frame: u64) -> f64 {
        ((frame as f64 * self.pulse_speed).sin() + 1.0) / 2.0
    }

    /// Twinkle color of background particle `index`.
    pub fn twinkle(&self, index: usize, frame: u64) -> Rgb {
        let phase = ((frame as f64 * self.twinkle_speed + index as f64).sin() + 1.0) / 2.0;
        self.background.at(phase * self.twinkle_strength)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::glow()
    }
}

/// Colors resolved for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameColors {
    pub halo: Rgb,
    pub outline: Rgb,
    pub edge: Rgb,
    pub center: Rgb,
}

impl FrameColors {
    pub fn for_frame(palette: &Palette, frame: u64) -> Self {
        let pulse = palette.pulse_phase(frame);
        let base = palette.base.at(pulse);
        Self {
            halo: palette.halo.at(pulse),
            outline: base,
            edge: palette.edge.apply(base),
            center: palette.center.apply(base),
        }
    }
}
