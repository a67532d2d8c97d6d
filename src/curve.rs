//! Heart curve and the radial forces measured from the canvas center.
//!
//! The heart is the classic parametric curve
//!
//! ```text
//! x(t) =  16 sin³ t
//! y(t) = -(13 cos t - 5 cos 2t - 2 cos 3t - cos 4t)
//! ```
//!
//! with `y` negated because canvas rows grow downward. Both forces divide by
//! a power of the squared distance to the center; a point sitting exactly on
//! the center feels no force.

use glam::DVec2;

/// Exponent on `d²` for the halo ring push (`d^1.2`).
pub const SHRINK_EXPONENT: f64 = 0.6;

/// Exponent on `d²` for the body pulse (`d^1.04`).
pub const ATTRACT_EXPONENT: f64 = 0.52;

/// Point on the unit heart curve at angle `t`, before scaling.
#[inline]
pub fn unit_heart(t: f64) -> DVec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    DVec2::new(x, y)
}

/// Heart curve at angle `t`, scaled by `scale` and centered on `center`.
#[inline]
pub fn heart_curve(t: f64, scale: f64, center: DVec2) -> DVec2 {
    unit_heart(t) * scale + center
}

/// [`heart_curve`] truncated to whole pixels.
///
/// Outline and halo samples are taken on the pixel grid, so nearby angles
/// collapse onto the same coordinate and get deduplicated.
#[inline]
pub fn heart_curve_px(t: f64, scale: f64, center: DVec2) -> DVec2 {
    heart_curve(t, scale, center).trunc()
}

/// `1 / (d²)^exponent`, or zero at the center.
#[inline]
fn radial_force(offset: DVec2, exponent: f64) -> f64 {
    let d2 = offset.length_squared();
    if d2 > 0.0 {
        d2.powf(exponent).recip()
    } else {
        0.0
    }
}

/// Halo ring transform: pushes a point along its radius by
/// `ratio / d^1.2` of its offset.
///
/// Points near the center move the most, which thickens the halo into a
/// ring whose width follows `ratio`.
pub fn shrink_toward(point: DVec2, center: DVec2, ratio: f64) -> DVec2 {
    let offset = point - center;
    let force = -radial_force(offset, SHRINK_EXPONENT);
    point - ratio * force * offset
}

/// Body pulse transform: moves a point toward the center by
/// `ratio / d^1.04` of its offset, then subtracts `jitter`.
///
/// Negative `ratio` expands the heart instead. At the center only the
/// jitter applies.
pub fn attract_toward(point: DVec2, center: DVec2, ratio: f64, jitter: DVec2) -> DVec2 {
    let offset = point - center;
    let force = radial_force(offset, ATTRACT_EXPONENT);
    point - (ratio * force * offset + jitter)
}
