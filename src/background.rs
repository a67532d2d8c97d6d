//! Ambient background particles.
//!
//! A fixed field of tiny embers spread over the whole canvas. Positions and
//! sizes are drawn once; only their color changes, through
//! [`Palette::twinkle`](crate::color::Palette::twinkle).

use glam::DVec2;

use crate::config::HeartConfig;
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundParticle {
    pub position: DVec2,
    pub size: u32,
}

/// Scatters `config.background_particles` embers over the canvas, edges
/// included.
pub fn scatter_background(config: &HeartConfig, rng: &mut impl RandomSource) -> Vec<BackgroundParticle> {
    let sizes = &config.background_sizes;
    (0..config.background_particles)
        .map(|_| {
            let x = rng.int_inclusive(0, config.width as i32);
            let y = rng.int_inclusive(0, config.height as i32);
            let size = rng.int_inclusive(*sizes.start() as i32, *sizes.end() as i32) as u32;
            BackgroundParticle {
                position: DVec2::new(x as f64, y as f64),
                size,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;

    #[test]
    fn test_count_and_bounds() {
        let config = HeartConfig::glow();
        let embers = scatter_background(&config, &mut seeded(1));
        assert_eq!(embers.len(), 120);
        for e in &embers {
            assert!(e.position.x >= 0.0 && e.position.x <= 980.0);
            assert!(e.position.y >= 0.0 && e.position.y <= 640.0);
            assert!((1..=2).contains(&e.size));
        }
    }

    #[test]
    fn test_classic_has_none() {
        let embers = scatter_background(&HeartConfig::classic(), &mut seeded(1));
        assert!(embers.is_empty());
    }
}
