//! Wind particles (stateful): per-frame motion and drawing.

use pixel_wind_core::{ParticlePool, Viewport, WindStyle};
use rand::Rng;

use crate::surface::{Paint, Surface};

/// Where a particle re-enters after leaving an edge.
const REENTRY: f64 = -10.0;
/// Extra fall per frame for petals.
const PETAL_FALL: f64 = 0.2;
/// Fraction of the height a particle may re-enter at from the left edge.
const REENTRY_BAND: f64 = 0.8;

/// Advance every particle by one frame.
///
/// Particles that cross the right or bottom edge re-enter from the opposite
/// side at a position drawn from `ambient`, not from the seeded stream.
/// The right edge is checked before the bottom edge. Particles drifting
/// above the re-entry line are held on it.
pub fn step<R: Rng>(
    particles: &mut ParticlePool,
    frame: u64,
    viewport: Viewport,
    wind: WindStyle,
    ambient: &mut R,
) {
    let (width, height) = (viewport.width_f(), viewport.height_f());
    let amplitude = wind.drift_amplitude();
    let phase = frame as f64 * 0.02;

    for p in particles {
        p.x += p.speed;
        p.y += (p.x * 0.05 + phase).sin() * amplitude;
        if p.is_petal {
            p.y += PETAL_FALL;
        }

        if p.x > width {
            p.x = REENTRY;
            p.y = ambient.random::<f64>() * height * REENTRY_BAND;
        }
        if p.y > height {
            p.y = REENTRY;
            p.x = ambient.random::<f64>() * width;
        }
        if p.y < REENTRY {
            p.y = REENTRY;
        }
    }
}

/// Draw each particle as a `size`×`size` square at its rounded position.
pub fn draw(surface: &mut impl Surface, particles: &ParticlePool) {
    for p in particles {
        let size = p.size as f64;
        surface.set_global_alpha(p.opacity);
        surface.fill_rect(
            round_half_up(p.x),
            round_half_up(p.y),
            size,
            size,
            &Paint::solid(p.color),
        );
        surface.set_global_alpha(1.0);
    }
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use pixel_wind_core::{Particle, palette};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::generator::generate;
    use crate::rng::RandomStream;

    fn particle(x: f64, y: f64, speed: f64, is_petal: bool) -> Particle {
        Particle {
            x,
            y,
            speed,
            size: 1,
            opacity: 0.3,
            color: palette::WIND,
            is_petal,
        }
    }

    fn viewport() -> Viewport {
        Viewport {
            width: 320,
            height: 180,
        }
    }

    #[test]
    fn test_step_moves_right_and_drifts() {
        let mut pool: ParticlePool = [particle(10.0, 50.0, 1.0, false)].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(1);
        step(&mut pool, 0, viewport(), WindStyle::Calm, &mut rng);
        let expected_y = 50.0 + (11.0_f64 * 0.05).sin() * 0.2;
        assert_eq!(pool[0].x, 11.0);
        assert!((pool[0].y - expected_y).abs() < 1e-12);
    }

    #[test]
    fn test_petals_fall() {
        let mut pool: ParticlePool = [
            particle(0.0, 50.0, 1.0, false),
            particle(0.0, 50.0, 1.0, true),
        ]
        .into_iter()
        .collect();
        let mut rng = StdRng::seed_from_u64(1);
        step(&mut pool, 3, viewport(), WindStyle::Breezy, &mut rng);
        assert!((pool[1].y - pool[0].y - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_wraps_right_edge() {
        let mut pool: ParticlePool = [particle(319.5, 50.0, 1.0, false)].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(2);
        step(&mut pool, 0, viewport(), WindStyle::Calm, &mut rng);
        assert_eq!(pool[0].x, -10.0);
        assert!((0.0..144.0).contains(&pool[0].y));
    }

    #[test]
    fn test_wraps_bottom_edge() {
        let mut pool: ParticlePool = [particle(100.0, 181.0, 0.5, true)].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(3);
        step(&mut pool, 0, viewport(), WindStyle::Calm, &mut rng);
        assert_eq!(pool[0].y, -10.0);
        assert!((0.0..320.0).contains(&pool[0].x));
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let vp = viewport();
        for seed in [0.0, 0.123456, 0.5, 0.77] {
            let (scene, mut pool) = generate(&mut RandomStream::new(seed), vp);
            let mut rng = StdRng::seed_from_u64(9);
            for frame in 0..2000 {
                step(&mut pool, frame, vp, scene.wind, &mut rng);
                for p in &pool {
                    assert!((-10.0..=320.0).contains(&p.x), "x out of bounds: {}", p.x);
                    assert!((-10.0..=180.0).contains(&p.y), "y out of bounds: {}", p.y);
                }
            }
            assert_eq!(pool.len(), scene.wind.particle_count());
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-0.4), 0.0);
    }
}
