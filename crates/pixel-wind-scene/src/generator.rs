//! Scene generation from a seeded stream.

use pixel_wind_core::{
    Particle, ParticlePool, RoseColor, Scene, SkyType, Viewport, WindStyle, palette,
};

use crate::rng::RandomStream;

/// Threshold above which a draw picks the first branch of a coin flip.
const COIN: f64 = 0.5;
/// Threshold above which a particle is a petal (or a plain streak is large).
const RARE: f64 = 0.8;

/// Pick the scene styles and lay out the particles.
///
/// Draws happen in a fixed order: wind, rose (one or two draws), sky, then
/// per particle: petal flag, x, y, speed, size (plain streaks only) and
/// opacity. Changing that order changes every scene for every seed.
pub fn generate(stream: &mut RandomStream, viewport: Viewport) -> (Scene, ParticlePool) {
    let wind = if stream.next_f64() > COIN {
        WindStyle::Breezy
    } else {
        WindStyle::Calm
    };
    // The second draw only happens when the first one misses.
    let rose = if stream.next_f64() > COIN {
        RoseColor::Red
    } else if stream.next_f64() > COIN {
        RoseColor::Pink
    } else {
        RoseColor::Gold
    };
    let sky = if stream.next_f64() > COIN {
        SkyType::Night
    } else {
        SkyType::Dusk
    };
    let scene = Scene { wind, rose, sky };

    let particles = (0..wind.particle_count())
        .map(|_| spawn_particle(stream, &scene, viewport))
        .collect();

    (scene, particles)
}

fn spawn_particle(stream: &mut RandomStream, scene: &Scene, viewport: Viewport) -> Particle {
    let is_petal = stream.next_f64() > RARE;
    let x = stream.next_f64() * viewport.width_f();
    let y = stream.next_f64() * viewport.height_f();
    let speed = (0.2 + stream.next_f64() * 0.5) * scene.wind.speed_factor();
    let size = if is_petal || stream.next_f64() > RARE {
        2
    } else {
        1
    };
    let opacity = 0.1 + stream.next_f64() * 0.4;

    Particle {
        x,
        y,
        speed,
        size,
        opacity,
        color: if is_petal {
            scene.rose.rgb()
        } else {
            palette::WIND
        },
        is_petal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            width: 320,
            height: 180,
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        for seed in [0.0, 0.123456, 0.5, 0.987654] {
            let a = generate(&mut RandomStream::new(seed), viewport());
            let b = generate(&mut RandomStream::new(seed), viewport());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_wind_follows_first_draw() {
        let first = RandomStream::new(0.123456).next_f64();
        let expected = if first > 0.5 {
            WindStyle::Breezy
        } else {
            WindStyle::Calm
        };
        let (scene, particles) = generate(&mut RandomStream::new(0.123456), viewport());
        assert_eq!(scene.wind, expected);
        assert_eq!(particles.len(), expected.particle_count());
    }

    #[test]
    fn test_known_scenes() {
        let (scene, _) = generate(&mut RandomStream::new(0.123456), viewport());
        assert_eq!(
            scene,
            Scene {
                wind: WindStyle::Calm,
                rose: RoseColor::Pink,
                sky: SkyType::Night,
            }
        );

        let (scene, particles) = generate(&mut RandomStream::new(0.5), viewport());
        assert_eq!(scene.wind, WindStyle::Breezy);
        assert_eq!(particles.len(), 80);

        let (scene, _) = generate(&mut RandomStream::new(0.0), viewport());
        assert_eq!(scene.rose, RoseColor::Gold);
        assert_eq!(scene.sky, SkyType::Dusk);
    }

    #[test]
    fn test_first_particle_layout() {
        let (_, particles) = generate(&mut RandomStream::new(0.123456), viewport());
        let p = particles[0];
        assert!(!p.is_petal);
        assert!((p.x - 35.663689970970154).abs() < 1e-9);
        assert!((p.y - 72.98430853988975).abs() < 1e-9);
        assert!((p.speed - 0.5239125479012727).abs() < 1e-9);
        assert_eq!(p.size, 1);
        assert!((p.opacity - 0.2544820138253272).abs() < 1e-9);
        assert_eq!(particles[1].size, 2);
    }

    #[test]
    fn test_particle_ranges() {
        for seed in [0.0, 0.25, 0.5, 0.75] {
            let (scene, particles) = generate(&mut RandomStream::new(seed), viewport());
            for p in &particles {
                assert!((0.0..320.0).contains(&p.x));
                assert!((0.0..180.0).contains(&p.y));
                assert!((0.1..0.5).contains(&p.opacity));
                assert!(p.size == 1 || p.size == 2);
                if p.is_petal {
                    assert_eq!(p.size, 2);
                    assert_eq!(p.color, scene.rose.rgb());
                } else {
                    assert_eq!(p.color, palette::WIND);
                }
                let max_speed = 0.7 * scene.wind.speed_factor();
                assert!(p.speed >= 0.2 * scene.wind.speed_factor() && p.speed < max_speed);
            }
        }
    }

    #[test]
    fn test_zero_width_viewport() {
        let vp = Viewport {
            width: 0,
            height: 180,
        };
        let (_, particles) = generate(&mut RandomStream::new(0.3), vp);
        assert!(particles.iter().all(|p| p.x == 0.0));
    }
}
