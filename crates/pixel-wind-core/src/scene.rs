//! Categorical scene styles picked once per seed.

use crate::color::{Rgb, palette};

/// How hard the wind blows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindStyle {
    #[default]
    Calm,
    Breezy,
}

impl WindStyle {
    /// Number of particles a scene with this wind carries.
    pub const fn particle_count(self) -> usize {
        match self {
            WindStyle::Calm => 40,
            WindStyle::Breezy => 80,
        }
    }

    /// Multiplier applied to each particle's base speed.
    pub const fn speed_factor(self) -> f64 {
        match self {
            WindStyle::Calm => 1.0,
            WindStyle::Breezy => 2.0,
        }
    }

    /// Amplitude of the vertical sine drift.
    pub const fn drift_amplitude(self) -> f64 {
        match self {
            WindStyle::Calm => 0.2,
            WindStyle::Breezy => 0.5,
        }
    }
}

/// Color of the rose head and its petals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoseColor {
    #[default]
    Red,
    Pink,
    Gold,
}

impl RoseColor {
    pub const fn rgb(self) -> Rgb {
        match self {
            RoseColor::Red => palette::ROSE_RED,
            RoseColor::Pink => palette::ROSE_PINK,
            RoseColor::Gold => palette::ROSE_GOLD,
        }
    }
}

/// Sky gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkyType {
    #[default]
    Night,
    Dusk,
}

impl SkyType {
    /// Top and bottom gradient stops.
    pub const fn gradient(self) -> (Rgb, Rgb) {
        match self {
            SkyType::Night => (palette::NIGHT_TOP, palette::NIGHT_BOTTOM),
            SkyType::Dusk => (palette::DUSK_TOP, palette::DUSK_BOTTOM),
        }
    }
}

/// The style choices derived from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scene {
    pub wind: WindStyle,
    pub rose: RoseColor,
    pub sky: SkyType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_count_by_wind() {
        assert_eq!(WindStyle::Calm.particle_count(), 40);
        assert_eq!(WindStyle::Breezy.particle_count(), 80);
    }

    #[test]
    fn test_sky_gradients_differ() {
        assert_ne!(SkyType::Night.gradient(), SkyType::Dusk.gradient());
    }
}
