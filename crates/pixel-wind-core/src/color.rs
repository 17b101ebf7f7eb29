//! Color values used by the scene.

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Linear interpolation between two colors, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * t).round() as u8 };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Fixed scene palette.
pub mod palette {
    use super::Rgb;

    /// Night sky, top and bottom gradient stops.
    pub const NIGHT_TOP: Rgb = Rgb::from_hex(0x0d1b2a);
    pub const NIGHT_BOTTOM: Rgb = Rgb::from_hex(0x1b263b);
    /// Dusk sky, top and bottom gradient stops.
    pub const DUSK_TOP: Rgb = Rgb::from_hex(0x231942);
    pub const DUSK_BOTTOM: Rgb = Rgb::from_hex(0x5e548e);
    /// Dark silhouette ground band.
    pub const GROUND: Rgb = Rgb::from_hex(0x101820);
    pub const STEM: Rgb = Rgb::from_hex(0x2d6a4f);
    pub const SHADOW: Rgb = Rgb::from_hex(0x000000);
    pub const SHADOW_ALPHA: f64 = 0.2;
    /// Plain wind streaks.
    pub const WIND: Rgb = Rgb::from_hex(0xffffff);
    pub const ROSE_RED: Rgb = Rgb::from_hex(0xd00000);
    pub const ROSE_PINK: Rgb = Rgb::from_hex(0xff006e);
    pub const ROSE_GOLD: Rgb = Rgb::from_hex(0xffbe0b);
}
