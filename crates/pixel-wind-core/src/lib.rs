//! Core types shared by the pixel-wind crates.
//!
//! Everything here is plain data: colors, the logical viewport, the
//! categorical scene styles and the particle pool. The behavior that
//! produces and mutates these values lives in `pixel-wind-scene`.

mod color;
mod particle;
mod scene;
mod viewport;

pub use color::{Rgb, palette};
pub use particle::{Particle, ParticlePool};
pub use scene::{RoseColor, Scene, SkyType, WindStyle};
pub use viewport::Viewport;
