//! Full-frame scene rendering.

use pixel_wind_core::{ParticlePool, Scene, Viewport};

use crate::animations::{rose, sky, wind};
use crate::surface::Surface;

/// Paints a complete frame: sky and ground, then particles, then the rose.
///
/// Every call repaints the whole viewport, so the output depends only on
/// the arguments and never on what the surface held before.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn draw(
        &self,
        surface: &mut impl Surface,
        scene: &Scene,
        particles: &ParticlePool,
        frame: u64,
        viewport: Viewport,
        rose_anchor: (f64, f64),
    ) {
        sky::draw(surface, scene.sky, viewport);
        wind::draw(surface, particles);
        rose::draw(surface, scene.rose, frame, rose_anchor);
    }
}
