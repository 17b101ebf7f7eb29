//! Sky gradient and ground band (stateless).

use pixel_wind_core::{SkyType, Viewport, palette};

use crate::surface::{Paint, Surface};

/// Height of the ground band at the bottom of the viewport.
pub const GROUND_HEIGHT: f64 = 20.0;

/// Paint the full-viewport sky gradient and the ground band over it.
pub fn draw(surface: &mut impl Surface, sky: SkyType, viewport: Viewport) {
    let (width, height) = (viewport.width_f(), viewport.height_f());
    let (top, bottom) = sky.gradient();

    surface.fill_rect(
        0.0,
        0.0,
        width,
        height,
        &Paint::VerticalGradient {
            y0: 0.0,
            y1: height,
            top,
            bottom,
        },
    );
    surface.fill_rect(
        0.0,
        height - GROUND_HEIGHT,
        width,
        GROUND_HEIGHT,
        &Paint::solid(palette::GROUND),
    );
}
