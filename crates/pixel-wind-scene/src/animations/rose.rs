//! Swaying pixel rose (stateless, driven by the frame counter).

use pixel_wind_core::{RoseColor, palette};

use crate::surface::{Paint, Surface};

/// Horizontal sway of the head at a given frame, in pixels.
pub fn sway(frame: u64) -> f64 {
    (frame as f64 * 0.05).sin() * 2.0
}

/// Draw the rose with its stem base at `anchor`.
///
/// The stem stays put; leaves sway half as far as the head.
pub fn draw(surface: &mut impl Surface, rose: RoseColor, frame: u64, anchor: (f64, f64)) {
    let (x, y) = anchor;
    let sway = sway(frame);

    let stem = Paint::solid(palette::STEM);
    surface.fill_rect(x, y, 2.0, 20.0, &stem);
    surface.fill_rect(x - 2.0 + sway / 2.0, y + 10.0, 2.0, 2.0, &stem);
    surface.fill_rect(x + 2.0 + sway / 2.0, y + 14.0, 2.0, 2.0, &stem);

    surface.fill_rect(x - 2.0 + sway, y - 4.0, 6.0, 6.0, &Paint::solid(rose.rgb()));
    surface.fill_rect(
        x + sway + 1.0,
        y - 1.0,
        2.0,
        2.0,
        &Paint::Solid(palette::SHADOW, palette::SHADOW_ALPHA),
    );
}
