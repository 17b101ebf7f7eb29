//! Terminal presentation of a pixel surface.

use pixel_wind_scene::{PixelSurface, Surface};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Upper half block: foreground paints the top pixel, background the bottom one.
const HALF_BLOCK: &str = "▀";

/// Pixel aspect ratio (width / height) of a terminal area drawn with half blocks.
pub fn aspect_for_cells(cols: u16, rows: u16) -> f64 {
    cols as f64 / (rows as f64 * 2.0)
}

/// Scale the surface to `cols` × `rows` cells, two pixels per cell.
pub fn to_lines(surface: &PixelSurface, cols: u16, rows: u16) -> Vec<Line<'static>> {
    let (src_w, src_h) = (surface.width(), surface.height());
    let dst_h = rows as u32 * 2;
    let sample = |tx: u32, ty: u32| -> Color {
        if src_w == 0 || src_h == 0 {
            return Color::Reset;
        }
        let sx = (tx as u64 * src_w as u64 / cols.max(1) as u64) as u32;
        let sy = (ty as u64 * src_h as u64 / dst_h.max(1) as u64) as u32;
        surface
            .pixel(sx, sy)
            .map_or(Color::Reset, |[r, g, b, _]| Color::Rgb(r, g, b))
    };

    (0..rows as u32)
        .map(|row| {
            let spans: Vec<Span> = (0..cols as u32)
                .map(|col| {
                    let style = Style::new()
                        .fg(sample(col, row * 2))
                        .bg(sample(col, row * 2 + 1));
                    Span::styled(HALF_BLOCK, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
