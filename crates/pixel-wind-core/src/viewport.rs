//! Logical drawing area.

/// Logical size of the drawing surface.
///
/// The height is fixed; the width follows the host's aspect ratio so the
/// pixels stay square whatever the window shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 320,
            height: Self::LOGICAL_HEIGHT,
        }
    }
}

impl Viewport {
    /// Fixed logical height in pixels.
    pub const LOGICAL_HEIGHT: u32 = 180;

    /// Distance of the rose anchor above the bottom edge.
    const ROSE_LIFT: f64 = 40.0;

    /// Viewport for a host aspect ratio (width / height).
    ///
    /// A non-finite or non-positive ratio yields a zero-width viewport.
    pub fn from_aspect(aspect: f64) -> Self {
        let width = if aspect.is_finite() && aspect > 0.0 {
            (Self::LOGICAL_HEIGHT as f64 * aspect)
                .ceil()
                .min(u32::MAX as f64) as u32
        } else {
            0
        };
        Self {
            width,
            height: Self::LOGICAL_HEIGHT,
        }
    }

    pub fn width_f(&self) -> f64 {
        self.width as f64
    }

    pub fn height_f(&self) -> f64 {
        self.height as f64
    }

    /// Where the rose stem starts: horizontally centered, 40px above the bottom.
    pub fn rose_anchor(&self) -> (f64, f64) {
        (self.width_f() / 2.0, self.height_f() - Self::ROSE_LIFT)
    }
}
