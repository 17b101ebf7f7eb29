//! Seeded procedural wind scene for pixel-wind.
//!
//! A [`RandomStream`] built from a seed drives [`generate`], which picks the
//! scene styles and lays out the particles. [`AnimationLoop`] then advances
//! and draws that state one frame per tick onto any [`Surface`]. For a given
//! seed and frame count the logical state is identical on every run; only
//! wrap-around resets draw from the loop's ambient random source.

mod animations;
mod generator;
mod render;
mod rng;
mod state;
mod surface;

pub use animations::wind::step;
pub use generator::generate;
pub use render::Renderer;
pub use rng::RandomStream;
pub use state::{AnimationLoop, LoopPhase};
pub use surface::{Paint, PixelSurface, Surface};
