//! Animation loop state management.

use pixel_wind_core::{ParticlePool, Scene, Viewport};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::animations::wind;
use crate::generator::generate;
use crate::render::Renderer;
use crate::rng::RandomStream;
use crate::surface::Surface;

/// Lifecycle of an [`AnimationLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    #[default]
    Uninitialized,
    Running,
}

/// Frame-by-frame driver for the wind scene.
///
/// The host calls [`tick`](Self::tick) once per presentation callback.
/// Reseeding and resizing take `&mut self`, so they always land between
/// ticks and never in the middle of a draw.
#[derive(Debug)]
pub struct AnimationLoop {
    phase: LoopPhase,
    /// Seed of the current scene.
    seed: f64,
    /// Frames drawn since the last start or reseed.
    frame: u64,
    viewport: Viewport,
    scene: Scene,
    particles: ParticlePool,
    renderer: Renderer,
    /// Non-seeded source for default seeds and wrap-around resets.
    ambient: StdRng,
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl AnimationLoop {
    /// Create an idle loop with an OS-seeded ambient random source.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_ambient_rng(viewport, StdRng::from_os_rng())
    }

    /// Create an idle loop with a caller-provided ambient random source.
    pub fn with_ambient_rng(viewport: Viewport, ambient: StdRng) -> Self {
        Self {
            phase: LoopPhase::Uninitialized,
            seed: 0.0,
            frame: 0,
            viewport,
            scene: Scene::default(),
            particles: ParticlePool::default(),
            renderer: Renderer,
            ambient,
        }
    }

    /// Generate a fresh scene and start running.
    ///
    /// Without a seed one is drawn from the ambient source.
    pub fn start(&mut self, seed: Option<f64>) {
        let seed = seed.unwrap_or_else(|| self.ambient.random::<f64>());
        let (scene, particles) = generate(&mut RandomStream::new(seed), self.viewport);
        tracing::debug!(
            seed,
            wind = ?scene.wind,
            rose = ?scene.rose,
            sky = ?scene.sky,
            particles = particles.len(),
            "scene generated"
        );

        self.seed = seed;
        self.frame = 0;
        self.scene = scene;
        self.particles = particles;
        self.phase = LoopPhase::Running;
    }

    /// Discard the current scene and frame count and start over from `seed`.
    pub fn reseed(&mut self, seed: f64) {
        self.start(Some(seed));
    }

    /// Recompute the viewport from the host's aspect ratio (width / height).
    ///
    /// Particles and the frame counter are left untouched.
    pub fn resize(&mut self, aspect: f64) {
        self.set_viewport(Viewport::from_aspect(aspect));
    }

    /// Replace the viewport geometry directly.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            tracing::debug!(width = viewport.width, height = viewport.height, "viewport resized");
        }
        self.viewport = viewport;
    }

    /// Draw the current frame, then advance the simulation by one step.
    ///
    /// Does nothing until the loop has been started.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        if self.phase != LoopPhase::Running {
            return;
        }
        if surface.width() != self.viewport.width || surface.height() != self.viewport.height {
            surface.resize(self.viewport.width, self.viewport.height);
        }

        surface.clear();
        self.renderer.draw(
            surface,
            &self.scene,
            &self.particles,
            self.frame,
            self.viewport,
            self.viewport.rose_anchor(),
        );
        wind::step(
            &mut self.particles,
            self.frame,
            self.viewport,
            self.scene.wind,
            &mut self.ambient,
        );
        self.frame += 1;
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }

    pub fn seed(&self) -> f64 {
        self.seed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }
}
