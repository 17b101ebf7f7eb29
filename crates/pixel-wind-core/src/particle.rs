//! Particle records and the fixed-size pool that owns them.

use std::ops::{Index, IndexMut};

use crate::color::Rgb;

/// A single drifting wind streak or rose petal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Horizontal pixels per frame.
    pub speed: f64,
    /// Side of the drawn square, 1 or 2.
    pub size: u8,
    /// Alpha in `[0.1, 0.5)`.
    pub opacity: f64,
    pub color: Rgb,
    /// Petals sink slowly as they drift.
    pub is_petal: bool,
}

/// Owned, fixed-length arena of particles.
///
/// The length is decided when the scene is generated and never changes;
/// particles leaving the viewport are reset in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticlePool {
    particles: Box<[Particle]>,
}

impl ParticlePool {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }
}

impl FromIterator<Particle> for ParticlePool {
    fn from_iter<I: IntoIterator<Item = Particle>>(iter: I) -> Self {
        Self {
            particles: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for ParticlePool {
    type Output = Particle;

    fn index(&self, index: usize) -> &Particle {
        &self.particles[index]
    }
}

impl IndexMut<usize> for ParticlePool {
    fn index_mut(&mut self, index: usize) -> &mut Particle {
        &mut self.particles[index]
    }
}

impl<'a> IntoIterator for &'a ParticlePool {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

impl<'a> IntoIterator for &'a mut ParticlePool {
    type Item = &'a mut Particle;
    type IntoIter = std::slice::IterMut<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter_mut()
    }
}
