//! Cosmetic particle bursts
//!
//! Particles are fire-and-forget: they are drawn when a brick breaks and
//! deleted once their expiry time passes. Nothing in the game waits on them.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::surface::{Shape, ShapeId, Style, Surface, colors};

/// A live particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub shape: ShapeId,
    /// Session clock time (ms) at which the particle disappears
    pub expires_at: u64,
}

/// Timed visual effects
#[derive(Debug, Clone)]
pub struct Effects {
    rng: Pcg32,
    particles: Vec<Particle>,
    /// Clock reading used to stamp new particles
    now: u64,
    burst_size: usize,
    lifetime_ms: u64,
}

impl Effects {
    pub fn new(seed: u64, burst_size: usize, lifetime_ms: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            particles: Vec::with_capacity(burst_size),
            now: 0,
            burst_size,
            lifetime_ms,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Spawn an explosion around `center`
    pub fn burst(&mut self, surface: &mut dyn Surface, center: Vec2) {
        let expires_at = self.now.saturating_add(self.lifetime_ms);
        for _ in 0..self.burst_size {
            let offset = Vec2::new(
                self.rng.random_range(-PARTICLE_SPREAD_X..=PARTICLE_SPREAD_X) as f32,
                self.rng.random_range(-PARTICLE_SPREAD_Y..=PARTICLE_SPREAD_Y) as f32,
            );
            let shape = surface.draw(
                Shape::Circle {
                    center: center + offset,
                    radius: PARTICLE_RADIUS,
                },
                Style::outlined(colors::PARTICLE, colors::PARTICLE_OUTLINE),
            );
            self.particles.push(Particle { shape, expires_at });
        }
    }

    /// Advance to `now` and delete every particle that has expired
    pub fn prune(&mut self, surface: &mut dyn Surface, now: u64) {
        self.now = now;
        self.particles.retain(|p| {
            let alive = p.expires_at > now;
            if !alive {
                surface.delete(p.shape);
            }
            alive
        });
    }
}
