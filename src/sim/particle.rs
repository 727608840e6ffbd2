//! Explosion particles
//!
//! Purely visual: particles never affect gameplay, but they are simulated in
//! the fixed tick so the effect is identical for identical seeds.

use glam::Vec2;
use rand::Rng;

use crate::Color;
use crate::tuning::ParticleTuning;

/// A decaying fragment
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Velocity (pixels/sec)
    pub vel: Vec2,
    pub color: Color,
    /// 0-1, decreases over time
    pub life: f32,
    pub size: f32,
}

impl Particle {
    pub fn update(&mut self, dt: f32, tuning: &ParticleTuning) {
        self.pos += self.vel * dt;
        self.life -= tuning.life_decay * dt;
        self.size -= tuning.shrink_rate * dt;
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0 || self.size <= 0.0
    }

    /// Draw opacity, never negative
    pub fn opacity(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Owns every live particle
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    tuning: ParticleTuning,
}

impl ParticleSystem {
    pub fn new(tuning: ParticleTuning) -> Self {
        Self {
            particles: Vec::new(),
            tuning,
        }
    }

    /// Spawn `count` particles at `center` with random velocity and size.
    /// Spawns beyond the particle cap are dropped.
    pub fn create_explosion(
        &mut self,
        center: Vec2,
        color: Color,
        count: usize,
        rng: &mut impl Rng,
    ) {
        let room = self.tuning.max_particles.saturating_sub(self.particles.len());
        let t = &self.tuning;
        for _ in 0..count.min(room) {
            let vel = Vec2::new(
                rng.random_range(-t.max_speed..t.max_speed),
                rng.random_range(-t.max_speed..t.max_speed),
            );
            self.particles.push(Particle {
                pos: center,
                vel,
                color,
                life: 1.0,
                size: rng.random_range(t.min_size..t.max_size),
            });
        }
    }

    /// Advance every particle, then prune the dead ones
    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.update(dt, &self.tuning);
        }
        self.particles.retain(|p| !p.is_dead());
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
