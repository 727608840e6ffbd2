//! Scrolling background stars (decorative only)

use glam::Vec2;
use rand::Rng;

use crate::tuning::{Playfield, StarfieldTuning};

#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    /// Downward speed (pixels/sec)
    pub speed: f32,
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    height: f32,
}

impl Starfield {
    pub fn new(playfield: Playfield, tuning: &StarfieldTuning, rng: &mut impl Rng) -> Self {
        let stars = (0..tuning.star_count)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random_range(0.0..=playfield.width),
                    rng.random_range(0.0..=playfield.height),
                ),
                speed: rng.random_range(tuning.min_speed..=tuning.max_speed),
                size: rng.random_range(tuning.min_size..=tuning.max_size),
            })
            .collect();
        Self {
            stars,
            height: playfield.height,
        }
    }

    /// Scroll down, wrapping to the top edge
    pub fn update(&mut self, dt: f32) {
        for star in &mut self.stars {
            star.pos.y += star.speed * dt;
            if star.pos.y > self.height {
                star.pos.y = 0.0;
            }
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}
