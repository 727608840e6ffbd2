//! Player projectiles

use glam::Vec2;

use super::collision::Rect;
use crate::tuning::BulletTuning;

/// A projectile travelling straight up
#[derive(Debug, Clone)]
pub struct Bullet {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Upward speed (pixels/sec)
    pub speed: f32,
    active: bool,
}

impl Bullet {
    pub fn new(pos: Vec2, tuning: &BulletTuning) -> Self {
        Self {
            pos,
            size: Vec2::new(tuning.width, tuning.height),
            speed: tuning.speed,
            active: true,
        }
    }

    /// Spawn a bullet horizontally centered on `muzzle`, with its top edge at muzzle.y
    pub fn fired_from(muzzle: Vec2, tuning: &BulletTuning) -> Self {
        Self::new(Vec2::new(muzzle.x - tuning.width / 2.0, muzzle.y), tuning)
    }

    /// Advance upward; deactivates once fully past the top edge
    pub fn update(&mut self, dt: f32) {
        self.pos.y -= self.speed * dt;
        if self.pos.y + self.size.y < 0.0 {
            self.active = false;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
