//! The player's ship

use glam::Vec2;

use super::collision::Rect;
use crate::tuning::{Playfield, PlayerTuning};

/// Horizontal steering intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    Left,
    Right,
    #[default]
    Idle,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Horizontal velocity: -speed, 0 or +speed
    pub dx: f32,
    /// Remaining seconds during which formation contact is ignored
    pub grace: f32,
}

impl Player {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::new(tuning.width, tuning.height),
            speed: tuning.speed,
            dx: 0.0,
            grace: 0.0,
        }
    }

    /// A ship at its spawn point: centered, `bottom_margin` above the bottom edge
    pub fn spawn(playfield: Playfield, tuning: &PlayerTuning) -> Self {
        let mut player = Self::new(tuning);
        player.pos = Self::spawn_point(playfield, tuning);
        player
    }

    pub fn spawn_point(playfield: Playfield, tuning: &PlayerTuning) -> Vec2 {
        Vec2::new(
            (playfield.width - tuning.width) / 2.0,
            playfield.height - tuning.bottom_margin,
        )
    }

    pub fn move_left(&mut self) {
        self.dx = -self.speed;
    }

    pub fn move_right(&mut self) {
        self.dx = self.speed;
    }

    pub fn stop(&mut self) {
        self.dx = 0.0;
    }

    pub fn steer(&mut self, steer: Steer) {
        match steer {
            Steer::Left => self.move_left(),
            Steer::Right => self.move_right(),
            Steer::Idle => self.stop(),
        }
    }

    /// Integrate velocity and clamp to the playfield
    pub fn update(&mut self, dt: f32, playfield_width: f32) {
        self.pos.x += self.dx * dt;
        self.pos.x = self.pos.x.clamp(0.0, (playfield_width - self.size.x).max(0.0));
        self.grace = (self.grace - dt).max(0.0);
    }

    pub fn is_vulnerable(&self) -> bool {
        self.grace <= 0.0
    }

    /// Top-center, where bullets leave the ship
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}
