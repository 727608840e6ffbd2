//! Diving aliens
//!
//! An alien detached from the formation runs a two-phase state machine:
//! - `Diving`: falls at constant speed while weaving around its column
//! - `Returning`: re-enters from above the top edge and flies straight home
//!
//! The machine never goes back from `Returning` to `Diving`. Arrival is
//! reported to the owner (the formation) through `update`'s return value.

use glam::Vec2;

use super::collision::Rect;
use super::formation::GridPos;
use crate::tuning::DiveTuning;

/// Current leg of the dive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivePhase {
    Diving,
    Returning,
}

#[derive(Debug, Clone)]
pub struct DivingAlien {
    pub grid: GridPos,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub phase: DivePhase,
    /// Seconds since the dive started
    pub time: f32,
    speed: f32,
    weave_amplitude: f32,
    weave_frequency: f32,
}

impl DivingAlien {
    pub fn new(grid: GridPos, pos: Vec2, size: Vec2, tuning: &DiveTuning) -> Self {
        Self {
            grid,
            pos,
            size,
            phase: DivePhase::Diving,
            time: 0.0,
            speed: tuning.speed,
            weave_amplitude: tuning.weave_amplitude,
            weave_frequency: tuning.weave_frequency,
        }
    }

    /// Advance one step. While diving the alien weaves around `weave_x` (its
    /// column's initial x); while returning it heads for `home` (the slot's
    /// current position). Returns `true` once the alien has arrived back home.
    pub fn update(&mut self, dt: f32, weave_x: f32, home: Vec2, playfield_height: f32) -> bool {
        self.time += dt;

        match self.phase {
            DivePhase::Diving => {
                self.pos.y += self.speed * dt;
                self.pos.x = weave_x + (self.time * self.weave_frequency).sin() * self.weave_amplitude;

                if self.pos.y > playfield_height {
                    // Re-enter from just above the top edge
                    self.pos.y = -self.size.y;
                    self.phase = DivePhase::Returning;
                    log::debug!("Diver {:?} wrapped, returning home", self.grid);
                }
                false
            }
            DivePhase::Returning => {
                let to_home = home - self.pos;
                let distance = to_home.length();
                let step = self.speed * dt;

                if distance > step {
                    self.pos += to_home / distance * step;
                    false
                } else {
                    self.pos = home;
                    true
                }
            }
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}
