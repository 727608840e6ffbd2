//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (slot order, then grid key order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bullet;
pub mod collision;
pub mod diving;
pub mod formation;
pub mod particle;
pub mod player;
pub mod schedule;
pub mod starfield;
pub mod state;
pub mod tick;

pub use bullet::Bullet;
pub use collision::Rect;
pub use diving::{DivePhase, DivingAlien};
pub use formation::{Alien, AlienFormation, GridPos, Hit};
pub use particle::{Particle, ParticleSystem};
pub use player::{Player, Steer};
pub use schedule::Schedule;
pub use starfield::{Star, Starfield};
pub use state::{ALIEN_COLOR, GameEvent, GamePhase, GameState};
pub use tick::{InputAction, TickInput, tick};
