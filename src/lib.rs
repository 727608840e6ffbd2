//! Invaders - a fixed-timestep arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (formation, dives, collisions, game state)
//! - `game`: Frame loop driving the simulation at a fixed rate
//! - `renderer`: Draw-call generation against an abstract canvas
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::{Tuning, TuningError};

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock gap a single frame may account for (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;
}

/// Packed 0xRRGGBB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const RED: Color = Color(0xFF0000);
    pub const GREEN: Color = Color(0x00FF00);
    pub const YELLOW: Color = Color(0xFFFF00);
    pub const MAGENTA: Color = Color(0xFF00FF);
}

