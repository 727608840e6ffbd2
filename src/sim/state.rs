//! Game state and core simulation types
//!
//! Everything the tick mutates lives in `GameState`; the orchestrator owns
//! exactly one of these.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bullet::Bullet;
use super::formation::{AlienFormation, GridPos};
use super::particle::ParticleSystem;
use super::player::Player;
use super::schedule::Schedule;
use super::starfield::Starfield;
use crate::Color;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the begin action
    Start,
    /// Active gameplay
    Playing,
    /// Formation cleared, waiting for the next level to start
    NextLevel,
    /// Out of lives, waiting for the begin action
    GameOver,
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    GameStarted,
    ShotFired,
    AlienDestroyed {
        grid: GridPos,
        was_diving: bool,
        center: Vec2,
    },
    DiveStarted {
        grid: GridPos,
    },
    DiveReturned {
        grid: GridPos,
    },
    PlayerHit {
        lives_left: u32,
    },
    LevelCleared {
        level: u32,
    },
    LevelStarted {
        level: u32,
    },
    GameOver {
        score: u64,
    },
}

/// Color of aliens and their explosions
pub const ALIEN_COLOR: Color = Color::MAGENTA;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Current level (1-based)
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulation time in seconds
    pub clock: f64,
    pub player: Player,
    pub formation: AlienFormation,
    pub bullets: Vec<Bullet>,
    pub particles: ParticleSystem,
    pub starfield: Starfield,
    /// Simulation time of the last accepted shot
    pub last_shot: Option<f64>,
    /// Pending switch to the next level (payload: the level to start)
    pub level_transition: Schedule<u32>,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// A game on its title screen
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let starfield = Starfield::new(tuning.playfield, &tuning.starfield, &mut rng);

        Self {
            seed,
            rng,
            phase: GamePhase::Start,
            score: 0,
            lives: tuning.rules.starting_lives,
            level: 1,
            time_ticks: 0,
            clock: 0.0,
            player: Player::spawn(tuning.playfield, &tuning.player),
            formation: Self::build_formation(&tuning),
            bullets: Vec::new(),
            particles: ParticleSystem::new(tuning.particles.clone()),
            starfield,
            last_shot: None,
            level_transition: Schedule::default(),
            events: Vec::new(),
            tuning,
        }
    }

    fn build_formation(tuning: &Tuning) -> AlienFormation {
        AlienFormation::new(tuning.playfield, tuning.formation.clone(), tuning.dive.clone())
    }

    /// Reset everything for a fresh game and start playing
    pub fn start_game(&mut self) {
        if self.level_transition.cancel() {
            log::debug!("Cancelled pending level transition");
        }
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = self.tuning.rules.starting_lives;
        self.level = 1;
        self.formation = Self::build_formation(&self.tuning);
        self.bullets.clear();
        self.particles.clear();
        self.player = Player::spawn(self.tuning.playfield, &self.tuning.player);
        self.last_shot = None;
        self.events.push(GameEvent::GameStarted);
        log::info!("Game started (seed {})", self.seed);
    }

    /// Formation cleared: wait, then continue with the next level
    pub fn clear_level(&mut self) {
        self.phase = GamePhase::NextLevel;
        self.level_transition
            .schedule(self.tuning.rules.level_transition_secs, self.level + 1);
        self.events.push(GameEvent::LevelCleared { level: self.level });
        log::info!("Level {} complete, score {}", self.level, self.score);
    }

    /// Bring in a fresh formation for `level`
    pub fn begin_level(&mut self, level: u32) {
        self.level = level;
        self.formation = Self::build_formation(&self.tuning);
        self.bullets.clear();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::LevelStarted { level });
        log::info!("Level {level} started");
    }

    /// Put the ship back at its spawn point with a short grace period
    pub fn respawn_player(&mut self) {
        self.player = Player::spawn(self.tuning.playfield, &self.tuning.player);
        self.player.grace = self.tuning.player.respawn_grace_secs;
    }

    /// Fire if the cooldown has elapsed. Rejected shots are dropped.
    pub fn try_fire(&mut self) -> bool {
        let cooldown = self.tuning.bullet.fire_cooldown_secs as f64;
        if let Some(last) = self.last_shot {
            if self.clock - last <= cooldown {
                log::trace!("Shot dropped, cooling down");
                return false;
            }
        }

        self.bullets
            .push(Bullet::fired_from(self.player.muzzle(), &self.tuning.bullet));
        self.last_shot = Some(self.clock);
        self.events.push(GameEvent::ShotFired);
        true
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
