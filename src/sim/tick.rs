//! Fixed timestep simulation tick
//!
//! The game state machine: advances the simulation deterministically and
//! applies score, life and level transitions.

use super::bullet::Bullet;
use super::player::Steer;
use super::state::{ALIEN_COLOR, GameEvent, GamePhase, GameState};

/// Abstract player actions, decoupled from any keyboard layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeftStart,
    MoveRightStart,
    MoveStop,
    Fire,
    /// Start a game from the title or game over screen
    Begin,
}

/// Input intent for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held steering direction (persists until changed)
    pub steer: Steer,
    /// Fire request (one-shot)
    pub fire: bool,
    /// Begin request (one-shot)
    pub begin: bool,
}

impl TickInput {
    /// Record an action as intent; nothing moves until the next tick
    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::MoveLeftStart => self.steer = Steer::Left,
            InputAction::MoveRightStart => self.steer = Steer::Right,
            InputAction::MoveStop => self.steer = Steer::Idle,
            InputAction::Fire => self.fire = true,
            InputAction::Begin => self.begin = true,
        }
    }

    /// Clear one-shot requests after a tick has consumed them
    pub fn clear_one_shots(&mut self) {
        self.fire = false;
        self.begin = false;
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;
    state.clock += dt as f64;

    // Background keeps scrolling on every screen
    state.starfield.update(dt);

    match state.phase {
        GamePhase::Start | GamePhase::GameOver => {
            // Fire doubles as begin on these screens
            if input.begin || input.fire {
                state.start_game();
            }
        }
        GamePhase::NextLevel => {
            if let Some(level) = state.level_transition.advance(dt) {
                state.begin_level(level);
            }
        }
        GamePhase::Playing => update_playing(state, input, dt),
    }
}

fn update_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    state.player.steer(input.steer);
    state.player.update(dt, state.tuning.playfield.width);
    if input.fire {
        state.try_fire();
    }

    state.formation.update(dt, &mut state.rng, &mut state.events);

    // Prune first, then advance the survivors
    state.bullets.retain(Bullet::is_active);
    for bullet in &mut state.bullets {
        bullet.update(dt);
    }
    state.particles.update(dt);

    resolve_bullet_hits(state);

    if state.formation.is_empty() {
        state.clear_level();
        return;
    }

    resolve_player_collision(state);
}

/// Each active bullet destroys at most one alien
fn resolve_bullet_hits(state: &mut GameState) {
    let points = state.tuning.rules.points_per_kill;
    let burst = state.tuning.particles.per_explosion;

    for bullet in state.bullets.iter_mut().filter(|b| b.is_active()) {
        let Some(hit) = state.formation.check_collision(&bullet.rect()) else {
            continue;
        };
        bullet.deactivate();
        state.score += points;
        state
            .particles
            .create_explosion(hit.center(), ALIEN_COLOR, burst, &mut state.rng);
        log::debug!("Alien {:?} destroyed, score {}", hit.grid, state.score);
        state.events.push(GameEvent::AlienDestroyed {
            grid: hit.grid,
            was_diving: hit.was_diving,
            center: hit.center(),
        });
    }
}

fn resolve_player_collision(state: &mut GameState) {
    if !state.player.is_vulnerable()
        || !state.formation.check_player_collision(&state.player.rect())
    {
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::PlayerHit {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!("Game over, final score {}", state.score);
    } else {
        log::info!("Player hit, {} lives left", state.lives);
        state.respawn_player();
    }
}
