//! Demo autopilot
//!
//! Plays the game through the same abstract actions a human would send. The
//! simulation never calls this; hosts feed its output into the input channel.

use super::collision::Rect;
use super::state::{GamePhase, GameState};
use super::tick::InputAction;

/// Horizontal slack (pixels) before the autopilot bothers steering
const DEAD_ZONE: f32 = 4.0;

/// Decide the actions for the current state
pub fn plan(state: &GameState) -> Vec<InputAction> {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => vec![InputAction::Begin],
        GamePhase::NextLevel => vec![InputAction::MoveStop],
        GamePhase::Playing => {
            let Some(target) = pick_target(state) else {
                return vec![InputAction::MoveStop];
            };

            let dx = target.center().x - state.player.rect().center().x;
            let mut actions = vec![if dx < -DEAD_ZONE {
                InputAction::MoveLeftStart
            } else if dx > DEAD_ZONE {
                InputAction::MoveRightStart
            } else {
                InputAction::MoveStop
            }];
            if dx.abs() < target.size.x / 2.0 {
                actions.push(InputAction::Fire);
            }
            actions
        }
    }
}

/// Lowest alien in the column nearest the ship, or a lower diver if one is
/// on screen
fn pick_target(state: &GameState) -> Option<Rect> {
    let ship_x = state.player.rect().center().x;
    let formation = &state.formation;

    let nearest_col = formation
        .aliens()
        .min_by(|(_, a), (_, b)| {
            (a.center().x - ship_x)
                .abs()
                .total_cmp(&(b.center().x - ship_x).abs())
        })
        .map(|(grid, _)| grid.col);

    let column_target = nearest_col.and_then(|col| {
        formation
            .aliens()
            .filter(|(grid, _)| grid.col == col)
            .map(|(_, rect)| rect)
            .max_by(|a, b| a.bottom().total_cmp(&b.bottom()))
    });

    let diver_target = formation
        .divers()
        .map(|diver| diver.rect())
        .filter(|rect| rect.bottom() > 0.0)
        .max_by(|a, b| a.bottom().total_cmp(&b.bottom()));

    match (column_target, diver_target) {
        (Some(alien), Some(diver)) if diver.bottom() > alien.bottom() => Some(diver),
        (alien, diver) => alien.or(diver),
    }
}
