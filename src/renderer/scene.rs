//! Scene drawing
//!
//! One pass over the current state: background, starfield, then (only while
//! playing) the entities, and finally the HUD and phase banner.

use std::f32::consts::TAU;

use super::canvas::{Canvas, Font, TextAlign};
use crate::Color;
use crate::sim::{ALIEN_COLOR, GamePhase, GameState};

const PLAYER_COLOR: Color = Color::GREEN;
const BULLET_COLOR: Color = Color::YELLOW;
const STAR_COLOR: Color = Color::WHITE;
const HUD_COLOR: Color = Color::GREEN;

/// Draw a full frame
pub fn render(state: &GameState, canvas: &mut impl Canvas) {
    let field = state.tuning.playfield;
    canvas.fill_rect(0.0, 0.0, field.width, field.height, Color::BLACK);

    for star in state.starfield.stars() {
        canvas.fill_rect(star.pos.x, star.pos.y, star.size, star.size, STAR_COLOR);
    }

    if state.phase == GamePhase::Playing {
        draw_entities(state, canvas);
    }

    draw_ui(state, canvas);
}

fn draw_entities(state: &GameState, canvas: &mut impl Canvas) {
    let player = state.player.rect();
    canvas.fill_rect(
        player.pos.x,
        player.pos.y,
        player.size.x,
        player.size.y,
        PLAYER_COLOR,
    );

    // Static aliens pulse horizontally around their centers
    let formation = &state.formation;
    let pulse = 0.8 + 0.2 * (formation.anim_phase() * TAU).sin();
    for (_, rect) in formation.aliens() {
        let width = rect.size.x * pulse;
        let x = rect.pos.x + (rect.size.x - width) / 2.0;
        canvas.fill_rect(x, rect.pos.y, width, rect.size.y, ALIEN_COLOR);
    }
    for diver in formation.divers() {
        let rect = diver.rect();
        canvas.fill_rect(rect.pos.x, rect.pos.y, rect.size.x, rect.size.y, ALIEN_COLOR);
    }

    for bullet in state.bullets.iter().filter(|b| b.is_active()) {
        let rect = bullet.rect();
        canvas.fill_rect(rect.pos.x, rect.pos.y, rect.size.x, rect.size.y, BULLET_COLOR);
    }

    for particle in state.particles.particles() {
        canvas.set_opacity(particle.opacity());
        let (pos, size) = (particle.pos, particle.size);
        canvas.fill_rect(pos.x, pos.y, size, size, particle.color);
        canvas.set_opacity(1.0);
    }
}

fn draw_ui(state: &GameState, canvas: &mut impl Canvas) {
    let hud = [
        format!("Score: {}", state.score),
        format!("Lives: {}", state.lives),
        format!("Level: {}", state.level),
    ];
    for (i, line) in hud.iter().enumerate() {
        let y = 25.0 * (i + 1) as f32;
        canvas.fill_text(line, 10.0, y, Font::HUD, TextAlign::Left, HUD_COLOR);
    }

    let field = state.tuning.playfield;
    let (cx, cy) = (field.width / 2.0, field.height / 2.0);
    let mut banner = |text: &str, y: f32, font: Font, color: Color| {
        canvas.fill_text(text, cx, y, font, TextAlign::Center, color);
    };

    match state.phase {
        GamePhase::Start => {
            banner("INVADERS", cy - 40.0, Font::TITLE, Color::WHITE);
            banner("Press SPACE to start", cy + 40.0, Font::HUD, Color::WHITE);
        }
        GamePhase::GameOver => {
            banner("GAME OVER", cy - 40.0, Font::TITLE, Color::RED);
            banner(&format!("Final Score: {}", state.score), cy, Font::HUD, Color::WHITE);
            banner("Press SPACE to restart", cy + 40.0, Font::HUD, Color::WHITE);
        }
        GamePhase::NextLevel => {
            banner(&format!("LEVEL {} COMPLETE", state.level), cy, Font::TITLE, Color::GREEN);
        }
        GamePhase::Playing => {}
    }
}
