use std::sync::mpsc;

use invaders::consts::SIM_DT;
use invaders::renderer::{DrawCommand, RecordingCanvas};
use invaders::sim::{Bullet, GameEvent, GamePhase, GameState, InputAction, TickInput, tick};
use invaders::tuning::{BulletTuning, DiveTuning, Tuning};
use invaders::{Game, TuningError};

const FRAME: f64 = 1.0 / 60.0;

fn calm_tuning() -> Tuning {
    Tuning {
        dive: DiveTuning {
            rate: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn fire() -> TickInput {
    TickInput {
        fire: true,
        ..Default::default()
    }
}

#[test]
fn aimed_shots_clear_the_formation_once() {
    let mut state = GameState::new(calm_tuning(), 2024);
    state.start_game();
    let cooldown = state.tuning.bullet.fire_cooldown_secs as f64;
    let mut events = Vec::new();
    let mut shots = 0;

    while state.phase == GamePhase::Playing {
        let (_, target) = state.formation.aliens().last().expect("formation not empty");
        state.player.pos.x = target.center().x - state.player.size.x / 2.0;

        tick(&mut state, &fire(), SIM_DT);
        shots += 1;
        assert!(shots <= 55, "a shot missed");

        // Let the bullet land and the cooldown run out
        let mut waited = 0;
        while state.phase == GamePhase::Playing
            && (!state.bullets.is_empty()
                || state.last_shot.is_some_and(|t| state.clock - t <= cooldown))
        {
            tick(&mut state, &TickInput::default(), SIM_DT);
            waited += 1;
            assert!(waited < 120 * 5, "bullet never resolved");
        }
        events.extend(state.drain_events());
    }

    assert_eq!(shots, 55);
    assert_eq!(state.score, 55 * 20);
    assert_eq!(state.phase, GamePhase::NextLevel);
    let count = |pred: fn(&GameEvent) -> bool| events.iter().filter(|e| pred(e)).count();
    assert_eq!(count(|e| matches!(e, GameEvent::AlienDestroyed { .. })), 55);
    assert_eq!(count(|e| matches!(e, GameEvent::ShotFired)), 55);
    assert_eq!(count(|e| matches!(e, GameEvent::LevelCleared { level: 1 })), 1);

    // Two seconds later the next level starts with a fresh grid
    for _ in 0..250 {
        tick(&mut state, &TickInput::default(), SIM_DT);
    }
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.level, 2);
    assert_eq!(state.formation.static_count(), 55);
    let started = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::LevelStarted { .. }))
        .count();
    assert_eq!(started, 1);
}

#[test]
fn last_life_collision_ends_game_and_begin_restarts() {
    let mut state = GameState::new(calm_tuning(), 5);
    state.start_game();
    state.lives = 1;
    state.score = 80;
    let (_, alien) = state.formation.aliens().next().expect("formation not empty");
    state.player.pos = alien.pos;

    let (tx, rx) = mpsc::channel();
    let mut game = Game::new(state, rx);
    game.start(0.0);
    assert!(game.frame(FRAME));

    assert_eq!(game.state().phase, GamePhase::GameOver);
    assert_eq!(game.state().lives, 0);
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::PlayerHit { lives_left: 0 }));
    assert!(events.contains(&GameEvent::GameOver { score: 80 }));

    let mut canvas = RecordingCanvas::new();
    game.render(&mut canvas);
    assert!(canvas.texts().any(|t| t == "Final Score: 80"));

    tx.send(InputAction::Begin).expect("receiver alive");
    game.frame(2.0 * FRAME);
    assert_eq!(game.state().phase, GamePhase::Playing);
    assert_eq!(game.state().lives, 3);
    assert_eq!(game.state().score, 0);
}

#[test]
fn bullet_leaves_top_edge() {
    let mut bullet = Bullet::new(glam::Vec2::new(0.0, 1.0), &BulletTuning::default());
    let mut ticks = 0;
    while bullet.is_active() {
        bullet.update(SIM_DT);
        ticks += 1;
        assert_eq!(bullet.is_active(), bullet.pos.y >= -10.0);
    }
    // 11 px at 2.5 px per tick
    assert_eq!(ticks, 5);
}

#[test]
fn bullet_fired_from_top_edge_expires_once_past_minus_ten() {
    let mut bullet = Bullet::new(glam::Vec2::ZERO, &BulletTuning::default());
    let mut ticks = 0;
    let mut first_past = None;
    while bullet.is_active() {
        bullet.update(SIM_DT);
        ticks += 1;
        assert!(ticks <= 10, "bullet never expired");
        if first_past.is_none() && bullet.pos.y < -10.0 {
            first_past = Some(ticks);
        }
        assert_eq!(bullet.is_active(), bullet.pos.y >= -10.0);
    }
    // Inactive on exactly the tick its top passed -10 (2.5 px per tick)
    assert_eq!(first_past, Some(ticks));
    assert!((4..=5).contains(&ticks));
}

/// Feed a scripted sequence of actions through the channel and record the
/// event log and final frame
fn replay(seed: u64) -> (Vec<GameEvent>, Vec<DrawCommand>, u64) {
    let (tx, rx) = mpsc::channel();
    let mut game = Game::new(GameState::new(Tuning::default(), seed), rx);
    let mut canvas = RecordingCanvas::new();
    let mut events = Vec::new();

    let script = [
        InputAction::Begin,
        InputAction::MoveLeftStart,
        InputAction::Fire,
        InputAction::MoveStop,
        InputAction::MoveRightStart,
        InputAction::Fire,
    ];

    game.start(0.0);
    for frame in 1..=(60 * 20) {
        if frame % 15 == 0 {
            tx.send(script[(frame / 15) % script.len()]).expect("receiver alive");
        }
        game.frame(frame as f64 * FRAME);
        events.extend(game.drain_events());
    }
    game.render(&mut canvas);
    let score = game.state().score;
    (events, canvas.take(), score)
}

#[test]
fn same_seed_same_game() {
    let (events_a, frame_a, score_a) = replay(99);
    let (events_b, frame_b, score_b) = replay(99);
    assert!(events_a.contains(&GameEvent::GameStarted));
    assert_eq!(events_a, events_b);
    assert_eq!(frame_a, frame_b);
    assert_eq!(score_a, score_b);
}

#[test]
fn tuning_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("invaders-tuning-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("tuning.json");

    std::fs::write(&path, r#"{ "rules": { "starting_lives": 5 }, "dive": { "max_divers": 2 } }"#)
        .expect("write tuning");
    let tuning = Tuning::load(&path).expect("valid tuning");
    assert_eq!(tuning.rules.starting_lives, 5);
    assert_eq!(tuning.dive.max_divers, 2);
    assert_eq!(tuning.formation.rows, 5);

    let state = GameState::new(tuning, 1);
    assert_eq!(state.lives, 5);

    std::fs::write(&path, r#"{ "rules": { "starting_lives": 0 } }"#).expect("write tuning");
    assert!(matches!(Tuning::load(&path), Err(TuningError::Invalid(_))));
    assert_eq!(Tuning::load_or_default(&path).rules.starting_lives, 3);

    let missing = dir.join("missing.json");
    assert!(matches!(Tuning::load(&missing), Err(TuningError::Io { .. })));

    std::fs::remove_dir_all(&dir).ok();
}
