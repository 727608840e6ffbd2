//! Frame loop
//!
//! Converts wall-clock frames into fixed simulation ticks. Input arrives on
//! an injected channel and only ever becomes intent for the next tick.

use std::sync::mpsc::Receiver;

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::renderer::{self, Canvas};
use crate::sim::{GameEvent, GameState, InputAction, TickInput, tick};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    input: TickInput,
    inputs: Receiver<InputAction>,
    accumulator: f64,
    last_time: Option<f64>,
    running: bool,
}

impl Game {
    pub fn new(state: GameState, inputs: Receiver<InputAction>) -> Self {
        Self {
            state,
            input: TickInput::default(),
            inputs,
            accumulator: 0.0,
            last_time: None,
            running: false,
        }
    }

    /// Begin running with `now` (seconds) as the clock origin
    pub fn start(&mut self, now: f64) {
        self.running = true;
        self.last_time = Some(now);
        self.accumulator = 0.0;
        log::info!("Game loop running");
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("Game loop stopped after {} ticks", self.state.time_ticks);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Record an action as intent for the next tick
    pub fn handle_input(&mut self, action: InputAction) {
        log::trace!("Input {action:?}");
        self.input.apply(action);
    }

    /// Run the simulation ticks owed since the last frame. Returns whether
    /// the host should schedule another frame.
    pub fn frame(&mut self, now: f64) -> bool {
        if !self.running {
            return false;
        }

        while let Ok(action) = self.inputs.try_recv() {
            self.handle_input(action);
        }

        let dt = match self.last_time {
            Some(last) => (now - last).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_time = Some(now);
        self.accumulator += dt;

        let step = SIM_DT as f64;
        let mut substeps = 0;
        while self.accumulator >= step && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= step;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.clear_one_shots();
        }

        self.running
    }

    /// Draw the current state
    pub fn render(&self, canvas: &mut impl Canvas) {
        renderer::render(&self.state, canvas);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
