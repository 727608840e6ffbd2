//! The alien formation
//!
//! Static aliens live in a flat slot array indexed by `row * cols + col`.
//! Their screen positions are not stored: every static alien sits at its
//! canonical grid origin plus the formation's shared march offset, so the
//! whole grid moves in lock-step by construction.
//!
//! Diving aliens are kept in a separate map keyed by the same `GridPos`. A
//! grid identity is in at most one of the two stores at any time.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use super::diving::DivingAlien;
use super::state::GameEvent;
use crate::tuning::{DiveTuning, FormationTuning, Playfield};

/// Immutable grid identity of an alien
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPos {
    pub row: u32,
    pub col: u32,
}

/// An alien marching with the formation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alien {
    pub grid: GridPos,
}

/// An alien removed by a collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub grid: GridPos,
    /// Bounds at the moment of the hit
    pub rect: Rect,
    pub was_diving: bool,
}

impl Hit {
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}

#[derive(Debug, Clone)]
pub struct AlienFormation {
    slots: Vec<Option<Alien>>,
    diving: BTreeMap<GridPos, DivingAlien>,
    /// +1 marching right, -1 marching left
    direction: f32,
    /// Accumulated march (x) and descent (y)
    offset: Vec2,
    /// Pulse animation phase in [0, 1)
    anim_phase: f32,
    tuning: FormationTuning,
    dive: DiveTuning,
    playfield: Playfield,
}

/// Canonical top-left of a grid slot, before any marching
fn grid_origin(tuning: &FormationTuning, grid: GridPos) -> Vec2 {
    Vec2::new(
        tuning.h_padding + grid.col as f32 * tuning.h_spacing,
        tuning.v_padding + grid.row as f32 * tuning.v_spacing,
    )
}

impl AlienFormation {
    /// A full grid marching right from its canonical layout
    pub fn new(playfield: Playfield, tuning: FormationTuning, dive: DiveTuning) -> Self {
        let slots = (0..tuning.rows)
            .flat_map(|row| {
                (0..tuning.cols).map(move |col| {
                    Some(Alien {
                        grid: GridPos { row, col },
                    })
                })
            })
            .collect();

        Self {
            slots,
            diving: BTreeMap::new(),
            direction: 1.0,
            offset: Vec2::ZERO,
            anim_phase: 0.0,
            tuning,
            dive,
            playfield,
        }
    }

    /// Advance one tick: march, move divers, maybe launch a new dive
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
        self.anim_phase = (self.anim_phase + dt * self.tuning.pulse_rate).fract();

        self.march(dt);
        self.update_divers(dt, events);

        let chance = (self.dive.rate * dt).clamp(0.0, 1.0) as f64;
        if self.diving.len() < self.dive.max_divers && rng.random_bool(chance) {
            let occupied: Vec<GridPos> = self.aliens().map(|(grid, _)| grid).collect();
            if !occupied.is_empty() {
                let grid = occupied[rng.random_range(0..occupied.len())];
                if self.start_dive(grid) {
                    events.push(GameEvent::DiveStarted { grid });
                }
            }
        }
    }

    /// Lock-step lateral movement with reversal and descent at the padded
    /// boundary. Returns true when the direction flipped this step.
    fn march(&mut self, dt: f32) -> bool {
        // Nothing to march (all remaining aliens are diving)
        let Some((left, right)) = self.march_extent() else {
            return false;
        };

        let mut delta = self.tuning.march_speed * dt * self.direction;
        let crosses = if self.direction > 0.0 {
            right + delta > self.playfield.width - self.tuning.h_padding
        } else {
            left + delta < self.tuning.h_padding
        };

        if crosses {
            self.direction = -self.direction;
            delta = -delta;
            self.offset.y += self.tuning.drop_distance;
        }
        self.offset.x += delta;
        crosses
    }

    /// Leftmost x and rightmost edge over every slot still held by a live
    /// alien, including slots whose alien is away diving (full scan). `None`
    /// when no alien is marching.
    fn march_extent(&self) -> Option<(f32, f32)> {
        if self.static_count() == 0 {
            return None;
        }
        let size = self.tuning.alien_size;
        self.slots
            .iter()
            .flatten()
            .map(|alien| alien.grid)
            .chain(self.diving.keys().copied())
            .fold(None, |extent, grid| {
                let x = self.slot_position(grid).x;
                let (left, right) = extent.unwrap_or((f32::INFINITY, f32::NEG_INFINITY));
                Some((left.min(x), right.max(x + size)))
            })
    }

    fn update_divers(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        // Divers weave around their column's initial x and fly home to the
        // slot's live position
        let targets: Vec<(GridPos, f32, Vec2)> = self
            .diving
            .keys()
            .map(|&grid| {
                let column = GridPos { row: 0, col: grid.col };
                (grid, self.alien_position(column).x, self.slot_position(grid))
            })
            .collect();

        let height = self.playfield.height;
        let mut arrived = Vec::new();
        for (grid, weave_x, home) in targets {
            let Some(diver) = self.diving.get_mut(&grid) else {
                continue;
            };
            if diver.update(dt, weave_x, home, height) {
                arrived.push(grid);
            }
        }

        // A returning diver takes its own slot back; nothing else can claim it
        for grid in arrived {
            self.diving.remove(&grid);
            let idx = self.slot_index(grid);
            self.slots[idx] = Some(Alien { grid });
            log::debug!("Alien {grid:?} rejoined the formation");
            events.push(GameEvent::DiveReturned { grid });
        }
    }

    /// Detach a static alien and send it diving from its current position.
    /// Returns false if the slot is empty or the dive limit is reached.
    pub fn start_dive(&mut self, grid: GridPos) -> bool {
        if self.diving.len() >= self.dive.max_divers {
            return false;
        }
        let Some(idx) = self.checked_slot_index(grid) else {
            return false;
        };
        if self.slots[idx].take().is_none() {
            return false;
        }

        let size = Vec2::splat(self.tuning.alien_size);
        let diver = DivingAlien::new(grid, self.slot_position(grid), size, &self.dive);
        self.diving.insert(grid, diver);
        log::debug!("Alien {grid:?} started a dive");
        true
    }

    /// Remove and return the first alien overlapping `rect`: static aliens in
    /// reverse slot order first, then divers in reverse key order.
    pub fn check_collision(&mut self, rect: &Rect) -> Option<Hit> {
        for idx in (0..self.slots.len()).rev() {
            let Some(alien) = self.slots[idx] else {
                continue;
            };
            let alien_rect = self.alien_rect(alien.grid);
            if alien_rect.overlaps(rect) {
                self.slots[idx] = None;
                return Some(Hit {
                    grid: alien.grid,
                    rect: alien_rect,
                    was_diving: false,
                });
            }
        }

        let grid = self
            .diving
            .iter()
            .rev()
            .find(|(_, diver)| diver.rect().overlaps(rect))
            .map(|(grid, _)| *grid)?;
        let diver = self.diving.remove(&grid)?;
        Some(Hit {
            grid,
            rect: diver.rect(),
            was_diving: true,
        })
    }

    /// Whether `rect` touches any static or diving alien (no mutation)
    pub fn check_player_collision(&self, rect: &Rect) -> bool {
        self.aliens().any(|(_, alien)| alien.overlaps(rect))
            || self.diving.values().any(|diver| diver.rect().overlaps(rect))
    }

    pub fn is_empty(&self) -> bool {
        self.static_count() == 0 && self.diving.is_empty()
    }

    /// Canonical position of a slot in the initial layout, ignoring marching
    pub fn alien_position(&self, grid: GridPos) -> Vec2 {
        grid_origin(&self.tuning, grid)
    }

    /// Where the slot is right now
    pub fn slot_position(&self, grid: GridPos) -> Vec2 {
        grid_origin(&self.tuning, grid) + self.offset
    }

    fn alien_rect(&self, grid: GridPos) -> Rect {
        Rect::new(self.slot_position(grid), Vec2::splat(self.tuning.alien_size))
    }

    fn slot_index(&self, grid: GridPos) -> usize {
        (grid.row * self.tuning.cols + grid.col) as usize
    }

    fn checked_slot_index(&self, grid: GridPos) -> Option<usize> {
        (grid.row < self.tuning.rows && grid.col < self.tuning.cols).then(|| self.slot_index(grid))
    }

    /// Static aliens with their current bounds, in slot order
    pub fn aliens(&self) -> impl Iterator<Item = (GridPos, Rect)> + '_ {
        self.slots
            .iter()
            .flatten()
            .map(move |alien| (alien.grid, self.alien_rect(alien.grid)))
    }

    pub fn divers(&self) -> impl Iterator<Item = &DivingAlien> {
        self.diving.values()
    }

    pub fn static_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn diving_count(&self) -> usize {
        self.diving.len()
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn anim_phase(&self) -> f32 {
        self.anim_phase
    }

    pub fn alien_size(&self) -> f32 {
        self.tuning.alien_size
    }
}
