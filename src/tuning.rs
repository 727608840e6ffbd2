//! Data-driven game balance
//!
//! Every gameplay constant lives here so a run can be re-tuned from a JSON
//! file without recompiling. `Tuning::default()` is the reference game
//! (320x480 playfield, 5x11 formation).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, TuningError>;

/// Playfield dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 480.0,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,
    /// Horizontal speed (pixels/sec)
    pub speed: f32,
    /// Distance from the bottom edge to the ship's top edge
    pub bottom_margin: f32,
    /// Seconds after a respawn during which formation contact is ignored
    pub respawn_grace_secs: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 20.0,
            speed: 200.0,
            bottom_margin: 30.0,
            respawn_grace_secs: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    pub width: f32,
    pub height: f32,
    /// Upward speed (pixels/sec)
    pub speed: f32,
    /// Minimum time between accepted shots
    pub fire_cooldown_secs: f32,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            width: 3.0,
            height: 10.0,
            speed: 300.0,
            fire_cooldown_secs: 0.5,
        }
    }
}

/// Grid layout and marching behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationTuning {
    pub rows: u32,
    pub cols: u32,
    pub alien_size: f32,
    pub h_spacing: f32,
    pub v_spacing: f32,
    /// Left/right margin, also the reversal boundary
    pub h_padding: f32,
    /// Top margin of the first row
    pub v_padding: f32,
    /// Lateral march speed (pixels/sec)
    pub march_speed: f32,
    /// Descent applied on every direction reversal
    pub drop_distance: f32,
    /// Pulse animation cycles per second (cosmetic)
    pub pulse_rate: f32,
}

impl Default for FormationTuning {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 11,
            alien_size: 20.0,
            // 11 columns at 24px leave 20px of march room on a 320px field
            h_spacing: 24.0,
            v_spacing: 30.0,
            h_padding: 20.0,
            v_padding: 50.0,
            march_speed: 5.0,
            drop_distance: 10.0,
            pulse_rate: 2.0,
        }
    }
}

/// Diving alien behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiveTuning {
    /// Expected dives started per second (scaled by dt each tick)
    pub rate: f32,
    /// Maximum simultaneous divers
    pub max_divers: usize,
    /// Dive and return speed (pixels/sec)
    pub speed: f32,
    pub weave_amplitude: f32,
    /// Weave angular frequency (radians/sec)
    pub weave_frequency: f32,
}

impl Default for DiveTuning {
    fn default() -> Self {
        Self {
            rate: 0.6,
            max_divers: 1,
            speed: 100.0,
            weave_amplitude: 50.0,
            weave_frequency: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    pub per_explosion: usize,
    pub max_particles: usize,
    /// Max absolute velocity component (pixels/sec)
    pub max_speed: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Life lost per second (life starts at 1.0)
    pub life_decay: f32,
    /// Size lost per second
    pub shrink_rate: f32,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            per_explosion: 20,
            max_particles: 256,
            max_speed: 150.0,
            min_size: 1.0,
            max_size: 4.0,
            life_decay: 2.0,
            shrink_rate: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldTuning {
    pub star_count: usize,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_size: f32,
    pub max_size: f32,
}

impl Default for StarfieldTuning {
    fn default() -> Self {
        Self {
            star_count: 100,
            min_speed: 60.0,
            max_speed: 240.0,
            min_size: 1.0,
            max_size: 3.0,
        }
    }
}

/// Scoring and progression
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesTuning {
    pub starting_lives: u32,
    pub points_per_kill: u64,
    /// Pause between clearing a formation and the next level starting
    pub level_transition_secs: f32,
}

impl Default for RulesTuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            points_per_kill: 20,
            level_transition_secs: 2.0,
        }
    }
}

/// Complete game balance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield: Playfield,
    pub player: PlayerTuning,
    pub bullet: BulletTuning,
    pub formation: FormationTuning,
    pub dive: DiveTuning,
    pub particles: ParticleTuning,
    pub starfield: StarfieldTuning,
    pub rules: RulesTuning,
}

impl Tuning {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load a tuning file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> { Err(TuningError::Invalid(msg.to_string())) };

        let Playfield { width, height } = self.playfield;
        if !(width > 0.0 && height > 0.0) {
            return invalid("playfield dimensions must be positive");
        }
        if self.player.width <= 0.0 || self.player.width > width {
            return invalid("player width must be positive and fit the playfield");
        }
        if self.formation.rows == 0 || self.formation.cols == 0 {
            return invalid("formation needs at least one row and one column");
        }
        if self.formation.alien_size <= 0.0 {
            return invalid("alien size must be positive");
        }
        if self.bullet.speed <= 0.0 || self.dive.speed <= 0.0 {
            return invalid("bullet and dive speeds must be positive");
        }
        if self.bullet.fire_cooldown_secs < 0.0 || self.rules.level_transition_secs < 0.0 {
            return invalid("timers cannot be negative");
        }
        if self.dive.rate < 0.0 {
            return invalid("dive rate cannot be negative");
        }
        if self.particles.min_size <= 0.0 || self.particles.min_size >= self.particles.max_size {
            return invalid("particle sizes must satisfy 0 < min_size < max_size");
        }
        if self.particles.max_speed <= 0.0 {
            return invalid("particle speed must be positive");
        }
        if self.particles.life_decay <= 0.0 || self.particles.shrink_rate <= 0.0 {
            return invalid("particles must decay");
        }
        if self.starfield.min_speed > self.starfield.max_speed
            || self.starfield.min_size > self.starfield.max_size
        {
            return invalid("starfield ranges are inverted");
        }
        if self.rules.starting_lives == 0 {
            return invalid("a game needs at least one life");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.playfield.width, 320.0);
        assert_eq!(tuning.playfield.height, 480.0);
        assert_eq!(tuning.rules.points_per_kill, 20);
    }

    #[test]
    fn test_default_formation_fits_playfield() {
        let tuning = Tuning::default();
        let f = &tuning.formation;
        let right_edge = f.h_padding + (f.cols - 1) as f32 * f.h_spacing + f.alien_size;
        assert!(right_edge < tuning.playfield.width - f.h_padding);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "rules": { "starting_lives": 5 } }"#).unwrap();
        assert_eq!(tuning.rules.starting_lives, 5);
        assert_eq!(tuning.rules.points_per_kill, 20);
        assert_eq!(tuning.formation.cols, 11);
    }

    #[test]
    fn test_json_roundtrip() {
        let json = Tuning::default().to_json().unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.playfield, Playfield::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json(r#"{ "formation": { "rows": 0 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));

        let err = Tuning::from_json(r#"{ "playfield": { "width": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = std::env::temp_dir().join("invaders-tuning-does-not-exist.json");
        assert!(matches!(Tuning::load(&path), Err(TuningError::Io { .. })));
        let tuning = Tuning::load_or_default(&path);
        assert_eq!(tuning.formation.rows, 5);
    }
}
