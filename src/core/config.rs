//! Tunable game configuration.
//!
//! Defaults come from [`super::constants`]. A JSON file can override any subset
//! of the fields; the config is validated once and then stays immutable for the
//! lifetime of the process.

use super::constants::*;
use super::error::ConfigError;
use super::geometry::Field;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub width: f64,
    pub height: f64,
    pub border: f64,
    pub spawn_x: f64,
    pub spawn_y: f64,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            width: AVATAR_WIDTH,
            height: AVATAR_HEIGHT,
            border: AVATAR_BORDER,
            spawn_x: AVATAR_SPAWN_X,
            spawn_y: AVATAR_SPAWN_Y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Velocity added every frame (positive = downward).
    pub gravity: f64,
    /// Magnitude of the upward velocity a jump sets.
    pub lift: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            lift: LIFT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    pub width: f64,
    pub border: f64,
    /// Leftward movement per frame.
    pub speed: f64,
    /// Vertical clearance between the top and bottom segments.
    pub gap: u32,
    /// Minimum height of either segment.
    pub min_height: u32,
    /// A pipe spawns on every frame number divisible by this.
    pub spawn_cadence: u64,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            width: PIPE_WIDTH,
            border: PIPE_BORDER,
            speed: PIPE_SPEED,
            gap: PIPE_GAP,
            min_height: PIPE_MIN_HEIGHT,
            spawn_cadence: PIPE_SPAWN_CADENCE,
        }
    }
}

impl PipeConfig {
    /// Smallest field height that leaves room for the gap and two minimum segments.
    pub fn min_field_height(&self) -> u32 {
        self.gap.saturating_add(self.min_height.saturating_mul(2))
    }

    /// Pipes whose `x` drops below this are fully off the left edge.
    pub fn retire_threshold(&self) -> f64 {
        -(self.width + self.border)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueConfig {
    /// Delay between a session reset and its swoosh cue.
    pub swoosh_delay_ms: u64,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            swoosh_delay_ms: SWOOSH_DELAY_MS,
        }
    }
}

/// Full game configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub avatar: AvatarConfig,
    pub physics: PhysicsConfig,
    pub pipes: PipeConfig,
    pub cues: CueConfig,
}

impl GameConfig {
    /// Check values that would make the simulation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("avatar.width", self.avatar.width),
            ("avatar.height", self.avatar.height),
            ("physics.lift", self.physics.lift),
            ("pipes.width", self.pipes.width),
            ("pipes.speed", self.pipes.speed),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.pipes.spawn_cadence == 0 {
            return Err(ConfigError::ZeroCadence);
        }
        Ok(())
    }

    /// Check that `field` can hold a pipe with this gap and minimum height.
    pub fn check_field(&self, field: Field) -> Result<(), ConfigError> {
        if field.width == 0 || field.height == 0 {
            return Err(ConfigError::EmptyField {
                width: field.width,
                height: field.height,
            });
        }
        let required = self.pipes.min_field_height();
        if field.height < required {
            return Err(ConfigError::FieldTooShort {
                height: field.height,
                required,
                gap: self.pipes.gap,
                min_height: self.pipes.min_height,
            });
        }
        Ok(())
    }

    pub fn swoosh_delay(&self) -> Duration {
        Duration::from_millis(self.cues.swoosh_delay_ms)
    }

    /// Parse a config from JSON text. Missing fields keep their defaults.
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path)
    }

    /// Load a config file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Platform config location, e.g. `~/.config/flappy/config.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "flappy").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
