//! Flappy - frame-stepped arcade simulation library
//!
//! This module exposes the simulation core and its collaborator traits for
//! testing and for hosts other than the bundled terminal front end.

pub mod core;
pub mod game;
pub mod host;

pub use crate::core::config::GameConfig;
pub use crate::core::constants::*;
pub use crate::core::error::ConfigError;
pub use crate::core::geometry::Field;
pub use game::{run_frame, Game};
