//! Static configuration and geometry shared by the simulation and the host.

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;

pub use config::{AvatarConfig, CueConfig, GameConfig, PhysicsConfig, PipeConfig};
pub use error::ConfigError;
pub use geometry::{Bounds, Field, Rect};
