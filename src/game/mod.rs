//! The frame-stepped simulation.
//!
//! An avatar falls under gravity and jumps on input while pipe pairs scroll in
//! from the right on a fixed frame cadence. Hitting a pipe resets the session;
//! clearing one scores a point.

pub mod collision;
pub mod cues;
pub mod logic;
pub mod obstacles;
pub mod physics;
pub mod types;

pub use logic::{run_frame, Game};
pub use types::{Avatar, FrameEvent, FrameReport, Pipe};
