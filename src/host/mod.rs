//! Collaborator seams between the simulation and whatever hosts it.
//!
//! The game drives these traits; the terminal binary implements them, and
//! tests implement recording versions.

pub mod audio;
pub mod display;
pub mod input;
pub mod surface;

pub use audio::{preload_all, AudioSink, Clip};
pub use display::ScoreDisplay;
pub use input::{map_event, HostInput};
pub use surface::{draw_background, draw_scene, Rgb, Surface};
