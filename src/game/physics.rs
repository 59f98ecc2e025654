//! Avatar physics: gravity integration, floor clamp and jump impulse.

use super::types::Avatar;
use crate::core::config::PhysicsConfig;
use crate::core::geometry::Field;
use crate::host::audio::{AudioSink, Clip};

/// Advance one frame under gravity. Returns true if the avatar was clamped to the floor.
pub fn integrate(avatar: &mut Avatar, physics: &PhysicsConfig, field: Field) -> bool {
    avatar.velocity += physics.gravity;
    avatar.y += avatar.velocity;

    let floor = field.height_f64();
    if avatar.y > floor {
        avatar.y = floor;
        avatar.velocity = 0.0;
        return true;
    }
    false
}

/// Override the velocity with the upward lift and play the wing cue.
pub fn jump<A: AudioSink + ?Sized>(avatar: &mut Avatar, physics: &PhysicsConfig, audio: &mut A) {
    avatar.velocity = -physics.lift;
    audio.play(Clip::Wing);
}
