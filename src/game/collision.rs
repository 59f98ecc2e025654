//! Avatar vs pipe collision and pass-through scoring.
//!
//! Only the head pipe (oldest, leftmost) is ever tested: pipes arrive in spawn
//! order and the avatar cannot reach the next one before the head resolves.

use super::types::{Avatar, Pipe};
use crate::core::config::{AvatarConfig, PipeConfig};
use crate::core::geometry::{Bounds, Field};

/// Collision box edges for a pipe pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeBounds {
    pub left: f64,
    pub right: f64,
    /// Bottom edge of the top segment.
    pub top_segment_bottom: f64,
    /// Top edge of the bottom segment.
    pub bottom_segment_top: f64,
}

pub fn avatar_bounds(avatar: &Avatar, config: &AvatarConfig) -> Bounds {
    Bounds::bordered(
        avatar.x,
        avatar.y,
        config.width,
        config.height,
        config.border,
    )
}

pub fn pipe_bounds(pipe: &Pipe, config: &PipeConfig, field: Field) -> PipeBounds {
    let left = pipe.x - config.border;
    PipeBounds {
        left,
        right: left + config.width + config.border,
        top_segment_bottom: pipe.top_height + config.border,
        bottom_segment_top: field.height_f64() - pipe.bottom_height + config.border,
    }
}

/// Avatar is inside the pipe's column and outside the gap.
pub fn collides(avatar: &Bounds, pipe: &PipeBounds) -> bool {
    avatar.overlaps_horizontally(pipe.left, pipe.right)
        && (avatar.top < pipe.top_segment_bottom || avatar.bottom > pipe.bottom_segment_top)
}

/// Avatar has cleared the pipe's right edge and the pipe is not yet credited.
///
/// `avatar.right > pipe.left` is implied by `avatar.left > pipe.right`; both are
/// kept so the condition reads the same as the overlap test.
pub fn passes(point_credited: bool, avatar: &Bounds, pipe: &PipeBounds) -> bool {
    !point_credited && avatar.right > pipe.left && avatar.left > pipe.right
}
