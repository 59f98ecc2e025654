//! Session data structures.

use crate::core::config::AvatarConfig;

/// The player-controlled bird. Size and border live in [`AvatarConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    pub x: f64,
    /// Top edge, grows downward.
    pub y: f64,
    /// Vertical velocity per frame (positive = downward).
    pub velocity: f64,
}

impl Avatar {
    /// Avatar at the spawn point, at rest.
    pub fn spawn(config: &AvatarConfig) -> Self {
        Self {
            x: config.spawn_x,
            y: config.spawn_y,
            velocity: 0.0,
        }
    }
}

/// A top/bottom pipe pair. Width and border are shared by all pipes.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge, decreases every frame.
    pub x: f64,
    pub top_height: f64,
    pub bottom_height: f64,
}

/// Something that happened during one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    PipeSpawned { top_height: f64 },
    /// `count` pipes left the field.
    PipesRetired { count: usize },
    /// The head pipe was passed; `score` is the new total.
    Scored { score: u32 },
    /// The avatar hit the head pipe and the session was reset.
    /// `final_score` is the score the session ended with.
    Collided { final_score: u32 },
}

/// Result of one [`Game::step`](super::logic::Game::step).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Frame number that was simulated.
    pub frame: u64,
    pub events: Vec<FrameEvent>,
}

impl FrameReport {
    pub fn collided(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, FrameEvent::Collided { .. }))
    }

    pub fn scored(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, FrameEvent::Scored { .. }))
    }

    pub fn spawned(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, FrameEvent::PipeSpawned { .. }))
            .count()
    }
}
