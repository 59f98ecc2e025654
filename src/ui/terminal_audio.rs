//! Terminal stand-ins for the audio and score display collaborators.

use flappy::host::audio::{AudioSink, Clip};
use flappy::host::display::ScoreDisplay;
use std::io::{self, Write};
use tracing::debug;

/// Rings the terminal bell for hits and points. Every cue is logged.
pub struct TerminalAudio {
    bell: bool,
}

impl TerminalAudio {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl AudioSink for TerminalAudio {
    fn load(&mut self, clip: Clip) {
        debug!(clip = clip.file_stem(), "preload cue");
    }

    fn play(&mut self, clip: Clip) {
        debug!(clip = clip.file_stem(), "play cue");
        if self.bell && matches!(clip, Clip::Hit | Clip::Point) {
            let mut out = io::stdout();
            // Best effort; a missing bell is not worth interrupting the game
            let _ = out.write_all(b"\x07").and_then(|_| out.flush());
        }
    }
}

/// Holds the last score reported by the game for the status bar.
#[derive(Debug, Default)]
pub struct Scoreboard {
    pub score: u32,
}

impl ScoreDisplay for Scoreboard {
    fn show_score(&mut self, score: u32) {
        self.score = score;
    }
}
