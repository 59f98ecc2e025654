//! Session state and the per-frame game loop.

use super::cues::DeferredCues;
use super::types::{Avatar, FrameEvent, FrameReport, Pipe};
use super::{collision, obstacles, physics};
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::core::geometry::Field;
use crate::host::audio::{AudioSink, Clip};
use crate::host::display::ScoreDisplay;
use crate::host::surface::{draw_background, draw_scene, Surface};
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info, warn};

/// One running session. There is no paused or game-over state: a collision
/// resets straight back into a fresh session.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    field: Field,
    cues: DeferredCues,

    pub avatar: Avatar,
    /// Spawn order, head (index 0) is the nearest unresolved pipe.
    pub pipes: Vec<Pipe>,
    /// Number of the next frame to simulate; 1 at the start of a session.
    pub frame_count: u64,
    pub score: u32,
    /// The head pipe has already been scored. Cleared whenever a pipe retires.
    pub point_credited: bool,
}

impl Game {
    /// Validate the config against `field` and start the first session.
    pub fn new(config: GameConfig, field: Field, now: Instant) -> Result<Self, ConfigError> {
        config.validate()?;
        config.check_field(field)?;

        let mut game = Self {
            avatar: Avatar::spawn(&config.avatar),
            config,
            field,
            cues: DeferredCues::new(),
            pipes: Vec::new(),
            frame_count: 1,
            score: 0,
            point_credited: false,
        };
        game.reset(now);
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn pending_cues(&self) -> usize {
        self.cues.len()
    }

    /// Start a fresh session and schedule the swoosh cue.
    pub fn reset(&mut self, now: Instant) {
        self.frame_count = 1;
        self.score = 0;
        self.point_credited = false;
        self.pipes.clear();
        self.avatar = Avatar::spawn(&self.config.avatar);
        self.cues
            .schedule(now + self.config.swoosh_delay(), Clip::Swoosh);
        info!("session started");
    }

    /// Entry point for every jump input (key or touch).
    pub fn jump<A: AudioSink + ?Sized>(&mut self, audio: &mut A) {
        physics::jump(&mut self.avatar, &self.config.physics, audio);
    }

    /// Switch to a new field size. The running session continues; pipes already
    /// on screen keep their heights.
    pub fn resize(&mut self, field: Field) -> Result<(), ConfigError> {
        if let Err(e) = self.config.check_field(field) {
            warn!(width = field.width, height = field.height, "rejected resize: {e}");
            return Err(e);
        }
        debug!(width = field.width, height = field.height, "field resized");
        self.field = field;
        Ok(())
    }

    /// Play deferred cues that are due.
    pub fn fire_due_cues<A: AudioSink + ?Sized>(&mut self, now: Instant, audio: &mut A) -> usize {
        self.cues.fire_due(now, audio)
    }

    /// Simulate one frame.
    ///
    /// Order: spawn, scroll and retire pipes; integrate the avatar; test the head
    /// pipe for a hit; test it for a pass; advance the frame counter. A hit resets
    /// the session and ends the frame there, so the next frame simulated is
    /// frame 1 of the new session.
    pub fn step<R: Rng, A: AudioSink + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
        audio: &mut A,
    ) -> FrameReport {
        let mut report = FrameReport {
            frame: self.frame_count,
            events: Vec::new(),
        };

        let pipe_config = &self.config.pipes;
        if obstacles::maybe_spawn(&mut self.pipes, self.frame_count, pipe_config, self.field, rng)
        {
            if let Some(pipe) = self.pipes.last() {
                debug!(frame = self.frame_count, top = pipe.top_height, "pipe spawned");
                report.events.push(FrameEvent::PipeSpawned {
                    top_height: pipe.top_height,
                });
            }
        }
        obstacles::advance(&mut self.pipes, pipe_config);
        let retired = obstacles::retire(&mut self.pipes, pipe_config);
        if retired > 0 {
            debug!(frame = self.frame_count, count = retired, "pipes retired");
            self.point_credited = false;
            report
                .events
                .push(FrameEvent::PipesRetired { count: retired });
        }

        physics::integrate(&mut self.avatar, &self.config.physics, self.field);

        let head = self
            .pipes
            .first()
            .map(|pipe| collision::pipe_bounds(pipe, &self.config.pipes, self.field));
        if let Some(pipe) = head {
            let avatar = collision::avatar_bounds(&self.avatar, &self.config.avatar);

            if collision::collides(&avatar, &pipe) {
                let final_score = self.score;
                info!(frame = self.frame_count, score = final_score, "avatar hit a pipe");
                audio.play(Clip::Hit);
                self.reset(now);
                report.events.push(FrameEvent::Collided { final_score });
                return report;
            }

            if collision::passes(self.point_credited, &avatar, &pipe) {
                self.point_credited = true;
                self.score += 1;
                info!(score = self.score, "pipe passed");
                audio.play(Clip::Point);
                report
                    .events
                    .push(FrameEvent::Scored { score: self.score });
            }
        }

        self.frame_count += 1;
        report
    }
}

/// One full frame against the host collaborators: paint the background, step
/// the simulation, paint the scene, show the score, fire due cues.
pub fn run_frame<R, S, A, D>(
    game: &mut Game,
    now: Instant,
    rng: &mut R,
    surface: &mut S,
    audio: &mut A,
    display: &mut D,
) -> FrameReport
where
    R: Rng,
    S: Surface + ?Sized,
    A: AudioSink + ?Sized,
    D: ScoreDisplay + ?Sized,
{
    draw_background(surface, game.field());
    let report = game.step(now, rng, audio);
    draw_scene(surface, game);
    display.show_score(game.score);
    game.fire_due_cues(now, audio);
    report
}
