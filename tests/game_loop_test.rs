//! Integration test: Game loop mechanics
//!
//! Drives `Game::step` over many frames and checks spawn cadence, retirement,
//! scoring, and the collision reset.
//!
//! Uses seeded ChaCha8Rng for deterministic pipe placement.

use flappy::game::{Avatar, FrameEvent, FrameReport, Pipe};
use flappy::host::{AudioSink, Clip};
use flappy::{Field, Game, GameConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

#[derive(Default)]
struct RecordingAudio {
    played: Vec<Clip>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, clip: Clip) {
        self.played.push(clip);
    }
}

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn default_game(now: Instant) -> Game {
    Game::new(GameConfig::default(), Field::new(320, 480), now).unwrap()
}

/// Step `count` frames, collecting every report.
fn run_frames(
    game: &mut Game,
    count: u32,
    rng: &mut ChaCha8Rng,
    audio: &mut RecordingAudio,
    now: Instant,
) -> Vec<FrameReport> {
    (0..count).map(|_| game.step(now, rng, audio)).collect()
}

/// Keep the avatar level at `y` for the next frame.
fn hover(game: &mut Game, y: f64) {
    game.avatar.y = y;
    game.avatar.velocity = -game.config().physics.gravity;
}

// =============================================================================
// Start State Tests
// =============================================================================

#[test]
fn test_one_frame_from_start() {
    let now = Instant::now();
    let mut game = default_game(now);
    let mut rng = test_rng();
    let mut audio = RecordingAudio::default();

    let report = game.step(now, &mut rng, &mut audio);

    assert_eq!(report.frame, 1);
    assert!(!report.collided());
    assert!((game.avatar.velocity - 0.5).abs() < f64::EPSILON);
    assert!((game.avatar.y - 100.5).abs() < f64::EPSILON);
    assert!(game.pipes.is_empty());
}

#[test]
fn test_jump_from_falling_sets_exact_lift() {
    let mut game = default_game(Instant::now());
    game.avatar.velocity = 2.0;
    let mut audio = RecordingAudio::default();

    game.jump(&mut audio);

    assert_eq!(game.avatar.velocity, -7.0);
    assert_eq!(audio.played, vec![Clip::Wing]);
}

// =============================================================================
// Spawn Cadence Tests
// =============================================================================

#[test]
fn test_spawn_count_matches_cadence() {
    let now = Instant::now();
    let mut game = default_game(now);
    let mut rng = test_rng();
    let mut audio = RecordingAudio::default();

    // The first pipe reaches the avatar on frame 148, so 140 frames are collision free
    let reports = run_frames(&mut game, 140, &mut rng, &mut audio, now);

    assert!(reports.iter().all(|r| !r.collided()));
    let spawned: usize = reports.iter().map(|r| r.spawned()).sum();
    assert_eq!(spawned, 140 / 70);
    assert_eq!(game.pipes.len(), 2);
    assert_eq!(game.frame_count, 141);

    let spawn_frames: Vec<u64> = reports
        .iter()
        .filter(|r| r.spawned() > 0)
        .map(|r| r.frame)
        .collect();
    assert_eq!(spawn_frames, vec![70, 140]);
}

#[test]
fn test_spawn_count_with_custom_cadence() {
    let now = Instant::now();
    let mut config = GameConfig::default();
    config.pipes.spawn_cadence = 10;
    let mut game = Game::new(config, Field::new(320, 480), now).unwrap();
    let mut rng = test_rng();
    let mut audio = RecordingAudio::default();

    let reports = run_frames(&mut game, 65, &mut rng, &mut audio, now);

    let spawned: usize = reports.iter().map(|r| r.spawned()).sum();
    assert_eq!(spawned, 6);
}

#[test]
fn test_spawned_pipes_fit_field() {
    let now = Instant::now();
    let mut config = GameConfig::default();
    config.pipes.spawn_cadence = 1;
    let field = Field::new(300, 400);
    let mut game = Game::new(config, field, now).unwrap();
    let mut rng = test_rng();
    let mut audio = RecordingAudio::default();

    for report in run_frames(&mut game, 20, &mut rng, &mut audio, now) {
        for event in &report.events {
            if let FrameEvent::PipeSpawned { top_height } = event {
                assert!(*top_height >= 60.0);
                assert!(*top_height <= 400.0 - 100.0 - 60.0);
            }
        }
    }
    for pipe in &game.pipes {
        assert_eq!(pipe.top_height + 100.0 + pipe.bottom_height, 400.0);
        assert!(pipe.bottom_height >= 60.0);
    }
}

// =============================================================================
// Retirement and Scoring Tests
// =============================================================================

#[test]
fn test_pipe_retires_only_past_left_edge_and_never_returns() {
    let now = Instant::now();
    let mut game = default_game(now);
    let mut rng = test_rng();
    let mut audio = RecordingAudio::default();

    let pipe = Pipe {
        x: 0.0,
        top_height: 150.0,
        bottom_height: 230.0,
    };
    game.pipes.push(pipe.clone());

    let mut retired_at = None;
    for _ in 0..30 {
        hover(&mut game, 200.0);
        let report = game.step(now, &mut rng, &mut audio);
        if let Some(head) = game.pipes.first() {
            assert!(head.x >= -55.0, "pipe past the edge must be gone");
        } else if retired_at.is_none() {
            retired_at = Some(report.frame);
        }
        assert!(!game.pipes.contains(&pipe));
    }

    // x = -3k drops below -55 on the 19th frame
    assert_eq!(retired_at, Some(19));
    assert!(game.pipes.is_empty());
}

#[test]
fn test_each_pipe_scores_once() {
    let now = Instant::now();
    let mut game = default_game(now);
    let mut rng = test_rng();
    let mut audio = RecordingAudio::default();

    // Two pipes 100 px apart, both with the gap at 150..250
    for x in [100.0, 200.0] {
        game.pipes.push(Pipe {
            x,
            top_height: 150.0,
            bottom_height: 230.0,
        });
    }

    let mut scores = Vec::new();
    for _ in 0..69 {
        hover(&mut game, 200.0);
        let report = game.step(now, &mut rng, &mut audio);
        assert!(!report.collided(), "frame {} collided", report.frame);
        for event in report.events {
            if let FrameEvent::Scored { score } = event {
                scores.push(score);
            }
        }
    }

    assert_eq!(scores, vec![1, 2]);
    assert_eq!(game.score, 2);
    assert_eq!(audio.played.iter().filter(|c| **c == Clip::Point).count(), 2);
}

// =============================================================================
// Collision Reset Tests
// =============================================================================

#[test]
fn test_falling_avatar_eventually_hits_and_resets() {
    let now = Instant::now();
    let mut game = default_game(now);
    let mut rng = test_rng();
    let mut audio = RecordingAudio::default();

    let mut collided_at = None;
    for _ in 0..500 {
        let report = game.step(now, &mut rng, &mut audio);
        if report.collided() {
            collided_at = Some(report.frame);
            break;
        }
    }

    // Resting on the floor, the avatar is hit by the first pipe on frame 148
    assert_eq!(collided_at, Some(148));
    assert_eq!(game.frame_count, 1);
    assert_eq!(game.score, 0);
    assert!(!game.point_credited);
    assert!(game.pipes.is_empty());
    assert_eq!(game.avatar, Avatar::spawn(&game.config().avatar));
    assert_eq!(audio.played.last(), Some(&Clip::Hit));

    // The next frame is the first frame of the new session
    let report = game.step(now, &mut rng, &mut audio);
    assert_eq!(report.frame, 1);
    assert!((game.avatar.y - 100.5).abs() < f64::EPSILON);
}

#[test]
fn test_reset_discards_any_prior_state() {
    let now = Instant::now();
    let mut game = default_game(now);
    let mut rng = test_rng();
    let mut audio = RecordingAudio::default();

    game.score = 17;
    game.frame_count = 9_999;
    game.point_credited = true;
    game.avatar.velocity = 12.0;
    game.pipes.push(Pipe {
        x: 40.0,
        top_height: 400.0,
        bottom_height: -20.0,
    });
    game.pipes.push(Pipe {
        x: 250.0,
        top_height: 60.0,
        bottom_height: 320.0,
    });

    let report = game.step(now, &mut rng, &mut audio);

    assert_eq!(
        report.events.last(),
        Some(&FrameEvent::Collided { final_score: 17 })
    );
    assert_eq!(game.frame_count, 1);
    assert_eq!(game.score, 0);
    assert!(game.pipes.is_empty());
    assert_eq!(game.avatar.x, 50.0);
    assert_eq!(game.avatar.y, 100.0);
    assert_eq!(game.avatar.velocity, 0.0);
}
