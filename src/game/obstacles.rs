//! Pipe spawning, scrolling and retirement.

use super::types::Pipe;
use crate::core::config::PipeConfig;
use crate::core::geometry::Field;
use rand::Rng;

/// Generate a pipe just off the right edge with a random gap position.
///
/// `top_height` is an integer drawn uniformly from
/// `[min_height, field.height - gap - min_height]`, so both segments meet the
/// minimum and the gap is exact. Assumes the field passed
/// [`GameConfig::check_field`](crate::core::config::GameConfig::check_field).
pub fn generate_pipe<R: Rng>(config: &PipeConfig, field: Field, rng: &mut R) -> Pipe {
    let min_top = config.min_height;
    let max_top = field
        .height
        .saturating_sub(config.gap.saturating_add(config.min_height))
        .max(min_top);
    let top_height = rng.gen_range(min_top..=max_top) as f64;
    let bottom_height = field.height_f64() - top_height - config.gap as f64;

    Pipe {
        x: field.width_f64() + config.border,
        top_height,
        bottom_height,
    }
}

/// Append a new pipe when `frame_count` lands on the spawn cadence.
pub fn maybe_spawn<R: Rng>(
    pipes: &mut Vec<Pipe>,
    frame_count: u64,
    config: &PipeConfig,
    field: Field,
    rng: &mut R,
) -> bool {
    if frame_count % config.spawn_cadence != 0 {
        return false;
    }
    pipes.push(generate_pipe(config, field, rng));
    true
}

/// Scroll every pipe left by the configured speed.
pub fn advance(pipes: &mut [Pipe], config: &PipeConfig) {
    for pipe in pipes {
        pipe.x -= config.speed;
    }
}

/// Remove pipes that are fully off the left edge. Returns how many were removed.
pub fn retire(pipes: &mut Vec<Pipe>, config: &PipeConfig) -> usize {
    let threshold = config.retire_threshold();
    let mut removed = 0;
    // Reverse order keeps the remaining indices valid while removing
    for i in (0..pipes.len()).rev() {
        if pipes[i].x < threshold {
            pipes.remove(i);
            removed += 1;
        }
    }
    removed
}
