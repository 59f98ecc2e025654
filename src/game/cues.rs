//! Deferred one-shot audio cues.
//!
//! A reset asks for its swoosh a short delay later. The delay runs on wall-clock
//! time rather than frames: the host polls [`DeferredCues::fire_due`] whenever it
//! likes and frame stepping never waits on it.

use crate::host::audio::{AudioSink, Clip};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct DeferredCues {
    pending: Vec<(Instant, Clip)>,
}

impl DeferredCues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Instant, clip: Clip) {
        self.pending.push((at, clip));
    }

    /// Play every cue whose deadline is at or before `now`, earliest first.
    pub fn fire_due<A: AudioSink + ?Sized>(&mut self, now: Instant, audio: &mut A) -> usize {
        if self.pending.is_empty() {
            return 0;
        }
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(at, _)| *at <= now);
        self.pending = rest;
        due.sort_by_key(|(at, _)| *at);
        for (_, clip) in &due {
            audio.play(*clip);
        }
        due.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(at, _)| *at).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Cues(Vec<Clip>);

    impl AudioSink for Cues {
        fn play(&mut self, clip: Clip) {
            self.0.push(clip);
        }
    }

    #[test]
    fn test_nothing_fires_before_deadline() {
        let start = Instant::now();
        let mut cues = DeferredCues::new();
        cues.schedule(start + Duration::from_millis(100), Clip::Swoosh);

        let mut audio = Cues(Vec::new());
        assert_eq!(cues.fire_due(start + Duration::from_millis(99), &mut audio), 0);
        assert!(audio.0.is_empty());
        assert_eq!(cues.len(), 1);
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let start = Instant::now();
        let mut cues = DeferredCues::new();
        cues.schedule(start + Duration::from_millis(100), Clip::Swoosh);

        let mut audio = Cues(Vec::new());
        assert_eq!(cues.fire_due(start + Duration::from_millis(100), &mut audio), 1);
        assert_eq!(cues.fire_due(start + Duration::from_secs(5), &mut audio), 0);
        assert_eq!(audio.0, vec![Clip::Swoosh]);
        assert!(cues.is_empty());
    }

    #[test]
    fn test_fires_in_deadline_order_and_keeps_later_ones() {
        let start = Instant::now();
        let mut cues = DeferredCues::new();
        cues.schedule(start + Duration::from_millis(30), Clip::Point);
        cues.schedule(start + Duration::from_millis(10), Clip::Hit);
        cues.schedule(start + Duration::from_millis(500), Clip::Swoosh);

        let mut audio = Cues(Vec::new());
        assert_eq!(cues.fire_due(start + Duration::from_millis(40), &mut audio), 2);
        assert_eq!(audio.0, vec![Clip::Hit, Clip::Point]);
        assert_eq!(cues.next_deadline(), Some(start + Duration::from_millis(500)));
    }
}
