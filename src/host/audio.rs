//! Audio collaborator interface.

/// Sound cues the game can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clip {
    /// Avatar jumped.
    Wing,
    /// Avatar passed a pipe.
    Point,
    /// Avatar hit a pipe.
    Hit,
    /// A new session started.
    Swoosh,
}

impl Clip {
    pub const ALL: [Clip; 4] = [Clip::Hit, Clip::Point, Clip::Swoosh, Clip::Wing];

    /// Asset file stem, e.g. `sfx/<stem>.wav`.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Wing => "wing",
            Self::Point => "point",
            Self::Hit => "hit",
            Self::Swoosh => "swooshing",
        }
    }
}

/// Fire-and-forget playback. The game never waits on or inspects the result.
pub trait AudioSink {
    /// Optional preload hint.
    fn load(&mut self, _clip: Clip) {}

    fn play(&mut self, clip: Clip);
}

/// Ask the sink to preload every clip.
pub fn preload_all<A: AudioSink + ?Sized>(audio: &mut A) {
    for clip in Clip::ALL {
        audio.load(clip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Loader {
        loaded: Vec<Clip>,
    }

    impl AudioSink for Loader {
        fn load(&mut self, clip: Clip) {
            self.loaded.push(clip);
        }

        fn play(&mut self, _clip: Clip) {}
    }

    #[test]
    fn test_preload_all_loads_each_clip_once() {
        let mut loader = Loader::default();
        preload_all(&mut loader);
        assert_eq!(loader.loaded.len(), 4);
        for clip in Clip::ALL {
            assert_eq!(loader.loaded.iter().filter(|c| **c == clip).count(), 1);
        }
    }

    #[test]
    fn test_file_stems() {
        assert_eq!(Clip::Wing.file_stem(), "wing");
        assert_eq!(Clip::Point.file_stem(), "point");
        assert_eq!(Clip::Hit.file_stem(), "hit");
        assert_eq!(Clip::Swoosh.file_stem(), "swooshing");
    }
}
