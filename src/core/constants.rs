// Field dimensions are in pixels, physics values are per frame.

// Avatar
pub const AVATAR_WIDTH: f64 = 35.0;
pub const AVATAR_HEIGHT: f64 = 25.0;
pub const AVATAR_BORDER: f64 = 3.0;
pub const AVATAR_SPAWN_X: f64 = 50.0;
pub const AVATAR_SPAWN_Y: f64 = 100.0;

// Physics
pub const GRAVITY: f64 = 0.5;
pub const LIFT: f64 = 7.0;

// Pipes
pub const PIPE_WIDTH: f64 = 50.0;
pub const PIPE_BORDER: f64 = 5.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_GAP: u32 = 100;
pub const PIPE_MIN_HEIGHT: u32 = 60;
pub const PIPE_SPAWN_CADENCE: u64 = 70;

// Field
pub const DEFAULT_FIELD_WIDTH: u32 = 320;
pub const DEFAULT_FIELD_HEIGHT: u32 = 480;
/// Viewports at least this wide get the fixed default field instead of their own size.
pub const WIDE_VIEWPORT_THRESHOLD: u32 = 600;

// Audio cues
pub const SWOOSH_DELAY_MS: u64 = 100;

// Terminal host
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 Hz
pub const CELL_PIXEL_WIDTH: u32 = 8;
pub const CELL_PIXEL_HEIGHT: u32 = 16;
