// Play field (pixels)
pub const FIELD_WIDTH: f64 = 360.0;
pub const FIELD_HEIGHT: f64 = 640.0;

// Bird sprite is 17:12
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;

// Pipe sprite is 1:8 but drawn shorter than the field
pub const PIPE_WIDTH: f64 = 64.0;
pub const PIPE_HEIGHT: f64 = 250.0;

/// Horizontal scroll per frame, the same on every difficulty.
pub const PIPE_SPEED: f64 = 2.0;

// Timing
pub const FRAME_INTERVAL_MS: u64 = 16;
/// Upper bound on wall time fed into one `tick` call, so a stalled terminal
/// does not replay seconds of physics at once.
pub const MAX_FRAME_DT_MS: u64 = 100;

/// Number of session events the terminal keeps on screen.
pub const EVENT_LOG_CAPACITY: usize = 6;
