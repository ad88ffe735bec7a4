// Simulation tuning shared by the field controller and every shard.
// Angles are in degrees; distances are in canvas pixels.

// Pool
pub const MAX_VIEWPORT_EXTENT: f32 = 1.0e6; // per axis, canvas pixels
pub const DEFAULT_NUM_SHARDS: usize = 250;
pub const DEFAULT_TIME_STEP: f32 = 0.008; // animation clock advance per tick

// Shard shape
pub const SHARD_SIZE_MIN: f32 = 8.0;
pub const SHARD_SIZE_MAX: f32 = 20.0;
pub const SHARD_VERTICES_MIN: usize = 3;
pub const SHARD_VERTICES_MAX: usize = 4;
pub const SHARD_JAGGEDNESS: f32 = 0.2; // vertex radius jitter as a fraction of size
pub const SHARD_ID_MAX: f32 = 10_000.0;

// Motion
pub const INITIAL_SPEED_MAX: f32 = 1.0; // per-axis initial velocity bound
pub const ROTATION_SPEED_MAX: f32 = 5.0; // degrees per tick
pub const MAX_SPEED: f32 = 5.0;
pub const ACCEL_DAMPING: f32 = 0.85; // acceleration carried into the next tick

// Noise drive
pub const NOISE_POSITION_SCALE: f32 = 0.005;
pub const NOISE_TIME_SCALE: f32 = 2.0;
pub const NOISE_ANGLE_TURNS: f32 = 4.0;
pub const NOISE_FORCE: f32 = 0.2;
pub const NOISE_INPUT_LIMIT: f32 = 1.0e8; // larger coordinates sample the field midpoint

// Pointer attraction
pub const ATTRACTION_RADIUS: f32 = 100.0;
pub const ATTRACTION_MAX: f32 = 0.05;

// Burst
pub const BURST_FREEZE_MS: f64 = 100.0;
pub const BURST_SHATTER_MS: f64 = 400.0;
pub const BURST_RADIUS: f32 = 300.0;
pub const BURST_FORCE: f32 = 15.0;
pub const BURST_IMPULSE_WINDOW: f32 = 0.1; // shatter progress below which the impulse fires
pub const BURST_IMPULSE_MAX_SPEED: f32 = 10.0;
pub const ALARM_FLASH_MS: f64 = 50.0;

// Colour modulation
pub const COLOR_SHIFT_RATE: f32 = 0.5;
pub const FLICKER_RATE: f32 = 1.5;
pub const FLICKER_BRIGHTNESS_OFFSET: f32 = 100.0;
pub const FLICKER_SPAN: f32 = 15.0; // +/- percentage points
pub const SATURATION_FLOOR: f32 = 80.0;
pub const BRIGHTNESS_FLOOR: f32 = 70.0;
pub const SHARD_ALPHA: f32 = 0.9;
