//! Break those Bricks! - a paddle-and-ball brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, bricks, session state machine)
//! - `surface`: Drawing-surface interface the simulation issues draw commands to
//! - `renderer`: Retained scene, tessellation and the WebGPU pipeline
//! - `settings`: Runtime-tunable timing and effects
//! - `error`: Crate error type

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod surface;

pub use error::GameError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions (logical pixels, y grows downward)
    pub const SURFACE_WIDTH: f32 = 610.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_Y: f32 = 326.0;
    /// Horizontal step for one arrow key press
    pub const PADDLE_STEP: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball center height when it rests on the paddle
    pub const BALL_SPAWN_Y: f32 = 310.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    /// Speed gained on every tick that hits at least one brick
    pub const BALL_SPEED_STEP: f32 = 0.1;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_MAX_HITS: u8 = 4;
    /// Points awarded per brick hit
    pub const BRICK_POINTS: u32 = 10;
    /// Brick rows: (center y, hits), top row is the toughest
    pub const BRICK_ROWS: [(f32, u8); 4] = [(50.0, 4), (70.0, 3), (90.0, 2), (110.0, 1)];
    /// Left edge of the first column and inset from the right wall
    pub const BRICK_MARGIN: f32 = 5.0;

    pub const STARTING_LIVES: i32 = 3;

    /// Timer intervals (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 50;
    pub const RESPAWN_DELAY_MS: u64 = 1000;
    pub const PARTICLE_LIFETIME_MS: u64 = 100;

    /// Explosion burst
    pub const PARTICLE_COUNT: usize = 30;
    pub const PARTICLE_RADIUS: f32 = 5.0;
    pub const PARTICLE_SPREAD_X: i32 = 30;
    pub const PARTICLE_SPREAD_Y: i32 = 15;

    /// Ground hazards (decorative spikes along the bottom edge)
    pub const SPIKE_SPACING: usize = 12;
    pub const SPIKE_HALF_WIDTH: f32 = 8.0;
    pub const SPIKE_HEIGHT: f32 = 20.0;

    /// HUD text sizes
    pub const HUD_TEXT_SIZE: f32 = 15.0;
    pub const STATUS_TEXT_SIZE: f32 = 30.0;
}
