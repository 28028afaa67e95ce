//! Tilt Trail - tilt-controlled ball rolling over sculpted terrain
//!
//! Core modules:
//! - `sim`: Ball simulation (integration, terrain probe, colliders, paint trail, path)
//! - `input`: Tilt sample normalization and the latest-sample cell
//! - `stage`: Stage description loading (terrain surfaces, colliders)
//! - `session`: Per-stage game session with fixed-timestep driver
//! - `config`: Data-driven simulation tuning

pub mod config;
pub mod input;
pub mod session;
pub mod sim;
pub mod stage;

pub use config::{ConfigError, SimConfig};
pub use session::{GameSession, SessionEvent};
pub use stage::{Stage, StageError};

use glam::{Vec2, Vec3};

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Tilt input
    pub const TILT_SENSITIVITY: f32 = 2.0;
    pub const DRIVE_GAIN: f32 = 8.0;
    /// Minimum spacing between accepted tilt samples (milliseconds)
    pub const TILT_SAMPLE_INTERVAL_MS: u64 = 300;

    /// Ball motion
    pub const GRAVITY: f32 = -9.8;
    pub const FRICTION: f32 = 1.2;
    pub const SPEED_MULTIPLIER: f32 = 3.0;
    /// Height of the ball center above the surface it rests on
    pub const BALL_RADIUS_MARGIN: f32 = 1.0;
    /// Vertical velocity kept after landing on the floor
    pub const FLOOR_DAMPING: f32 = 0.5;
    /// Normal components at or below this are treated as flat ground
    pub const SLOPE_THRESHOLD: f32 = 0.1;
    /// How far above the ball the downward probe ray starts
    pub const PROBE_LIFT: f32 = 10.0;
    /// Falling below this with no terrain underneath ends the run
    pub const DEAD_ZONE_HEIGHT: f32 = -80.0;

    /// Paint trail
    pub const PAINT_RESOLUTION: u32 = 512;
    /// Largest paint buffer side a config may ask for
    pub const MAX_PAINT_RESOLUTION: u32 = 8192;
    pub const BRUSH_RADIUS: i32 = 2;
    pub const TRAIL_COLOR: [u8; 4] = [255, 165, 0, 255];

    /// Path recording
    pub const PATH_SAMPLE_INTERVAL: u32 = 30;
    pub const PATH_DISTANCE_THRESHOLD: f32 = 2.0;
}

/// Project a world position onto the horizontal (x, z) plane
#[inline]
pub fn planar(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.z)
}

/// Distance between two world positions measured on the horizontal plane
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    planar(a).distance(planar(b))
}
