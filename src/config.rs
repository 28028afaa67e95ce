//! Simulation tuning
//!
//! Loaded from JSON alongside a stage; any field left out keeps its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config field '{field}' must be finite")]
    NotFinite { field: &'static str },

    #[error("config field '{field}' must be positive")]
    NotPositive { field: &'static str },

    #[error("config field '{field}' must not be negative")]
    Negative { field: &'static str },

    #[error("config field '{field}' must be at most {max}")]
    TooLarge { field: &'static str, max: u32 },
}

/// Physics and trail tuning for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Input ===
    /// Multiplier on (sample - baseline)
    pub tilt_sensitivity: f32,
    /// Tilt/slope to horizontal acceleration
    pub drive_gain: f32,

    // === Motion ===
    pub gravity: f32,
    /// Horizontal exponential-decay rate (per second)
    pub friction: f32,
    /// Scales velocity when applied to position
    pub speed_multiplier: f32,
    pub ball_radius_margin: f32,
    pub floor_damping: f32,
    pub slope_threshold: f32,
    pub probe_lift: f32,
    pub dead_zone_height: f32,

    // === Trail ===
    pub paint_resolution: u32,
    pub brush_radius: i32,

    // === Path ===
    pub path_sample_interval: u32,
    pub path_distance_threshold: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tilt_sensitivity: TILT_SENSITIVITY,
            drive_gain: DRIVE_GAIN,

            gravity: GRAVITY,
            friction: FRICTION,
            speed_multiplier: SPEED_MULTIPLIER,
            ball_radius_margin: BALL_RADIUS_MARGIN,
            floor_damping: FLOOR_DAMPING,
            slope_threshold: SLOPE_THRESHOLD,
            probe_lift: PROBE_LIFT,
            dead_zone_height: DEAD_ZONE_HEIGHT,

            paint_resolution: PAINT_RESOLUTION,
            brush_radius: BRUSH_RADIUS,

            path_sample_interval: PATH_SAMPLE_INTERVAL,
            path_distance_threshold: PATH_DISTANCE_THRESHOLD,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("tilt_sensitivity", self.tilt_sensitivity),
            ("drive_gain", self.drive_gain),
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("speed_multiplier", self.speed_multiplier),
            ("ball_radius_margin", self.ball_radius_margin),
            ("floor_damping", self.floor_damping),
            ("slope_threshold", self.slope_threshold),
            ("probe_lift", self.probe_lift),
            ("dead_zone_height", self.dead_zone_height),
            ("path_distance_threshold", self.path_distance_threshold),
        ];
        if let Some(&(field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }

        if self.paint_resolution == 0 {
            return Err(ConfigError::NotPositive { field: "paint_resolution" });
        }
        if self.paint_resolution > MAX_PAINT_RESOLUTION {
            return Err(ConfigError::TooLarge {
                field: "paint_resolution",
                max: MAX_PAINT_RESOLUTION,
            });
        }
        if self.path_sample_interval == 0 {
            return Err(ConfigError::NotPositive { field: "path_sample_interval" });
        }
        if self.probe_lift <= 0.0 {
            return Err(ConfigError::NotPositive { field: "probe_lift" });
        }

        let non_negative = [
            ("friction", self.friction),
            ("ball_radius_margin", self.ball_radius_margin),
            ("floor_damping", self.floor_damping),
            ("slope_threshold", self.slope_threshold),
            ("path_distance_threshold", self.path_distance_threshold),
        ];
        if let Some(&(field, _)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::Negative { field });
        }
        if self.brush_radius < 0 {
            return Err(ConfigError::Negative { field: "brush_radius" });
        }
        // A brush wider than the buffer paints nothing more
        if self.brush_radius.unsigned_abs() > self.paint_resolution {
            return Err(ConfigError::TooLarge {
                field: "brush_radius",
                max: self.paint_resolution,
            });
        }

        Ok(())
    }
}
