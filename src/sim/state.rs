//! Ball state and game outcome types
//!
//! Everything the simulator mutates per tick lives in `BallState`; everything
//! it reports outward is a plain `Copy` value so it can cross into UI code
//! without borrowing simulator internals.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Kinematic state of the ball for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Accumulated rolling orientation (unit quaternion)
    pub orientation: Quat,
    /// Position at the start of the current tick, restored on obstacle hits
    pub prev_pos: Vec3,
}

impl BallState {
    pub fn at_rest(pos: Vec3) -> Self {
        Self {
            pos,
            vel: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            prev_pos: pos,
        }
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverReason {
    /// Ball entered the end zone
    Goal,
    /// Ball dropped below the dead zone with no terrain underneath
    FellOff,
    /// External countdown ran out
    Timeout,
}

impl OverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverReason::Goal => "goal",
            OverReason::FellOff => "fell-off",
            OverReason::Timeout => "timeout",
        }
    }
}

/// Session progress. Transitions only move forward: Running -> Started -> Over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    Running,
    Started,
    Over(OverReason),
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        matches!(self, GameOutcome::Over(_))
    }

    pub fn is_started(&self) -> bool {
        matches!(self, GameOutcome::Started)
    }
}

/// State transition reported to UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Over(OverReason),
}

/// A recorded trajectory sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub pos: Vec3,
}

/// What one tick produced
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickResult {
    /// At most one state transition per tick
    pub event: Option<GameEvent>,
    /// Waypoint appended to the path this tick, if any
    pub waypoint: Option<Waypoint>,
    /// Ball was stopped by an obstacle and rolled back
    pub blocked: bool,
}
