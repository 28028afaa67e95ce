//! Sparse trajectory recording for post-run path scoring

use glam::Vec3;

use super::state::Waypoint;
use crate::consts::{PATH_DISTANCE_THRESHOLD, PATH_SAMPLE_INTERVAL};
use crate::planar_distance;

/// Throttled, distance-gated waypoint recorder
#[derive(Debug, Clone)]
pub struct PathRecorder {
    /// Record on every `interval`-th sample
    interval: u32,
    /// Minimum planar distance from the last waypoint
    min_distance: f32,
    /// Reference for the first waypoint; `None` records it unconditionally
    origin: Option<Vec3>,
    ticks: u32,
    waypoints: Vec<Waypoint>,
}

impl Default for PathRecorder {
    fn default() -> Self {
        Self::new(PATH_SAMPLE_INTERVAL, PATH_DISTANCE_THRESHOLD)
    }
}

impl PathRecorder {
    pub fn new(interval: u32, min_distance: f32) -> Self {
        Self {
            interval: interval.max(1),
            min_distance,
            origin: None,
            ticks: 0,
            waypoints: Vec::new(),
        }
    }

    /// Measure the first waypoint from `origin` (the spawn point)
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Offer the ball position for this tick. Returns the waypoint if recorded.
    pub fn sample(&mut self, pos: Vec3) -> Option<Waypoint> {
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % self.interval != 0 {
            return None;
        }

        let reference = self.waypoints.last().map(|w| w.pos).or(self.origin);
        if let Some(reference) = reference {
            if planar_distance(reference, pos) < self.min_distance {
                return None;
            }
        }

        let waypoint = Waypoint { pos };
        self.waypoints.push(waypoint);
        log::debug!(
            "Waypoint {} at ({:.2}, {:.2}, {:.2})",
            self.waypoints.len(),
            pos.x,
            pos.y,
            pos.z
        );
        Some(waypoint)
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
        self.waypoints.clear();
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
