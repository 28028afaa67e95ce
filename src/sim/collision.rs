//! Axis-aligned collision volumes
//!
//! Obstacles and the start/end zones are boxes computed once from static
//! stage geometry. Queries are point-in-box tests; a stage has tens of
//! volumes, so a linear scan is enough. Callers go through `VolumeQuery`
//! so a spatial index can replace `CollisionSet` without touching them.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::planar;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Tightest box around a point set; `None` when the set is empty
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    /// Bounds of a box of `size` centered at `center`, rotated by `rotation`
    pub fn from_oriented_box(center: Vec3, size: Vec3, rotation: Quat) -> Self {
        let half = size * 0.5;
        let corners = (0..8).map(|i| {
            let sign = Vec3::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            );
            center + rotation * (half * sign)
        });
        // Eight corners, never empty
        Self::from_points(corners).unwrap_or(Self {
            min: center,
            max: center,
        })
    }

    /// Inclusive point containment (points on a face count as inside)
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Containment on the horizontal (x, z) plane only
    #[inline]
    pub fn contains_planar(&self, p: Vec3) -> bool {
        let q = planar(p);
        q.cmpge(planar(self.min)).all() && q.cmple(planar(self.max)).all()
    }
}

/// What a collision volume means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColliderRole {
    /// Blocks the ball
    Obstacle,
    /// Entering it starts the run
    #[serde(alias = "start-zone")]
    Start,
    /// Entering it finishes the run
    #[serde(alias = "end-zone")]
    End,
}

/// A tagged static volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub role: ColliderRole,
    pub bounds: Aabb,
}

impl Collider {
    pub fn new(role: ColliderRole, bounds: Aabb) -> Self {
        Self { role, bounds }
    }
}

/// Point-in-volume queries used by the simulator
pub trait VolumeQuery {
    fn contains(&self, role: ColliderRole, point: Vec3) -> bool;

    fn any_obstacle_contains(&self, point: Vec3) -> bool {
        self.contains(ColliderRole::Obstacle, point)
    }
}

/// Linear-scan view over the stage's colliders
#[derive(Debug, Clone, Copy)]
pub struct CollisionSet<'a> {
    colliders: &'a [Collider],
}

impl<'a> CollisionSet<'a> {
    pub fn new(colliders: &'a [Collider]) -> Self {
        Self { colliders }
    }

    pub fn with_role(&self, role: ColliderRole) -> impl Iterator<Item = &'a Collider> + use<'a> {
        let colliders = self.colliders;
        colliders.iter().filter(move |c| c.role == role)
    }
}

impl VolumeQuery for CollisionSet<'_> {
    fn contains(&self, role: ColliderRole, point: Vec3) -> bool {
        self.with_role(role).any(|c| c.bounds.contains(point))
    }
}
