//! Ball simulation module
//!
//! All per-frame gameplay logic lives here. Nothing in this module renders,
//! blocks, or returns errors:
//! - Terrain and colliders are read-only inputs for the tick
//! - Abnormal conditions become outcome transitions, never faults
//! - Outward values (events, waypoints) are plain `Copy` data

pub mod collision;
pub mod paint;
pub mod path;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{Aabb, Collider, ColliderRole, CollisionSet, VolumeQuery};
pub use paint::{PaintBuffer, PaintSnapshot, Texel};
pub use path::PathRecorder;
pub use state::{BallState, GameEvent, GameOutcome, OverReason, TickResult, Waypoint};
pub use terrain::{PaintTarget, Surface, SurfaceId, Terrain, TerrainHit, TerrainProbe, TriangleMesh};
pub use tick::{BallSimulator, TickInput};
