//! Stage description and loading
//!
//! A stage is loaded once before the simulator starts ticking. It owns the
//! terrain surfaces (registering the paintable ones) and the tagged collider
//! volumes; the simulator only borrows them.

use glam::{EulerRot, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{Aabb, Collider, ColliderRole, CollisionSet, Terrain, TriangleMesh};

#[derive(Debug, Error)]
pub enum StageError {
    #[error("invalid stage JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("stage '{0}' has no terrain surfaces")]
    NoSurfaces(String),

    #[error("surface '{surface}' triangle {triangle} references vertex {index}, but only {vertices} exist")]
    IndexOutOfRange {
        surface: String,
        triangle: usize,
        index: u32,
        vertices: usize,
    },

    #[error("surface '{surface}' has {uvs} UVs for {vertices} vertices")]
    UvCountMismatch {
        surface: String,
        uvs: usize,
        vertices: usize,
    },

    #[error("surface '{0}' has a non-finite vertex or UV")]
    NonFiniteGeometry(String),

    #[error("collider {index}: {reason}")]
    BadCollider { index: usize, reason: &'static str },

    #[error("spawn position must be finite")]
    BadSpawn,
}

/// One terrain mesh as stored in a stage file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceDef {
    pub name: String,
    /// Receives the paint trail
    #[serde(default)]
    pub paintable: bool,
    pub positions: Vec<Vec3>,
    #[serde(default)]
    pub uvs: Option<Vec<Vec2>>,
    pub triangles: Vec<[u32; 3]>,
}

/// A collider box as placed in the scene: size, center and Euler rotation (radians, XYZ)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColliderDef {
    pub role: ColliderRole,
    pub center: Vec3,
    pub size: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
}

/// Stage file contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDef {
    pub name: String,
    pub spawn: Vec3,
    pub surfaces: Vec<SurfaceDef>,
    #[serde(default)]
    pub colliders: Vec<ColliderDef>,
}

/// A loaded, validated stage
#[derive(Debug, Clone)]
pub struct Stage {
    pub name: String,
    pub spawn: Vec3,
    pub terrain: Terrain,
    pub colliders: Vec<Collider>,
}

impl Stage {
    pub fn from_json(json: &str) -> Result<Self, StageError> {
        let def: StageDef = serde_json::from_str(json)?;
        Self::from_def(def)
    }

    pub fn from_def(def: StageDef) -> Result<Self, StageError> {
        if def.surfaces.is_empty() {
            return Err(StageError::NoSurfaces(def.name));
        }
        if !def.spawn.is_finite() {
            return Err(StageError::BadSpawn);
        }

        let mut terrain = Terrain::new();
        for surface in def.surfaces {
            validate_surface(&surface)?;
            let mesh = TriangleMesh::new(surface.positions, surface.uvs, surface.triangles);
            if surface.paintable {
                terrain.add_paintable_surface(surface.name, mesh);
            } else {
                terrain.add_surface(surface.name, mesh);
            }
        }

        let colliders = def
            .colliders
            .iter()
            .enumerate()
            .map(|(index, c)| collider_from_def(index, c))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "Loaded stage '{}': {} surfaces ({} paintable), {} colliders",
            def.name,
            terrain.surfaces().len(),
            terrain.paint_target_count(),
            colliders.len()
        );

        Ok(Self {
            name: def.name,
            spawn: def.spawn,
            terrain,
            colliders,
        })
    }

    /// Collider queries for the simulator
    pub fn collision_set(&self) -> CollisionSet<'_> {
        CollisionSet::new(&self.colliders)
    }
}

fn validate_surface(surface: &SurfaceDef) -> Result<(), StageError> {
    let vertices = surface.positions.len();
    if surface.positions.iter().any(|p| !p.is_finite()) {
        return Err(StageError::NonFiniteGeometry(surface.name.clone()));
    }
    if let Some(uvs) = &surface.uvs {
        if uvs.len() != vertices {
            return Err(StageError::UvCountMismatch {
                surface: surface.name.clone(),
                uvs: uvs.len(),
                vertices,
            });
        }
        if uvs.iter().any(|uv| !uv.is_finite()) {
            return Err(StageError::NonFiniteGeometry(surface.name.clone()));
        }
    }
    for (triangle, tri) in surface.triangles.iter().enumerate() {
        if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertices) {
            return Err(StageError::IndexOutOfRange {
                surface: surface.name.clone(),
                triangle,
                index,
                vertices,
            });
        }
    }
    Ok(())
}

fn collider_from_def(index: usize, def: &ColliderDef) -> Result<Collider, StageError> {
    if !(def.center.is_finite() && def.size.is_finite() && def.rotation.is_finite()) {
        return Err(StageError::BadCollider {
            index,
            reason: "non-finite placement",
        });
    }
    if def.size.cmplt(Vec3::ZERO).any() {
        return Err(StageError::BadCollider {
            index,
            reason: "negative size",
        });
    }
    let rotation = Quat::from_euler(EulerRot::XYZ, def.rotation.x, def.rotation.y, def.rotation.z);
    Ok(Collider::new(
        def.role,
        Aabb::from_oriented_box(def.center, def.size, rotation),
    ))
}
