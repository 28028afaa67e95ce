//! Terrain ray probe
//!
//! The stage surface is an arena of triangle meshes. Surfaces that carry a
//! paint trail are registered as paintable when the stage loads and receive a
//! `PaintTarget` handle; every ray hit on such a surface reports that handle
//! along with the interpolated UV, so the simulator never has to search the
//! scene for something to paint.

use glam::{Vec2, Vec3};

use super::collision::Aabb;

/// Height the fixed-origin query casts from
pub const PROBE_CEILING: f32 = 10_000.0;

/// Parallel-ray rejection threshold for the intersection test
const RAY_EPSILON: f32 = 1e-7;

/// Stable handle to a surface in a `Terrain`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u32);

impl SurfaceId {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Handle to the paint buffer a paintable surface draws into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaintTarget(u32);

impl PaintTarget {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Nearest intersection of a downward probe ray with the terrain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainHit {
    pub point: Vec3,
    /// Face normal facing the ray origin; `None` for degenerate geometry
    pub normal: Option<Vec3>,
    /// Interpolated surface UV, when the surface has texture coordinates
    pub uv: Option<Vec2>,
    pub surface: SurfaceId,
    /// Present only when the hit surface is paintable
    pub paint: Option<PaintTarget>,
}

impl TerrainHit {
    #[inline]
    pub fn height(&self) -> f32 {
        self.point.y
    }
}

/// Height/normal queries against static terrain
pub trait TerrainProbe {
    /// Cast a ray straight down from `origin` and return the nearest hit below it
    fn cast_down(&self, origin: Vec3) -> Option<TerrainHit>;

    /// Terrain under `(x, z)`, cast from a fixed height above the whole stage
    fn query_height_at(&self, x: f32, z: f32) -> Option<TerrainHit> {
        self.cast_down(Vec3::new(x, PROBE_CEILING, z))
    }
}

/// Static indexed triangle mesh
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    positions: Vec<Vec3>,
    uvs: Option<Vec<Vec2>>,
    triangles: Vec<[u32; 3]>,
    bounds: Option<Aabb>,
}

/// Raw ray/triangle intersection: distance along the ray and barycentrics
struct RayHit {
    t: f32,
    u: f32,
    v: f32,
    triangle: usize,
}

impl TriangleMesh {
    /// Build a mesh. Triangles referencing missing vertices are never hit.
    pub fn new(positions: Vec<Vec3>, uvs: Option<Vec<Vec2>>, triangles: Vec<[u32; 3]>) -> Self {
        let bounds = Aabb::from_points(positions.iter().copied());
        Self {
            positions,
            uvs,
            triangles,
            bounds,
        }
    }

    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    fn corners(&self, tri: [u32; 3]) -> Option<[Vec3; 3]> {
        Some([
            *self.positions.get(tri[0] as usize)?,
            *self.positions.get(tri[1] as usize)?,
            *self.positions.get(tri[2] as usize)?,
        ])
    }

    /// Moller-Trumbore, double-sided. Returns the nearest hit with t >= 0.
    fn raycast(&self, origin: Vec3, dir: Vec3) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;

        for (i, &tri) in self.triangles.iter().enumerate() {
            let Some([a, b, c]) = self.corners(tri) else {
                continue;
            };
            let e1 = b - a;
            let e2 = c - a;
            let p = dir.cross(e2);
            let det = e1.dot(p);
            if det.abs() < RAY_EPSILON {
                continue;
            }
            let inv_det = 1.0 / det;
            let s = origin - a;
            let u = s.dot(p) * inv_det;
            if !(0.0..=1.0).contains(&u) {
                continue;
            }
            let q = s.cross(e1);
            let v = dir.dot(q) * inv_det;
            if v < 0.0 || u + v > 1.0 {
                continue;
            }
            let t = e2.dot(q) * inv_det;
            if t < 0.0 {
                continue;
            }
            if best.as_ref().is_none_or(|h| t < h.t) {
                best = Some(RayHit { t, u, v, triangle: i });
            }
        }

        best
    }

    fn face_normal(&self, triangle: usize, toward: Vec3) -> Option<Vec3> {
        let [a, b, c] = self.corners(*self.triangles.get(triangle)?)?;
        let n = (b - a).cross(c - a).normalize_or_zero();
        if n == Vec3::ZERO {
            return None;
        }
        // Face the side the ray came from
        Some(if n.dot(toward) < 0.0 { -n } else { n })
    }

    fn interpolate_uv(&self, triangle: usize, u: f32, v: f32) -> Option<Vec2> {
        let uvs = self.uvs.as_ref()?;
        let tri = self.triangles.get(triangle)?;
        let ua = *uvs.get(tri[0] as usize)?;
        let ub = *uvs.get(tri[1] as usize)?;
        let uc = *uvs.get(tri[2] as usize)?;
        Some(ua * (1.0 - u - v) + ub * u + uc * v)
    }
}

/// One named mesh in the terrain arena
#[derive(Debug, Clone)]
pub struct Surface {
    pub name: String,
    pub mesh: TriangleMesh,
    pub paint: Option<PaintTarget>,
}

/// All static terrain for a stage
#[derive(Debug, Clone, Default)]
pub struct Terrain {
    surfaces: Vec<Surface>,
    paint_targets: u32,
}

impl Terrain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a solid surface that does not take paint (fences, rocks)
    pub fn add_surface(&mut self, name: impl Into<String>, mesh: TriangleMesh) -> SurfaceId {
        self.push(name.into(), mesh, None)
    }

    /// Register a surface the ball paints as it rolls over it
    pub fn add_paintable_surface(
        &mut self,
        name: impl Into<String>,
        mesh: TriangleMesh,
    ) -> (SurfaceId, PaintTarget) {
        let target = PaintTarget(self.paint_targets);
        self.paint_targets += 1;
        let id = self.push(name.into(), mesh, Some(target));
        (id, target)
    }

    fn push(&mut self, name: String, mesh: TriangleMesh, paint: Option<PaintTarget>) -> SurfaceId {
        let id = SurfaceId::new(self.surfaces.len() as u32);
        self.surfaces.push(Surface { name, mesh, paint });
        id
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Number of paint buffers the simulator must allocate
    pub fn paint_target_count(&self) -> usize {
        self.paint_targets as usize
    }
}

impl TerrainProbe for Terrain {
    fn cast_down(&self, origin: Vec3) -> Option<TerrainHit> {
        let dir = Vec3::NEG_Y;
        let mut nearest: Option<(usize, RayHit)> = None;

        for (i, surface) in self.surfaces.iter().enumerate() {
            let Some(bounds) = surface.mesh.bounds() else {
                continue;
            };
            if !bounds.contains_planar(origin) || bounds.min.y > origin.y {
                continue;
            }
            if let Some(hit) = surface.mesh.raycast(origin, dir) {
                if nearest.as_ref().is_none_or(|(_, h)| hit.t < h.t) {
                    nearest = Some((i, hit));
                }
            }
        }

        let (i, hit) = nearest?;
        let surface = &self.surfaces[i];
        Some(TerrainHit {
            point: origin + dir * hit.t,
            normal: surface.mesh.face_normal(hit.triangle, -dir),
            uv: surface.mesh.interpolate_uv(hit.triangle, hit.u, hit.v),
            surface: SurfaceId::new(i as u32),
            paint: surface.paint,
        })
    }
}
