//! Trail paint buffer
//!
//! A fixed-size RGBA8 grid laid out exactly like the texture the terrain
//! shader samples: row-major, `y * width + x`. Painting only ever sets texels
//! to the trail color at full alpha, so stamps commute and repeat safely.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::consts::TRAIL_COLOR;

/// One RGBA8 texel
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Texel {
    pub rgba: [u8; 4],
}

impl Texel {
    pub const CLEAR: Texel = Texel { rgba: [0; 4] };
    pub const TRAIL: Texel = Texel { rgba: TRAIL_COLOR };

    #[inline]
    pub fn coverage(&self) -> u8 {
        self.rgba[3]
    }

    #[inline]
    pub fn is_painted(&self) -> bool {
        self.coverage() == u8::MAX
    }
}

/// Per-stage paint coverage grid
#[derive(Debug, Clone)]
pub struct PaintBuffer {
    width: u32,
    height: u32,
    texels: Vec<Texel>,
    /// Set by `stamp`/`reset`, cleared by the renderer via `take_dirty`
    dirty: bool,
}

/// Read-only view handed to the rendering surface
#[derive(Debug, Clone, Copy)]
pub struct PaintSnapshot<'a> {
    pub width: u32,
    pub height: u32,
    pub texels: &'a [Texel],
}

impl<'a> PaintSnapshot<'a> {
    /// Raw RGBA8 bytes for texture upload, borrowed from the buffer itself
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.texels)
    }

    pub fn texel(&self, x: u32, y: u32) -> Option<Texel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.texels.get((y * self.width + x) as usize).copied()
    }
}

impl PaintBuffer {
    /// Fully transparent buffer of `width` x `height` texels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texels: vec![Texel::CLEAR; width as usize * height as usize],
            dirty: true,
        }
    }

    /// Back to fully transparent (stage reload)
    pub fn reset(&mut self) {
        self.texels.fill(Texel::CLEAR);
        self.dirty = true;
    }

    /// Texel containing surface coordinate `uv` (may lie outside the buffer)
    pub fn uv_to_texel(&self, uv: Vec2) -> (i32, i32) {
        (
            (uv.x * self.width as f32).floor() as i32,
            (uv.y * self.height as f32).floor() as i32,
        )
    }

    /// Paint every texel within `radius` (Euclidean, texel units) of `(cx, cy)`.
    /// Offsets falling outside the buffer are skipped.
    pub fn stamp(&mut self, cx: i32, cy: i32, radius: i32) {
        // i64 keeps the squared distances exact for any i32 input
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let radius = i64::from(radius.max(0));
        let radius_sq = radius * radius;
        let (w, h) = (i64::from(self.width), i64::from(self.height));

        // Only rows and columns inside the buffer are visited
        for y in (cy - radius).max(0)..=(cy + radius).min(h - 1) {
            let dy = y - cy;
            for x in (cx - radius).max(0)..=(cx + radius).min(w - 1) {
                let dx = x - cx;
                if dx * dx + dy * dy > radius_sq {
                    continue;
                }
                self.texels[(y * w + x) as usize] = Texel::TRAIL;
            }
        }
        self.dirty = true;
    }

    /// Stamp at a surface UV coordinate
    pub fn stamp_uv(&mut self, uv: Vec2, radius: i32) {
        let (x, y) = self.uv_to_texel(uv);
        self.stamp(x, y, radius);
    }

    pub fn texel(&self, x: u32, y: u32) -> Option<Texel> {
        self.snapshot().texel(x, y)
    }

    pub fn is_painted(&self, x: u32, y: u32) -> bool {
        self.texel(x, y).is_some_and(|t| t.is_painted())
    }

    pub fn painted_count(&self) -> usize {
        self.texels.iter().filter(|t| t.is_painted()).count()
    }

    pub fn snapshot(&self) -> PaintSnapshot<'_> {
        PaintSnapshot {
            width: self.width,
            height: self.height,
            texels: &self.texels,
        }
    }

    /// Whether the buffer changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
