use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgb, Rect, Vec2};
use crate::render::TextureId;

/// Axis pair a sprite's texture sub-rect can be mirrored across.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Reflect {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

/// One quad vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    /// Float component counts per attribute, in shader location order.
    pub const COMPONENTS: &'static [u32] = &[3, 2, 3];
}

/// A textured quad in world space.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Bottom-left corner in world space.
    pub pos: Vec2,
    /// Depth sort key; larger values draw on top.
    pub depth: f32,
    pub dims: Vec2,
    pub velocity: Vec2,
    /// Rotation about the quad center, in degrees counterclockwise.
    pub rotation: f32,
    /// Rotation rate in degrees per second.
    pub rot_velocity: f32,
    pub reflect: Reflect,
    pub texture: TextureId,
    /// Normalized sub-rect of the texture, top-left UV origin.
    pub tex_rect: Rect,
    /// Tint; black means "sample the texture unmodified".
    pub color: ColorRgb,
}

impl Sprite {
    pub fn new(pos: Vec2, dims: Vec2, texture: TextureId) -> Self {
        Self {
            pos,
            depth: 0.0,
            dims,
            velocity: Vec2::zero(),
            rotation: 0.0,
            rot_velocity: 0.0,
            reflect: Reflect::None,
            texture,
            tex_rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            color: ColorRgb::black(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.dims)
    }

    #[inline]
    pub fn intersects(&self, other: &Sprite) -> bool {
        self.bounds().intersects(other.bounds())
    }

    /// Integrates velocity into position and rotation.
    pub fn update(&mut self, dt: f32) {
        self.pos += self.velocity * dt;
        self.rotation += self.rot_velocity * dt;
    }

    /// Expands the sprite into four vertices, ordered bottom-left,
    /// bottom-right, top-right, top-left.
    pub fn vertices(&self) -> [Vertex; 4] {
        let (x, y) = (self.pos.x, self.pos.y);
        let (w, h) = (self.dims.x, self.dims.y);
        let mut corners = [
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ];

        // Whole rotations leave the quad axis-aligned; skip the trig.
        if (self.rotation as i32) % 360 != 0 || self.rotation.fract() != 0.0 {
            let c = self.bounds().center();
            let (sin, cos) = self.rotation.to_radians().sin_cos();
            for p in &mut corners {
                let d = *p - c;
                *p = Vec2::new(c.x + d.x * cos - d.y * sin, c.y + d.x * sin + d.y * cos);
            }
        }

        let t = self.tex_rect;
        let (u0, u1) = (t.x, t.x + t.w);
        let (v0, v1) = (t.y, t.y + t.h);
        // UVs use a top-left texture origin, so the bottom row samples v1.
        let [(bl, br), (tr, tl)] = match self.reflect {
            Reflect::None => [((u0, v1), (u1, v1)), ((u1, v0), (u0, v0))],
            Reflect::Horizontal => [((u1, v1), (u0, v1)), ((u0, v0), (u1, v0))],
            Reflect::Vertical => [((u1, v0), (u0, v0)), ((u0, v1), (u1, v1))],
            Reflect::Both => [((u0, v0), (u1, v0)), ((u1, v1), (u0, v1))],
        };

        let color = [self.color.r, self.color.g, self.color.b];
        let vert = |p: Vec2, uv: (f32, f32)| Vertex {
            pos: [p.x, p.y, self.depth],
            uv: [uv.0, uv.1],
            color,
        };
        [
            vert(corners[0], bl),
            vert(corners[1], br),
            vert(corners[2], tr),
            vert(corners[3], tl),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite() -> Sprite {
        Sprite::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 2.0), TextureId::WHITE)
    }

    // ── vertex expansion ──────────────────────────────────────────────────

    #[test]
    fn vertices_corner_order() {
        let v = sprite().vertices();
        assert_eq!(v[0].pos, [10.0, 20.0, 0.0]);
        assert_eq!(v[1].pos, [14.0, 20.0, 0.0]);
        assert_eq!(v[2].pos, [14.0, 22.0, 0.0]);
        assert_eq!(v[3].pos, [10.0, 22.0, 0.0]);
    }

    #[test]
    fn vertices_carry_depth_and_color() {
        let mut s = sprite();
        s.depth = 3.5;
        s.color = ColorRgb::new(0.25, 0.5, 0.75);
        let v = s.vertices();
        assert_eq!(v[2].pos[2], 3.5);
        assert_eq!(v[0].color, [0.25, 0.5, 0.75]);
    }

    #[test]
    fn default_uvs_cover_texture() {
        let v = sprite().vertices();
        assert_eq!(v[0].uv, [0.0, 1.0]);
        assert_eq!(v[1].uv, [1.0, 1.0]);
        assert_eq!(v[2].uv, [1.0, 0.0]);
        assert_eq!(v[3].uv, [0.0, 0.0]);
    }

    // ── reflection ────────────────────────────────────────────────────────

    #[test]
    fn reflect_horizontal_swaps_u() {
        let mut s = sprite();
        s.reflect = Reflect::Horizontal;
        let v = s.vertices();
        assert_eq!(v[0].uv, [1.0, 1.0]);
        assert_eq!(v[1].uv, [0.0, 1.0]);
    }

    #[test]
    fn reflect_vertical_uv_table() {
        let mut s = sprite();
        s.reflect = Reflect::Vertical;
        let v = s.vertices();
        assert_eq!(v[0].uv, [1.0, 0.0]);
        assert_eq!(v[1].uv, [0.0, 0.0]);
        assert_eq!(v[2].uv, [0.0, 1.0]);
        assert_eq!(v[3].uv, [1.0, 1.0]);
    }

    #[test]
    fn reflect_both_uv_table() {
        let mut s = sprite();
        s.reflect = Reflect::Both;
        let v = s.vertices();
        assert_eq!(v[0].uv, [0.0, 0.0]);
        assert_eq!(v[1].uv, [1.0, 0.0]);
        assert_eq!(v[2].uv, [1.0, 1.0]);
        assert_eq!(v[3].uv, [0.0, 1.0]);
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn whole_rotation_is_skipped() {
        let mut s = sprite();
        s.rotation = 720.0;
        assert_eq!(s.vertices()[0].pos, [10.0, 20.0, 0.0]);
    }

    #[test]
    fn quarter_turn_about_center() {
        let mut s = Sprite::new(Vec2::zero(), Vec2::new(4.0, 2.0), TextureId::WHITE);
        s.rotation = 90.0;
        let v = s.vertices();
        // Center (2, 1); bottom-left (0, 0) rotates to (3, -1).
        assert!((v[0].pos[0] - 3.0).abs() < 1e-4);
        assert!((v[0].pos[1] + 1.0).abs() < 1e-4);
    }

    // ── intersects / update ───────────────────────────────────────────────

    #[test]
    fn intersects_uses_bounds() {
        let a = sprite();
        let mut b = sprite();
        b.pos = Vec2::new(12.0, 21.0);
        assert!(a.intersects(&b));
        b.pos = Vec2::new(100.0, 100.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn update_applies_velocity() {
        let mut s = sprite();
        s.velocity = Vec2::new(2.0, -4.0);
        s.update(0.5);
        assert_eq!(s.pos, Vec2::new(11.0, 18.0));
    }
}
