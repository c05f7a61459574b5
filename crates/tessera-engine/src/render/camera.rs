use crate::coords::{Mat4, Vec2, Viewport};

/// 2D orthographic camera.
///
/// The projection maps the viewport to NDC, centered on `position` and zoomed
/// by `scale`. The matrix is recomputed lazily; `generation` bumps on every
/// recompute so the renderer knows when to re-upload the uniform.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec2,
    pub velocity: Vec2,
    scale: f32,
    pub scale_velocity: f32,
    viewport: Viewport,
    matrix: Mat4,
    dirty: bool,
    generation: u64,
}

impl Camera {
    pub fn new(viewport: Viewport) -> Self {
        let mut cam = Self {
            position: Vec2::zero(),
            velocity: Vec2::zero(),
            scale: 1.0,
            scale_velocity: 0.0,
            viewport,
            matrix: Mat4::IDENTITY,
            dirty: true,
            generation: 0,
        };
        cam.recompute();
        cam
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, pos: Vec2) {
        if pos != self.position {
            self.position = pos;
            self.dirty = true;
        }
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        if scale != self.scale {
            self.scale = scale;
            self.dirty = true;
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.dirty = true;
        }
    }

    /// Integrates velocity into position and scale.
    pub fn update(&mut self, dt: f32) {
        if self.velocity != Vec2::zero() {
            self.position += self.velocity * dt;
            self.dirty = true;
        }
        if self.scale_velocity != 0.0 {
            self.scale += self.scale_velocity * dt;
            self.dirty = true;
        }
    }

    /// Combined projection-view matrix, recomputed if anything changed.
    pub fn matrix(&mut self) -> Mat4 {
        if self.dirty {
            self.recompute();
        }
        self.matrix
    }

    /// Bumped each time the matrix is recomputed.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Converts a window-space point (logical pixels, bottom-left origin) to
    /// world space.
    pub fn window_to_world(&self, p: Vec2) -> Vec2 {
        let half = self.viewport.as_vec2() / 2.0;
        (p - half) / self.scale + self.position
    }

    fn recompute(&mut self) {
        let vp = self.viewport.as_vec2();
        let proj = Mat4::orthographic(0.0, vp.x, 0.0, vp.y);
        let view = Mat4::from_translation(-self.position + vp / 2.0);
        self.matrix = Mat4::from_scale(self.scale) * (proj * view);
        self.dirty = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cam() -> Camera {
        Camera::new(Viewport::new(800.0, 600.0))
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn camera_position_maps_to_ndc_center() {
        let mut c = cam();
        c.set_position(Vec2::new(250.0, -40.0));
        let ndc = c.matrix().transform_point(Vec2::new(250.0, -40.0));
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    }

    #[test]
    fn default_view_maps_viewport_corners() {
        // Camera at origin looks at the rect centered on (0, 0).
        let mut c = cam();
        let ndc = c.matrix().transform_point(Vec2::new(400.0, 300.0));
        assert_eq!(ndc, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn scale_zooms_about_center() {
        let mut c = cam();
        c.set_scale(2.0);
        let ndc = c.matrix().transform_point(Vec2::new(100.0, 0.0));
        assert!((ndc.x - 0.5).abs() < 1e-5);
    }

    // ── dirty tracking ────────────────────────────────────────────────────

    #[test]
    fn generation_stable_without_changes() {
        let mut c = cam();
        let g0 = {
            c.matrix();
            c.generation()
        };
        c.matrix();
        assert_eq!(c.generation(), g0);
    }

    #[test]
    fn generation_bumps_after_move() {
        let mut c = cam();
        c.matrix();
        let g0 = c.generation();
        c.set_position(Vec2::new(1.0, 0.0));
        c.matrix();
        assert_eq!(c.generation(), g0 + 1);
    }

    #[test]
    fn setting_same_value_does_not_dirty() {
        let mut c = cam();
        c.matrix();
        let g0 = c.generation();
        c.set_scale(1.0);
        c.set_position(Vec2::zero());
        c.matrix();
        assert_eq!(c.generation(), g0);
    }

    #[test]
    fn update_integrates_velocity() {
        let mut c = cam();
        c.velocity = Vec2::new(10.0, -20.0);
        c.scale_velocity = 0.5;
        c.update(0.5);
        assert_eq!(c.position(), Vec2::new(5.0, -10.0));
        assert_eq!(c.scale(), 1.25);
    }

    // ── window_to_world ───────────────────────────────────────────────────

    #[test]
    fn window_to_world_identity_camera() {
        let c = cam();
        // Window center is the camera position.
        assert_eq!(c.window_to_world(Vec2::new(400.0, 300.0)), Vec2::zero());
    }

    #[test]
    fn window_to_world_with_pan_and_zoom() {
        let mut c = cam();
        c.set_position(Vec2::new(100.0, 50.0));
        c.set_scale(2.0);
        let w = c.window_to_world(Vec2::new(500.0, 300.0));
        assert_eq!(w, Vec2::new(150.0, 50.0));
    }

    #[test]
    fn window_to_world_inverts_projection() {
        let mut c = cam();
        c.set_position(Vec2::new(-30.0, 12.0));
        c.set_scale(1.5);
        let world = Vec2::new(40.0, -8.0);
        let ndc = c.matrix().transform_point(world);
        // Undo the NDC mapping to get window-space logical pixels.
        let win = Vec2::new((ndc.x + 1.0) / 2.0 * 800.0, (ndc.y + 1.0) / 2.0 * 600.0);
        let back = c.window_to_world(win);
        assert!((back.x - world.x).abs() < 1e-3);
        assert!((back.y - world.y).abs() < 1e-3);
    }
}
