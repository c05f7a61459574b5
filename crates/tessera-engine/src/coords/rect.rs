use super::Vec2;

/// Axis-aligned rectangle in logical pixels (bottom-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            w: size.x,
            h: size.y,
        }
    }

    #[inline]
    pub const fn origin(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    /// Closed containment: points on every edge count as inside.
    ///
    /// Cursor hit-testing wants the max edge inclusive so a cursor resting on
    /// a widget border still registers.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.x && p.y >= self.y && p.x <= self.x + self.w && p.y <= self.y + self.h
    }

    /// True when the two rectangles overlap. Closed on both edges, so rects
    /// that merely touch still intersect.
    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        self.x <= other.x + other.w
            && other.x <= self.x + self.w
            && self.y <= other.y + other.h
            && other.y <= self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_edges_inclusive() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 10.1)));
    }

    // ── intersects ────────────────────────────────────────────────────────

    #[test]
    fn intersects_overlapping() {
        assert!(r(0.0, 0.0, 10.0, 10.0).intersects(r(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn intersects_contained() {
        assert!(r(0.0, 0.0, 100.0, 100.0).intersects(r(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn intersects_touching_edge_counts() {
        assert!(r(0.0, 0.0, 10.0, 10.0).intersects(r(10.0, 0.0, 10.0, 10.0)));
        assert!(r(0.0, 0.0, 10.0, 10.0).intersects(r(0.0, 10.0, 10.0, 10.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).intersects(r(10.1, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn intersects_disjoint_is_false() {
        assert!(!r(0.0, 0.0, 5.0, 5.0).intersects(r(20.0, 20.0, 5.0, 5.0)));
    }

    // ── misc ──────────────────────────────────────────────────────────────

    #[test]
    fn center_of_rect() {
        assert_eq!(r(0.0, 0.0, 10.0, 20.0).center(), Vec2::new(5.0, 10.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
