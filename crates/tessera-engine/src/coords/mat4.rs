use core::ops::Mul;

use super::Vec2;

/// Column-major 4x4 matrix.
///
/// Only the operations the camera needs: orthographic projection, translation,
/// uniform scale, and composition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    /// Columns, each a (x, y, z, w) vector.
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Orthographic projection mapping `[left, right] x [bottom, top]` to NDC,
    /// with a fixed -1..1 depth range.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        Mat4 {
            cols: [
                [2.0 / rl, 0.0, 0.0, 0.0],
                [0.0, 2.0 / tb, 0.0, 0.0],
                [0.0, 0.0, -1.0, 0.0],
                [-(right + left) / rl, -(top + bottom) / tb, 0.0, 1.0],
            ],
        }
    }

    pub fn from_translation(t: Vec2) -> Self {
        let mut m = Mat4::IDENTITY;
        m.cols[3][0] = t.x;
        m.cols[3][1] = t.y;
        m
    }

    pub fn from_scale(s: f32) -> Self {
        let mut m = Mat4::IDENTITY;
        m.cols[0][0] = s;
        m.cols[1][1] = s;
        m
    }

    /// Transforms a point with an implicit z = 0, w = 1.
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let c = &self.cols;
        Vec2::new(
            c[0][0] * p.x + c[1][0] * p.y + c[3][0],
            c[0][1] * p.x + c[1][1] * p.y + c[3][1],
        )
    }

    /// Flat column-major array for uniform buffer upload.
    pub fn to_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (i, col) in self.cols.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(col);
        }
        out
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut cols = [[0.0; 4]; 4];
        for (j, col) in cols.iter_mut().enumerate() {
            for (i, cell) in col.iter_mut().enumerate() {
                *cell = a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
            }
        }
        Mat4 { cols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── orthographic ──────────────────────────────────────────────────────

    #[test]
    fn orthographic_maps_corners_to_ndc() {
        let m = Mat4::orthographic(0.0, 800.0, 0.0, 600.0);
        assert_eq!(m.transform_point(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, -1.0));
        assert_eq!(m.transform_point(Vec2::new(800.0, 600.0)), Vec2::new(1.0, 1.0));
        assert_eq!(m.transform_point(Vec2::new(400.0, 300.0)), Vec2::new(0.0, 0.0));
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn identity_is_neutral() {
        let m = Mat4::orthographic(0.0, 100.0, 0.0, 100.0);
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
    }

    #[test]
    fn translation_applies_offset() {
        let m = Mat4::from_translation(Vec2::new(10.0, -5.0));
        assert_eq!(m.transform_point(Vec2::new(1.0, 2.0)), Vec2::new(11.0, -3.0));
    }

    #[test]
    fn scale_then_translate_order() {
        // Multiplication is right-to-left application.
        let m = Mat4::from_translation(Vec2::new(10.0, 0.0)) * Mat4::from_scale(2.0);
        assert_eq!(m.transform_point(Vec2::new(3.0, 4.0)), Vec2::new(16.0, 8.0));
    }

    #[test]
    fn to_array_is_column_major() {
        let m = Mat4::from_translation(Vec2::new(7.0, 9.0));
        let a = m.to_array();
        assert_eq!(a[12], 7.0);
        assert_eq!(a[13], 9.0);
        assert_eq!(a[0], 1.0);
    }
}
