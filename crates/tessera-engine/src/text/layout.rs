use crate::coords::{Rect, Vec2};

use super::font::FontData;

/// Anchor for text within its bounds rectangle.
///
/// `None` ignores the bounds on that axis and places the pen at the submitted
/// position directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    Right,
    Bottom,
    Top,
    Center,
    #[default]
    None,
}

/// One glyph quad produced by layout: a world-space destination rect and the
/// atlas sub-rect to sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlacedGlyph {
    pub dst: Rect,
    pub uv: Rect,
}

/// Lays out one line of text against `bounds`.
///
/// The returned quads are in world space. The pen starts compensated by the
/// first glyph's left bearing so the leftmost pixel lands exactly on the
/// anchor. Glyphs that would extend past `bounds` on any side are discarded;
/// the pen still advances past them so the remaining glyphs keep their
/// positions.
pub fn layout_text(
    text: &str,
    pos: Vec2,
    bounds: Rect,
    scale: f32,
    font: &FontData,
    h_align: Align,
    v_align: Align,
) -> Vec<PlacedGlyph> {
    if text.is_empty() || font.is_empty() {
        return Vec::new();
    }

    let label_width = font.measure(text, scale);
    let min_bearing = font.min_bearing * scale;
    let max_bearing = font.max_bearing * scale;
    let label_height = min_bearing + max_bearing;

    let mut x = match h_align {
        Align::Left => bounds.x,
        Align::Right => bounds.x + bounds.w - label_width,
        Align::Center => bounds.x + bounds.w / 2.0 - label_width / 2.0,
        _ => pos.x,
    };
    // Baseline height.
    let y = match v_align {
        Align::Bottom => bounds.y + min_bearing,
        Align::Top => bounds.y + bounds.h - label_height,
        Align::Center => bounds.y + bounds.h / 2.0 - label_height / 2.0,
        _ => pos.y,
    };

    if let Some(first) = text.chars().find_map(|c| font.glyphs.get(&c)) {
        x -= first.bearing.x * scale;
    }

    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        let Some(g) = font.glyphs.get(&c) else {
            continue;
        };
        let dst = Rect::new(
            x + g.bearing.x * scale,
            y - (g.dims.y - g.bearing.y) * scale,
            g.dims.x * scale,
            g.dims.y * scale,
        );
        let inside = dst.x >= bounds.x
            && dst.x + dst.w <= bounds.x + bounds.w
            && dst.y >= bounds.y
            && dst.y + dst.h <= bounds.y + bounds.h;
        if inside {
            out.push(PlacedGlyph { dst, uv: g.uv });
        }
        x += g.advance * scale;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::font::test_font::fixed;

    // Fixed test font: 10x20 glyph bitmaps, bearing (1, 16), advance 12,
    // descender depth 4.

    fn wide_bounds() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 1000.0)
    }

    // ── anchoring ─────────────────────────────────────────────────────────

    #[test]
    fn left_align_starts_at_bounds_edge() {
        let f = fixed();
        let g = layout_text("ab", Vec2::zero(), wide_bounds(), 1.0, &f, Align::Left, Align::Bottom);
        // Pen at 0 minus first bearing 1, plus glyph bearing 1 = 0.
        assert_eq!(g[0].dst.x, 0.0);
        assert_eq!(g[1].dst.x, 12.0);
    }

    #[test]
    fn right_align_ends_at_bounds_edge() {
        let f = fixed();
        let b = Rect::new(0.0, 0.0, 100.0, 100.0);
        let g = layout_text("ab", Vec2::zero(), b, 1.0, &f, Align::Right, Align::Bottom);
        // Label width 24; pen starts at 76 minus bearing compensation.
        assert_eq!(g[0].dst.x, 75.0 + 1.0);
    }

    #[test]
    fn center_align_splits_slack() {
        let f = fixed();
        let b = Rect::new(0.0, 0.0, 100.0, 100.0);
        let g = layout_text("ab", Vec2::zero(), b, 1.0, &f, Align::Center, Align::Bottom);
        assert_eq!(g[0].dst.x, 38.0);
    }

    #[test]
    fn none_align_uses_position() {
        let f = fixed();
        let g = layout_text(
            "a",
            Vec2::new(40.0, 7.0),
            wide_bounds(),
            1.0,
            &f,
            Align::None,
            Align::None,
        );
        // Baseline 7, descender 4 below it.
        assert_eq!(g[0].dst.x, 40.0);
        assert_eq!(g[0].dst.y, 3.0);
    }

    #[test]
    fn bottom_align_rests_descender_on_bounds() {
        let f = fixed();
        let g = layout_text("a", Vec2::zero(), wide_bounds(), 1.0, &f, Align::Left, Align::Bottom);
        // Baseline = min_bearing, glyph bottom = baseline - descender = 0.
        assert_eq!(g[0].dst.y, 0.0);
    }

    #[test]
    fn top_align_fits_label_height() {
        let f = fixed();
        let b = Rect::new(0.0, 0.0, 100.0, 100.0);
        let g = layout_text("a", Vec2::zero(), b, 1.0, &f, Align::Left, Align::Top);
        // Baseline = 100 - 20; glyph top = baseline + ascender 16 = 96.
        assert_eq!(g[0].dst.y + g[0].dst.h, 96.0);
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_multiplies_metrics() {
        let f = fixed();
        let g = layout_text("ab", Vec2::zero(), wide_bounds(), 0.5, &f, Align::Left, Align::Bottom);
        assert_eq!(g[0].dst.w, 5.0);
        assert_eq!(g[0].dst.h, 10.0);
        assert_eq!(g[1].dst.x - g[0].dst.x, 6.0);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn glyphs_outside_bounds_are_discarded() {
        let f = fixed();
        // Room for two glyphs only.
        let b = Rect::new(0.0, 0.0, 26.0, 100.0);
        let g = layout_text("abcd", Vec2::zero(), b, 1.0, &f, Align::Left, Align::Bottom);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn pen_advances_past_discarded_glyphs() {
        let f = fixed();
        // First glyph pokes below the bounds and is dropped; the second still
        // lands at its normal spot.
        let b = Rect::new(0.0, 2.0, 1000.0, 100.0);
        let g = layout_text(
            "ab",
            Vec2::new(0.0, 4.0),
            b,
            1.0,
            &f,
            Align::None,
            Align::None,
        );
        // Both glyphs share a baseline so both are dropped here; use a bounds
        // that admits glyphs from x >= 12 instead.
        assert!(g.is_empty());
        let b = Rect::new(6.0, 0.0, 1000.0, 1000.0);
        let g = layout_text(
            "ab",
            Vec2::new(0.0, 4.0),
            b,
            1.0,
            &f,
            Align::None,
            Align::None,
        );
        assert_eq!(g.len(), 1);
        assert_eq!(g[0].dst.x, 12.0);
    }

    // ── degenerate inputs ─────────────────────────────────────────────────

    #[test]
    fn empty_text_or_font_yields_nothing() {
        let f = fixed();
        assert!(layout_text("", Vec2::zero(), wide_bounds(), 1.0, &f, Align::Left, Align::Bottom).is_empty());
        let empty = FontData::default();
        assert!(
            layout_text("hi", Vec2::zero(), wide_bounds(), 1.0, &empty, Align::Left, Align::Bottom)
                .is_empty()
        );
    }
}
