use std::collections::HashMap;

use crate::coords::{Rect, Vec2};

/// Pixel size glyphs are baked at. Text drawn at `scale == 1.0` comes out at
/// this height.
pub const RASTER_PX: f32 = 48.0;

const ATLAS_WIDTH: u32 = 1024;
const GLYPH_PADDING: u32 = 1;

/// Metrics and atlas location for one baked glyph, at the baked pixel size.
#[derive(Debug, Clone, Copy)]
pub struct GlyphInfo {
    /// Bitmap size in pixels.
    pub dims: Vec2,
    /// (left, top) bearing: x offset from the pen, y distance from the
    /// baseline up to the bitmap top.
    pub bearing: Vec2,
    /// Horizontal pen advance.
    pub advance: f32,
    /// Normalized atlas sub-rect, top-left UV origin.
    pub uv: Rect,
}

/// One loaded font: glyph table plus the 8-bit coverage atlas it indexes.
///
/// All metric fields are in pixels at [`RASTER_PX`]. The atlas bitmap is kept
/// CPU-side; the renderer uploads it once and records the texture handle.
#[derive(Debug, Clone, Default)]
pub struct FontData {
    pub glyphs: HashMap<char, GlyphInfo>,
    /// Deepest descender over all glyphs (bitmap below the baseline).
    pub min_bearing: f32,
    /// Tallest ascender over all glyphs (bitmap above the baseline).
    pub max_bearing: f32,
    pub atlas_pixels: Vec<u8>,
    pub atlas_width: u32,
    pub atlas_height: u32,
}

impl FontData {
    /// True when no glyphs were baked; layout over an empty font emits
    /// nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Advance-sum width of `text` at `scale`.
    pub fn measure(&self, text: &str, scale: f32) -> f32 {
        text.chars()
            .filter_map(|c| self.glyphs.get(&c))
            .map(|g| g.advance * scale)
            .sum()
    }

    /// Line height at `scale`: ascender plus descender extent.
    #[inline]
    pub fn line_height(&self, scale: f32) -> f32 {
        (self.min_bearing + self.max_bearing) * scale
    }
}

/// Bakes the printable ASCII range of `font` into a fresh [`FontData`].
///
/// Glyph bitmaps are shelf-packed left to right into rows of a fixed-width
/// atlas with a pixel of padding so linear sampling never bleeds.
pub fn build_font_data(font: &fontdue::Font) -> FontData {
    let mut data = FontData {
        atlas_width: ATLAS_WIDTH,
        ..FontData::default()
    };

    struct Baked {
        c: char,
        metrics: fontdue::Metrics,
        bitmap: Vec<u8>,
    }

    let mut baked = Vec::new();
    for c in (0u8..128).map(char::from) {
        let (metrics, bitmap) = font.rasterize(c, RASTER_PX);
        baked.push(Baked { c, metrics, bitmap });
    }

    // Shelf-pack to size the atlas before writing pixels.
    let mut cursor_x = GLYPH_PADDING;
    let mut cursor_y = GLYPH_PADDING;
    let mut row_height = 0u32;
    let mut placements = Vec::with_capacity(baked.len());
    for b in &baked {
        let (w, h) = (b.metrics.width as u32, b.metrics.height as u32);
        if cursor_x + w + GLYPH_PADDING > ATLAS_WIDTH {
            cursor_x = GLYPH_PADDING;
            cursor_y += row_height + GLYPH_PADDING;
            row_height = 0;
        }
        placements.push((cursor_x, cursor_y));
        cursor_x += w + GLYPH_PADDING;
        row_height = row_height.max(h);
    }
    let atlas_height = (cursor_y + row_height + GLYPH_PADDING).max(1);
    data.atlas_height = atlas_height;
    data.atlas_pixels = vec![0; (ATLAS_WIDTH * atlas_height) as usize];

    for (b, &(px, py)) in baked.iter().zip(&placements) {
        let (w, h) = (b.metrics.width as u32, b.metrics.height as u32);
        for row in 0..h {
            let src = (row * w) as usize;
            let dst = ((py + row) * ATLAS_WIDTH + px) as usize;
            data.atlas_pixels[dst..dst + w as usize]
                .copy_from_slice(&b.bitmap[src..src + w as usize]);
        }

        let dims = Vec2::new(w as f32, h as f32);
        let bearing = Vec2::new(b.metrics.xmin as f32, (b.metrics.ymin + b.metrics.height as i32) as f32);
        data.glyphs.insert(
            b.c,
            GlyphInfo {
                dims,
                bearing,
                advance: b.metrics.advance_width,
                uv: Rect::new(
                    px as f32 / ATLAS_WIDTH as f32,
                    py as f32 / atlas_height as f32,
                    dims.x / ATLAS_WIDTH as f32,
                    dims.y / atlas_height as f32,
                ),
            },
        );

        let descent = dims.y - bearing.y;
        if descent > data.min_bearing {
            data.min_bearing = descent;
        }
        if bearing.y > data.max_bearing {
            data.max_bearing = bearing.y;
        }
    }

    data
}

#[cfg(test)]
pub(crate) mod test_font {
    use super::*;

    /// Hand-built fixed-metric font: every glyph is a 10x20 box sitting 4px
    /// below the baseline, advancing 12px.
    pub fn fixed() -> FontData {
        let mut glyphs = HashMap::new();
        for c in (32u8..127).map(char::from) {
            glyphs.insert(
                c,
                GlyphInfo {
                    dims: Vec2::new(10.0, 20.0),
                    bearing: Vec2::new(1.0, 16.0),
                    advance: 12.0,
                    uv: Rect::new(0.0, 0.0, 0.1, 0.1),
                },
            );
        }
        FontData {
            glyphs,
            min_bearing: 4.0,
            max_bearing: 16.0,
            atlas_pixels: vec![0; 16],
            atlas_width: 4,
            atlas_height: 4,
        }
    }
}
