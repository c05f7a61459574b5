//! Glyph-atlas text engine.
//!
//! Fonts are rasterized once at load time: every ASCII glyph is baked at a
//! fixed pixel size into a single R8 atlas, and layout afterwards is pure
//! metric arithmetic. `scale` on a text submission is relative to that baked
//! size.

mod font;
mod layout;

pub use font::{FontData, GlyphInfo, RASTER_PX, build_font_data};
pub use layout::{Align, PlacedGlyph, layout_text};
