//! Coordinate and geometry types shared across the renderer, input, and UI.
//!
//! Canonical world space:
//! - Logical pixels (DPI-aware)
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! The camera converts world positions to NDC; depth is a CPU-side sort key.

mod color;
mod mat4;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgb;
pub use mat4::Mat4;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
