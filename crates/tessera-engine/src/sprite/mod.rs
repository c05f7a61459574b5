//! Sprites and frame animations.
//!
//! A sprite is plain data: world position + depth, dimensions, rotation,
//! reflection, a texture handle, and a sub-rect of that texture. Vertex
//! expansion happens on the CPU so the renderer only ever sees quads.

mod animation;
mod quad;

pub use animation::Animation;
pub use quad::{Reflect, Sprite, Vertex};
