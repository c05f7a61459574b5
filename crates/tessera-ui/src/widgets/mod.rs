//! The built-in widget set.

mod button;
mod cycle;
mod label;
mod slider;
mod switch;
mod textbox;

pub use button::Button;
pub use cycle::Cycle;
pub use label::Label;
pub use slider::Slider;
pub use switch::Switch;
pub use textbox::TextBox;

use tessera_engine::coords::Vec2;
use tessera_engine::text::Align;

/// Depth offset lifting text and cursors above their background quad.
pub(crate) const OVERLAY_BIAS: f32 = 0.1;

/// Offset that places an attached caption on the given side of a body of
/// size `dims`.
pub(crate) fn caption_offset(align: Align, dims: Vec2) -> Vec2 {
    match align {
        Align::Left => Vec2::new(-dims.x, 0.0),
        Align::Right => Vec2::new(dims.x, 0.0),
        Align::Bottom => Vec2::new(0.0, -dims.y),
        Align::Top => Vec2::new(0.0, dims.y),
        Align::Center | Align::None => Vec2::zero(),
    }
}
