use std::any::Any;

use tessera_engine::coords::Vec2;
use tessera_engine::input::InputState;
use tessera_engine::render::{FontId, PipelineId, Renderer};
use tessera_engine::text::FontData;

use crate::event::WidgetEvent;

/// Pipeline and font shared by every widget in a group.
#[derive(Debug, Copy, Clone)]
pub struct GroupStyle {
    pub pipeline: PipelineId,
    pub font: FontId,
}

/// Input view handed to widget logic.
///
/// Deliberately GPU-free: the group resolves the world-space cursor through
/// its pipeline's camera and looks up the font metrics once, so widget state
/// machines run (and test) without a device.
pub struct UiInput<'a> {
    pub state: &'a InputState,
    /// Cursor position in the group camera's world space.
    pub mouse: Vec2,
    /// Metrics of the group font, for caret math.
    pub font: &'a FontData,
}

/// A single retained UI component.
///
/// Positions and dimensions are in world pixels with a bottom-left origin,
/// matching sprite space. Widgets never talk to each other or to their
/// group; interactions surface as [`WidgetEvent`]s pushed into the buffer
/// passed to `process_input`.
pub trait Widget: Any {
    /// Queue this widget's quads and text.
    fn draw(&mut self, renderer: &mut Renderer, style: GroupStyle);

    /// React to the current input state.
    fn process_input(&mut self, input: &UiInput<'_>, events: &mut Vec<WidgetEvent>) {
        let _ = (input, events);
    }

    /// Advance time-based state. `dt` is in seconds.
    fn update(&mut self, input: &UiInput<'_>, dt: f32) {
        let _ = (input, dt);
    }

    /// Bottom-left corner of this widget's footprint.
    fn pos(&self) -> Vec2;
    fn set_pos(&mut self, pos: Vec2);

    /// Full footprint size, including any attached parts.
    fn dims(&self) -> Vec2;
    fn set_dims(&mut self, dims: Vec2);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
