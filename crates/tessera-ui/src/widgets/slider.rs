use std::any::Any;

use tessera_engine::coords::{ColorRgb, Rect, Vec2};
use tessera_engine::input::MouseButton;
use tessera_engine::render::{Renderer, TextureId};
use tessera_engine::sprite::Sprite;
use tessera_engine::text::Align;

use crate::event::WidgetEvent;
use crate::widget::{GroupStyle, UiInput, Widget};
use crate::widgets::{Label, OVERLAY_BIAS, caption_offset};

/// A horizontal drag slider over 0..1.
///
/// The value tracks the cursor while the left button is held; a single `Set`
/// fires on release. The cursor quad never leaves the track, so the usable
/// travel is the track width minus the cursor width.
pub struct Slider {
    label: Label,
    label_align: Align,
    cursor: Sprite,
    value: f32,
    dragging: bool,
}

impl Slider {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pos: Vec2,
        depth: f32,
        dims: Vec2,
        texture: TextureId,
        cursor_texture: TextureId,
        cursor_width: f32,
        text: impl Into<String>,
        text_scale: f32,
        text_color: ColorRgb,
    ) -> Self {
        let label = Label::new(pos, depth, dims, texture, text, text_scale, text_color)
            .with_align(Align::Left, Align::Center);
        let cursor = Sprite::new(Vec2::zero(), Vec2::new(cursor_width, 0.0), cursor_texture);
        Self {
            label,
            label_align: Align::Top,
            cursor,
            value: 0.0,
            dragging: false,
        }
    }

    pub fn with_label_align(mut self, side: Align, h_align: Align, v_align: Align) -> Self {
        self.label_align = side;
        self.label.set_align(h_align, v_align);
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value without emitting an event.
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }
}

impl Widget for Slider {
    fn draw(&mut self, renderer: &mut Renderer, style: GroupStyle) {
        renderer.submit_with(&self.label.bg, style.pipeline);
        let text_pos = self.label.bg.pos + caption_offset(self.label_align, self.label.bg.dims);
        let bounds = Rect::from_origin_size(text_pos, self.label.bg.dims);
        self.label.submit_text(renderer, style, text_pos, bounds);
        renderer.submit_with(&self.cursor, style.pipeline);
    }

    fn process_input(&mut self, input: &UiInput<'_>, events: &mut Vec<WidgetEvent>) {
        let bg = &self.label.bg;
        if bg.bounds().contains(input.mouse) && input.state.button_pressed(MouseButton::Left) {
            self.dragging = true;
        }
        if !input.state.button_down(MouseButton::Left) && self.dragging {
            events.push(WidgetEvent::Set);
            self.dragging = false;
        }
        if self.dragging {
            let travel = bg.dims.x - self.cursor.dims.x;
            if input.mouse.x >= bg.pos.x + travel {
                self.value = 1.0;
            } else if input.mouse.x < bg.pos.x {
                self.value = 0.0;
            } else {
                self.value = (input.mouse.x - bg.pos.x) / travel;
            }
        }
    }

    fn update(&mut self, _input: &UiInput<'_>, _dt: f32) {
        let bg = &self.label.bg;
        self.cursor.pos = Vec2::new(
            bg.pos.x + (bg.dims.x - self.cursor.dims.x) * self.value,
            bg.pos.y,
        );
        self.cursor.depth = bg.depth + OVERLAY_BIAS;
        self.cursor.dims.y = bg.dims.y;
    }

    fn pos(&self) -> Vec2 {
        self.label.pos()
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.label.set_pos(pos);
    }

    fn dims(&self) -> Vec2 {
        self.label.dims()
    }

    fn set_dims(&mut self, dims: Vec2) {
        self.label.set_dims(dims);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_engine::input::InputState;
    use tessera_engine::text::FontData;

    fn slider() -> Slider {
        Slider::new(
            Vec2::zero(),
            0.0,
            Vec2::new(100.0, 10.0),
            TextureId::WHITE,
            TextureId::WHITE,
            10.0,
            "volume",
            1.0,
            ColorRgb::white(),
        )
    }

    fn at<'a>(state: &'a InputState, font: &'a FontData, x: f32) -> UiInput<'a> {
        UiInput {
            state,
            mouse: Vec2::new(x, 5.0),
            font,
        }
    }

    #[test]
    fn drag_tracks_and_fires_one_set_on_release() {
        let mut s = slider();
        let mut state = InputState::default();
        let font = FontData::default();
        let mut events = Vec::new();

        state.apply_button(MouseButton::Left, true);
        s.process_input(&at(&state, &font, 45.0), &mut events);
        assert!((s.value() - 0.5).abs() < 1e-6);
        assert!(events.is_empty());

        // Still held; value follows the cursor.
        state.snapshot();
        s.process_input(&at(&state, &font, 90.0), &mut events);
        assert!((s.value() - 1.0).abs() < 1e-6);
        assert!(events.is_empty());

        state.snapshot();
        state.apply_button(MouseButton::Left, false);
        s.process_input(&at(&state, &font, 90.0), &mut events);
        assert_eq!(events, vec![WidgetEvent::Set]);

        // Released; nothing more fires.
        state.snapshot();
        events.clear();
        s.process_input(&at(&state, &font, 90.0), &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn value_clamps_at_both_ends() {
        let mut s = slider();
        let mut state = InputState::default();
        let font = FontData::default();
        let mut events = Vec::new();

        state.apply_button(MouseButton::Left, true);
        s.process_input(&at(&state, &font, 50.0), &mut events);

        state.snapshot();
        s.process_input(&at(&state, &font, -20.0), &mut events);
        assert_eq!(s.value(), 0.0);

        s.process_input(&at(&state, &font, 500.0), &mut events);
        assert_eq!(s.value(), 1.0);
    }

    #[test]
    fn press_outside_does_not_start_a_drag() {
        let mut s = slider();
        let mut state = InputState::default();
        let font = FontData::default();
        let mut events = Vec::new();

        state.apply_button(MouseButton::Left, true);
        let input = UiInput {
            state: &state,
            mouse: Vec2::new(50.0, 200.0),
            font: &font,
        };
        s.process_input(&input, &mut events);
        assert_eq!(s.value(), 0.0);
        assert!(events.is_empty());
    }

    #[test]
    fn update_positions_cursor_by_value() {
        let mut s = slider();
        s.set_value(0.5);
        let state = InputState::default();
        let font = FontData::default();
        let input = UiInput {
            state: &state,
            mouse: Vec2::zero(),
            font: &font,
        };
        s.update(&input, 1.0 / 60.0);
        assert!((s.cursor.pos.x - 45.0).abs() < 1e-6);
        assert_eq!(s.cursor.dims.y, 10.0);
    }
}
