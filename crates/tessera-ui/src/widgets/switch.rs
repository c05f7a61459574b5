use std::any::Any;

use tessera_engine::coords::{ColorRgb, Rect, Vec2};
use tessera_engine::input::MouseButton;
use tessera_engine::render::{Renderer, TextureId};
use tessera_engine::text::Align;

use crate::event::WidgetEvent;
use crate::widget::{GroupStyle, UiInput, Widget};
use crate::widgets::{Label, caption_offset};

// Halves of a 2-frame strip: off, on.
const OFF_RECT: Rect = Rect::new(0.0, 0.0, 0.5, 1.0);
const ON_RECT: Rect = Rect::new(0.5, 0.0, 0.5, 1.0);

/// A toggle.
///
/// A left-button press inside the bounds flips the state and emits `On` or
/// `Off` immediately. The caption draws beside the body per `label_align`.
pub struct Switch {
    label: Label,
    on: bool,
    label_align: Align,
}

impl Switch {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pos: Vec2,
        depth: f32,
        dims: Vec2,
        texture: TextureId,
        text: impl Into<String>,
        text_scale: f32,
        text_color: ColorRgb,
    ) -> Self {
        let mut label = Label::new(pos, depth, dims, texture, text, text_scale, text_color)
            .with_align(Align::Left, Align::Center);
        label.bg.tex_rect = OFF_RECT;
        Self {
            label,
            on: false,
            label_align: Align::Top,
        }
    }

    /// Places the caption on a different side of the body.
    pub fn with_label_align(mut self, side: Align, h_align: Align, v_align: Align) -> Self {
        self.label_align = side;
        self.label.set_align(h_align, v_align);
        self
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Sets the state without emitting an event.
    pub fn set_on(&mut self, on: bool) {
        self.label.bg.tex_rect = if on { ON_RECT } else { OFF_RECT };
        self.on = on;
    }
}

impl Widget for Switch {
    fn draw(&mut self, renderer: &mut Renderer, style: GroupStyle) {
        renderer.submit_with(&self.label.bg, style.pipeline);
        let text_pos = self.label.bg.pos + caption_offset(self.label_align, self.label.bg.dims);
        let bounds = Rect::from_origin_size(text_pos, self.label.bg.dims);
        self.label.submit_text(renderer, style, text_pos, bounds);
    }

    fn process_input(&mut self, input: &UiInput<'_>, events: &mut Vec<WidgetEvent>) {
        if self.label.bg.bounds().contains(input.mouse)
            && input.state.button_pressed(MouseButton::Left)
        {
            self.set_on(!self.on);
            events.push(if self.on {
                WidgetEvent::On
            } else {
                WidgetEvent::Off
            });
        }
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
