use std::any::Any;

use tessera_engine::coords::{ColorRgb, Rect, Vec2};
use tessera_engine::input::MouseButton;
use tessera_engine::render::{Renderer, TextureId};

use crate::event::WidgetEvent;
use crate::widget::{GroupStyle, UiInput, Widget};
use crate::widgets::Label;

// Thirds of a 3-frame strip: unselected, selected, clicked.
const UNSELECTED_RECT: Rect = Rect::new(0.0, 0.0, 1.0 / 3.0, 1.0);
const SELECTED_RECT: Rect = Rect::new(1.0 / 3.0, 0.0, 1.0 / 3.0, 1.0);
const CLICKED_RECT: Rect = Rect::new(2.0 / 3.0, 0.0, 1.0 / 3.0, 1.0);

/// A clickable button.
///
/// Emits `Selected`/`Unselected` once per cursor entry/exit and `Clicked`
/// when the left button is released while held over the widget.
pub struct Button {
    label: Label,
    selected: bool,
    clicked: bool,
}

impl Button {
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
        let mut label = Label::new(pos, depth, dims, texture, text, text_scale, text_color);
        label.bg.tex_rect = UNSELECTED_RECT;
        Self {
            label,
            selected: false,
            clicked: false,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.label.bg.tex_rect = if selected {
            SELECTED_RECT
        } else {
            UNSELECTED_RECT
        };
        self.selected = selected;
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    pub fn set_clicked(&mut self, clicked: bool) {
        self.label.bg.tex_rect = if clicked {
            CLICKED_RECT
        } else if self.selected {
            SELECTED_RECT
        } else {
            UNSELECTED_RECT
        };
        self.clicked = clicked;
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }
}

impl Widget for Button {
    fn draw(&mut self, renderer: &mut Renderer, style: GroupStyle) {
        self.label.submit(renderer, style);
    }

    fn process_input(&mut self, input: &UiInput<'_>, events: &mut Vec<WidgetEvent>) {
        if self.label.bg.bounds().contains(input.mouse) {
            if !self.selected {
                self.set_selected(true);
                events.push(WidgetEvent::Selected);
            }
        } else if self.selected {
            self.set_selected(false);
            events.push(WidgetEvent::Unselected);
        }

        if self.selected {
            if self.clicked && input.state.button_released(MouseButton::Left) {
                events.push(WidgetEvent::Clicked);
            }
            let down = input.state.button_down(MouseButton::Left);
            self.set_clicked(down);
        } else {
            self.set_clicked(false);
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
