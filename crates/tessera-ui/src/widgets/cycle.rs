use std::any::Any;

use tessera_engine::coords::{ColorRgb, Rect, Vec2};
use tessera_engine::render::{Renderer, TextureId};
use tessera_engine::text::Align;

use crate::event::WidgetEvent;
use crate::widget::{GroupStyle, UiInput, Widget};
use crate::widgets::{Button, Label, caption_offset};

/// A value carousel: a display panel plus stacked previous/next buttons.
///
/// The buttons are owned `Button` values; their `Clicked` events are
/// translated into a single `Set` after the index wraps around the value
/// list. The panel takes 80% of the width, the button column 20%.
pub struct Cycle {
    label: Label,
    button_align: Align,
    prev: Button,
    next: Button,
    values: Vec<String>,
    index: Option<usize>,
    caption: String,
    caption_align: Align,
    caption_h_align: Align,
    caption_v_align: Align,
}

impl Cycle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pos: Vec2,
        depth: f32,
        dims: Vec2,
        texture: TextureId,
        button_texture: TextureId,
        values: Vec<String>,
        caption: impl Into<String>,
        prev_text: impl Into<String>,
        next_text: impl Into<String>,
        text_scale: f32,
        text_color: ColorRgb,
    ) -> Self {
        let first = values.first().cloned().unwrap_or_default();
        let label = Label::new(Vec2::zero(), depth, Vec2::zero(), texture, first, text_scale, text_color);
        let prev = Button::new(
            Vec2::zero(),
            depth,
            Vec2::zero(),
            button_texture,
            prev_text,
            text_scale,
            text_color,
        );
        let next = Button::new(
            Vec2::zero(),
            depth,
            Vec2::zero(),
            button_texture,
            next_text,
            text_scale,
            text_color,
        );
        let index = if values.is_empty() { None } else { Some(0) };
        let mut cycle = Self {
            label,
            button_align: Align::Right,
            prev,
            next,
            values,
            index,
            caption: caption.into(),
            caption_align: Align::Top,
            caption_h_align: Align::Left,
            caption_v_align: Align::Center,
        };
        cycle.set_dims(dims);
        cycle.set_pos(pos);
        cycle
    }

    /// Moves the button column to the left edge.
    pub fn with_buttons_left(mut self) -> Self {
        let pos = self.pos();
        self.button_align = Align::Left;
        self.set_pos(pos);
        self
    }

    pub fn add_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
        if self.index.is_none() {
            self.index = Some(0);
            self.label.set_text(self.values[0].clone());
        }
    }

    pub fn remove_value(&mut self, index: usize) {
        if index >= self.values.len() {
            return;
        }
        self.values.remove(index);
        if self.values.is_empty() {
            self.index = None;
            self.label.set_text("");
            return;
        }
        let i = self.index.unwrap_or(0).min(self.values.len() - 1);
        self.index = Some(i);
        self.label.set_text(self.values[i].clone());
    }

    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The currently displayed value, or "" when the list is empty.
    pub fn value(&self) -> &str {
        match self.index {
            Some(i) => &self.values[i],
            None => "",
        }
    }

    /// Displays `text`, appending it to the value list if absent.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        let i = match self.index_of(&text) {
            Some(i) => i,
            None => {
                self.values.push(text.clone());
                self.values.len() - 1
            }
        };
        self.index = Some(i);
        self.label.set_text(text);
    }

    fn step(&mut self, forward: bool) {
        let Some(i) = self.index else {
            return;
        };
        let len = self.values.len();
        let next = if forward {
            (i + 1) % len
        } else {
            (i + len - 1) % len
        };
        self.index = Some(next);
        self.label.set_text(self.values[next].clone());
    }
}

impl Widget for Cycle {
    fn draw(&mut self, renderer: &mut Renderer, style: GroupStyle) {
        let caption_pos = self.pos() + caption_offset(self.caption_align, self.dims());
        let bounds = Rect::from_origin_size(caption_pos, self.dims());
        self.label.submit_caption(
            renderer,
            style,
            &self.caption,
            caption_pos,
            bounds,
            self.caption_h_align,
            self.caption_v_align,
        );
        self.label.submit(renderer, style);
        self.prev.draw(renderer, style);
        self.next.draw(renderer, style);
    }

    fn process_input(&mut self, input: &UiInput<'_>, events: &mut Vec<WidgetEvent>) {
        let mut prev_events = Vec::new();
        self.prev.process_input(input, &mut prev_events);
        let mut next_events = Vec::new();
        self.next.process_input(input, &mut next_events);

        if self.index.is_none() {
            return;
        }
        if prev_events.contains(&WidgetEvent::Clicked) {
            self.step(false);
            events.push(WidgetEvent::Set);
        }
        if next_events.contains(&WidgetEvent::Clicked) {
            self.step(true);
            events.push(WidgetEvent::Set);
        }
    }

    fn pos(&self) -> Vec2 {
        match self.button_align {
            Align::Left => self.next.pos(),
            _ => self.label.pos(),
        }
    }

    fn set_pos(&mut self, pos: Vec2) {
        let total = self.dims();
        let button_h = self.next.dims().y;
        match self.button_align {
            Align::Left => {
                self.label.set_pos(Vec2::new(pos.x + 0.2 * total.x, pos.y));
                self.prev.set_pos(Vec2::new(pos.x, pos.y + button_h));
                self.next.set_pos(pos);
            }
            _ => {
                self.label.set_pos(pos);
                self.prev
                    .set_pos(Vec2::new(pos.x + 0.8 * total.x, pos.y + button_h));
                self.next.set_pos(Vec2::new(pos.x + 0.8 * total.x, pos.y));
            }
        }
    }

    fn dims(&self) -> Vec2 {
        Vec2::new(
            self.label.dims().x + self.prev.dims().x,
            self.label.dims().y,
        )
    }

    fn set_dims(&mut self, dims: Vec2) {
        self.label.set_dims(Vec2::new(dims.x * 0.8, dims.y));
        self.prev.set_dims(Vec2::new(dims.x * 0.2, dims.y / 2.0));
        self.next.set_dims(Vec2::new(dims.x * 0.2, dims.y / 2.0));
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
    use tessera_engine::input::{InputState, MouseButton};
    use tessera_engine::text::FontData;

    fn cycle() -> Cycle {
        Cycle::new(
            Vec2::zero(),
            0.0,
            Vec2::new(100.0, 20.0),
            TextureId::WHITE,
            TextureId::WHITE,
            vec!["800x600".into(), "1080x720".into(), "1920x1080".into()],
            "resolution",
            "-",
            "+",
            1.0,
            ColorRgb::white(),
        )
    }

    fn at<'a>(state: &'a InputState, font: &'a FontData, x: f32, y: f32) -> UiInput<'a> {
        UiInput {
            state,
            mouse: Vec2::new(x, y),
            font,
        }
    }

    #[test]
    fn layout_splits_panel_and_buttons() {
        let c = cycle();
        // Panel 80 wide at the origin; buttons stacked in the right 20.
        assert_eq!(c.label.pos(), Vec2::zero());
        assert_eq!(c.label.dims(), Vec2::new(80.0, 20.0));
        assert_eq!(c.next.pos(), Vec2::new(80.0, 0.0));
        assert_eq!(c.prev.pos(), Vec2::new(80.0, 10.0));
        assert_eq!(c.dims(), Vec2::new(100.0, 20.0));
    }

    #[test]
    fn next_click_advances_and_wraps() {
        let mut c = cycle();
        let mut state = InputState::default();
        let font = FontData::default();
        let mut events = Vec::new();

        // Three full press-release cycles on the next button.
        for expected in ["1080x720", "1920x1080", "800x600"] {
            state.apply_button(MouseButton::Left, true);
            c.process_input(&at(&state, &font, 85.0, 5.0), &mut events);
            state.snapshot();
            state.apply_button(MouseButton::Left, false);
            events.clear();
            c.process_input(&at(&state, &font, 85.0, 5.0), &mut events);
            assert_eq!(events, vec![WidgetEvent::Set]);
            assert_eq!(c.value(), expected);
            state.snapshot();
        }
    }

    #[test]
    fn prev_click_wraps_backward() {
        let mut c = cycle();
        let mut state = InputState::default();
        let font = FontData::default();
        let mut events = Vec::new();

        state.apply_button(MouseButton::Left, true);
        c.process_input(&at(&state, &font, 85.0, 15.0), &mut events);
        state.snapshot();
        state.apply_button(MouseButton::Left, false);
        events.clear();
        c.process_input(&at(&state, &font, 85.0, 15.0), &mut events);
        assert_eq!(events, vec![WidgetEvent::Set]);
        assert_eq!(c.value(), "1920x1080");
    }

    #[test]
    fn set_text_appends_unknown_values() {
        let mut c = cycle();
        c.set_text("640x480");
        assert_eq!(c.value(), "640x480");
        assert_eq!(c.index(), Some(3));
        // Known value selects rather than appends.
        c.set_text("800x600");
        assert_eq!(c.index(), Some(0));
        assert_eq!(c.index_of("640x480"), Some(3));
    }

    #[test]
    fn empty_cycle_ignores_clicks() {
        let mut c = Cycle::new(
            Vec2::zero(),
            0.0,
            Vec2::new(100.0, 20.0),
            TextureId::WHITE,
            TextureId::WHITE,
            Vec::new(),
            "",
            "-",
            "+",
            1.0,
            ColorRgb::white(),
        );
        assert_eq!(c.value(), "");
        let mut state = InputState::default();
        let font = FontData::default();
        let mut events = Vec::new();

        state.apply_button(MouseButton::Left, true);
        c.process_input(&at(&state, &font, 85.0, 5.0), &mut events);
        state.snapshot();
        state.apply_button(MouseButton::Left, false);
        c.process_input(&at(&state, &font, 85.0, 5.0), &mut events);
        assert!(events.is_empty());
    }
}
