use std::any::Any;

use tessera_engine::coords::{ColorRgb, Rect, Vec2};
use tessera_engine::input::{Key, MouseButton};
use tessera_engine::render::{Renderer, TextureId};
use tessera_engine::sprite::Sprite;
use tessera_engine::text::{Align, FontData};

use crate::event::WidgetEvent;
use crate::widget::{GroupStyle, UiInput, Widget};
use crate::widgets::{Label, OVERLAY_BIAS, caption_offset};

// Halves of a 2-frame strip: unfocused, focused.
const UNSELECTED_RECT: Rect = Rect::new(0.0, 0.0, 0.5, 1.0);
const SELECTED_RECT: Rect = Rect::new(0.5, 0.0, 0.5, 1.0);

/// Held-key repeat starts after this many seconds.
const REPEAT_DELAY: f32 = 10.0 / 60.0;
/// The repeat timer wraps at one second.
const TIMER_WRAP: f32 = 1.0;

/// A single-line text input.
///
/// Click to focus; typed characters insert at the caret, subject to the
/// max-length and allow-list filters. The text start slides horizontally in
/// `update` to keep the caret inside the visible window.
pub struct TextBox {
    label: Label,
    caption: String,
    caption_align: Align,
    caption_h_align: Align,
    caption_v_align: Align,
    /// World x of the first character; slides left of `bg.pos.x` when the
    /// caret runs past the right edge.
    text_start: f32,
    cursor: Sprite,
    cursor_pos: usize,
    timer: f32,
    max_chars: Option<usize>,
    allowed: String,
    selected: bool,
}

impl TextBox {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pos: Vec2,
        depth: f32,
        dims: Vec2,
        texture: TextureId,
        cursor_texture: TextureId,
        cursor_width: f32,
        caption: impl Into<String>,
        text: impl Into<String>,
        text_scale: f32,
        text_color: ColorRgb,
        max_chars: Option<usize>,
        allowed: impl Into<String>,
    ) -> Self {
        let mut label = Label::new(pos, depth, dims, texture, text, text_scale, text_color)
            .with_align(Align::None, Align::Center);
        label.bg.tex_rect = UNSELECTED_RECT;
        let cursor = Sprite::new(Vec2::zero(), Vec2::new(cursor_width, 0.0), cursor_texture);
        Self {
            label,
            caption: caption.into(),
            caption_align: Align::Top,
            caption_h_align: Align::Left,
            caption_v_align: Align::Center,
            text_start: pos.x,
            cursor,
            cursor_pos: 0,
            timer: 0.0,
            max_chars,
            allowed: allowed.into(),
            selected: false,
        }
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    /// Replaces the content and rewinds the caret. Oversized text is
    /// rejected, not truncated.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if let Some(max) = self.max_chars
            && text.len() > max
        {
            return;
        }
        self.text_start = self.label.bg.pos.x;
        self.cursor_pos = 0;
        self.label.set_text(text);
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    fn advance(font: &FontData, c: char, scale: f32) -> f32 {
        font.glyphs.get(&c).map(|g| g.advance * scale).unwrap_or(0.0)
    }

    fn char_typed(&mut self, c: char) {
        if !c.is_ascii() || c.is_control() {
            return;
        }
        if let Some(max) = self.max_chars
            && self.label.text().len() >= max
        {
            return;
        }
        if !self.allowed.is_empty() && !self.allowed.contains(c) {
            return;
        }
        let mut text = self.label.text().to_string();
        text.insert(self.cursor_pos.min(text.len()), c);
        self.label.set_text(text);
        self.cursor_pos += 1;
    }

    fn repeat_fired(&self, input: &UiInput<'_>, key: Key) -> bool {
        input.state.key_pressed(key) || (input.state.key_down(key) && self.timer > REPEAT_DELAY)
    }

    fn set_selected(&mut self, selected: bool) {
        self.label.bg.tex_rect = if selected {
            SELECTED_RECT
        } else {
            UNSELECTED_RECT
        };
        self.selected = selected;
    }

    /// Places the caret at the glyph boundary nearest the click.
    fn caret_from_click(&mut self, input: &UiInput<'_>) {
        let scale = self.label.text_scale();
        let mut x = self.text_start;
        for (i, c) in self.label.text().chars().enumerate() {
            let d = Self::advance(input.font, c, scale);
            if x + d >= input.mouse.x {
                self.cursor_pos = i;
                return;
            }
            x += d;
        }
        self.cursor_pos = self.label.text().chars().count();
    }
}

impl Widget for TextBox {
    fn draw(&mut self, renderer: &mut Renderer, style: GroupStyle) {
        renderer.submit_with(&self.label.bg, style.pipeline);
        let bg = &self.label.bg;

        let caption_pos = bg.pos + caption_offset(self.caption_align, bg.dims);
        let caption_bounds = Rect::from_origin_size(caption_pos, bg.dims);
        self.label.submit_caption(
            renderer,
            style,
            &self.caption,
            caption_pos,
            caption_bounds,
            self.caption_h_align,
            self.caption_v_align,
        );

        let text_pos = Vec2::new(self.text_start, bg.pos.y);
        self.label.submit_text(renderer, style, text_pos, bg.bounds());

        if self.selected {
            renderer.submit_with(&self.cursor, style.pipeline);
        }
    }

    fn process_input(&mut self, input: &UiInput<'_>, events: &mut Vec<WidgetEvent>) {
        let bounds = self.label.bg.bounds();
        if input.state.button_down(MouseButton::Left) {
            if bounds.contains(input.mouse) {
                if !self.selected {
                    self.set_selected(true);
                    events.push(WidgetEvent::Selected);
                }
                self.caret_from_click(input);
            } else if self.selected && input.state.button_pressed(MouseButton::Left) {
                self.set_selected(false);
                events.push(WidgetEvent::Unselected);
            }
        }

        if !self.selected {
            return;
        }

        if input.state.key_pressed(Key::Enter) {
            events.push(WidgetEvent::Entered);
        }
        if self.cursor_pos > 0 && self.repeat_fired(input, Key::ArrowLeft) {
            self.cursor_pos -= 1;
            self.timer = 0.0;
        }
        if self.cursor_pos < self.label.text().len() && self.repeat_fired(input, Key::ArrowRight) {
            self.cursor_pos += 1;
            self.timer = 0.0;
        }
        if self.cursor_pos > 0 && self.repeat_fired(input, Key::Backspace) {
            let mut text = self.label.text().to_string();
            text.remove(self.cursor_pos - 1);
            self.label.set_text(text);
            self.cursor_pos -= 1;
            self.timer = 0.0;
        }
        if self.cursor_pos < self.label.text().len() && self.repeat_fired(input, Key::Delete) {
            let mut text = self.label.text().to_string();
            text.remove(self.cursor_pos);
            self.label.set_text(text);
            self.timer = 0.0;
        }

        let typed: String = input.state.typed().to_string();
        for c in typed.chars() {
            self.char_typed(c);
        }
    }

    fn update(&mut self, input: &UiInput<'_>, dt: f32) {
        let bg_pos = self.label.bg.pos;
        let bg_dims = self.label.bg.dims;

        // Scroll the text window a fifth of the box at a time until the
        // caret is back inside.
        if self.cursor.pos.x < bg_pos.x {
            self.text_start += bg_dims.x / 5.0;
            if self.text_start > bg_pos.x {
                self.text_start = bg_pos.x;
            }
        } else if self.cursor.pos.x + self.cursor.dims.x > bg_pos.x + bg_dims.x {
            self.text_start -= bg_dims.x / 5.0;
        }

        self.cursor.pos = Vec2::new(self.text_start, bg_pos.y);
        self.cursor.depth = self.label.depth() + 2.0 * OVERLAY_BIAS;
        self.cursor.dims.y = bg_dims.y;
        let scale = self.label.text_scale();
        for c in self.label.text().chars().take(self.cursor_pos) {
            self.cursor.pos.x += Self::advance(input.font, c, scale);
        }

        self.timer += dt;
        if self.timer > TIMER_WRAP {
            self.timer = 0.0;
        }
    }

    fn pos(&self) -> Vec2 {
        self.label.pos()
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.label.set_pos(pos);
        self.text_start = pos.x;
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
    use std::collections::HashMap;
    use tessera_engine::input::InputState;
    use tessera_engine::text::GlyphInfo;

    fn ten_px_font() -> FontData {
        let mut glyphs = HashMap::new();
        for c in ' '..='~' {
            glyphs.insert(
                c,
                GlyphInfo {
                    dims: Vec2::new(8.0, 16.0),
                    bearing: Vec2::new(1.0, 14.0),
                    advance: 10.0,
                    uv: Rect::new(0.0, 0.0, 1.0, 1.0),
                },
            );
        }
        FontData {
            glyphs,
            min_bearing: 4.0,
            max_bearing: 16.0,
            ..Default::default()
        }
    }

    fn textbox(max_chars: Option<usize>, allowed: &str) -> TextBox {
        TextBox::new(
            Vec2::zero(),
            0.0,
            Vec2::new(100.0, 20.0),
            TextureId::WHITE,
            TextureId::WHITE,
            2.0,
            "name",
            "",
            1.0,
            ColorRgb::white(),
            max_chars,
            allowed,
        )
    }

    fn focus(tb: &mut TextBox, state: &mut InputState, font: &FontData) {
        state.apply_button(MouseButton::Left, true);
        let input = UiInput {
            state,
            mouse: Vec2::new(5.0, 5.0),
            font,
        };
        let mut events = Vec::new();
        tb.process_input(&input, &mut events);
        assert_eq!(events, vec![WidgetEvent::Selected]);
        state.snapshot();
        state.apply_button(MouseButton::Left, false);
        state.snapshot();
    }

    fn type_text(tb: &mut TextBox, state: &mut InputState, font: &FontData, text: &str) {
        state.apply_text(text);
        let input = UiInput {
            state,
            mouse: Vec2::new(-50.0, -50.0),
            font,
        };
        let mut events = Vec::new();
        tb.process_input(&input, &mut events);
        state.snapshot();
    }

    #[test]
    fn typing_inserts_at_the_caret() {
        let font = ten_px_font();
        let mut state = InputState::default();
        let mut tb = textbox(None, "");
        focus(&mut tb, &mut state, &font);

        type_text(&mut tb, &mut state, &font, "ac");
        assert_eq!(tb.text(), "ac");
        assert_eq!(tb.cursor_pos(), 2);

        // Move the caret left and insert in the middle.
        state.apply_key(Key::ArrowLeft, true);
        let input = UiInput {
            state: &state,
            mouse: Vec2::new(-50.0, -50.0),
            font: &font,
        };
        let mut events = Vec::new();
        tb.process_input(&input, &mut events);
        assert_eq!(tb.cursor_pos(), 1);
        state.snapshot();
        state.apply_key(Key::ArrowLeft, false);
        state.snapshot();

        type_text(&mut tb, &mut state, &font, "b");
        assert_eq!(tb.text(), "abc");
    }

    #[test]
    fn max_chars_blocks_further_typing() {
        let font = ten_px_font();
        let mut state = InputState::default();
        let mut tb = textbox(Some(3), "");
        focus(&mut tb, &mut state, &font);

        type_text(&mut tb, &mut state, &font, "abcd");
        assert_eq!(tb.text(), "abc");
    }

    #[test]
    fn allow_list_filters_characters() {
        let font = ten_px_font();
        let mut state = InputState::default();
        let mut tb = textbox(None, "0123456789");
        focus(&mut tb, &mut state, &font);

        type_text(&mut tb, &mut state, &font, "1a2b3");
        assert_eq!(tb.text(), "123");
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let font = ten_px_font();
        let mut state = InputState::default();
        let mut tb = textbox(None, "");
        focus(&mut tb, &mut state, &font);
        type_text(&mut tb, &mut state, &font, "hi");

        // Caret to the start, then backspace.
        for _ in 0..2 {
            state.apply_key(Key::ArrowLeft, true);
            let input = UiInput {
                state: &state,
                mouse: Vec2::new(-50.0, -50.0),
                font: &font,
            };
            tb.process_input(&input, &mut Vec::new());
            state.snapshot();
            state.apply_key(Key::ArrowLeft, false);
            state.snapshot();
        }
        assert_eq!(tb.cursor_pos(), 0);

        state.apply_key(Key::Backspace, true);
        let input = UiInput {
            state: &state,
            mouse: Vec2::new(-50.0, -50.0),
            font: &font,
        };
        tb.process_input(&input, &mut Vec::new());
        assert_eq!(tb.text(), "hi");
        assert_eq!(tb.cursor_pos(), 0);
    }

    #[test]
    fn enter_reports_and_click_away_unfocuses() {
        let font = ten_px_font();
        let mut state = InputState::default();
        let mut tb = textbox(None, "");
        focus(&mut tb, &mut state, &font);

        state.apply_key(Key::Enter, true);
        let input = UiInput {
            state: &state,
            mouse: Vec2::new(-50.0, -50.0),
            font: &font,
        };
        let mut events = Vec::new();
        tb.process_input(&input, &mut events);
        assert_eq!(events, vec![WidgetEvent::Entered]);
        state.snapshot();
        state.apply_key(Key::Enter, false);
        state.snapshot();

        state.apply_button(MouseButton::Left, true);
        let input = UiInput {
            state: &state,
            mouse: Vec2::new(500.0, 500.0),
            font: &font,
        };
        events.clear();
        tb.process_input(&input, &mut events);
        assert_eq!(events, vec![WidgetEvent::Unselected]);
        assert!(!tb.is_selected());
    }

    #[test]
    fn update_scrolls_to_keep_the_caret_visible() {
        let font = ten_px_font();
        let mut state = InputState::default();
        let mut tb = textbox(None, "");
        focus(&mut tb, &mut state, &font);

        // 12 glyphs at 10px in a 100px box pushes the caret past the edge.
        type_text(&mut tb, &mut state, &font, "abcdefghijkl");
        let input = UiInput {
            state: &state,
            mouse: Vec2::zero(),
            font: &font,
        };
        tb.update(&input, 1.0 / 60.0);
        // First update still computes the overflowing position.
        assert!(tb.cursor.pos.x + tb.cursor.dims.x > 100.0);
        tb.update(&input, 1.0 / 60.0);
        // The window has slid left by a fifth of the box.
        assert!((tb.text_start - (-20.0)).abs() < 1e-4);
        assert!(tb.cursor.pos.x + tb.cursor.dims.x <= 102.1);
    }
}
