use std::any::Any;

use tessera_engine::coords::{ColorRgb, Rect, Vec2};
use tessera_engine::render::{Renderer, TextureId};
use tessera_engine::sprite::Sprite;
use tessera_engine::text::Align;

use crate::widget::{GroupStyle, Widget};
use crate::widgets::OVERLAY_BIAS;

/// A textured background with aligned text. No input handling.
///
/// Every other widget composes a `Label` for its background and text, so the
/// submit helpers here are the single place quads leave the UI layer.
pub struct Label {
    pub(crate) bg: Sprite,
    text: String,
    text_scale: f32,
    text_color: ColorRgb,
    h_align: Align,
    v_align: Align,
}

impl Label {
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
        let mut bg = Sprite::new(pos, dims, texture);
        bg.depth = depth;
        Self {
            bg,
            text: text.into(),
            text_scale,
            text_color,
            h_align: Align::Center,
            v_align: Align::Center,
        }
    }

    /// Overrides the default center/center text alignment.
    pub fn with_align(mut self, h_align: Align, v_align: Align) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text_scale(&self) -> f32 {
        self.text_scale
    }

    pub fn set_text_scale(&mut self, scale: f32) {
        self.text_scale = scale;
    }

    pub fn text_color(&self) -> ColorRgb {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: ColorRgb) {
        self.text_color = color;
    }

    pub fn set_align(&mut self, h_align: Align, v_align: Align) {
        self.h_align = h_align;
        self.v_align = v_align;
    }

    pub(crate) fn depth(&self) -> f32 {
        self.bg.depth
    }

    /// Queues the background quad and the text over it.
    pub(crate) fn submit(&self, renderer: &mut Renderer, style: GroupStyle) {
        renderer.submit_with(&self.bg, style.pipeline);
        self.submit_text(renderer, style, self.bg.pos, self.bg.bounds());
    }

    /// Queues this label's text at an explicit anchor and bounds.
    pub(crate) fn submit_text(
        &self,
        renderer: &mut Renderer,
        style: GroupStyle,
        pos: Vec2,
        bounds: Rect,
    ) {
        renderer.submit_text_with(
            &self.text,
            pos,
            bounds,
            self.text_scale,
            self.bg.depth + OVERLAY_BIAS,
            self.text_color,
            style.font,
            self.h_align,
            self.v_align,
            style.pipeline,
        );
    }

    /// Queues an arbitrary string in this label's style, for captions.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn submit_caption(
        &self,
        renderer: &mut Renderer,
        style: GroupStyle,
        text: &str,
        pos: Vec2,
        bounds: Rect,
        h_align: Align,
        v_align: Align,
    ) {
        renderer.submit_text_with(
            text,
            pos,
            bounds,
            self.text_scale,
            self.bg.depth + OVERLAY_BIAS,
            self.text_color,
            style.font,
            h_align,
            v_align,
            style.pipeline,
        );
    }
}

impl Widget for Label {
    fn draw(&mut self, renderer: &mut Renderer, style: GroupStyle) {
        self.submit(renderer, style);
    }

    fn pos(&self) -> Vec2 {
        self.bg.pos
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.bg.pos = pos;
    }

    fn dims(&self) -> Vec2 {
        self.bg.dims
    }

    fn set_dims(&mut self, dims: Vec2) {
        self.bg.dims = dims;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
