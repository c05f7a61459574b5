use tessera_engine::coords::{Vec2, Viewport};
use tessera_engine::core::Ctx;
use tessera_engine::render::{FontId, PipelineId};

use crate::event::UiEvent;
use crate::widget::{GroupStyle, UiInput, Widget};

/// An insertion-ordered group of widgets sharing one pipeline and font.
///
/// The group owns its widgets and assigns group-local component IDs. Scenes
/// fan the group out each frame and collect tagged events from
/// `process_input`. Disabling a group stops input and updates without
/// destroying widget state; hiding it stops drawing.
pub struct UiGroup {
    id: u32,
    style: GroupStyle,
    widgets: Vec<(u32, Box<dyn Widget>)>,
    next_id: u32,
    enabled: bool,
    visible: bool,
    prev_viewport: Viewport,
}

impl UiGroup {
    pub fn new(id: u32, pipeline: PipelineId, font: FontId, viewport: Viewport) -> Self {
        log::info!("initialized UI group {id}");
        Self {
            id,
            style: GroupStyle { pipeline, font },
            widgets: Vec::new(),
            next_id: 0,
            enabled: true,
            visible: true,
            prev_viewport: viewport,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn pipeline(&self) -> PipelineId {
        self.style.pipeline
    }

    pub fn font(&self) -> FontId {
        self.style.font
    }

    pub fn set_font(&mut self, font: FontId) {
        self.style.font = font;
    }

    /// Adds a widget and returns its component ID.
    pub fn add(&mut self, widget: impl Widget + 'static) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.widgets.push((id, Box::new(widget)));
        log::info!("added component {id} to UI group {}", self.id);
        id
    }

    /// Removes a widget by component ID. Unknown IDs log a warning and
    /// return false.
    pub fn remove(&mut self, id: u32) -> bool {
        match self.widgets.iter().position(|(wid, _)| *wid == id) {
            Some(i) => {
                self.widgets.remove(i);
                log::info!("removed component {id} from UI group {}", self.id);
                true
            }
            None => {
                log::warn!("no component {id} in UI group {}", self.id);
                false
            }
        }
    }

    /// Typed access to a widget by component ID.
    pub fn get_mut<W: Widget>(&mut self, id: u32) -> Option<&mut W> {
        self.widgets
            .iter_mut()
            .find(|(wid, _)| *wid == id)
            .and_then(|(_, w)| w.as_any_mut().downcast_mut())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables input and update delivery to all children.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            log::info!("enabled UI group {}", self.id);
        } else {
            log::info!("disabled UI group {}", self.id);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Queues every widget's quads while visible.
    pub fn draw(&mut self, ctx: &mut Ctx<'_>) {
        if !self.visible {
            return;
        }
        for (_, widget) in &mut self.widgets {
            widget.draw(ctx.renderer, self.style);
        }
    }

    /// Runs every widget's input pass while enabled, tagging emitted events
    /// with this group's and the component's IDs.
    pub fn process_input(&mut self, ctx: &mut Ctx<'_>, out: &mut Vec<UiEvent>) {
        if !self.enabled {
            return;
        }
        let mouse = ctx
            .renderer
            .camera_for(self.style.pipeline)
            .window_to_world(ctx.input.mouse_pos());
        let font = ctx.renderer.assets().font_data(self.style.font);
        let input = UiInput {
            state: ctx.input,
            mouse,
            font,
        };

        let mut buf = Vec::new();
        for (cmpt, widget) in &mut self.widgets {
            widget.process_input(&input, &mut buf);
            for event in buf.drain(..) {
                out.push(UiEvent {
                    group: self.id,
                    cmpt: *cmpt,
                    event,
                });
            }
        }
    }

    /// Runs every widget's update while enabled, then rescales the layout if
    /// the viewport changed since the last call.
    pub fn update(&mut self, ctx: &mut Ctx<'_>, dt: f32) {
        if self.enabled {
            let mouse = ctx
                .renderer
                .camera_for(self.style.pipeline)
                .window_to_world(ctx.input.mouse_pos());
            let font = ctx.renderer.assets().font_data(self.style.font);
            let input = UiInput {
                state: ctx.input,
                mouse,
                font,
            };
            for (_, widget) in &mut self.widgets {
                widget.update(&input, dt);
            }
        }

        if self.prev_viewport != ctx.viewport && ctx.viewport.is_valid() {
            self.rescale(ctx.viewport);
        }
    }

    /// Scales every widget's position and size by the per-axis ratio between
    /// the old and new viewports, preserving relative layout.
    fn rescale(&mut self, viewport: Viewport) {
        let sx = viewport.width / self.prev_viewport.width;
        let sy = viewport.height / self.prev_viewport.height;
        self.prev_viewport = viewport;
        for (_, widget) in &mut self.widgets {
            let dims = widget.dims();
            widget.set_dims(Vec2::new(dims.x * sx, dims.y * sy));
            let pos = widget.pos();
            widget.set_pos(Vec2::new(pos.x * sx, pos.y * sy));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Label;
    use tessera_engine::coords::ColorRgb;
    use tessera_engine::render::TextureId;

    fn label_at(x: f32, y: f32, w: f32, h: f32) -> Label {
        Label::new(
            Vec2::new(x, y),
            0.0,
            Vec2::new(w, h),
            TextureId::WHITE,
            "",
            1.0,
            ColorRgb::white(),
        )
    }

    #[test]
    fn component_ids_are_sequential() {
        let mut group = UiGroup::new(
            0,
            PipelineId::DEFAULT,
            FontId::NONE,
            Viewport::new(800.0, 600.0),
        );
        assert_eq!(group.add(label_at(0.0, 0.0, 10.0, 10.0)), 0);
        assert_eq!(group.add(label_at(20.0, 0.0, 10.0, 10.0)), 1);
        assert_eq!(group.add(label_at(40.0, 0.0, 10.0, 10.0)), 2);
    }

    #[test]
    fn remove_unknown_returns_false() {
        let mut group = UiGroup::new(
            0,
            PipelineId::DEFAULT,
            FontId::NONE,
            Viewport::new(800.0, 600.0),
        );
        let id = group.add(label_at(0.0, 0.0, 10.0, 10.0));
        assert!(!group.remove(99));
        assert!(group.remove(id));
        assert!(!group.remove(id));
    }

    #[test]
    fn get_mut_downcasts_by_id() {
        let mut group = UiGroup::new(
            0,
            PipelineId::DEFAULT,
            FontId::NONE,
            Viewport::new(800.0, 600.0),
        );
        let id = group.add(label_at(0.0, 0.0, 10.0, 10.0));
        let label = group.get_mut::<Label>(id).unwrap();
        label.set_text("hello");
        assert_eq!(group.get_mut::<Label>(id).unwrap().text(), "hello");
        assert!(group.get_mut::<crate::widgets::Button>(id).is_none());
    }

    #[test]
    fn rescale_applies_per_axis_ratios() {
        let mut group = UiGroup::new(
            0,
            PipelineId::DEFAULT,
            FontId::NONE,
            Viewport::new(800.0, 600.0),
        );
        let id = group.add(label_at(80.0, 60.0, 40.0, 30.0));

        // Double the width, halve the height.
        group.rescale(Viewport::new(1600.0, 300.0));
        let label = group.get_mut::<Label>(id).unwrap();
        assert_eq!(label.pos(), Vec2::new(160.0, 30.0));
        assert_eq!(label.dims(), Vec2::new(80.0, 15.0));

        // A second rescale is relative to the new viewport.
        group.rescale(Viewport::new(800.0, 300.0));
        let label = group.get_mut::<Label>(id).unwrap();
        assert_eq!(label.pos(), Vec2::new(80.0, 30.0));
    }
}
