use std::path::Path;

use tessera_engine::coords::{Vec2, Viewport};
use tessera_engine::core::{Ctx, Scene, SceneControl};
use tessera_engine::render::PipelineId;
use tessera_ui::{Button, UiEvent, UiGroup, WidgetEvent};

use super::{GAME, OPTIONS, TEXT_COLOR, TEXT_SCALE, center_camera};

/// Start screen with a button column for the other scenes.
#[derive(Default)]
pub struct TitleScene {
    ui: Option<UiGroup>,
    start_btn: u32,
    options_btn: u32,
    exit_btn: u32,
    events: Vec<UiEvent>,
}

impl Scene for TitleScene {
    fn init(&mut self, ctx: &mut Ctx<'_>) {
        let font = ctx.load_font(Path::new("assets/fonts/cour.ttf"));
        let button_tex = ctx.load_texture(Path::new("assets/images/button.png"));

        let vp = ctx.viewport.as_vec2();
        let dims = Vec2::new(0.25 * vp.x, 0.1 * vp.y);
        let mut ui = UiGroup::new(0, PipelineId::DEFAULT, font, ctx.viewport);
        self.start_btn = ui.add(Button::new(
            Vec2::new(0.375 * vp.x, 0.65 * vp.y),
            0.0,
            dims,
            button_tex,
            "START",
            TEXT_SCALE,
            TEXT_COLOR,
        ));
        self.options_btn = ui.add(Button::new(
            Vec2::new(0.375 * vp.x, 0.45 * vp.y),
            0.0,
            dims,
            button_tex,
            "OPTIONS",
            TEXT_SCALE,
            TEXT_COLOR,
        ));
        self.exit_btn = ui.add(Button::new(
            Vec2::new(0.375 * vp.x, 0.25 * vp.y),
            0.0,
            dims,
            button_tex,
            "EXIT",
            TEXT_SCALE,
            TEXT_COLOR,
        ));
        self.ui = Some(ui);
        log::info!("initialized the title scene");
    }

    fn enter(&mut self, ctx: &mut Ctx<'_>) {
        center_camera(ctx);
    }

    fn draw(&mut self, ctx: &mut Ctx<'_>) {
        if let Some(ui) = self.ui.as_mut() {
            ui.draw(ctx);
        }
    }

    fn process_input(&mut self, ctx: &mut Ctx<'_>) -> SceneControl {
        let Some(ui) = self.ui.as_mut() else {
            return SceneControl::Continue;
        };
        self.events.clear();
        ui.process_input(ctx, &mut self.events);
        for ev in self.events.drain(..) {
            if ev.event != WidgetEvent::Clicked {
                continue;
            }
            if ev.cmpt == self.start_btn {
                return SceneControl::Switch(GAME);
            }
            if ev.cmpt == self.options_btn {
                return SceneControl::Switch(OPTIONS);
            }
            if ev.cmpt == self.exit_btn {
                return SceneControl::Quit;
            }
        }
        SceneControl::Continue
    }

    fn update(&mut self, ctx: &mut Ctx<'_>, dt: f32) {
        if let Some(ui) = self.ui.as_mut() {
            ui.update(ctx, dt);
        }
    }

    fn resize(&mut self, ctx: &mut Ctx<'_>, _old: Viewport) {
        center_camera(ctx);
    }
}
