use std::path::Path;

use tessera_engine::coords::{Vec2, Viewport};
use tessera_engine::core::{Ctx, Scene, SceneControl};
use tessera_engine::render::PipelineId;
use tessera_ui::{Button, Cycle, Slider, Switch, UiEvent, UiGroup, WidgetEvent};

use super::{TEXT_COLOR, TEXT_SCALE, TITLE, center_camera};
use crate::options::{OPTIONS_PATH, Options, parse_dims};

/// Settings screen. Edits are held in the widgets and only committed to
/// [`Options`] (and disk) when APPLY is clicked; BACK discards them.
#[derive(Default)]
pub struct OptionsScene {
    options: Options,
    main_ui: Option<UiGroup>,
    options_ui: Option<UiGroup>,
    back_btn: u32,
    defaults_btn: u32,
    apply_btn: u32,
    resolution: u32,
    fullscreen: u32,
    volume: u32,
    events: Vec<UiEvent>,
}

impl OptionsScene {
    /// Pushes the stored options back into the widgets.
    fn seed_widgets(&mut self) {
        let Some(ui) = self.options_ui.as_mut() else {
            return;
        };
        let (w, h) = self.options.window_dims;
        if let Some(cycle) = ui.get_mut::<Cycle>(self.resolution) {
            cycle.set_text(format!("{w}x{h}"));
        }
        if let Some(switch) = ui.get_mut::<Switch>(self.fullscreen) {
            switch.set_on(self.options.fullscreen);
        }
        if let Some(slider) = ui.get_mut::<Slider>(self.volume) {
            slider.set_value(self.options.volume);
        }
    }

    /// Reads the widgets into [`Options`], saves them, and pushes the window
    /// and audio changes out through the context.
    fn apply(&mut self, ctx: &mut Ctx<'_>) {
        if let Some(ui) = self.options_ui.as_mut() {
            if let Some(cycle) = ui.get_mut::<Cycle>(self.resolution) {
                self.options.window_dims = parse_dims(cycle.value()).unwrap_or((800, 600));
            }
            if let Some(switch) = ui.get_mut::<Switch>(self.fullscreen) {
                self.options.fullscreen = switch.is_on();
            }
            if let Some(slider) = ui.get_mut::<Slider>(self.volume) {
                self.options.volume = slider.value();
            }
        }
        self.options.save(Path::new(OPTIONS_PATH));

        let (w, h) = self.options.window_dims;
        ctx.window.set_dims(w, h);
        ctx.window.set_fullscreen(self.options.fullscreen);
        ctx.audio.set_volume(self.options.volume);
        center_camera(ctx);
        log::info!(
            "applied options: {w}x{h}, fullscreen {}, volume {:.2}",
            self.options.fullscreen,
            self.options.volume,
        );
    }
}

impl Scene for OptionsScene {
    fn init(&mut self, ctx: &mut Ctx<'_>) {
        self.options = Options::load(Path::new(OPTIONS_PATH));

        let font = ctx.load_font(Path::new("assets/fonts/cour.ttf"));
        let button_tex = ctx.load_texture(Path::new("assets/images/button.png"));
        let cycle_tex = ctx.load_texture(Path::new("assets/images/cycle.png"));
        let cycle_button_tex = ctx.load_texture(Path::new("assets/images/cycle_button.png"));
        let switch_tex = ctx.load_texture(Path::new("assets/images/switch.png"));
        let slider_tex = ctx.load_texture(Path::new("assets/images/slider.png"));
        let cursor_tex = ctx.load_texture(Path::new("assets/images/slider_cursor.png"));

        let vp = ctx.viewport.as_vec2();
        let button_dims = Vec2::new(0.25 * vp.x, 0.1 * vp.y);

        let mut main_ui = UiGroup::new(0, PipelineId::DEFAULT, font, ctx.viewport);
        self.back_btn = main_ui.add(Button::new(
            Vec2::zero(),
            0.0,
            button_dims,
            button_tex,
            "BACK",
            TEXT_SCALE,
            TEXT_COLOR,
        ));
        self.defaults_btn = main_ui.add(Button::new(
            Vec2::new(0.375 * vp.x, 0.0),
            0.0,
            button_dims,
            button_tex,
            "DEFAULTS",
            TEXT_SCALE,
            TEXT_COLOR,
        ));
        self.apply_btn = main_ui.add(Button::new(
            Vec2::new(0.75 * vp.x, 0.0),
            0.0,
            button_dims,
            button_tex,
            "APPLY",
            TEXT_SCALE,
            TEXT_COLOR,
        ));
        self.main_ui = Some(main_ui);

        let row_dims = Vec2::new(0.5 * vp.x, 0.1 * vp.y);
        let mut options_ui = UiGroup::new(1, PipelineId::DEFAULT, font, ctx.viewport);
        self.resolution = options_ui.add(Cycle::new(
            Vec2::new(0.25 * vp.x, 0.8 * vp.y),
            0.0,
            row_dims,
            cycle_tex,
            cycle_button_tex,
            vec![
                "800x600".to_owned(),
                "1080x720".to_owned(),
                "1920x1080".to_owned(),
            ],
            "RESOLUTION",
            "<",
            ">",
            TEXT_SCALE,
            TEXT_COLOR,
        ));
        self.fullscreen = options_ui.add(Switch::new(
            Vec2::new(0.25 * vp.x, 0.6 * vp.y),
            0.0,
            row_dims,
            switch_tex,
            "FULLSCREEN",
            TEXT_SCALE,
            TEXT_COLOR,
        ));
        self.volume = options_ui.add(Slider::new(
            Vec2::new(0.25 * vp.x, 0.4 * vp.y),
            0.0,
            row_dims,
            slider_tex,
            cursor_tex,
            10.0,
            "VOLUME",
            TEXT_SCALE,
            TEXT_COLOR,
        ));
        self.options_ui = Some(options_ui);
        log::info!("initialized the options scene");
    }

    fn enter(&mut self, ctx: &mut Ctx<'_>) {
        center_camera(ctx);
        self.seed_widgets();
    }

    fn draw(&mut self, ctx: &mut Ctx<'_>) {
        if let Some(ui) = self.main_ui.as_mut() {
            ui.draw(ctx);
        }
        if let Some(ui) = self.options_ui.as_mut() {
            ui.draw(ctx);
        }
    }

    fn process_input(&mut self, ctx: &mut Ctx<'_>) -> SceneControl {
        let mut events = std::mem::take(&mut self.events);
        events.clear();
        if let Some(ui) = self.main_ui.as_mut() {
            ui.process_input(ctx, &mut events);
        }
        if let Some(ui) = self.options_ui.as_mut() {
            ui.process_input(ctx, &mut events);
        }

        let mut control = SceneControl::Continue;
        for ev in events.drain(..) {
            if ev.group != 0 || ev.event != WidgetEvent::Clicked {
                continue;
            }
            if ev.cmpt == self.back_btn {
                control = SceneControl::Switch(TITLE);
            } else if ev.cmpt == self.defaults_btn {
                self.options = Options::default();
                self.seed_widgets();
            } else if ev.cmpt == self.apply_btn {
                self.apply(ctx);
            }
        }
        self.events = events;
        control
    }

    fn update(&mut self, ctx: &mut Ctx<'_>, dt: f32) {
        if let Some(ui) = self.main_ui.as_mut() {
            ui.update(ctx, dt);
        }
        if let Some(ui) = self.options_ui.as_mut() {
            ui.update(ctx, dt);
        }
    }

    fn resize(&mut self, ctx: &mut Ctx<'_>, _old: Viewport) {
        center_camera(ctx);
    }
}
