use std::path::Path;

use tessera_engine::coords::{Rect, Vec2, Viewport};
use tessera_engine::core::{Ctx, Scene, SceneControl};
use tessera_engine::input::Key;
use tessera_engine::render::{FontId, TextureId};
use tessera_engine::sprite::{Animation, Sprite};
use tessera_engine::text::Align;

use super::{TEXT_COLOR, TEXT_SCALE, TITLE, center_camera};

const PLAYER_SPEED: f32 = 150.0;

/// Minimal playground: a coin animation and a square driven with the arrow
/// keys. Escape returns to the title.
pub struct GameScene {
    font: FontId,
    coin: Option<Animation>,
    player: Option<Sprite>,
}

impl Default for GameScene {
    fn default() -> Self {
        Self {
            font: FontId::NONE,
            coin: None,
            player: None,
        }
    }
}

impl Scene for GameScene {
    fn init(&mut self, ctx: &mut Ctx<'_>) {
        self.font = ctx.load_font(Path::new("assets/fonts/cour.ttf"));
        let coin_tex = ctx.load_texture(Path::new("assets/images/coin.png"));

        let vp = ctx.viewport.as_vec2();
        let mut coin = Animation::new(
            Vec2::new(0.5 * vp.x - 32.0, 0.75 * vp.y),
            Vec2::new(64.0, 64.0),
            coin_tex,
            (8, 1),
            0.1,
        );
        coin.play();
        self.coin = Some(coin);

        let mut player = Sprite::new(
            Vec2::new(0.5 * vp.x - 24.0, 0.25 * vp.y),
            Vec2::new(48.0, 48.0),
            TextureId::WHITE,
        );
        player.color = TEXT_COLOR;
        self.player = Some(player);
        log::info!("initialized the game scene");
    }

    fn enter(&mut self, ctx: &mut Ctx<'_>) {
        center_camera(ctx);
    }

    fn draw(&mut self, ctx: &mut Ctx<'_>) {
        if let Some(coin) = self.coin.as_ref() {
            ctx.renderer.submit(&coin.sprite);
        }
        if let Some(player) = self.player.as_ref() {
            ctx.renderer.submit(player);
        }
        let vp = ctx.viewport.as_vec2();
        ctx.renderer.submit_text(
            "ARROWS TO MOVE, ESCAPE FOR THE TITLE",
            Vec2::new(0.0, 0.0),
            Rect::from_origin_size(Vec2::zero(), Vec2::new(vp.x, 0.1 * vp.y)),
            TEXT_SCALE,
            0.0,
            TEXT_COLOR,
            self.font,
            Align::Center,
            Align::Center,
        );
    }

    fn process_input(&mut self, ctx: &mut Ctx<'_>) -> SceneControl {
        if ctx.input.key_pressed(Key::Escape) {
            return SceneControl::Switch(TITLE);
        }
        if let Some(player) = self.player.as_mut() {
            let mut dir = Vec2::zero();
            if ctx.input.key_down(Key::ArrowLeft) {
                dir.x -= 1.0;
            }
            if ctx.input.key_down(Key::ArrowRight) {
                dir.x += 1.0;
            }
            if ctx.input.key_down(Key::ArrowDown) {
                dir.y -= 1.0;
            }
            if ctx.input.key_down(Key::ArrowUp) {
                dir.y += 1.0;
            }
            player.velocity = dir * PLAYER_SPEED;
        }
        SceneControl::Continue
    }

    fn update(&mut self, _ctx: &mut Ctx<'_>, dt: f32) {
        if let Some(coin) = self.coin.as_mut() {
            coin.update(dt);
        }
        if let Some(player) = self.player.as_mut() {
            player.update(dt);
        }
    }

    fn resize(&mut self, ctx: &mut Ctx<'_>, _old: Viewport) {
        center_camera(ctx);
    }
}
