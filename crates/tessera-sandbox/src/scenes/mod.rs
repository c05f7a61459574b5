//! The three screens of the sandbox: title, options, and the game itself.

mod game;
mod options;
mod title;

pub use game::GameScene;
pub use options::OptionsScene;
pub use title::TitleScene;

use tessera_engine::coords::ColorRgb;
use tessera_engine::core::{Ctx, SceneId};

pub const TITLE: SceneId = SceneId(0);
pub const OPTIONS: SceneId = SceneId(1);
pub const GAME: SceneId = SceneId(2);

pub(crate) const TEXT_SCALE: f32 = 0.65;
pub(crate) const TEXT_COLOR: ColorRgb = ColorRgb::white();

/// Puts the camera at the middle of the window so world coordinates line up
/// with window pixels.
pub(crate) fn center_camera(ctx: &mut Ctx<'_>) {
    let center = ctx.viewport.as_vec2() * 0.5;
    ctx.renderer.camera().set_position(center);
}
