use crate::coords::Viewport;

use super::Ctx;

/// Index of a scene in the list handed to the runtime.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SceneId(pub usize);

/// Flow decision returned from [`Scene::process_input`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SceneControl {
    /// Keep running the current scene.
    Continue,
    /// Leave the current scene and enter another.
    Switch(SceneId),
    /// Shut the application down.
    Quit,
}

/// A screen of the application, driven by the runtime in a fixed frame order:
/// `draw`, `process_input`, then zero or more `update` steps.
///
/// `init` runs once, the first time the scene is entered. `enter`/`leave`
/// bracket every activation, so a scene re-entered after a switch sees
/// `enter` again but not `init`.
pub trait Scene {
    /// One-time setup on first entry. Load assets here.
    fn init(&mut self, _ctx: &mut Ctx<'_>) {}

    /// Called every time this scene becomes active.
    fn enter(&mut self, _ctx: &mut Ctx<'_>) {}

    /// Called when the runtime switches away or shuts down.
    fn leave(&mut self, _ctx: &mut Ctx<'_>) {}

    /// Queue this frame's sprites and text on the renderer.
    fn draw(&mut self, ctx: &mut Ctx<'_>);

    /// Poll input and decide whether to continue, switch, or quit.
    fn process_input(&mut self, ctx: &mut Ctx<'_>) -> SceneControl;

    /// One logic step. `dt` is in seconds: `1 / target_ups` for a whole step,
    /// less for the trailing fractional step.
    fn update(&mut self, ctx: &mut Ctx<'_>, dt: f32);

    /// Window size changed; the new size is in `ctx.viewport`.
    fn resize(&mut self, _ctx: &mut Ctx<'_>, _old: Viewport) {}
}
