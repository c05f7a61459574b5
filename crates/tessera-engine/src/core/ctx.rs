use std::path::Path;

use crate::audio::Audio;
use crate::coords::Viewport;
use crate::error::ShaderError;
use crate::input::InputState;
use crate::render::{FontId, PipelineId, RenderCtx, Renderer, TextureId};
use crate::window::WindowCommands;

/// Per-frame context handed to scene callbacks.
///
/// Bundles every engine service a scene may touch. Window changes requested
/// through [`Ctx::window`] are buffered and applied after the current
/// callback returns.
pub struct Ctx<'a> {
    pub renderer: &'a mut Renderer,
    pub input: &'a InputState,
    pub audio: &'a mut Audio,
    pub window: &'a mut WindowCommands,
    /// Current window size in logical pixels.
    pub viewport: Viewport,
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    surface_format: wgpu::TextureFormat,
}

impl<'a> Ctx<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        renderer: &'a mut Renderer,
        input: &'a InputState,
        audio: &'a mut Audio,
        window: &'a mut WindowCommands,
        viewport: Viewport,
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        Self {
            renderer,
            input,
            audio,
            window,
            viewport,
            device,
            queue,
            surface_format,
        }
    }

    /// Loads a PNG texture, returning a cached ID on repeat paths and the
    /// white sentinel on failure.
    pub fn load_texture(&mut self, path: &Path) -> TextureId {
        let rc = RenderCtx::new(self.device, self.queue, self.surface_format, self.viewport);
        self.renderer.load_texture(&rc, path)
    }

    /// Loads a TTF font, returning a cached ID on repeat paths and the empty
    /// sentinel on failure.
    pub fn load_font(&mut self, path: &Path) -> FontId {
        let rc = RenderCtx::new(self.device, self.queue, self.surface_format, self.viewport);
        self.renderer.load_font(&rc, path)
    }

    /// Compiles a custom pipeline sharing the sprite vertex layout.
    pub fn create_pipeline(&mut self, label: &str, wgsl: &str) -> Result<PipelineId, ShaderError> {
        let rc = RenderCtx::new(self.device, self.queue, self.surface_format, self.viewport);
        self.renderer.create_pipeline(&rc, label, wgsl)
    }
}
