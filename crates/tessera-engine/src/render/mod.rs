//! Sprite batching renderer.
//!
//! Frames follow a begin/submit/end cycle: sprites and text are queued as
//! quads, then `end` depth-sorts the queue (stable, so equal depths keep
//! submission order), plans one indexed draw per contiguous pipeline+texture
//! run, and records a single render pass.

mod assets;
mod batch;
mod camera;
mod pipeline;
mod renderer;

pub use assets::{AssetStore, FontId, TextureId};
pub use batch::{Batch, Submission, plan_batches, quad_indices};
pub use camera::Camera;
pub use pipeline::{Pipeline, PipelineId, attrib_layout};
pub use renderer::Renderer;

use crate::coords::Viewport;

/// Renderer-facing context (device/queue + surface format + viewport).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            viewport,
        }
    }
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
