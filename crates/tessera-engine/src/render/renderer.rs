use std::path::Path;

use crate::coords::{ColorRgb, Rect, Vec2};
use crate::error::ShaderError;
use crate::sprite::{Sprite, Vertex};
use crate::text::{Align, layout_text};

use super::{
    AssetStore, FontId, Pipeline, PipelineId, RenderCtx, RenderTarget, Submission, TextureId,
    plan_batches, quad_indices,
};

/// Frame-oriented sprite and text renderer.
///
/// Owns every pipeline (the default one plus any registered via
/// [`Renderer::create_pipeline`]) and the asset store. All submissions in a
/// frame land in one depth-sorted stream, so text interleaves correctly with
/// sprites at intermediate depths.
pub struct Renderer {
    camera_bgl: wgpu::BindGroupLayout,
    texture_bgl: wgpu::BindGroupLayout,
    pipelines: Vec<Pipeline>,
    assets: AssetStore,

    sprites: Vec<Submission>,
    glyphs: Vec<Submission>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
    ibo: Option<wgpu::Buffer>,
    ibo_capacity: usize,

    clear_color: ColorRgb,
    dump_next: bool,
}

impl Renderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Result<Self, ShaderError> {
        let camera_bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tessera camera bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(64),
                    },
                    count: None,
                }],
            });
        let texture_bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tessera texture bgl"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let default_pipeline = Pipeline::new(
            ctx,
            "tessera sprite pipeline",
            include_str!("shaders/sprite.wgsl"),
            Vertex::COMPONENTS,
            &camera_bgl,
            &texture_bgl,
        )?;
        log::info!("compiled default sprite pipeline");

        let assets = AssetStore::new(ctx, &texture_bgl);

        Ok(Self {
            camera_bgl,
            texture_bgl,
            pipelines: vec![default_pipeline],
            assets,
            sprites: Vec::new(),
            glyphs: Vec::new(),
            vbo: None,
            vbo_capacity: 0,
            ibo: None,
            ibo_capacity: 0,
            clear_color: ColorRgb::black(),
            dump_next: false,
        })
    }

    /// Compiles a custom WGSL pipeline sharing the standard quad vertex
    /// format.
    pub fn create_pipeline(
        &mut self,
        ctx: &RenderCtx<'_>,
        label: &str,
        wgsl_src: &str,
    ) -> Result<PipelineId, ShaderError> {
        let pipeline = Pipeline::new(
            ctx,
            label,
            wgsl_src,
            Vertex::COMPONENTS,
            &self.camera_bgl,
            &self.texture_bgl,
        )?;
        let id = PipelineId(self.pipelines.len());
        self.pipelines.push(pipeline);
        log::info!("compiled pipeline {label:?} as {id:?}");
        Ok(id)
    }

    /// Camera of the default pipeline.
    #[inline]
    pub fn camera(&mut self) -> &mut super::Camera {
        &mut self.pipelines[0].camera
    }

    /// Camera of a specific pipeline.
    #[inline]
    pub fn camera_for(&mut self, id: PipelineId) -> &mut super::Camera {
        &mut self.pipelines[id.0].camera
    }

    pub fn set_clear_color(&mut self, color: ColorRgb) {
        self.clear_color = color;
    }

    /// Logs batching statistics for the next completed frame.
    pub fn dump_next_frame(&mut self) {
        self.dump_next = true;
    }

    /// Advances every pipeline's camera.
    pub fn update(&mut self, dt: f32) {
        for p in &mut self.pipelines {
            p.camera.update(dt);
        }
    }

    pub fn load_texture(&mut self, ctx: &RenderCtx<'_>, path: &Path) -> TextureId {
        self.assets.load_texture(ctx, &self.texture_bgl, path)
    }

    pub fn load_font(&mut self, ctx: &RenderCtx<'_>, path: &Path) -> FontId {
        self.assets.load_font(ctx, &self.texture_bgl, path)
    }

    #[inline]
    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    /// Starts a new frame, discarding anything still queued.
    pub fn begin(&mut self) {
        self.sprites.clear();
        self.glyphs.clear();
    }

    /// Queues a sprite on the default pipeline.
    #[inline]
    pub fn submit(&mut self, sprite: &Sprite) {
        self.submit_with(sprite, PipelineId::DEFAULT);
    }

    /// Queues a sprite on a specific pipeline.
    pub fn submit_with(&mut self, sprite: &Sprite, pipeline: PipelineId) {
        self.sprites.push(Submission {
            pipeline,
            texture: sprite.texture,
            depth: sprite.depth,
            verts: sprite.vertices(),
        });
    }

    /// Queues a line of text on the default pipeline.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn submit_text(
        &mut self,
        text: &str,
        pos: Vec2,
        bounds: Rect,
        scale: f32,
        depth: f32,
        color: ColorRgb,
        font: FontId,
        h_align: Align,
        v_align: Align,
    ) {
        self.submit_text_with(
            text,
            pos,
            bounds,
            scale,
            depth,
            color,
            font,
            h_align,
            v_align,
            PipelineId::DEFAULT,
        );
    }

    /// Queues a line of text on a specific pipeline.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_text_with(
        &mut self,
        text: &str,
        pos: Vec2,
        bounds: Rect,
        scale: f32,
        depth: f32,
        color: ColorRgb,
        font: FontId,
        h_align: Align,
        v_align: Align,
        pipeline: PipelineId,
    ) {
        let data = self.assets.font_data(font);
        if data.is_empty() {
            return;
        }
        let placed = layout_text(text, pos, bounds, scale, data, h_align, v_align);
        let texture = self.assets.font_texture(font);
        for glyph in placed {
            let mut quad = Sprite::new(glyph.dst.origin(), glyph.dst.size(), texture);
            quad.depth = depth;
            quad.tex_rect = glyph.uv;
            quad.color = color;
            self.glyphs.push(Submission {
                pipeline,
                texture,
                depth,
                verts: quad.vertices(),
            });
        }
    }

    /// Sorts the frame's submissions, uploads geometry, and records one
    /// render pass with a draw per pipeline+texture run.
    pub fn end(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        // Glyphs join the sprite stream before the empty check so text-only
        // frames still render.
        if !self.glyphs.is_empty() {
            self.sprites.append(&mut self.glyphs);
        }

        let batches = plan_batches(&mut self.sprites);

        for p in &mut self.pipelines {
            p.sync_camera(ctx);
        }

        if self.sprites.is_empty() {
            // Still clear, so an empty frame shows the clear color.
            self.clear_pass(target);
            if self.dump_next {
                log::info!("frame dump: no submissions");
                self.dump_next = false;
            }
            return;
        }

        let vertices: Vec<Vertex> = self.sprites.iter().flat_map(|s| s.verts).collect();
        let indices = quad_indices(self.sprites.len() as u32);
        self.ensure_buffers(ctx, vertices.len(), indices.len());

        let (Some(vbo), Some(ibo)) = (self.vbo.as_ref(), self.ibo.as_ref()) else {
            return;
        };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&vertices));
        ctx.queue.write_buffer(ibo, 0, bytemuck::cast_slice(&indices));

        if self.dump_next {
            log::info!(
                "frame dump: {} quads in {} batches across {} pipelines",
                self.sprites.len(),
                batches.len(),
                self.pipelines.len()
            );
            self.dump_next = false;
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tessera sprite pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: self.clear_color.r as f64,
                        g: self.clear_color.g as f64,
                        b: self.clear_color.b as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);

        for batch in &batches {
            let pipeline = &self.pipelines[batch.pipeline.0];
            rpass.set_pipeline(pipeline.raw());
            rpass.set_bind_group(0, pipeline.camera_bind_group(), &[]);
            rpass.set_bind_group(1, self.assets.texture_bind_group(batch.texture), &[]);
            let first = batch.first_quad * 6;
            let last = first + batch.quad_count * 6;
            rpass.draw_indexed(first..last, 0, 0..1);
        }
    }

    fn clear_pass(&self, target: &mut RenderTarget<'_>) {
        target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tessera clear pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: self.clear_color.r as f64,
                        g: self.clear_color.g as f64,
                        b: self.clear_color.b as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>, vert_count: usize, index_count: usize) {
        if vert_count > self.vbo_capacity || self.vbo.is_none() {
            let cap = vert_count.next_power_of_two().max(256);
            self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("tessera sprite vbo"),
                size: (cap * std::mem::size_of::<Vertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vbo_capacity = cap;
        }
        if index_count > self.ibo_capacity || self.ibo.is_none() {
            let cap = index_count.next_power_of_two().max(384);
            self.ibo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("tessera sprite ibo"),
                size: (cap * std::mem::size_of::<u32>()) as u64,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.ibo_capacity = cap;
        }
    }
}
