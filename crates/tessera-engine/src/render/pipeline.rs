use crate::coords::Viewport;
use crate::error::ShaderError;

use super::{Camera, RenderCtx};

/// Handle to a pipeline registered with the renderer. `DEFAULT` is the
/// built-in sprite/text pipeline, always present.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PipelineId(pub usize);

impl PipelineId {
    pub const DEFAULT: PipelineId = PipelineId(0);
}

/// Derives a vertex buffer layout from per-attribute float component counts.
///
/// Offsets accumulate in declaration order; the stride is the packed total.
/// Only 1-4 component float attributes are expressible.
pub fn attrib_layout(components: &[u32]) -> (Vec<wgpu::VertexAttribute>, u64) {
    let mut attrs = Vec::with_capacity(components.len());
    let mut offset = 0u64;
    for (i, &n) in components.iter().enumerate() {
        let format = match n {
            1 => wgpu::VertexFormat::Float32,
            2 => wgpu::VertexFormat::Float32x2,
            3 => wgpu::VertexFormat::Float32x3,
            _ => wgpu::VertexFormat::Float32x4,
        };
        attrs.push(wgpu::VertexAttribute {
            format,
            offset,
            shader_location: i as u32,
        });
        offset += n as u64 * 4;
    }
    (attrs, offset)
}

/// Straight-alpha blending over the frame.
pub fn alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// A compiled render pipeline and the camera that feeds its uniform.
///
/// Each pipeline owns its own [`Camera`] so custom shaders can pan and zoom
/// independently of the default one.
pub struct Pipeline {
    pub camera: Camera,
    pipeline: wgpu::RenderPipeline,
    camera_ubo: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    uploaded_generation: u64,
}

impl Pipeline {
    /// Compiles `wgsl_src` against the attribute layout described by
    /// `components` and builds the camera binding.
    ///
    /// Compilation is validated through a device error scope so a malformed
    /// shader surfaces as a [`ShaderError`] instead of a device loss later.
    pub fn new(
        ctx: &RenderCtx<'_>,
        label: &str,
        wgsl_src: &str,
        components: &[u32],
        camera_bgl: &wgpu::BindGroupLayout,
        texture_bgl: &wgpu::BindGroupLayout,
    ) -> Result<Self, ShaderError> {
        let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(wgsl_src.into()),
        });

        let (attrs, stride) = attrib_layout(components);
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &attrs,
        };

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(label),
                bind_group_layouts: &[camera_bgl, texture_bgl],
                immediate_size: 0,
            });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[vertex_layout],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        if let Some(err) = pollster::block_on(scope.pop()) {
            return Err(ShaderError::Validation(err.to_string()));
        }

        let camera_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: 64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let camera_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: camera_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        Ok(Self {
            camera: Camera::new(Viewport::new(
                ctx.viewport.width.max(1.0),
                ctx.viewport.height.max(1.0),
            )),
            pipeline,
            camera_ubo,
            camera_bind_group,
            uploaded_generation: u64::MAX,
        })
    }

    /// Re-uploads the camera matrix if it changed since the last frame.
    pub fn sync_camera(&mut self, ctx: &RenderCtx<'_>) {
        self.camera.set_viewport(ctx.viewport);
        let matrix = self.camera.matrix();
        if self.camera.generation() != self.uploaded_generation {
            ctx.queue
                .write_buffer(&self.camera_ubo, 0, bytemuck::cast_slice(&matrix.to_array()));
            self.uploaded_generation = self.camera.generation();
        }
    }

    #[inline]
    pub fn raw(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    #[inline]
    pub fn camera_bind_group(&self) -> &wgpu::BindGroup {
        &self.camera_bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── attrib_layout ─────────────────────────────────────────────────────

    #[test]
    fn offsets_accumulate_in_order() {
        let (attrs, stride) = attrib_layout(&[3, 2, 3]);
        assert_eq!(stride, 32);
        assert_eq!(attrs[0].offset, 0);
        assert_eq!(attrs[1].offset, 12);
        assert_eq!(attrs[2].offset, 20);
    }

    #[test]
    fn locations_follow_declaration_order() {
        let (attrs, _) = attrib_layout(&[2, 4]);
        assert_eq!(attrs[0].shader_location, 0);
        assert_eq!(attrs[1].shader_location, 1);
        assert_eq!(attrs[0].format, wgpu::VertexFormat::Float32x2);
        assert_eq!(attrs[1].format, wgpu::VertexFormat::Float32x4);
    }

    #[test]
    fn single_float_attribute() {
        let (attrs, stride) = attrib_layout(&[1]);
        assert_eq!(stride, 4);
        assert_eq!(attrs[0].format, wgpu::VertexFormat::Float32);
    }
}
