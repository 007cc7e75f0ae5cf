use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::ColorRgba;
use crate::render::{RenderCtx, RenderTarget};

use super::quad::{QuadVertex, QUAD_INDICES, QUAD_VERTICES};

/// Shader-side tunables that do not come from the zoom controller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalStyle {
    /// Escape-time iteration cap.
    pub max_iterations: u32,
    /// Outline color of the zoom selection (alpha scales the interior tint).
    pub selection_color: ColorRgba,
}

impl Default for FractalStyle {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            selection_color: ColorRgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

/// What the shader needs to draw one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParams {
    /// World-space lower-left corner of the visible region.
    pub corner: [f32; 2],
    /// World-space width; the height is `width * aspect`.
    pub width: f32,
    /// Framebuffer height / width.
    pub aspect: f32,
    /// Selection edges in device space (left, right, bottom, top), if one is
    /// being dragged.
    pub selection: Option<[f32; 4]>,
}

/// Uniform block consumed by `fractal.wgsl`. Layout must match `FractalUniform`
/// in the shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FractalUniform {
    pub camera_corner: [f32; 2],
    pub camera_width: f32,
    pub aspect: f32,
    /// left, right, bottom, top (device space)
    pub rect: [f32; 4],
    pub selection_color: [f32; 4],
    pub draw_rect: u32,
    pub max_iterations: u32,
    pub _pad: [u32; 2], // 16-byte alignment
}

impl FractalUniform {
    pub fn new(params: &FractalParams, style: &FractalStyle) -> Self {
        Self {
            camera_corner: params.corner,
            camera_width: params.width,
            aspect: params.aspect,
            rect: params.selection.unwrap_or([0.0; 4]),
            selection_color: style.selection_color.to_array(),
            draw_rect: params.selection.is_some() as u32,
            max_iterations: style.max_iterations.max(1),
            _pad: [0; 2],
        }
    }

    fn min_binding_size() -> std::num::NonZeroU64 {
        std::num::NonZeroU64::new(std::mem::size_of::<FractalUniform>() as u64)
            .expect("FractalUniform has non-zero size by construction")
    }
}

/// Full-screen fractal renderer.
///
/// GPU resources are created lazily on first use and rebuilt if the surface
/// format changes. The uniform buffer is only written when [`sync`] receives
/// new parameters, or when the buffer itself had to be recreated.
///
/// [`sync`]: FractalRenderer::sync
pub struct FractalRenderer {
    style: FractalStyle,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    /// Last uniform value handed to `sync`, re-uploaded after buffer rebuilds.
    uniform: Option<FractalUniform>,
    uploaded: bool,
}

impl FractalRenderer {
    pub fn new(style: FractalStyle) -> Self {
        Self {
            style,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            uniform_ubo: None,
            quad_vbo: None,
            quad_ibo: None,
            uniform: None,
            uploaded: false,
        }
    }

    /// Records new parameters for upload. Identical values are not re-uploaded.
    pub fn sync(&mut self, params: &FractalParams) {
        let next = FractalUniform::new(params, &self.style);
        if self.uniform == Some(next) {
            return;
        }
        log::trace!("uniform update: {next:?}");
        self.uniform = Some(next);
        self.uploaded = false;
    }

    /// Draws the fractal (and selection overlay) into `target`.
    ///
    /// Nothing is drawn until parameters have been synced.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);
        self.flush_uniform(ctx);

        if !self.uploaded {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("fractal pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }

    fn flush_uniform(&mut self, ctx: &RenderCtx<'_>) {
        if self.uploaded {
            return;
        }
        let Some(u) = self.uniform else { return };
        let Some(ubo) = self.uniform_ubo.as_ref() else { return };

        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
        self.uploaded = true;
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }
        log::debug!("building fractal pipeline for {:?}", ctx.surface_format);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("fractal shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/fractal.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("fractal bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(FractalUniform::min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("fractal pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("fractal pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
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

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bindings depend on the layout; rebuild them (and re-upload) next.
        self.bind_group = None;
        self.uniform_ubo = None;
        self.uploaded = false;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let uniform_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("fractal uniform ubo"),
            size: std::mem::size_of::<FractalUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("fractal bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_ubo.as_entire_binding(),
            }],
        });

        self.uniform_ubo = Some(uniform_ubo);
        self.bind_group = Some(bind_group);
        self.uploaded = false;
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fractal quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fractal quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

impl Default for FractalRenderer {
    fn default() -> Self {
        Self::new(FractalStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(selecting: bool) -> FractalParams {
        FractalParams {
            corner: [-0.75, 0.1],
            width: 0.5,
            aspect: 0.75,
            selection: selecting.then_some([-0.5, 0.25, -0.1, 0.65]),
        }
    }

    // ── uniform packing ───────────────────────────────────────────────────

    #[test]
    fn uniform_is_64_bytes_and_16_aligned() {
        assert_eq!(std::mem::size_of::<FractalUniform>(), 64);
        assert_eq!(std::mem::size_of::<FractalUniform>() % 16, 0);
    }

    #[test]
    fn uniform_copies_params() {
        let u = FractalUniform::new(&params(true), &FractalStyle::default());
        assert_eq!(u.camera_corner, [-0.75, 0.1]);
        assert_eq!(u.camera_width, 0.5);
        assert_eq!(u.aspect, 0.75);
        assert_eq!(u.rect, [-0.5, 0.25, -0.1, 0.65]);
        assert_eq!(u.draw_rect, 1);
        assert_eq!(u.max_iterations, 500);
    }

    #[test]
    fn hidden_selection_clears_draw_flag() {
        let u = FractalUniform::new(&params(false), &FractalStyle::default());
        assert_eq!(u.draw_rect, 0);
        assert_eq!(u.rect, [0.0; 4]);
    }

    #[test]
    fn iteration_cap_is_at_least_one() {
        let style = FractalStyle { max_iterations: 0, ..FractalStyle::default() };
        assert_eq!(FractalUniform::new(&params(false), &style).max_iterations, 1);
    }

    #[test]
    fn camera_corner_lands_at_offset_zero() {
        let u = FractalUniform::new(&params(true), &FractalStyle::default());
        let bytes = bytemuck::bytes_of(&u);
        let first: [f32; 2] = bytemuck::pod_read_unaligned(&bytes[0..8]);
        assert_eq!(first, [-0.75, 0.1]);
        let draw_rect: u32 = bytemuck::pod_read_unaligned(&bytes[48..52]);
        assert_eq!(draw_rect, 1);
    }

    // ── sync bookkeeping ──────────────────────────────────────────────────

    #[test]
    fn sync_skips_identical_views() {
        let mut r = FractalRenderer::default();
        r.sync(&params(true));
        assert!(!r.uploaded);
        r.uploaded = true;
        r.sync(&params(true));
        assert!(r.uploaded);
        r.sync(&params(false));
        assert!(!r.uploaded);
    }
}
