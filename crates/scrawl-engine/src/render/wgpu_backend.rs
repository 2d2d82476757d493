use crate::backend::Backend;
use crate::batch::Vertex;
use crate::coords::Viewport;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

fn straight_alpha_blend() -> wgpu::BlendState {
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

/// wgpu implementation of the batch backend.
///
/// Holds two pipelines built from one pass-through shader (line list and
/// triangle list), a depth buffer sized with the surface, and a persistent
/// vertex buffer grown on demand. The render target is set once per frame
/// via [`begin_target`](Self::begin_target); draw calls before the first
/// target are dropped with a warning.
pub struct WgpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,

    line_pipeline: wgpu::RenderPipeline,
    triangle_pipeline: wgpu::RenderPipeline,

    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    depth_view: Option<wgpu::TextureView>,
    depth_size: (u32, u32),

    target: Option<wgpu::TextureView>,
    viewport: Viewport,
}

impl WgpuBackend {
    /// Creates a backend rendering to surfaces of `surface_format`.
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scrawl shape shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shapes.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scrawl shape pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let make_pipeline = |label: &str, topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(straight_alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Cw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                // LessEqual: a flush cycle starts at depth 1.0, exactly the
                // clear value, and steps toward the viewer from there.
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::LessEqual,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        Self {
            device: device.clone(),
            queue: queue.clone(),
            line_pipeline: make_pipeline("scrawl line pipeline", wgpu::PrimitiveTopology::LineList),
            triangle_pipeline: make_pipeline(
                "scrawl triangle pipeline",
                wgpu::PrimitiveTopology::TriangleList,
            ),
            vertex_buffer: None,
            vertex_capacity: 0,
            depth_view: None,
            depth_size: (0, 0),
            target: None,
            viewport: Viewport::default(),
        }
    }

    /// Points the backend at this frame's color view.
    ///
    /// `physical_size` is the drawable size in physical pixels (depth buffer
    /// dimensions); `viewport` is the logical size the batch maps pixels
    /// against. Call once per frame before the batch session.
    pub fn begin_target(
        &mut self,
        view: &wgpu::TextureView,
        physical_size: (u32, u32),
        viewport: Viewport,
    ) {
        self.ensure_depth_texture(physical_size);
        self.target = Some(view.clone());
        self.viewport = viewport;
    }

    /// Drops the current target. Draw calls until the next
    /// [`begin_target`](Self::begin_target) are ignored.
    pub fn end_target(&mut self) {
        self.target = None;
    }

    // ── private helpers ────────────────────────────────────────────────

    fn ensure_depth_texture(&mut self, size: (u32, u32)) {
        let size = (size.0.max(1), size.1.max(1));
        if self.depth_view.is_some() && self.depth_size == size {
            return;
        }

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scrawl depth texture"),
            size: wgpu::Extent3d {
                width: size.0,
                height: size.1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // wgpu zero-initializes new textures; shape passes load the depth
        // attachment and compare LessEqual, so a fresh buffer must start at
        // the far plane or the first flush cycle would be rejected entirely.
        self.clear_depth_view(&view);

        self.depth_view = Some(view);
        self.depth_size = size;
        log::debug!("depth texture (re)created at {}x{}", size.0, size.1);
    }

    /// Records and submits a depth-only pass clearing `view` to the far plane.
    fn clear_depth_view(&self, view: &wgpu::TextureView) {
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scrawl depth clear encoder"),
            });

        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scrawl depth clear"),
            color_attachments: &[],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        self.queue.submit(std::iter::once(encoder.finish()));
    }

    fn ensure_vertex_capacity(&mut self, required: usize) {
        if required <= self.vertex_capacity && self.vertex_buffer.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(256);
        self.vertex_buffer = Some(self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scrawl vertex buffer"),
            size: (new_cap * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }

    fn submit(&mut self, pipeline_label: &str, is_lines: bool, vertices: &[Vertex]) {
        if vertices.is_empty() {
            return;
        }
        if self.target.is_none() || self.depth_view.is_none() {
            log::warn!("{pipeline_label}: draw call before begin_target; dropped");
            return;
        }

        // Mutating growth must happen before the immutable borrows below.
        self.ensure_vertex_capacity(vertices.len());

        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };
        let Some(target) = self.target.as_ref() else { return };
        let Some(depth_view) = self.depth_view.as_ref() else { return };

        self.queue
            .write_buffer(vertex_buffer, 0, bytemuck::cast_slice(vertices));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scrawl shape encoder"),
            });

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scrawl shape pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_pipeline(if is_lines {
                &self.line_pipeline
            } else {
                &self.triangle_pipeline
            });
            let bytes = (vertices.len() * std::mem::size_of::<Vertex>()) as u64;
            rpass.set_vertex_buffer(0, vertex_buffer.slice(0..bytes));
            rpass.draw(0..vertices.len() as u32, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
    }
}

impl Backend for WgpuBackend {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn draw_lines(&mut self, vertices: &[Vertex]) {
        self.submit("draw_lines", true, vertices);
    }

    fn draw_triangles(&mut self, vertices: &[Vertex]) {
        self.submit("draw_triangles", false, vertices);
    }

    fn clear_depth(&mut self) {
        if let Some(depth_view) = self.depth_view.as_ref() {
            self.clear_depth_view(depth_view);
        }
    }
}
