use crate::uniforms::ViewUniforms;
use bytemuck::{Pod, Zeroable};
use fractalspace_assets::Palette;
use fractalspace_common::ViewState;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    position: [f32; 3],
}

/// Full-screen quad: 4 vertices, 2 triangles via 6 indices. The kernel
/// maps `position.xy` straight onto the complex plane.
fn quad_mesh() -> (Vec<QuadVertex>, Vec<u16>) {
    #[rustfmt::skip]
    let vertices = vec![
        QuadVertex { position: [-1.0,  1.0, 0.0] },
        QuadVertex { position: [ 1.0,  1.0, 0.0] },
        QuadVertex { position: [-1.0, -1.0, 0.0] },
        QuadVertex { position: [ 1.0, -1.0, 0.0] },
    ];
    let indices: Vec<u16> = vec![0, 1, 2, 1, 3, 2];
    (vertices, indices)
}

/// Errors from building the fractal pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("fractal kernel rejected: {0}")]
    ShaderCompile(String),
    #[error("palette has no colors")]
    EmptyPalette,
}

/// wgpu-based fractal renderer.
///
/// Owns every GPU resource the viewer needs: the compiled kernel
/// pipeline, the quad geometry, the palette texture, and the uniform
/// buffer. Built once at startup; dropping it releases everything,
/// including after a partially failed setup.
pub struct FractalRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    max_iter: f32,
}

impl FractalRenderer {
    /// Compile the kernel and build the quad, palette texture, and
    /// uniform plumbing. Compile and link diagnostics come back as
    /// [`RenderError::ShaderCompile`]; the caller treats that as fatal.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        kernel_wgsl: &str,
        palette: &Palette,
        max_iter: u32,
    ) -> Result<Self, RenderError> {
        if palette.is_empty() {
            return Err(RenderError::EmptyPalette);
        }

        // Uniform buffer, seeded with the initial view
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("view_uniform_buffer"),
            contents: bytemuck::bytes_of(&ViewUniforms::new(
                &ViewState::default(),
                max_iter as f32,
            )),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        // Palette as a 1-D texture, repeat wrap + linear filtering
        let texels = palette.to_rgba8();
        let palette_size = wgpu::Extent3d {
            width: palette.len() as u32,
            height: 1,
            depth_or_array_layers: 1,
        };
        let palette_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("palette_texture"),
            size: palette_size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D1,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &palette_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &texels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(texels.len() as u32),
                rows_per_image: None,
            },
            palette_size,
        );
        let palette_view = palette_texture.create_view(&Default::default());

        let palette_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("palette_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("fractal_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D1,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("fractal_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&palette_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&palette_sampler),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("fractal_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Kernel compile + pipeline build under one validation scope so
        // any diagnostic surfaces as an error instead of a panic.
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let kernel = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("fractal_kernel"),
            source: wgpu::ShaderSource::Wgsl(kernel_wgsl.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("fractal_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &kernel,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<QuadVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &kernel,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(RenderError::ShaderCompile(error.to_string()));
        }

        // Quad geometry
        let (quad_verts, quad_indices) = quad_mesh();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vertex_buffer"),
            contents: bytemuck::cast_slice(&quad_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_index_buffer"),
            contents: bytemuck::cast_slice(&quad_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let index_count = quad_indices.len() as u32;

        tracing::debug!(
            palette = palette.name(),
            max_iter,
            "fractal pipeline ready"
        );

        Ok(Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            index_buffer,
            index_count,
            max_iter: max_iter as f32,
        })
    }

    pub fn max_iter(&self) -> f32 {
        self.max_iter
    }

    /// Render one frame: upload the view uniforms, draw the quad.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        view: &ViewState,
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&ViewUniforms::new(view, self.max_iter)),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("fractal_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("fractal_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            pass.draw_indexed(0..self.index_count, 0, 0..1);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }
}
