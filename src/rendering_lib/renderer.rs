// src/rendering_lib/renderer.rs

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::batch::FrameBatch;
use super::vertex::Vertex;

// Enough for the border ring plus a few hundred lines before the first grow.
const INITIAL_MAX_VERTICES: usize = 4096;
const INITIAL_MAX_INDICES: usize = INITIAL_MAX_VERTICES / 4 * 6;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct DisplayUniform {
    width: f32,
    height: f32,
    _padding1: f32,
    _padding2: f32,
}

impl DisplayUniform {
    fn new(width: f32, height: f32) -> Self {
        Self { width, height, _padding1: 0.0, _padding2: 0.0 }
    }
}

pub struct Renderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_capacity: usize,

    // written once; the logical display size is fixed
    _display_uniform_buffer: wgpu::Buffer,
    display_bind_group: wgpu::BindGroup,
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Frame Vertex Buffer"),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_index_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Frame Index Buffer"),
        size: (capacity * std::mem::size_of::<u32>()) as u64,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl Renderer {
    /// `display_width` and `display_height` are the logical size the frame
    /// batch is drawn in, independent of the surface's physical pixels.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
        display_width: f32,
        display_height: f32,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Strobe Shader Module"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let display_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Display Uniform Buffer"),
            contents: bytemuck::bytes_of(&DisplayUniform::new(display_width, display_height)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let display_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("display_bind_group_layout"),
        });

        let display_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &display_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: display_uniform_buffer.as_entire_binding(),
            }],
            label: Some("display_bind_group"),
        });

        let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Strobe Pipeline Layout"),
            bind_group_layouts: &[&display_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Strobe Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    // colours are premultiplied on the CPU
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
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
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        Self {
            render_pipeline,
            vertex_buffer: create_vertex_buffer(device, INITIAL_MAX_VERTICES),
            index_buffer: create_index_buffer(device, INITIAL_MAX_INDICES),
            vertex_capacity: INITIAL_MAX_VERTICES,
            index_capacity: INITIAL_MAX_INDICES,
            _display_uniform_buffer: display_uniform_buffer,
            display_bind_group,
        }
    }

    fn ensure_capacity(&mut self, device: &wgpu::Device, vertices: usize, indices: usize) {
        if vertices > self.vertex_capacity {
            self.vertex_capacity = vertices.next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(device, self.vertex_capacity);
            log::debug!("Grew vertex buffer to {} vertices", self.vertex_capacity);
        }
        if indices > self.index_capacity {
            self.index_capacity = indices.next_power_of_two();
            self.index_buffer = create_index_buffer(device, self.index_capacity);
            log::debug!("Grew index buffer to {} indices", self.index_capacity);
        }
    }

    /// Clears `output_view` to the batch's clear colour and draws its triangles.
    pub fn render_batch(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        batch: &FrameBatch,
    ) {
        let vertices = batch.vertices();
        let indices = batch.indices();

        if !batch.is_empty() {
            self.ensure_capacity(device, vertices.len(), indices.len());
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
            queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(indices));
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Strobe Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(batch.clear_color().to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if batch.is_empty() {
            return;
        }

        let vertex_bytes = (vertices.len() * std::mem::size_of::<Vertex>()) as u64;
        let index_bytes = (indices.len() * std::mem::size_of::<u32>()) as u64;

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.display_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..vertex_bytes));
        render_pass.set_index_buffer(self.index_buffer.slice(..index_bytes), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..indices.len() as u32, 0, 0..1);
    }
}
