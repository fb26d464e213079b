use pixels::wgpu;
use tracing::debug;

use crate::errors::ViewerError;
use crate::presenters::shader::{QUAD_VERTEX_STRIDE, ShaderPrecision, ShaderSources};

const VERTEX_ENTRY_POINT: &str = "vs_main";
const FRAGMENT_ENTRY_POINT: &str = "fs_main";

const QUAD_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

/// The linked Mandelbrot pipeline and the layout of its `Params` uniform.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    precision: ShaderPrecision,
}

impl ShaderProgram {
    /// Compiles both stages and links them into a render pipeline targeting
    /// `format`. Validation errors are captured and returned instead of
    /// reaching the device's uncaptured-error handler.
    pub fn compile(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sources: &ShaderSources,
        precision: ShaderPrecision,
    ) -> Result<Self, ViewerError> {
        let vertex = compile_module(device, "mandelbrot.vert", &sources.vertex)?;
        let fragment = compile_module(device, "mandelbrot.frag", &sources.fragment_for(precision))?;

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mandelbrot params layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mandelbrot pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mandelbrot pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex,
                entry_point: VERTEX_ENTRY_POINT,
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: QUAD_VERTEX_STRIDE,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &QUAD_ATTRIBUTES,
                }],
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &fragment,
                entry_point: FRAGMENT_ENTRY_POINT,
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(ViewerError::ShaderLink(error.to_string()));
        }

        debug!(%precision, ?format, "shader program linked");

        Ok(Self {
            pipeline,
            bind_group_layout,
            precision,
        })
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn precision(&self) -> ShaderPrecision {
        self.precision
    }
}

fn compile_module(device: &wgpu::Device, name: &str, source: &str) -> Result<wgpu::ShaderModule, ViewerError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(name),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    match pollster::block_on(device.pop_error_scope()) {
        Some(error) => Err(ViewerError::ShaderCompile {
            name: name.to_string(),
            message: error.to_string(),
        }),
        None => Ok(module),
    }
}
