use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu::util::DeviceExt;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu};
use tracing::{info, warn};
use winit::window::Window;

use crate::controllers::ports::frame_target::FrameTargetPort;
use crate::controllers::ports::uniform_sink::{UniformSinkPort, UniformValue};
use crate::core::data::window_dimensions::WindowDimensions;
use crate::errors::ViewerError;
use crate::input::gui::app::ports::presenter::{GuiPresenterPort, OverlayFrame};
use crate::presenters::gpu::program::ShaderProgram;
use crate::presenters::shader::{ShaderPrecision, ShaderSources, UNIFORM_BUFFER_SIZE, UniformBlock, quad_bytes};

// The shader writes display-ready values, so the surface must not re-encode them.
const SURFACE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8Unorm;
const CLEAR_COLOUR: wgpu::Color = wgpu::Color::BLACK;

/// Draws the Mandelbrot quad straight onto the `pixels` surface, with the egui
/// overlay on top. The `pixels` frame buffer itself is never shown.
pub struct WgpuPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    program: ShaderProgram,
    uniforms: UniformBlock,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    egui_renderer: EguiRenderer,
    overlay: Option<OverlayFrame>,
    surface_size: WindowDimensions,
}

impl WgpuPresenter {
    pub fn new(
        window: &'static Window,
        sources: &ShaderSources,
        prefer_double_precision: bool,
    ) -> Result<Self, ViewerError> {
        let size = window.inner_size();
        let pixels = build_pixels(window, prefer_double_precision)?;
        let program = compile_program(&pixels, sources, prefer_double_precision)?;

        let device = pixels.device();

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mandelbrot params"),
            size: UNIFORM_BUFFER_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("mandelbrot params"),
            layout: program.bind_group_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mandelbrot quad"),
            contents: quad_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let egui_renderer = EguiRenderer::new(device, pixels.render_texture_format(), None, 1);

        info!(
            width = size.width,
            height = size.height,
            precision = %program.precision(),
            "gpu presenter ready"
        );

        Ok(Self {
            window,
            pixels,
            program,
            uniforms: UniformBlock::default(),
            uniform_buffer,
            bind_group,
            vertex_buffer,
            egui_renderer,
            overlay: None,
            surface_size: WindowDimensions::from_physical(size.width, size.height),
        })
    }

    fn upload_uniforms(&self) {
        let bytes = self.uniforms.to_bytes(self.program.precision());
        self.pixels.queue().write_buffer(&self.uniform_buffer, 0, &bytes);
    }
}

impl UniformSinkPort for WgpuPresenter {
    fn set_uniform(&mut self, value: UniformValue) {
        self.uniforms.set_uniform(value);
        self.upload_uniforms();
    }

    fn set_viewport(&mut self, window: WindowDimensions) {
        if !window.is_drawable() || window == self.surface_size {
            return;
        }

        let (width, height) = window.as_u32_pair();
        match self.pixels.resize_surface(width, height) {
            Ok(()) => self.surface_size = window,
            Err(error) => warn!(width, height, %error, "failed to resize surface"),
        }
    }
}

impl FrameTargetPort for WgpuPresenter {
    fn draw_frame(&mut self, vertex_count: u32) -> Result<(), ViewerError> {
        let overlay = self.overlay.take();
        let (width, height) = self.surface_size.as_u32_pair();

        self.pixels
            .render_with(|encoder, render_target, context| {
                {
                    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("mandelbrot"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: render_target,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(CLEAR_COLOUR),
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    });

                    pass.set_pipeline(self.program.pipeline());
                    pass.set_bind_group(0, &self.bind_group, &[]);
                    pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                    pass.draw(0..vertex_count, 0..1);
                }

                let Some(overlay) = overlay else {
                    return Ok(());
                };

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [width, height],
                    pixels_per_point: overlay.pixels_per_point,
                };

                for (id, delta) in &overlay.textures_delta.set {
                    self.egui_renderer
                        .update_texture(&context.device, &context.queue, *id, delta);
                }

                self.egui_renderer.update_buffers(
                    &context.device,
                    &context.queue,
                    encoder,
                    &overlay.primitives,
                    &screen_descriptor,
                );

                {
                    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("egui"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: render_target,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Load,
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    });

                    self.egui_renderer
                        .render(&mut pass, &overlay.primitives, &screen_descriptor);
                }

                for id in &overlay.textures_delta.free {
                    self.egui_renderer.free_texture(id);
                }

                Ok(())
            })
            .map_err(|error| ViewerError::Render(error.to_string()))
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}

impl GuiPresenterPort for WgpuPresenter {
    fn queue_overlay(&mut self, frame: OverlayFrame) {
        self.overlay = Some(frame);
    }

    fn precision(&self) -> ShaderPrecision {
        self.program.precision()
    }
}

/// Builds the `pixels` context, asking for `f64` shader support first when
/// preferred and retrying without it if no adapter offers it. The `pixels`
/// frame buffer is unused, so it is kept at one pixel.
fn build_pixels(window: &'static Window, prefer_double_precision: bool) -> Result<Pixels<'static>, ViewerError> {
    let size = window.inner_size();

    if prefer_double_precision {
        let double = PixelsBuilder::new(1, 1, SurfaceTexture::new(size.width, size.height, window))
            .surface_texture_format(SURFACE_FORMAT)
            .device_descriptor(wgpu::DeviceDescriptor {
                label: Some("mandelbrot device"),
                required_features: wgpu::Features::SHADER_F64,
                required_limits: wgpu::Limits::default(),
            })
            .build();

        match double {
            Ok(pixels) => return Ok(pixels),
            Err(error) => warn!(%error, "no device with f64 shader support, falling back to f32"),
        }
    }

    PixelsBuilder::new(1, 1, SurfaceTexture::new(size.width, size.height, window))
        .surface_texture_format(SURFACE_FORMAT)
        .build()
        .map_err(|error| ViewerError::Surface(error.to_string()))
}

fn compile_program(
    pixels: &Pixels<'static>,
    sources: &ShaderSources,
    prefer_double_precision: bool,
) -> Result<ShaderProgram, ViewerError> {
    let device = pixels.device();
    let format = pixels.render_texture_format();

    if prefer_double_precision && device.features().contains(wgpu::Features::SHADER_F64) {
        match ShaderProgram::compile(device, format, sources, ShaderPrecision::Double) {
            Ok(program) => return Ok(program),
            Err(error) => warn!(%error, "f64 shader rejected, falling back to f32"),
        }
    }

    ShaderProgram::compile(device, format, sources, ShaderPrecision::Single)
}
