use crate::constants::{CARD_COLOR, SKY_BOTTOM_COLOR, SKY_TOP_COLOR};
use glam::{Mat4, Vec2, Vec3};
use web_sys as web;

mod card;
mod helpers;
mod sky;

use card::{create_card_resources, CardResources, CardUniforms};
use sky::{create_sky_resources, SkyResources, SkyUniforms};

pub use crate::camera::screen_to_world_ray;

/// Per-frame scene inputs for [`GpuState::render`].
pub struct SceneView {
    pub view_proj: Mat4,
    pub eye: Vec3,
    /// Card world transform (group transform times card pose).
    pub card_world: Mat4,
    pub card_size: Vec2,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sky: SkyResources,
    card: CardResources,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sky = create_sky_resources(&device, format);
        let card = create_card_resources(&device, format);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sky,
            card,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, scene: &SceneView) -> Result<(), wgpu::SurfaceError> {
        let sky = SkyUniforms {
            inv_view_proj: scene.view_proj.inverse().to_cols_array_2d(),
            top_color: rgb_to_rgba(SKY_TOP_COLOR),
            bottom_color: rgb_to_rgba(SKY_BOTTOM_COLOR),
            eye: scene.eye.extend(1.0).to_array(),
        };
        self.queue
            .write_buffer(&self.sky.uniforms.buffer, 0, bytemuck::bytes_of(&sky));
        let card = CardUniforms {
            mvp: (scene.view_proj * scene.card_world).to_cols_array_2d(),
            color: CARD_COLOR,
            size: [scene.card_size.x, scene.card_size.y, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.card.uniforms.buffer, 0, bytemuck::bytes_of(&card));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.sky.pipeline);
            rpass.set_bind_group(0, &self.sky.uniforms.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            rpass.set_pipeline(&self.card.pipeline);
            rpass.set_bind_group(0, &self.card.uniforms.bind_group, &[]);
            rpass.draw(0..6, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

#[inline]
fn rgb_to_rgba(c: [f32; 3]) -> [f32; 4] {
    [c[0], c[1], c[2], 1.0]
}
