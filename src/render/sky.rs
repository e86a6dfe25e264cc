use super::helpers::{create_uniform_binding, make_pipeline, UniformBinding};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SkyUniforms {
    pub(crate) inv_view_proj: [[f32; 4]; 4],
    pub(crate) top_color: [f32; 4],
    pub(crate) bottom_color: [f32; 4],
    pub(crate) eye: [f32; 4],
}

pub(crate) struct SkyResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniforms: UniformBinding,
}

pub(crate) fn create_sky_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> SkyResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sky_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SKY_WGSL.into()),
    });
    let uniforms = create_uniform_binding(
        device,
        "sky_uniforms",
        std::mem::size_of::<SkyUniforms>() as u64,
        wgpu::ShaderStages::FRAGMENT,
    );
    let pipeline = make_pipeline(
        device,
        "sky_pipeline",
        &uniforms.layout,
        &shader,
        "vs_fullscreen",
        "fs_sky",
        color_format,
        None,
    );
    SkyResources { pipeline, uniforms }
}
