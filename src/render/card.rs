use super::helpers::{create_uniform_binding, make_pipeline, UniformBinding};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CardUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) size: [f32; 4],
}

pub(crate) struct CardResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniforms: UniformBinding,
}

pub(crate) fn create_card_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> CardResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("card_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::CARD_WGSL.into()),
    });
    let uniforms = create_uniform_binding(
        device,
        "card_uniforms",
        std::mem::size_of::<CardUniforms>() as u64,
        wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
    );
    let pipeline = make_pipeline(
        device,
        "card_pipeline",
        &uniforms.layout,
        &shader,
        "vs_card",
        "fs_card",
        color_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
    );
    CardResources { pipeline, uniforms }
}
