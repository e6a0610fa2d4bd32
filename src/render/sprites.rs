use super::helpers::{self, InstanceBuffer};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub center: [f32; 3],
    pub color: [f32; 4],
    pub size: f32,
}

impl SpriteInstance {
    #[inline]
    pub fn new(center: Vec3, rgb: [f32; 3], alpha: f32, size: f32) -> Self {
        Self {
            center: center.to_array(),
            color: [rgb[0], rgb[1], rgb[2], alpha],
            size,
        }
    }

    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4, 2 => Float32];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Per-draw sprite parameters packed into the `params` uniform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteParams {
    pub time: f32,
    pub intensity: f32,
    pub size_scale: f32,
    pub pulse_amplitude: f32,
}

impl Default for SpriteParams {
    fn default() -> Self {
        Self {
            time: 0.0,
            intensity: 1.0,
            size_scale: 1.0,
            pulse_amplitude: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SpriteUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    params: [f32; 4],
}

pub(crate) struct SpritePass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instances: InstanceBuffer,
}

impl SpritePass {
    pub(crate) fn new(device: &wgpu::Device, format: wgpu::TextureFormat, capacity: usize) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprites_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SPRITES_WGSL.into()),
        });
        let bgl = helpers::uniform_layout(device, "sprites_bgl");
        let uniform_buffer = helpers::uniform_buffer(
            device,
            "sprites_uniforms",
            std::mem::size_of::<SpriteUniforms>(),
        );
        let bind_group = helpers::uniform_bind_group(device, "sprites_bg", &bgl, &uniform_buffer);
        let pipeline = helpers::make_instanced_pipeline(
            device,
            "sprites_pipeline",
            &bgl,
            &shader,
            ("vs_sprite", "fs_sprite"),
            SpriteInstance::layout(),
            format,
        );
        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            instances: InstanceBuffer::new(
                device,
                "sprite_instances",
                std::mem::size_of::<SpriteInstance>(),
                capacity,
            ),
        }
    }

    pub(crate) fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: Mat4,
        view_proj: Mat4,
        model: Mat4,
        params: SpriteParams,
        sprites: &[SpriteInstance],
    ) {
        // Billboard axes are the camera's right and up in world space.
        let inv = view.inverse();
        let right = inv.x_axis.truncate();
        let up = inv.y_axis.truncate();
        let u = SpriteUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            params: [
                params.time,
                params.intensity,
                params.size_scale,
                params.pulse_amplitude,
            ],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
        self.instances.upload(device, queue, sprites);
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.instances.len() == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instances.slice());
        rpass.draw(0..6, 0..self.instances.len());
    }
}
