use super::helpers::{self, InstanceBuffer};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineInstance {
    /// Endpoint `a` in xyz, half width in w.
    pub a: [f32; 4],
    pub b: [f32; 3],
    pub color: [f32; 4],
}

impl LineInstance {
    #[inline]
    pub fn new(a: Vec3, b: Vec3, half_width: f32, rgb: [f32; 3], alpha: f32) -> Self {
        Self {
            a: a.extend(half_width).to_array(),
            b: b.to_array(),
            color: [rgb[0], rgb[1], rgb[2], alpha],
        }
    }

    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x3, 2 => Float32x4];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LineUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
}

pub(crate) struct LinePass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instances: InstanceBuffer,
}

impl LinePass {
    pub(crate) fn new(device: &wgpu::Device, format: wgpu::TextureFormat, capacity: usize) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lines_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::LINES_WGSL.into()),
        });
        let bgl = helpers::uniform_layout(device, "lines_bgl");
        let uniform_buffer = helpers::uniform_buffer(
            device,
            "lines_uniforms",
            std::mem::size_of::<LineUniforms>(),
        );
        let bind_group = helpers::uniform_bind_group(device, "lines_bg", &bgl, &uniform_buffer);
        let pipeline = helpers::make_instanced_pipeline(
            device,
            "lines_pipeline",
            &bgl,
            &shader,
            ("vs_line", "fs_line"),
            LineInstance::layout(),
            format,
        );
        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            instances: InstanceBuffer::new(
                device,
                "line_instances",
                std::mem::size_of::<LineInstance>(),
                capacity,
            ),
        }
    }

    pub(crate) fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view_proj: Mat4,
        model: Mat4,
        lines: &[LineInstance],
    ) {
        let u = LineUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
        self.instances.upload(device, queue, lines);
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
