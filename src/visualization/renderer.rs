use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};
use std::sync::Arc;
use wgpu::util::DeviceExt;

use super::axes::{Bounds3, OrbitCamera};
use crate::config::PlotStyle;

const SHADERS_WGSL: &str = r#"
struct Uniforms {
    mvp: mat4x4<f32>,
    color: vec4<f32>,
    marker_extent: vec2<f32>,
    _pad: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) local: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> u: Uniforms;

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) position: vec3<f32>,
) -> VertexOutput {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, 1.0),
    );
    let corner = corners[vertex_index];
    let center = u.mvp * vec4<f32>(position, 1.0);

    var out: VertexOutput;
    // Offset scaled by w so the marker keeps its screen size
    out.clip_position = center + vec4<f32>(corner * u.marker_extent * center.w, 0.0, 0.0);
    out.local = corner;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    if length(in.local) > 1.0 {
        discard;
    }
    return u.color;
}
"#;

/// Uniform block shared by the marker vertex and fragment stages.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ScatterUniforms {
    pub mvp: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// Marker half size in NDC units.
    pub marker_extent: [f32; 2],
    pub _pad: [f32; 2],
}

pub struct ScatterWgpuPrimitive {
    // None for an empty point set; nothing is drawn
    instance_buffer: Option<wgpu::Buffer>,
    num_instances: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    render_pipeline: wgpu::RenderPipeline,
}

pub struct WgpuScatterRenderer {
    primitive: Option<Arc<ScatterWgpuPrimitive>>,
    points: Vec<[f32; 3]>,
    model: Mat4,
    color: [f32; 4],
    marker_radius: f32,
    pub camera: OrbitCamera,
}

impl WgpuScatterRenderer {
    pub fn new(points_data: Vec<[f32; 3]>, style: &PlotStyle) -> Self {
        let model = Bounds3::from_points(&points_data)
            .map(|bounds| bounds.fit_to_box())
            .unwrap_or(Mat4::IDENTITY);
        let [r, g, b] = style.marker_color;

        Self {
            primitive: None,
            points: points_data,
            model,
            color: [r, g, b, 1.0],
            marker_radius: style.effective_marker_radius(),
            camera: OrbitCamera::from_degrees(style.elevation_deg, style.azimuth_deg),
        }
    }

    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
    ) -> Result<()> {
        if self.primitive.is_some() {
            return Ok(());
        }

        tracing::info!("Preparing WgpuScatterRenderer resources...");

        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scatter Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADERS_WGSL.into()),
        });

        let num_instances = u32::try_from(self.points.len())?;
        let instance_buffer = (!self.points.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scatter Instance Buffer"),
                contents: bytemuck::cast_slice(&self.points),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scatter Uniform Buffer"),
            contents: bytemuck::bytes_of(&ScatterUniforms::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scatter Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scatter Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scatter Render Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scatter Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vs_main",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            // Two triangles per marker; PointList is stuck at 1px on most GPUs
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

        self.primitive = Some(Arc::new(ScatterWgpuPrimitive {
            instance_buffer,
            num_instances,
            uniform_buffer,
            bind_group,
            render_pipeline,
        }));

        tracing::info!(
            "WgpuScatterRenderer resources prepared for {} points.",
            num_instances
        );

        Ok(())
    }

    /// Camera only, for overlays already in plot-box space.
    pub fn view_proj(&self, aspect_ratio: f32) -> Mat4 {
        self.camera.view_proj(aspect_ratio)
    }

    pub fn calculate_mvp(&self, aspect_ratio: f32) -> Mat4 {
        self.view_proj(aspect_ratio) * self.model
    }

    /// Uniforms for a plot area of `size` points.
    pub fn uniforms(&self, size: Vec2) -> ScatterUniforms {
        let size = size.max(Vec2::ONE);
        let extent = Vec2::splat(self.marker_radius) / (size * 0.5);

        ScatterUniforms {
            mvp: self.calculate_mvp(size.x / size.y).to_cols_array_2d(),
            color: self.color,
            marker_extent: extent.to_array(),
            _pad: [0.0; 2],
        }
    }

    pub fn get_primitive_arc(&self) -> Option<Arc<ScatterWgpuPrimitive>> {
        self.primitive.clone()
    }

    pub fn write_uniforms(
        primitive: &ScatterWgpuPrimitive,
        uniforms: &ScatterUniforms,
        queue: &wgpu::Queue,
    ) {
        queue.write_buffer(&primitive.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub fn paint_primitive<'rp>(
        primitive: &'rp ScatterWgpuPrimitive,
        rpass: &mut wgpu::RenderPass<'rp>,
    ) {
        let Some(instance_buffer) = &primitive.instance_buffer else {
            return;
        };

        rpass.set_pipeline(&primitive.render_pipeline);
        rpass.set_bind_group(0, &primitive.bind_group, &[]);
        rpass.set_vertex_buffer(0, instance_buffer.slice(..));
        rpass.draw(0..6, 0..primitive.num_instances);
    }
}
