//! Batch evaluation of the fit function on the GPU, in single precision.

use std::borrow::Cow;

use wgpu::util::DeviceExt;
use wgpu::{Device, Queue};

use crate::error::LangausError;
use crate::langaus::{ConvolutionConfig, LangausParams};

const SHADER: &str = include_str!("langaus.wgsl");
const WORKGROUP_SIZE: u32 = 64;

#[derive(Debug, Copy, Clone, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
struct Uniform {
    width: f32,
    mpv: f32,
    area: f32,
    sigma: f32,
    len: u32,
    steps: u32,
    sigma_range: f32,
    _pad: u32,
}

impl Uniform {
    fn new(params: &LangausParams, config: &ConvolutionConfig, len: u32) -> Self {
        Self {
            width: params.width as f32,
            mpv: params.mpv as f32,
            area: params.area as f32,
            sigma: params.sigma as f32,
            len,
            steps: config.steps(),
            sigma_range: config.sigma_range() as f32,
            _pad: 0,
        }
    }
}

pub struct GpuLangausAsync {
    device: Device,
    queue: Queue,
    layout: wgpu::BindGroupLayout,
    pipeline: wgpu::ComputePipeline,
    config: ConvolutionConfig,
}

impl GpuLangausAsync {
    pub async fn new() -> Result<Self, LangausError> {
        Self::with_config(ConvolutionConfig::default()).await
    }

    pub async fn with_config(config: ConvolutionConfig) -> Result<Self, LangausError> {
        let instance = wgpu::Instance::default();
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(LangausError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Langaus device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults(),
                },
                None,
            )
            .await?;

        let storage_entry = |binding, read_only| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::COMPUTE,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only },
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Langaus bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                storage_entry(1, true),
                storage_entry(2, false),
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Langaus shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(SHADER)),
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Langaus pipeline layout"),
            bind_group_layouts: &[&layout],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("Langaus pipeline"),
            layout: Some(&pipeline_layout),
            module: &shader,
            entry_point: "main",
        });

        Ok(Self {
            device,
            queue,
            layout,
            pipeline,
            config,
        })
    }

    pub fn config(&self) -> &ConvolutionConfig {
        &self.config
    }

    /// Largest number of abscissae a single call accepts on this device.
    pub fn max_points(&self) -> usize {
        self.device.limits().max_compute_workgroups_per_dimension as usize
            * WORKGROUP_SIZE as usize
    }

    pub async fn evaluate(
        &self,
        xs: &[f32],
        params: &LangausParams,
    ) -> Result<Vec<f32>, LangausError> {
        if xs.is_empty() {
            return Ok(Vec::new());
        }
        let max = self.max_points();
        if xs.len() > max {
            return Err(LangausError::TooManyPoints { got: xs.len(), max });
        }
        let len = xs.len() as u32;
        let size = std::mem::size_of_val(xs) as wgpu::BufferAddress;

        let uniform = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Uniform buffer"),
                contents: bytemuck::bytes_of(&Uniform::new(params, &self.config, len)),
                usage: wgpu::BufferUsages::UNIFORM,
            });
        let input = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Input buffer"),
                contents: bytemuck::cast_slice(xs),
                usage: wgpu::BufferUsages::STORAGE,
            });
        let output = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Output buffer"),
            size,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });
        let staging = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Staging buffer"),
            size,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let bindgroup = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Langaus bind group"),
            layout: &self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: input.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: output.as_entire_binding(),
                },
            ],
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
        {
            let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("Langaus compute pass"),
                timestamp_writes: None,
            });
            cpass.set_pipeline(&self.pipeline);
            cpass.set_bind_group(0, &bindgroup, &[]);
            cpass.insert_debug_marker(&format!("langaus-{}", len));
            cpass.dispatch_workgroups(len.div_ceil(WORKGROUP_SIZE), 1, 1);
        }
        encoder.copy_buffer_to_buffer(&output, 0, &staging, 0, size);
        self.queue.submit(Some(encoder.finish()));

        let (sender, receiver) = flume::bounded(1);
        let slice = staging.slice(..);
        slice.map_async(wgpu::MapMode::Read, move |res| {
            let _ = sender.send(res);
        });
        self.device.poll(wgpu::Maintain::Wait);
        receiver
            .recv_async()
            .await
            .map_err(|e| LangausError::BufferMap(e.to_string()))??;

        let ys = {
            let data = slice.get_mapped_range();
            bytemuck::cast_slice::<u8, f32>(&data).to_vec()
        };
        staging.unmap();
        Ok(ys)
    }
}
