use crate::shaders;
use crate::texture::{GpuTexture, texture_bind_group_layout};
use deskscene_assets::{TextureImage, TextureLibrary};
use deskscene_render::{FrameView, GlobalUniforms, ObjectUniforms};
use deskscene_scene::{MeshKind, Scene, SceneObject, TextureSlot, Vertex};
use std::collections::BTreeMap;
use wgpu::util::DeviceExt;

struct MeshBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

/// Uniform buffer and bind group for one drawn object.
struct ObjectSlot {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// wgpu-based desk scene renderer.
pub struct WgpuRenderer {
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    meshes: BTreeMap<MeshKind, MeshBuffers>,
    objects: Vec<ObjectSlot>,
    lamp: ObjectSlot,
    textures: BTreeMap<TextureSlot, GpuTexture>,
    // Bound for untextured materials so every draw has a group 2.
    white: GpuTexture,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        scene: &Scene,
        library: &TextureLibrary,
    ) -> Self {
        let uniform_entry = |visibility| wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bind_group_layout"),
            entries: &[uniform_entry(
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bind_group_layout"),
            entries: &[uniform_entry(
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let texture_layout = texture_bind_group_layout(device);

        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals_buffer"),
            contents: bytemuck::bytes_of(&<GlobalUniforms as bytemuck::Zeroable>::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bind_group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pipeline_layout"),
            bind_group_layouts: &[&globals_layout, &object_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::SCENE_SHADER.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x3,
                        2 => Float32x2,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let mut meshes = BTreeMap::new();
        for kind in scene.meshes_used() {
            let data = kind.build();
            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(kind.label()),
                contents: bytemuck::cast_slice(&data.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(kind.label()),
                contents: bytemuck::cast_slice(&data.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            meshes.insert(
                kind,
                MeshBuffers {
                    vertex_buffer,
                    index_buffer,
                    index_count: data.indices.len() as u32,
                },
            );
        }

        let objects = scene
            .objects()
            .iter()
            .map(|object| Self::object_slot(device, &object_layout, object))
            .collect();
        let lamp = Self::object_slot(device, &object_layout, &scene.lamp());

        let textures = library
            .iter()
            .map(|(slot, image)| {
                let texture =
                    GpuTexture::upload(device, queue, &texture_layout, image, slot.file_name());
                (slot, texture)
            })
            .collect();
        let white = GpuTexture::upload(
            device,
            queue,
            &texture_layout,
            &TextureImage::solid([255, 255, 255, 255]),
            "white",
        );

        let depth_texture = Self::create_depth_texture(device, width, height);

        tracing::info!(
            "renderer ready: {} objects, {} meshes, {} textures",
            scene.objects().len(),
            meshes.len(),
            library.len()
        );

        Self {
            pipeline,
            globals_buffer,
            globals_bind_group,
            meshes,
            objects,
            lamp,
            textures,
            white,
            depth_texture,
            surface_format,
        }
    }

    fn object_slot(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        object: &SceneObject,
    ) -> ObjectSlot {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(object.name),
            contents: bytemuck::bytes_of(&ObjectUniforms::new(object)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(object.name),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        ObjectSlot {
            uniform_buffer,
            bind_group,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    /// Render one frame: every scene object, then the light marker.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        scene: &Scene,
        frame: &FrameView,
    ) {
        queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&GlobalUniforms::new(frame, scene)),
        );

        // Slots are built once in `new`; the desk scene never adds or drops objects.
        debug_assert_eq!(self.objects.len(), scene.objects().len());

        let lamp = scene.lamp();
        for (slot, object) in self.objects.iter().zip(scene.objects()) {
            queue.write_buffer(
                &slot.uniform_buffer,
                0,
                bytemuck::bytes_of(&ObjectUniforms::new(object)),
            );
        }
        queue.write_buffer(
            &self.lamp.uniform_buffer,
            0,
            bytemuck::bytes_of(&ObjectUniforms::new(&lamp)),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.1,
                            g: 0.1,
                            b: 0.12,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.globals_bind_group, &[]);

            let draws = self
                .objects
                .iter()
                .zip(scene.objects())
                .chain(std::iter::once((&self.lamp, &lamp)));
            for (slot, object) in draws {
                let Some(mesh) = self.meshes.get(&object.mesh) else {
                    continue;
                };
                let texture = object
                    .material
                    .texture
                    .and_then(|t| self.textures.get(&t))
                    .unwrap_or(&self.white);

                pass.set_bind_group(1, &slot.bind_group, &[]);
                pass.set_bind_group(2, texture.bind_group(), &[]);
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    /// Destroy every GPU texture. Consumes the renderer so nothing can draw
    /// with the released resources.
    pub fn release(self) {
        let count = self.textures.len();
        for (_, texture) in self.textures {
            texture.destroy();
        }
        self.white.destroy();
        tracing::info!("released {count} scene textures");
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}
