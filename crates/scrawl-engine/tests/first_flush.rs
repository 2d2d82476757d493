//! Offscreen end-to-end check of the wgpu backend.
//!
//! Renders through the full batch path into a readback texture and inspects
//! the pixels. Skips silently when the host has no usable adapter.

use scrawl_engine::batch::shapes::RectStyle;
use scrawl_engine::batch::ShapeBatch;
use scrawl_engine::color::Color;
use scrawl_engine::coords::{Rect, Viewport};
use scrawl_engine::render::WgpuBackend;

const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

struct TestGpu {
    device: wgpu::Device,
    queue: wgpu::Queue,
}

fn acquire_gpu() -> Option<TestGpu> {
    pollster::block_on(async {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions::default())
            .await
            .ok()?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("offscreen test device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .ok()?;
        Some(TestGpu { device, queue })
    })
}

fn make_target(device: &wgpu::Device, size: u32) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("offscreen target"),
        size: wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

/// Copies the texture into a mapped buffer and returns the raw RGBA8 rows.
///
/// `size` must keep rows 256-byte aligned (multiples of 64 pixels here).
fn read_back(gpu: &TestGpu, texture: &wgpu::Texture, size: u32) -> Vec<u8> {
    let bytes_per_row = size * 4;
    assert_eq!(bytes_per_row % 256, 0, "row alignment");

    let buffer = gpu.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("readback buffer"),
        size: (bytes_per_row * size) as u64,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("readback encoder"),
        });
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &buffer,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: None,
            },
        },
        wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
    );
    gpu.queue.submit(std::iter::once(encoder.finish()));

    let slice = buffer.slice(..);
    slice.map_async(wgpu::MapMode::Read, |r| r.unwrap());
    gpu.device.poll(wgpu::PollType::wait_indefinitely()).unwrap();

    let pixels = slice.get_mapped_range().to_vec();
    buffer.unmap();
    pixels
}

fn pixel(pixels: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * size + x) * 4) as usize;
    [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
}

/// The very first flush after `begin_target` draws at depth 1.0 against a
/// depth buffer the backend just created, and a resize recreates that buffer
/// mid-run. Both cycles must produce visible pixels.
#[test]
fn first_flush_after_target_setup_is_visible() {
    let Some(gpu) = acquire_gpu() else {
        eprintln!("no wgpu adapter available; skipping");
        return;
    };

    let mut batch = ShapeBatch::new(WgpuBackend::new(&gpu.device, &gpu.queue, FORMAT));
    let full = Rect::new(0.0, 0.0, 64.0, 64.0);
    let viewport = Viewport::new(64.0, 64.0);

    // Fresh depth buffer: the first shape of the first cycle sits exactly at
    // the far plane and must pass the depth test.
    let (texture, view) = make_target(&gpu.device, 64);
    batch.backend_mut().begin_target(&view, (64, 64), viewport);
    batch.begin().unwrap();
    batch.fill_rect(full, &RectStyle::uniform(Color::WHITE)).unwrap();
    batch.end().unwrap();
    batch.backend_mut().end_target();

    let pixels = read_back(&gpu, &texture, 64);
    assert_eq!(
        pixel(&pixels, 64, 32, 32),
        [255, 255, 255, 255],
        "first flush cycle must render onto a freshly created depth buffer"
    );

    // Doubled physical size: the depth buffer is recreated, and the first
    // cycle against it must render as well.
    let (texture, view) = make_target(&gpu.device, 128);
    batch.backend_mut().begin_target(&view, (128, 128), viewport);
    batch.begin().unwrap();
    batch.fill_rect(full, &RectStyle::uniform(Color::RED)).unwrap();
    batch.end().unwrap();
    batch.backend_mut().end_target();

    let pixels = read_back(&gpu, &texture, 128);
    assert_eq!(
        pixel(&pixels, 128, 64, 64),
        [255, 0, 0, 255],
        "first flush cycle after a depth buffer recreation must render"
    );
}
