//! Shape gallery demo.
//!
//! One window exercising the whole batch API: filled and outlined boxes,
//! circles with automatic and explicit tessellation, wide lines, polar line
//! chains, and a spinning equilateral triangle. `RUST_LOG=scrawl_engine=trace`
//! shows the flush cycles.

use anyhow::Result;
use winit::dpi::LogicalSize;

use scrawl_engine::batch::shapes::{CircleStyle, LineStyle, RectStyle, TriangleStyle};
use scrawl_engine::batch::ShapeBatch;
use scrawl_engine::color::Color;
use scrawl_engine::coords::{Rect, Vec2, Viewport};
use scrawl_engine::device::{GpuInit, SurfaceErrorAction};
use scrawl_engine::logging::{init_logging, LoggingConfig};
use scrawl_engine::render::WgpuBackend;
use scrawl_engine::window::{App, AppControl, FrameCtx, Runtime, RuntimeConfig};

const BACKGROUND: Color = Color::rgb(0.10, 0.10, 0.12);

struct DemoApp {
    // Created on the first frame; needs the surface format from the GPU.
    batch: Option<ShapeBatch<WgpuBackend>>,
}

impl DemoApp {
    fn new() -> Self {
        Self { batch: None }
    }

    fn draw_scene(batch: &mut ShapeBatch<WgpuBackend>, size: (f32, f32), t: f32) -> Result<()> {
        let (w, h) = size;
        batch.begin()?;

        // Axis cross through the center.
        let axis = LineStyle::solid(Color::WHITE.with_alpha(0.25));
        batch.line(Vec2::new(0.0, h / 2.0), Vec2::new(w, h / 2.0), &axis)?;
        batch.line(Vec2::new(w / 2.0, 0.0), Vec2::new(w / 2.0, h), &axis)?;

        // Overlapping boxes: the outlined one is submitted later and must
        // read as sitting on top of the filled one.
        let base = Rect::new(60.0, 60.0, 160.0, 110.0);
        batch.fill_rect(base, &RectStyle::uniform(Color::rgb(0.18, 0.45, 0.85)))?;
        batch.fill_rect(
            Rect::new(120.0, 110.0, 160.0, 110.0),
            &RectStyle::uniform(Color::rgba(0.90, 0.35, 0.25, 0.85)),
        )?;
        batch.stroke_rect(
            Rect::new(120.0, 110.0, 160.0, 110.0),
            &RectStyle::uniform(Color::WHITE),
        )?;

        // Circles: auto tessellation on the left, coarse explicit count on
        // the right, plus a pulsing outline.
        let cy = h - 140.0;
        batch.fill_circle(
            Vec2::new(140.0, cy),
            60.0,
            &CircleStyle {
                color_center: Color::WHITE,
                ..CircleStyle::solid(Color::rgb(0.20, 0.70, 0.40))
            },
        )?;
        batch.fill_circle(
            Vec2::new(300.0, cy),
            60.0,
            &CircleStyle::solid(Color::rgb(0.75, 0.60, 0.15))
                .with_segments(6)
                .with_rotation(t * 0.5),
        )?;
        let pulse = 40.0 + 12.0 * (t * 2.0).sin();
        batch.stroke_circle(
            Vec2::new(300.0, cy),
            pulse,
            &CircleStyle::solid(Color::WHITE),
        )?;

        // Wide polar chain walking across the upper right.
        let wide = LineStyle::solid(Color::rgb(0.55, 0.35, 0.80)).with_width(6.0);
        let mut cursor = Vec2::new(w - 360.0, 100.0);
        for i in 0..6 {
            let angle = (i as f32) * 0.5 - t * 0.3;
            cursor = batch.line_polar(cursor, 55.0, angle, &wide)?;
        }

        // Spinning equilateral pair in the lower right.
        let tri_center = Vec2::new(w - 200.0, h - 180.0);
        batch.fill_triangle_equilateral(
            tri_center,
            110.0,
            t,
            &TriangleStyle {
                colors: [Color::RED, Color::GREEN, Color::BLUE],
            },
        )?;
        batch.stroke_triangle_equilateral(
            tri_center,
            130.0,
            -t * 0.7,
            &TriangleStyle::uniform(Color::WHITE),
        )?;

        batch.end()?;
        Ok(())
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let frame = match ctx.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match ctx.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => {
                        log::error!("surface out of memory");
                        AppControl::Exit
                    }
                    _ => AppControl::Continue,
                };
            }
        };

        ctx.gpu.clear(&frame, BACKGROUND);

        let batch = self.batch.get_or_insert_with(|| {
            ShapeBatch::new(WgpuBackend::new(
                ctx.gpu.device(),
                ctx.gpu.queue(),
                ctx.gpu.surface_format(),
            ))
        });

        let physical = ctx.gpu.size();
        let (lw, lh) = ctx.logical_size();

        batch.backend_mut().begin_target(
            &frame.view,
            (physical.width, physical.height),
            Viewport::new(lw, lh),
        );

        if let Err(e) = Self::draw_scene(batch, (lw, lh), ctx.time.elapsed) {
            log::error!("draw failed: {e:#}");
            return AppControl::Exit;
        }

        batch.backend_mut().end_target();

        ctx.window.pre_present_notify();
        ctx.gpu.present(frame);

        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(
        RuntimeConfig {
            title: "scrawl shape gallery".to_string(),
            initial_size: LogicalSize::new(1024.0, 720.0),
        },
        GpuInit::default(),
        DemoApp::new(),
    )
}
