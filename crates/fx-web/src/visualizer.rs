//! The full-screen particle visualizer shown while focus mode is active.
//!
//! Owns the particle fields, the frame tracker, the camera, and the GPU
//! state. The whole component only exists while focus mode is on; dropping
//! it (together with its animation loop) is the teardown path.

use crate::constants::*;
use crate::dom;
use crate::render::{GpuState, LineVertex, PointInstance};
use fx_core::constants::FRAME_COUNT;
use fx_core::{field, Camera, FieldKind, FrameTracker, SceneContext};
use glam::Vec3;
use instant::Instant;
use web_sys as web;

pub struct Visualizer {
    canvas: web::HtmlCanvasElement,
    gpu: GpuState,
    tracker: FrameTracker,
    wave_positions: Vec<Vec3>,
    radial_positions: Vec<Vec3>,
    instances: Vec<PointInstance>,
    lines: Vec<LineVertex>,
    started: Instant,
}

impl Visualizer {
    pub async fn new(canvas: web::HtmlCanvasElement, seed: u64) -> anyhow::Result<Self> {
        dom::sync_canvas_backing_size(&canvas);
        let particle_total = field::total_particle_count();
        let gpu = GpuState::new(&canvas, particle_total + FRAME_COUNT, FRAME_COUNT * 2).await?;
        log::info!(
            "[visualizer] ready: {} particles, {} frames",
            particle_total,
            FRAME_COUNT
        );
        Ok(Self {
            canvas,
            gpu,
            tracker: FrameTracker::new(FRAME_COUNT, seed),
            wave_positions: vec![Vec3::ZERO; FieldKind::Wave.particle_count()],
            radial_positions: vec![Vec3::ZERO; FieldKind::Radial.particle_count()],
            instances: Vec::with_capacity(particle_total + FRAME_COUNT),
            lines: Vec::with_capacity(FRAME_COUNT * 2),
            started: Instant::now(),
        })
    }

    /// One animation tick: recompute both fields, advance the tracker, and
    /// draw.
    pub fn frame(&mut self, scene: &SceneContext) {
        let time = self.started.elapsed().as_secs_f32();

        field::write_positions(FieldKind::Wave, time, &mut self.wave_positions);
        field::write_positions(FieldKind::Radial, time, &mut self.radial_positions);
        self.tracker.tick(time, &scene.reassign);

        dom::sync_canvas_backing_size(&self.canvas);
        let width = self.canvas.width();
        let height = self.canvas.height();
        let camera = Camera::visualizer(width as f32 / height.max(1) as f32);

        self.instances.clear();
        for pos in self.wave_positions.iter().chain(&self.radial_positions) {
            self.instances.push(PointInstance {
                pos: pos.to_array(),
                size: PARTICLE_SIZE,
                alpha: PARTICLE_ALPHA,
            });
        }
        for frame in self.tracker.frames() {
            self.instances.push(PointInstance {
                pos: frame.pos.to_array(),
                size: FRAME_BASE_SIZE * frame.amplitude,
                alpha: FRAME_ALPHA,
            });
        }

        self.lines.clear();
        for (a, b) in self.tracker.visible_connections(&camera) {
            self.lines.push(LineVertex { pos: a.to_array() });
            self.lines.push(LineVertex { pos: b.to_array() });
        }

        self.gpu.set_view_proj(camera.view_proj());
        self.gpu.resize_if_needed(width, height);
        if let Err(e) = self.gpu.render(&self.instances, &self.lines) {
            log::error!("render error: {:?}", e);
        }
    }
}
