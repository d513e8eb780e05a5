//! Canvas2D rendering of the force grid.

use crate::dom;
use anyhow::anyhow;
use fx_core::{mesh, ForceGrid, GridInput, PointerState, Ripple, SceneContext, WaveMesh};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct GridView {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    grid: ForceGrid,
    mesh: WaveMesh,
    width: f32,
    height: f32,
}

impl GridView {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("2d context error: {:?}", e))?
            .ok_or_else(|| anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("2d context cast error: {:?}", e))?;
        let (width, height) = dom::size_canvas_to_viewport(&canvas);
        let grid = ForceGrid::new(width, height);
        Ok(Self {
            canvas,
            ctx,
            grid,
            mesh: WaveMesh::default(),
            width,
            height,
        })
    }

    /// Track the viewport and rebuild the lattice.
    pub fn resize(&mut self) {
        let (width, height) = dom::size_canvas_to_viewport(&self.canvas);
        self.width = width;
        self.height = height;
        self.grid.rebuild(width, height);
    }

    /// One tick: advance the simulation and redraw.
    ///
    /// While focus mode is active the canvas carries the wave mesh instead
    /// of the grid; the grid's state keeps easing so the swap back is
    /// seamless.
    pub fn frame(
        &mut self,
        pointer: &PointerState,
        ripples: &[Ripple],
        scene: &SceneContext,
        time: f32,
    ) {
        self.grid.step(&GridInput {
            pointer,
            ripples,
            title_rect: scene.title_rect,
            focus_active: scene.focus_active,
            time,
        });

        if scene.focus_active {
            self.draw_mesh(pointer);
            return;
        }

        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        let ctx = &self.ctx;
        ctx.set_line_width(1.0);
        self.grid.for_each_segment(
            pointer,
            scene.title_rect,
            scene.focus_active,
            |segment| {
                ctx.set_stroke_style_str(&format!("rgba(0, 0, 0, {:.3})", segment.opacity));
                ctx.begin_path();
                ctx.move_to(segment.a.x as f64, segment.a.y as f64);
                ctx.line_to(segment.b.x as f64, segment.b.y as f64);
                ctx.stroke();
            },
        );
    }

    /// Focus-mode wave mesh, with a translucent fill instead of a clear so
    /// the previous frames leave a fading trail.
    fn draw_mesh(&mut self, pointer: &PointerState) {
        self.mesh.tick();
        let norm_y = if pointer.is_idle() || self.height <= 0.0 {
            0.0
        } else {
            (pointer.pos.y / self.height) * 2.0 - 1.0
        };
        let amp = mesh::pointer_amplitude(norm_y);

        let ctx = &self.ctx;
        ctx.set_fill_style_str("rgba(0, 0, 0, 0.2)");
        ctx.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        ctx.set_stroke_style_str("rgba(200, 200, 200, 0.3)");
        ctx.set_line_width(1.0);
        ctx.begin_path();
        self.mesh
            .for_each_segment(amp, Vec2::new(self.width, self.height), |a, b| {
                ctx.move_to(a.x as f64, a.y as f64);
                ctx.line_to(b.x as f64, b.y as f64);
            });
        ctx.stroke();
    }
}
