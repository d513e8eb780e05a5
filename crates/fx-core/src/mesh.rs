//! Perspective wave mesh shown behind the particle visualizer in focus mode.
//!
//! A scrolling lattice on the xz plane, displaced vertically by a sum of
//! sine components and projected to 2D with a fixed pinhole camera. Like
//! the particle fields every height is a closed-form function of lattice
//! coordinate and time; only the tick counter is stateful.

use crate::constants::*;
use glam::{Vec2, Vec3};

/// Pointer-driven amplitude of the high-frequency component.
///
/// `norm_y` is the pointer's vertical position mapped to [-1, 1]; values
/// outside that range (off-screen pointers) are clamped.
pub fn pointer_amplitude(norm_y: f32) -> f32 {
    norm_y.clamp(-1.0, 1.0).abs() * MESH_POINTER_AMP_GAIN
}

/// Height of the mesh surface at `(x, z)`.
pub fn height_at(x: f32, z: f32, time: f32, pointer_amp: f32) -> f32 {
    // Rolling base wave
    let mut y = (z * 0.005 + time * 0.02).sin() * 20.0;
    // Low, mid, and radial components
    y += (x * 0.01 + time * 0.05).sin() * 15.0;
    y += (x * 0.03 + z * 0.02 + time * 0.1).sin() * 10.0;
    y += ((x * x + z * z).sqrt() * 0.02 - time * 0.08).sin() * 15.0;
    // High-frequency noise, amplitude-modulated by the pointer
    y += (x * 0.05 + time * 0.2).sin() * 20.0 * pointer_amp;
    y + MESH_HEIGHT_OFFSET
}

/// Depth offset that scrolls the lattice one cell per `MESH_DEPTH /
/// MESH_GRID_SIZE` time units, wrapping so the mesh appears endless.
pub fn scroll_offset(time: f32) -> f32 {
    time % (MESH_DEPTH / MESH_GRID_SIZE as f32)
}

/// Pinhole projection of a camera-space point onto the viewport.
///
/// `point.z` already includes the view distance. Points at or behind the
/// projection plane are culled.
pub fn project(point: Vec3, viewport: Vec2) -> Option<Vec2> {
    let denom = MESH_FOV + point.z;
    if denom <= 0.0 {
        return None;
    }
    let scale = MESH_FOV / denom;
    if scale <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        point.x * scale + viewport.x * 0.5,
        point.y * scale + viewport.y * 0.5,
    ))
}

/// The mesh's only state: a tick counter advanced while it is drawn.
#[derive(Debug, Default)]
pub struct WaveMesh {
    time: f32,
}

impl WaveMesh {
    pub fn tick(&mut self) {
        self.time += MESH_TIME_RATE;
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Emit every projected lattice segment, depth-running lines first,
    /// then cross lines. Segments with a culled endpoint are skipped.
    pub fn for_each_segment(
        &self,
        pointer_amp: f32,
        viewport: Vec2,
        mut emit: impl FnMut(Vec2, Vec2),
    ) {
        let t = self.time;
        let n = MESH_GRID_SIZE;
        let scroll = scroll_offset(t);

        for i in 0..=n {
            let x = (i as f32 / n as f32) * MESH_WIDTH - MESH_WIDTH * 0.5;
            for j in 0..n {
                let z1 = (j as f32 / n as f32) * MESH_DEPTH - MESH_DEPTH * 0.5 + scroll;
                let z2 = ((j + 1) as f32 / n as f32) * MESH_DEPTH - MESH_DEPTH * 0.5 + scroll;
                let a = project(
                    Vec3::new(x, height_at(x, z1, t, pointer_amp), z1 + MESH_VIEW_DISTANCE),
                    viewport,
                );
                let b = project(
                    Vec3::new(x, height_at(x, z2, t, pointer_amp), z2 + MESH_VIEW_DISTANCE),
                    viewport,
                );
                if let (Some(a), Some(b)) = (a, b) {
                    emit(a, b);
                }
            }
        }

        for j in 0..=n {
            let z = (j as f32 / n as f32) * MESH_DEPTH - MESH_DEPTH * 0.5 + scroll;
            for i in 0..n {
                let x1 = (i as f32 / n as f32) * MESH_WIDTH - MESH_WIDTH * 0.5;
                let x2 = ((i + 1) as f32 / n as f32) * MESH_WIDTH - MESH_WIDTH * 0.5;
                let a = project(
                    Vec3::new(x1, height_at(x1, z, t, pointer_amp), z + MESH_VIEW_DISTANCE),
                    viewport,
                );
                let b = project(
                    Vec3::new(x2, height_at(x2, z, t, pointer_amp), z + MESH_VIEW_DISTANCE),
                    viewport,
                );
                if let (Some(a), Some(b)) = (a, b) {
                    emit(a, b);
                }
            }
        }
    }
}
