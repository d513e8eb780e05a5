//! Particle fields: a planar wave lattice and a radial spectrum lattice.
//!
//! Every position is a closed-form function of the particle's fixed lattice
//! coordinate and the elapsed time. Nothing is integrated frame to frame,
//! so identical inputs always reproduce the identical field shape,
//! independent of frame-rate history.

use crate::constants::*;
use glam::Vec3;

/// Which particle field a tracked frame is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Wave,
    Radial,
}

impl FieldKind {
    pub fn particle_count(self) -> usize {
        match self {
            FieldKind::Wave => WAVE_ROWS * WAVE_SAMPLES_PER_ROW,
            FieldKind::Radial => RADIAL_RINGS * RADIAL_SAMPLES_PER_RING,
        }
    }
}

/// Combined population of both fields, the domain of frame reassignment.
pub fn total_particle_count() -> usize {
    FieldKind::Wave.particle_count() + FieldKind::Radial.particle_count()
}

/// Position of one wave-field particle at `time` seconds.
pub fn wave_position(index: usize, time: f32) -> Vec3 {
    let row = index / WAVE_SAMPLES_PER_ROW;
    let sample = index % WAVE_SAMPLES_PER_ROW;

    let x = (sample as f32 / WAVE_SAMPLES_PER_ROW as f32) * WAVE_WIDTH - WAVE_WIDTH * 0.5;
    let z = (row as f32 / WAVE_ROWS as f32) * WAVE_DEPTH + WAVE_Z_OFFSET;

    let phase = row as f32 * 0.3 + time * 1.5;
    let wave1 = (x * 0.5 + phase).sin() * 1.2;
    let wave2 = (x * 0.3 + phase * 1.3).sin() * 0.8;
    let ripple = (x * 0.8 + row as f32 * 0.5 + time * 2.0).sin() * 0.5;

    Vec3::new(x, wave1 + wave2 + ripple + WAVE_Y_OFFSET, z)
}

/// Position of one radial-field particle at `time` seconds.
///
/// Several frequency components plus a sharp spike term produce the
/// spectrum-bar look; the radial spike pushes particles outward and the
/// same amplitude lifts them vertically.
pub fn radial_position(index: usize, time: f32) -> Vec3 {
    let ring = index / RADIAL_SAMPLES_PER_RING;
    let sample = index % RADIAL_SAMPLES_PER_RING;

    let angle = (sample as f32 / RADIAL_SAMPLES_PER_RING as f32) * std::f32::consts::TAU;
    let base_radius = (ring as f32 / RADIAL_RINGS as f32) * RADIAL_SPAN + RADIAL_INNER_RADIUS;

    let freq1 = (angle * 8.0 + time * 3.0).sin() * 0.5 + 0.5;
    let freq2 = (angle * 12.0 + time * 2.5).sin() * 0.5 + 0.5;
    let freq3 = (angle * 6.0 + time * 4.0).cos() * 0.5 + 0.5;
    let spike = (angle * 16.0 + time * 2.3).sin().powi(6);
    let pulse = (ring as f32 * 0.3 + time * 1.8).sin() * 0.5 + 0.5;

    let amplitude = (freq1 * 0.3 + freq2 * 0.3 + freq3 * 0.2 + spike * 0.6) * pulse;

    let radius = base_radius + amplitude * 4.0;
    let y = amplitude * 1.5 + RADIAL_Y_OFFSET;

    Vec3::new(
        angle.cos() * radius,
        y,
        angle.sin() * radius + RADIAL_Z_OFFSET,
    )
}

/// Position of particle `index` of `kind` at `time` seconds.
pub fn position(kind: FieldKind, index: usize, time: f32) -> Vec3 {
    match kind {
        FieldKind::Wave => wave_position(index, time),
        FieldKind::Radial => radial_position(index, time),
    }
}

/// Bulk recompute of a whole field into `out` (renderer path).
///
/// `out` must hold exactly `kind.particle_count()` entries.
pub fn write_positions(kind: FieldKind, time: f32, out: &mut [Vec3]) {
    debug_assert_eq!(out.len(), kind.particle_count());
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = position(kind, i, time);
    }
}
