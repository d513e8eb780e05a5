//! Tracked frames: overlay markers that follow randomly chosen particles.
//!
//! Each frame holds a `(field, index)` assignment and eases toward the live
//! position of that particle. Assignments re-roll on a fixed cadence of
//! simulated time and whenever the reassign signal fires; connection pairs
//! between frames rebuild on their own, shorter cadence.

use crate::camera::Camera;
use crate::constants::*;
use crate::field::{self, FieldKind};
use crate::mode::ReassignSignal;
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct TrackedFrame {
    pub kind: FieldKind,
    pub index: usize,
    /// Eased rendered position.
    pub pos: Vec3,
    /// Derived readout, clamped to [AMP_MIN, AMP_MAX].
    pub amplitude: f32,
    /// Phase offset of the oscillating scale, fixed per frame.
    phase: f32,
    initialized: bool,
}

pub struct FrameTracker {
    frames: Vec<TrackedFrame>,
    /// One partner per frame, rebuilt every CONNECTION_INTERVAL_SEC.
    connections: Vec<(usize, usize)>,
    rng: StdRng,
    reassign_accum: f32,
    connection_accum: f32,
    signal_seen: u64,
    last_time: f32,
}

impl FrameTracker {
    /// Build `count` frames with random initial assignments.
    ///
    /// `count` must be at least 2 so every frame has a distinct partner.
    pub fn new(count: usize, seed: u64) -> Self {
        assert!(count >= 2, "frame tracker needs at least two frames");
        let mut rng = StdRng::seed_from_u64(seed);
        let frames = (0..count)
            .map(|i| {
                let (kind, index) = roll_assignment(&mut rng);
                TrackedFrame {
                    kind,
                    index,
                    pos: Vec3::ZERO,
                    amplitude: AMP_MIN,
                    phase: i as f32 * 0.7,
                    initialized: false,
                }
            })
            .collect();
        let mut tracker = Self {
            frames,
            connections: Vec::with_capacity(count),
            rng,
            reassign_accum: 0.0,
            connection_accum: 0.0,
            signal_seen: 0,
            last_time: 0.0,
        };
        tracker.rebuild_connections();
        tracker
    }

    pub fn frames(&self) -> &[TrackedFrame] {
        &self.frames
    }

    pub fn connections(&self) -> &[(usize, usize)] {
        &self.connections
    }

    /// Re-roll every frame's assignment independently and uniformly over
    /// the combined particle population.
    pub fn reassign_all(&mut self) {
        for frame in self.frames.iter_mut() {
            let (kind, index) = roll_assignment(&mut self.rng);
            frame.kind = kind;
            frame.index = index;
        }
        log::debug!("[frames] reassigned {} frames", self.frames.len());
    }

    fn rebuild_connections(&mut self) {
        let count = self.frames.len();
        self.connections.clear();
        for i in 0..count {
            // Distinct partner; never self-paired.
            let partner = loop {
                let j = self.rng.gen_range(0..count);
                if j != i {
                    break j;
                }
            };
            self.connections.push((i, partner));
        }
    }

    /// Advance to `time` seconds of simulated time.
    ///
    /// Handles reassignment cadence, the external trigger, connection
    /// cadence, position easing, and the derived amplitude.
    pub fn tick(&mut self, time: f32, signal: &ReassignSignal) {
        let dt = (time - self.last_time).max(0.0);
        self.last_time = time;
        self.reassign_accum += dt;
        self.connection_accum += dt;

        let triggered = signal.observe(&mut self.signal_seen);
        if triggered || self.reassign_accum >= REASSIGN_INTERVAL_SEC {
            self.reassign_all();
            self.reassign_accum = 0.0;
        }
        if self.connection_accum >= CONNECTION_INTERVAL_SEC {
            self.rebuild_connections();
            self.connection_accum = 0.0;
        }

        for frame in self.frames.iter_mut() {
            let target = field::position(frame.kind, frame.index, time);
            if frame.initialized {
                frame.pos += (target - frame.pos) * FRAME_EASING;
            } else {
                frame.pos = target;
                frame.initialized = true;
            }
            let scale = 1.0 + 0.5 * (time * FRAME_SCALE_RATE + frame.phase).sin();
            frame.amplitude =
                (AMP_MIN + target.y.abs() * AMP_GAIN * scale).clamp(AMP_MIN, AMP_MAX);
        }
    }

    /// Endpoint pairs whose frames both lie inside the camera frustum.
    ///
    /// Pure rendering culling; the pairing itself is unaffected.
    pub fn visible_connections(&self, camera: &Camera) -> Vec<(Vec3, Vec3)> {
        self.connections
            .iter()
            .filter_map(|&(a, b)| {
                let pa = self.frames[a].pos;
                let pb = self.frames[b].pos;
                (camera.contains(pa) && camera.contains(pb)).then_some((pa, pb))
            })
            .collect()
    }
}

fn roll_assignment(rng: &mut StdRng) -> (FieldKind, usize) {
    let wave_count = FieldKind::Wave.particle_count();
    let n = rng.gen_range(0..field::total_particle_count());
    if n < wave_count {
        (FieldKind::Wave, n)
    } else {
        (FieldKind::Radial, n - wave_count)
    }
}
