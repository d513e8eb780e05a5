//! Force grid: a viewport-sized lattice warped by the pointer and ripples.
//!
//! Each tick a target displacement is computed per point from the pointer
//! lens force, the superposed ripple wavefronts, and (while focus mode is
//! off) a sinusoidal hint jitter near the title. Rendered positions ease
//! toward the target exponentially and are never snapped.

use crate::constants::*;
use crate::mode::TitleRect;
use crate::pointer::{PointerState, Ripple};
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct GridPoint {
    /// Fixed lattice position, set at build/rebuild time.
    pub base: Vec2,
    /// Eased rendered position.
    pub pos: Vec2,
}

/// One connecting line between adjacent lattice points.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub opacity: f32,
}

/// Per-tick inputs, read-only snapshots of the shared state.
pub struct GridInput<'a> {
    pub pointer: &'a PointerState,
    pub ripples: &'a [Ripple],
    pub title_rect: Option<TitleRect>,
    pub focus_active: bool,
    /// Elapsed time in seconds, drives the hint jitter only.
    pub time: f32,
}

pub struct ForceGrid {
    points: Vec<GridPoint>,
    cols: usize,
    rows: usize,
}

impl ForceGrid {
    pub fn new(width: f32, height: f32) -> Self {
        let mut grid = Self {
            points: Vec::new(),
            cols: 0,
            rows: 0,
        };
        grid.rebuild(width, height);
        grid
    }

    /// Recompute the base lattice for a new viewport size.
    ///
    /// All eased positions are reset; between rebuilds the point count is
    /// fixed.
    pub fn rebuild(&mut self, width: f32, height: f32) {
        self.cols = (width / GRID_SPACING).ceil() as usize + GRID_MARGIN;
        self.rows = (height / GRID_SPACING).ceil() as usize + GRID_MARGIN;
        self.points.clear();
        self.points.reserve(self.cols * self.rows);
        for i in 0..self.cols {
            for j in 0..self.rows {
                let base = Vec2::new(i as f32 * GRID_SPACING, j as f32 * GRID_SPACING);
                self.points.push(GridPoint { base, pos: base });
            }
        }
        log::debug!("[grid] rebuilt {}x{}", self.cols, self.rows);
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    #[inline]
    fn point(&self, col: usize, row: usize) -> &GridPoint {
        &self.points[col * self.rows + row]
    }

    /// Target position for one point under the current inputs.
    pub fn target_for(base: Vec2, input: &GridInput) -> Vec2 {
        let mut target = base;

        // Pointer lens: squared falloff inside the influence radius, points
        // pushed away from the cursor for a slight bulge.
        if !input.pointer.is_idle() {
            let delta = input.pointer.pos - base;
            let dist = delta.length();
            if dist < POINTER_RADIUS && dist > f32::EPSILON {
                let falloff = (POINTER_RADIUS - dist) / POINTER_RADIUS;
                let force = falloff * falloff;
                let displacement = force * POINTER_MAX_DISPLACEMENT * POINTER_STRENGTH;
                target -= (delta / dist) * displacement;
            }
        }

        // Ripple wavefronts superpose additively.
        for ripple in input.ripples {
            target += ripple.displacement_at(base);
        }

        // Hint jitter near the title, only while focus mode is off and the
        // rectangle has been measured; absent inputs disable the effect.
        if !input.focus_active {
            if let Some(rect) = input.title_rect {
                let center = rect.center();
                let pointer_dist = (input.pointer.pos - center).length();
                if !input.pointer.is_idle() && pointer_dist < HINT_POINTER_RANGE {
                    let proximity = 1.0 - pointer_dist / HINT_POINTER_RANGE;
                    let point_dist = (base - center).length();
                    if point_dist < HINT_POINT_RANGE {
                        let point_force = (HINT_POINT_RANGE - point_dist) / HINT_POINT_RANGE;
                        let distortion = (point_dist * HINT_JITTER_SPATIAL_FREQ
                            - input.time * HINT_JITTER_TIME_FREQ)
                            .sin()
                            * HINT_JITTER_AMPLITUDE
                            * proximity
                            * point_force;
                        target += Vec2::splat(distortion);
                    }
                }
            }
        }

        target
    }

    /// Advance every point one tick toward its target.
    pub fn step(&mut self, input: &GridInput) {
        for p in self.points.iter_mut() {
            let target = Self::target_for(p.base, input);
            p.pos += (target - p.pos) * GRID_EASING;
        }
    }

    /// Emit every horizontal and vertical neighbor segment with its opacity.
    ///
    /// Opacity is the base value plus a darkening term around the cursor
    /// that only activates while the pointer approaches the title with
    /// focus mode off.
    pub fn for_each_segment(
        &self,
        pointer: &PointerState,
        title_rect: Option<TitleRect>,
        focus_active: bool,
        mut emit: impl FnMut(Segment),
    ) {
        let darken = darkening_strength(pointer, title_rect, focus_active);

        let opacity_for = |a: Vec2, b: Vec2| -> f32 {
            let mut opacity = SEGMENT_BASE_OPACITY;
            if darken > 0.0 {
                let mid = (a + b) * 0.5;
                let dist = (mid - pointer.pos).length();
                if dist < DARKEN_RADIUS {
                    let local = (1.0 - dist / DARKEN_RADIUS).powf(DARKEN_FALLOFF_EXP);
                    opacity += local * darken * DARKEN_SPAN;
                }
            }
            opacity
        };

        // Horizontal neighbors
        for j in 0..self.rows {
            for i in 1..self.cols {
                let p1 = self.point(i - 1, j);
                let p2 = self.point(i, j);
                emit(Segment {
                    a: p1.pos,
                    b: p2.pos,
                    opacity: opacity_for(p1.pos, p2.pos),
                });
            }
        }
        // Vertical neighbors
        for i in 0..self.cols {
            for j in 1..self.rows {
                let p1 = self.point(i, j - 1);
                let p2 = self.point(i, j);
                emit(Segment {
                    a: p1.pos,
                    b: p2.pos,
                    opacity: opacity_for(p1.pos, p2.pos),
                });
            }
        }
    }
}

/// Ease-out strength of the darkening effect, 0 when inactive.
fn darkening_strength(
    pointer: &PointerState,
    title_rect: Option<TitleRect>,
    focus_active: bool,
) -> f32 {
    if focus_active || pointer.is_idle() {
        return 0.0;
    }
    let Some(rect) = title_rect else {
        return 0.0;
    };
    let dist = (pointer.pos - rect.center()).length();
    if dist >= DARKEN_ACTIVATION_RANGE {
        return 0.0;
    }
    let normalized = dist / DARKEN_ACTIVATION_RANGE;
    1.0 - normalized.powi(3)
}
