//! Pointer position and click-triggered ripples.
//!
//! The pointer is written by exactly one producer (the platform's move
//! handler) and read by every simulation consumer. Ripples expand and fade
//! by fixed per-tick steps, so their lifetime is tick-counted rather than
//! wall-clock timed.

use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

/// Current pointer position in viewport pixels.
///
/// Defaults to a far off-screen sentinel so an idle pointer exerts no force.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: Vec2::splat(POINTER_OFFSCREEN),
        }
    }
}

impl PointerState {
    pub fn set(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    pub fn is_idle(&self) -> bool {
        self.pos.x <= POINTER_OFFSCREEN && self.pos.y <= POINTER_OFFSCREEN
    }
}

/// One expanding, fading circular disturbance.
#[derive(Clone, Copy, Debug)]
pub struct Ripple {
    pub origin: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub strength: f32,
}

impl Ripple {
    fn advance(&mut self) {
        self.radius += RIPPLE_SPEED;
        self.opacity -= RIPPLE_DECAY;
    }

    /// Radial displacement this ripple applies at `p`.
    ///
    /// A Gaussian profile peaked at the current wavefront, scaled by the
    /// remaining opacity; zero outside the band.
    pub fn displacement_at(&self, p: Vec2) -> Vec2 {
        let delta = p - self.origin;
        let dist = delta.length();
        if (dist - self.radius).abs() >= RIPPLE_BAND_WIDTH || dist <= f32::EPSILON {
            return Vec2::ZERO;
        }
        let diff = (dist - self.radius) / RIPPLE_BAND_WIDTH;
        let force = (-(diff * diff) * RIPPLE_GAUSS_SHARPNESS).exp() * self.opacity.max(0.0);
        (delta / dist) * force * self.strength
    }
}

/// Ordered collection of live ripples.
///
/// Ripples are appended on click and removed once their opacity crosses
/// zero; displacement fields of coexisting ripples superpose additively.
#[derive(Default)]
pub struct RippleField {
    ripples: SmallVec<[Ripple; 8]>,
}

impl RippleField {
    /// Append a fresh ripple centered at `origin`.
    pub fn spawn(&mut self, origin: Vec2) {
        self.ripples.push(Ripple {
            origin,
            radius: 0.0,
            opacity: 1.0,
            strength: RIPPLE_STRENGTH,
        });
        log::debug!(
            "[ripple] spawn at ({:.0},{:.0}), {} live",
            origin.x,
            origin.y,
            self.ripples.len()
        );
    }

    /// Advance every ripple one tick, then discard the fully faded ones.
    pub fn tick(&mut self) {
        for r in self.ripples.iter_mut() {
            r.advance();
        }
        self.ripples.retain(|r| r.opacity > 0.0);
    }

    pub fn live(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    /// Sum of all live ripple displacements at `p`.
    pub fn displacement_at(&self, p: Vec2) -> Vec2 {
        self.ripples
            .iter()
            .fold(Vec2::ZERO, |acc, r| acc + r.displacement_at(p))
    }
}
