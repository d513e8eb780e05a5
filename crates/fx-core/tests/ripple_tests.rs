use fx_core::constants::{RIPPLE_BAND_WIDTH, RIPPLE_DECAY, RIPPLE_SPEED};
use fx_core::{Ripple, RippleField};
use glam::Vec2;

#[test]
fn click_spawns_ripple_at_origin() {
    let mut field = RippleField::default();
    assert!(field.is_empty());

    field.spawn(Vec2::new(100.0, 100.0));

    assert_eq!(field.len(), 1);
    let r = field.live()[0];
    assert_eq!(r.origin, Vec2::new(100.0, 100.0));
    assert_eq!(r.radius, 0.0);
    assert_eq!(r.opacity, 1.0);
}

#[test]
fn ripple_advances_by_fixed_steps() {
    let mut field = RippleField::default();
    field.spawn(Vec2::new(100.0, 100.0));

    let n = 10;
    for _ in 0..n {
        field.tick();
    }

    let r = field.live()[0];
    assert_eq!(r.radius, n as f32 * RIPPLE_SPEED);
    assert!((r.opacity - (1.0 - n as f32 * RIPPLE_DECAY)).abs() < 1e-4);
}

#[test]
fn ripple_radius_and_opacity_are_monotonic_until_removal() {
    let mut field = RippleField::default();
    field.spawn(Vec2::ZERO);

    let mut prev_radius = 0.0_f32;
    let mut prev_opacity = 1.0_f32;
    while !field.is_empty() {
        field.tick();
        if let Some(r) = field.live().first() {
            assert!(r.radius > prev_radius);
            assert!(r.opacity < prev_opacity);
            prev_radius = r.radius;
            prev_opacity = r.opacity;
        }
    }
}

#[test]
fn ripple_is_removed_once_opacity_reaches_zero() {
    let mut field = RippleField::default();
    field.spawn(Vec2::ZERO);

    // Opacity fades by a fixed step per tick, so the lifetime is bounded.
    let max_ticks = (1.0 / RIPPLE_DECAY).ceil() as usize + 1;
    let mut removed_at = None;
    for tick in 1..=max_ticks {
        field.tick();
        if field.is_empty() {
            removed_at = Some(tick);
            break;
        }
        assert!(field.live()[0].opacity > 0.0);
    }
    assert!(removed_at.is_some(), "ripple never removed");
}

#[test]
fn coexisting_ripples_superpose_additively() {
    let mut field = RippleField::default();
    field.spawn(Vec2::new(-50.0, 0.0));
    field.spawn(Vec2::new(80.0, 10.0));
    for _ in 0..10 {
        field.tick();
    }

    // Pick a point on the first ripple's wavefront so both terms matter.
    let p = Vec2::new(-50.0 + field.live()[0].radius, 5.0);
    let expected: Vec2 = field
        .live()
        .iter()
        .map(|r| r.displacement_at(p))
        .sum();
    assert_eq!(field.displacement_at(p), expected);
    assert_ne!(field.displacement_at(p), Vec2::ZERO);
}

#[test]
fn displacement_is_zero_outside_the_wavefront_band() {
    let r = Ripple {
        origin: Vec2::ZERO,
        radius: 200.0,
        opacity: 1.0,
        strength: 50.0,
    };
    // Well inside the ring and well outside it
    let inner = Vec2::new(200.0 - RIPPLE_BAND_WIDTH - 10.0, 0.0);
    let outer = Vec2::new(200.0 + RIPPLE_BAND_WIDTH + 10.0, 0.0);
    assert_eq!(r.displacement_at(inner), Vec2::ZERO);
    assert_eq!(r.displacement_at(outer), Vec2::ZERO);

    // On the wavefront itself the push is radial and outward
    let on_front = Vec2::new(200.0, 0.0);
    let d = r.displacement_at(on_front);
    assert!(d.x > 0.0);
    assert_eq!(d.y, 0.0);
}
