use fx_core::constants::{
    GRID_MARGIN, GRID_SPACING, POINTER_RADIUS, SEGMENT_BASE_OPACITY,
};
use fx_core::{ForceGrid, GridInput, PointerState, RippleField, TitleRect};
use glam::Vec2;

fn idle_input<'a>(pointer: &'a PointerState) -> GridInput<'a> {
    GridInput {
        pointer,
        ripples: &[],
        title_rect: None,
        focus_active: false,
        time: 0.0,
    }
}

#[test]
fn lattice_is_sized_from_the_viewport() {
    let grid = ForceGrid::new(800.0, 600.0);
    let expect_cols = (800.0_f32 / GRID_SPACING).ceil() as usize + GRID_MARGIN;
    let expect_rows = (600.0_f32 / GRID_SPACING).ceil() as usize + GRID_MARGIN;
    assert_eq!(grid.cols(), expect_cols);
    assert_eq!(grid.rows(), expect_rows);
    assert_eq!(grid.points().len(), expect_cols * expect_rows);
}

#[test]
fn point_count_is_fixed_between_rebuilds() {
    let mut grid = ForceGrid::new(640.0, 480.0);
    let count = grid.points().len();

    let pointer = PointerState {
        pos: Vec2::new(320.0, 240.0),
    };
    for _ in 0..30 {
        grid.step(&idle_input(&pointer));
    }
    assert_eq!(grid.points().len(), count);

    grid.rebuild(1280.0, 960.0);
    assert_ne!(grid.points().len(), count);
}

#[test]
fn pointer_out_of_range_leaves_all_targets_at_base() {
    let grid = ForceGrid::new(400.0, 400.0);
    // Far away but not the idle sentinel
    let pointer = PointerState {
        pos: Vec2::new(10_000.0, 10_000.0),
    };
    let input = idle_input(&pointer);
    for p in grid.points() {
        assert_eq!(ForceGrid::target_for(p.base, &input), p.base);
    }
}

#[test]
fn pointer_in_range_pushes_points_away() {
    let pointer = PointerState {
        pos: Vec2::new(200.0, 200.0),
    };
    let input = idle_input(&pointer);
    let base = Vec2::new(160.0, 200.0); // left of the cursor, well in range
    assert!((base - pointer.pos).length() < POINTER_RADIUS);

    let target = ForceGrid::target_for(base, &input);
    // Pushed further left, no vertical component
    assert!(target.x < base.x);
    assert_eq!(target.y, base.y);
}

#[test]
fn displaced_points_converge_monotonically_to_a_stationary_target() {
    let mut grid = ForceGrid::new(400.0, 400.0);
    let pointer = PointerState {
        pos: Vec2::new(200.0, 200.0),
    };

    // Warp the lattice first, then hold the pointer still and watch every
    // point's distance to its fixed target shrink strictly each tick.
    for _ in 0..3 {
        grid.step(&idle_input(&pointer));
    }
    let input = idle_input(&pointer);
    let targets: Vec<Vec2> = grid
        .points()
        .iter()
        .map(|p| ForceGrid::target_for(p.base, &input))
        .collect();

    let mut prev: Vec<f32> = grid
        .points()
        .iter()
        .zip(&targets)
        .map(|(p, t)| (p.pos - *t).length())
        .collect();
    for _ in 0..20 {
        grid.step(&input);
        for ((p, t), prev_d) in grid.points().iter().zip(&targets).zip(prev.iter_mut()) {
            let d = (p.pos - *t).length();
            if *prev_d > 1e-3 {
                assert!(d < *prev_d, "distance did not shrink: {d} >= {prev_d}");
            }
            *prev_d = d;
        }
    }
}

#[test]
fn idle_pointer_relaxes_the_grid_back_to_base() {
    let mut grid = ForceGrid::new(400.0, 400.0);
    let pointer = PointerState {
        pos: Vec2::new(200.0, 200.0),
    };
    for _ in 0..10 {
        grid.step(&idle_input(&pointer));
    }
    assert!(grid
        .points()
        .iter()
        .any(|p| (p.pos - p.base).length() > 0.5));

    let idle = PointerState::default();
    for _ in 0..200 {
        grid.step(&idle_input(&idle));
    }
    for p in grid.points() {
        assert!((p.pos - p.base).length() < 1e-2);
    }
}

#[test]
fn ripple_wavefront_displaces_points_radially() {
    let mut ripples = RippleField::default();
    ripples.spawn(Vec2::new(100.0, 100.0));
    for _ in 0..10 {
        ripples.tick(); // radius 80
    }

    let pointer = PointerState::default();
    let input = GridInput {
        pointer: &pointer,
        ripples: ripples.live(),
        title_rect: None,
        focus_active: false,
        time: 0.0,
    };
    let on_front = Vec2::new(180.0, 100.0);
    let target = ForceGrid::target_for(on_front, &input);
    assert!(target.x > on_front.x, "expected outward radial push");
}

#[test]
fn segment_count_matches_the_lattice() {
    let grid = ForceGrid::new(400.0, 300.0);
    let pointer = PointerState::default();
    let mut count = 0usize;
    grid.for_each_segment(&pointer, None, false, |_| count += 1);
    let (c, r) = (grid.cols(), grid.rows());
    assert_eq!(count, r * (c - 1) + c * (r - 1));
}

#[test]
fn segments_darken_near_the_cursor_only_with_a_measured_title() {
    let grid = ForceGrid::new(400.0, 400.0);
    let title = TitleRect {
        left: 150.0,
        top: 150.0,
        width: 100.0,
        height: 40.0,
    };
    let pointer = PointerState {
        pos: title.center(),
    };

    // Without the rectangle every segment stays at the base opacity.
    let mut max_opacity = 0.0_f32;
    grid.for_each_segment(&pointer, None, false, |s| {
        max_opacity = max_opacity.max(s.opacity)
    });
    assert!((max_opacity - SEGMENT_BASE_OPACITY).abs() < 1e-6);

    // With it, segments near the cursor brighten.
    let mut max_opacity = 0.0_f32;
    grid.for_each_segment(&pointer, Some(title), false, |s| {
        max_opacity = max_opacity.max(s.opacity)
    });
    assert!(max_opacity > SEGMENT_BASE_OPACITY + 0.1);

    // Focus mode suppresses the darkening entirely.
    let mut max_opacity = 0.0_f32;
    grid.for_each_segment(&pointer, Some(title), true, |s| {
        max_opacity = max_opacity.max(s.opacity)
    });
    assert!((max_opacity - SEGMENT_BASE_OPACITY).abs() < 1e-6);
}

#[test]
fn hint_jitter_needs_title_pointer_proximity_and_focus_off() {
    let title = TitleRect {
        left: 180.0,
        top: 180.0,
        width: 40.0,
        height: 40.0,
    };
    // Pointer and point on opposite sides of the title: both are in hint
    // range of the center, but the point is outside the pointer lens, so
    // any displacement comes from the jitter alone.
    let near_title = PointerState {
        pos: title.center() + Vec2::new(280.0, 0.0),
    };
    let base = title.center() - Vec2::new(150.0, 0.0);
    let time = 0.37; // arbitrary phase where the sine is nonzero

    let with_hint = GridInput {
        pointer: &near_title,
        ripples: &[],
        title_rect: Some(title),
        focus_active: false,
        time,
    };
    assert!((near_title.pos - base).length() > POINTER_RADIUS);
    let jittered = ForceGrid::target_for(base, &with_hint);
    assert_ne!(jittered, base);

    let focused = GridInput {
        focus_active: true,
        ..with_hint
    };
    assert_eq!(ForceGrid::target_for(base, &focused), base);
}
