use fx_core::constants::{
    MESH_DEPTH, MESH_FOV, MESH_GRID_SIZE, MESH_HEIGHT_OFFSET, MESH_POINTER_AMP_GAIN,
    MESH_TIME_RATE,
};
use fx_core::mesh::{height_at, pointer_amplitude, project, scroll_offset, WaveMesh};
use glam::{Vec2, Vec3};

#[test]
fn pointer_amplitude_is_clamped_and_scaled() {
    assert_eq!(pointer_amplitude(0.0), 0.0);
    assert_eq!(pointer_amplitude(0.5), 0.5 * MESH_POINTER_AMP_GAIN);
    assert_eq!(pointer_amplitude(-0.5), 0.5 * MESH_POINTER_AMP_GAIN);
    // Off-screen sentinel values never blow the amplitude up
    assert_eq!(pointer_amplitude(-50.0), MESH_POINTER_AMP_GAIN);
}

#[test]
fn surface_height_stays_inside_its_component_bounds() {
    // Four fixed components of 20 + 15 + 10 + 15, plus 20 per unit of
    // pointer amplitude, all around the height offset.
    for &amp in &[0.0_f32, MESH_POINTER_AMP_GAIN] {
        let bound = 60.0 + 20.0 * amp + 1e-3;
        for i in 0..200 {
            let x = (i as f32 - 100.0) * 17.0;
            let z = (i as f32 - 100.0) * 11.0;
            let y = height_at(x, z, i as f32 * 0.31, amp);
            assert!((y - MESH_HEIGHT_OFFSET).abs() <= bound, "height {y} at {i}");
        }
    }
}

#[test]
fn pointer_amplitude_modulates_the_surface() {
    let calm = height_at(10.0, 0.0, 1.0, 0.0);
    let driven = height_at(10.0, 0.0, 1.0, MESH_POINTER_AMP_GAIN);
    assert_ne!(calm, driven);
}

#[test]
fn scroll_offset_wraps_within_one_cell() {
    let cell = MESH_DEPTH / MESH_GRID_SIZE as f32;
    assert_eq!(scroll_offset(0.0), 0.0);
    let mut time = 0.0;
    for _ in 0..10_000 {
        time += MESH_TIME_RATE;
        let off = scroll_offset(time);
        assert!((0.0..cell).contains(&off), "offset {off} at time {time}");
    }
}

#[test]
fn projection_is_identity_scale_at_the_plane() {
    let viewport = Vec2::new(800.0, 600.0);
    let p = project(Vec3::new(100.0, 50.0, 0.0), viewport).unwrap();
    assert_eq!(p, Vec2::new(500.0, 350.0));
}

#[test]
fn points_behind_the_projection_plane_are_culled() {
    let viewport = Vec2::new(800.0, 600.0);
    assert!(project(Vec3::new(0.0, 0.0, -MESH_FOV), viewport).is_none());
    assert!(project(Vec3::new(0.0, 0.0, -MESH_FOV - 50.0), viewport).is_none());
}

#[test]
fn mesh_emits_a_bounded_finite_segment_set() {
    let mut mesh = WaveMesh::default();
    for _ in 0..7 {
        mesh.tick();
    }
    let viewport = Vec2::new(1280.0, 720.0);
    let max = 2 * (MESH_GRID_SIZE + 1) * MESH_GRID_SIZE;
    let mut count = 0usize;
    mesh.for_each_segment(0.5, viewport, |a, b| {
        count += 1;
        assert!(a.is_finite() && b.is_finite());
    });
    assert!(count > 0);
    assert!(count <= max);
}

#[test]
fn tick_advances_time_by_a_fixed_step() {
    let mut mesh = WaveMesh::default();
    assert_eq!(mesh.time(), 0.0);
    mesh.tick();
    mesh.tick();
    assert_eq!(mesh.time(), 2.0 * MESH_TIME_RATE);
}
