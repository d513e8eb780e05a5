use fx_core::constants::{
    RADIAL_INNER_RADIUS, RADIAL_RINGS, RADIAL_SAMPLES_PER_RING, RADIAL_SPAN, RADIAL_Y_OFFSET,
    RADIAL_Z_OFFSET, WAVE_ROWS, WAVE_SAMPLES_PER_ROW, WAVE_WIDTH,
};
use fx_core::field::{position, total_particle_count, wave_position, write_positions};
use fx_core::FieldKind;
use glam::{Vec2, Vec3};

#[test]
fn population_covers_both_fields() {
    assert_eq!(
        FieldKind::Wave.particle_count(),
        WAVE_ROWS * WAVE_SAMPLES_PER_ROW
    );
    assert_eq!(
        FieldKind::Radial.particle_count(),
        RADIAL_RINGS * RADIAL_SAMPLES_PER_RING
    );
    assert_eq!(
        total_particle_count(),
        FieldKind::Wave.particle_count() + FieldKind::Radial.particle_count()
    );
}

#[test]
fn positions_are_bit_for_bit_deterministic() {
    // Closed-form fields: the same (kind, index, time) must reproduce the
    // exact same position regardless of call history.
    for kind in [FieldKind::Wave, FieldKind::Radial] {
        for &time in &[0.0_f32, 0.75, 13.37, 1234.5] {
            for index in (0..kind.particle_count()).step_by(997) {
                let a = position(kind, index, time);
                let _ = position(kind, index, time + 5.0);
                let b = position(kind, index, time);
                assert_eq!(a.to_array(), b.to_array());
            }
        }
    }
}

#[test]
fn bulk_write_matches_per_particle_positions() {
    let kind = FieldKind::Wave;
    let mut out = vec![Vec3::ZERO; kind.particle_count()];
    write_positions(kind, 2.5, &mut out);
    for (i, &p) in out.iter().enumerate().step_by(313) {
        assert_eq!(p.to_array(), position(kind, i, 2.5).to_array());
    }
}

#[test]
fn wave_particles_oscillate_vertically_only() {
    // The lattice coordinate fixes x and z; time moves y alone.
    for index in (0..FieldKind::Wave.particle_count()).step_by(641) {
        let p0 = wave_position(index, 0.0);
        let p1 = wave_position(index, 3.2);
        assert_eq!(p0.x, p1.x);
        assert_eq!(p0.z, p1.z);
        assert!(p0.x.abs() <= WAVE_WIDTH * 0.5 + 1e-3);
    }
    // Some particle actually moves, so the field is not frozen.
    assert!((0..FieldKind::Wave.particle_count())
        .any(|i| wave_position(i, 0.0).y != wave_position(i, 3.2).y));
}

#[test]
fn radial_particles_stay_inside_the_spectrum_annulus() {
    // amplitude is a sum of bounded terms times a bounded pulse, so the
    // radial reach and the vertical lift are both bounded.
    let max_amplitude = 0.3 + 0.3 + 0.2 + 0.6;
    let max_radius = RADIAL_INNER_RADIUS + RADIAL_SPAN + max_amplitude * 4.0;
    for &time in &[0.0_f32, 1.1, 47.0] {
        for index in (0..FieldKind::Radial.particle_count()).step_by(457) {
            let p = position(FieldKind::Radial, index, time);
            let radius = Vec2::new(p.x, p.z - RADIAL_Z_OFFSET).length();
            assert!(radius >= RADIAL_INNER_RADIUS - 1e-3);
            assert!(radius <= max_radius + 1e-3);
            assert!(p.y >= RADIAL_Y_OFFSET - 1e-3);
            assert!(p.y <= RADIAL_Y_OFFSET + max_amplitude * 1.5 + 1e-3);
        }
    }
}
