// Host-side tests for the morphing particle field.

use glam::{Vec2, Vec3};
use site_fx::core::particles::{drift_offset, repulsion_offset, ParticleField, ParticleFieldConfig};
use site_fx::core::shapes::ShapeId;

fn field(count: usize) -> ParticleField {
    ParticleField::with_config(
        ParticleFieldConfig {
            count,
            ..Default::default()
        },
        ShapeId::Bracket,
    )
}

#[test]
fn initialize_starts_on_initial_shape() {
    let f = ParticleField::initialize(120, ShapeId::Star);
    assert_eq!(f.len(), 120);
    assert_eq!(f.colors().len(), 120);
    assert_eq!(f.sizes().len(), 120);
    assert_eq!(f.source_index(), ShapeId::Star.index());
    assert_eq!(f.target_index(), ShapeId::Star.index());
    assert_eq!(f.positions(), f.template(ShapeId::Star.index()).points());
}

#[test]
fn sizes_and_colors_come_from_palette() {
    let f = field(300);
    assert!(f.sizes().iter().all(|s| (0.03..0.05).contains(s)));
    let cyan = [0.0, 0.83, 1.0];
    let purple = [0.48, 0.17, 0.97];
    assert!(f.colors().iter().all(|c| *c == cyan || *c == purple));
}

#[test]
fn interrupted_morph_continues_from_last_target() {
    let mut f = field(100);
    f.set_target_shape(1);
    assert_eq!((f.source_index(), f.target_index()), (0, 1));
    f.set_target_shape(2);
    assert_eq!((f.source_index(), f.target_index()), (1, 2));
    assert_eq!(f.morph_progress(), 0.0);
}

#[test]
fn same_target_keeps_progress() {
    let mut f = field(100);
    f.set_target_shape(1);
    f.set_morph_progress(0.4);
    f.set_target_shape(1);
    assert_eq!(f.morph_progress(), 0.4);
}

#[test]
fn morph_progress_is_sanitized() {
    let mut f = field(10);
    f.set_morph_progress(f32::NAN);
    assert_eq!(f.morph_progress(), 0.0);
    f.set_morph_progress(1.5);
    assert_eq!(f.morph_progress(), 1.0);
    f.set_morph_progress(-0.5);
    assert_eq!(f.morph_progress(), 0.0);
}

#[test]
fn pointer_is_clamped_to_ndc() {
    let mut f = field(10);
    f.set_pointer(3.0, -7.0);
    assert_eq!(f.pointer(), Vec2::new(1.0, -1.0));
    f.set_pointer(f32::INFINITY, 0.5);
    assert_eq!(f.pointer(), Vec2::new(0.0, 0.5));
}

#[test]
fn hover_intensity_is_never_negative() {
    let mut f = field(10);
    f.set_hover_intensity(-2.0);
    assert_eq!(f.hover_intensity(), 0.0);
    f.set_hover_intensity(1.5);
    assert_eq!(f.hover_intensity(), 1.5);
}

#[test]
fn far_pointer_gives_no_repulsion() {
    let push = repulsion_offset(Vec3::ZERO, Vec2::new(10.0, 10.0), 2.0, 0.5);
    assert_eq!(push, Vec2::ZERO);
    // exactly on the particle: no direction to push in
    assert_eq!(repulsion_offset(Vec3::ZERO, Vec2::ZERO, 2.0, 0.5), Vec2::ZERO);
}

#[test]
fn near_pointer_pushes_away() {
    let push = repulsion_offset(Vec3::ZERO, Vec2::new(1.0, 0.0), 2.0, 0.5);
    assert!((push.x + 0.25).abs() < 1e-6);
    assert!(push.y.abs() < 1e-6);
}

#[test]
fn drift_is_bounded_by_amplitude() {
    for i in 0..50 {
        for step in 0..50 {
            let d = drift_offset(i, step as f32 * 0.37, 0.01, [0.5, 0.3], 0.01);
            assert!(d.x.abs() <= 0.01 + 1e-7);
            assert!(d.y.abs() <= 0.01 + 1e-7);
        }
    }
}

#[test]
fn tick_at_endpoints_tracks_templates() {
    let mut f = field(200);
    // park the pointer in a corner, far from every shape
    f.set_pointer(1.0, 1.0);
    f.set_target_shape(ShapeId::Helix.index());

    f.set_morph_progress(0.0);
    f.tick(1.0);
    let src = f.template(ShapeId::Bracket.index()).points().to_vec();
    for (p, s) in f.positions().iter().zip(&src) {
        assert!((p.x - s.x).abs() <= 0.011 && (p.y - s.y).abs() <= 0.011);
        assert_eq!(p.z, s.z);
    }

    f.set_morph_progress(1.0);
    f.tick(2.0);
    let dst = f.template(ShapeId::Helix.index()).points().to_vec();
    for (p, d) in f.positions().iter().zip(&dst) {
        assert!((p.x - d.x).abs() <= 0.011 && (p.y - d.y).abs() <= 0.011);
        assert!((p.z - d.z).abs() < 1e-5);
    }
}

#[test]
fn ticks_stay_bounded() {
    let mut f = field(400);
    for frame in 0..600 {
        let shape = (frame / 150) % 4;
        f.set_target_shape(shape);
        f.set_morph_progress((frame % 150) as f32 / 150.0);
        f.set_pointer((frame as f32 * 0.1).sin(), (frame as f32 * 0.07).cos());
        f.tick(frame as f32 / 60.0);
        for p in f.positions() {
            assert!(p.is_finite());
            assert!(p.x.abs() < 6.0 && p.y.abs() < 6.0 && p.z.abs() < 2.0);
        }
    }
}

#[test]
fn origin_pointer_keeps_cloud_bounded() {
    let mut f = field(400);
    f.set_pointer(0.0, 0.0);
    f.set_target_shape(ShapeId::Star.index());
    let mut max_coord = 0.0f32;
    for frame in 0..600 {
        f.set_morph_progress((frame % 200) as f32 / 200.0);
        f.tick(frame as f32 / 60.0);
        for p in f.positions() {
            assert!(p.is_finite());
            max_coord = max_coord.max(p.abs().max_element());
        }
    }
    assert!(max_coord < 3.0, "max coord {}", max_coord);
}

#[test]
fn index_converges_and_source_collapses() {
    let mut f = field(50);
    f.set_target_shape(2);
    f.tick(0.0);
    assert!(f.current_index() > 0.0 && f.current_index() < 2.0);
    for i in 0..200 {
        f.tick(i as f32 / 60.0);
    }
    assert_eq!(f.current_index(), 2.0);
    assert_eq!(f.source_index(), 2);
}

#[test]
fn unknown_index_renders_as_bracket() {
    let f = field(30);
    assert_eq!(f.template(9), f.template(ShapeId::Bracket.index()));
}

#[test]
fn empty_field_ticks() {
    let mut f = field(0);
    assert!(f.is_empty());
    f.set_target_shape(3);
    f.set_morph_progress(0.5);
    f.tick(1.0);
    assert!(f.positions().is_empty());
}
