// Host-side tests for shape generation and easing.

use site_fx::core::easing::{approach, ease_in_out_cubic, lerp};
use site_fx::core::shapes::{generate, ShapeId};

#[test]
fn every_shape_has_exactly_count_points() {
    for shape in ShapeId::ALL {
        for count in [0, 1, 7, 199, 200, 201, 800, 1500] {
            let t = generate(shape, count);
            assert_eq!(t.len(), count, "{:?} with {}", shape, count);
        }
    }
}

#[test]
fn zero_count_is_empty() {
    for shape in ShapeId::ALL {
        let t = generate(shape, 0);
        assert!(t.is_empty());
        assert!(t.bounds().is_none());
    }
}

#[test]
fn generation_is_deterministic() {
    for shape in ShapeId::ALL {
        assert_eq!(generate(shape, 300), generate(shape, 300));
    }
}

#[test]
fn points_are_finite_and_roughly_centered() {
    for shape in ShapeId::ALL {
        let t = generate(shape, 800);
        assert!(t.points().iter().all(|p| p.is_finite()));
        let (lo, hi) = t.bounds().unwrap();
        assert!(lo.x > -5.0 && hi.x < 5.0, "{:?} x range {} {}", shape, lo.x, hi.x);
        assert!(lo.y > -5.0 && hi.y < 5.0, "{:?} y range {} {}", shape, lo.y, hi.y);
    }
}

#[test]
fn helix_sits_on_its_cylinder() {
    let t = generate(ShapeId::Helix, 200);
    for p in t.points() {
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!((r - 0.8).abs() < 1e-4);
        assert!(p.y >= -2.0 && p.y < 2.0);
    }
    // The second strand starts half a turn away from where the first ends.
    let end_of_first = t.points()[99];
    let start_of_second = t.points()[100];
    assert!(end_of_first.distance(start_of_second) > 1.0);
}

#[test]
fn shape_index_round_trips() {
    for (i, shape) in ShapeId::ALL.iter().enumerate() {
        assert_eq!(shape.index(), i);
        assert_eq!(ShapeId::from_index(i), Some(*shape));
    }
    assert_eq!(ShapeId::from_index(4), None);
}

#[test]
fn ease_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    assert!((ease_in_out_cubic(1.0) - 1.0).abs() < 1e-6);
    assert_eq!(ease_in_out_cubic(-3.0), 0.0);
    assert!((ease_in_out_cubic(4.0) - 1.0).abs() < 1e-6);
}

#[test]
fn ease_is_monotonic() {
    let mut prev = ease_in_out_cubic(0.0);
    for i in 1..=100 {
        let v = ease_in_out_cubic(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn lerp_and_approach() {
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    assert_eq!(approach(0.0, 10.0, 0.1), 1.0);
    assert_eq!(approach(5.0, 5.0, 0.3), 5.0);
}
