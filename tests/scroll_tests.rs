// Host-side tests for scroll-to-progress mapping and the services section
// orchestrator.

use site_fx::core::orchestrator::{OrchestratorConfig, SectionOrchestrator, SectionState};
use site_fx::core::particles::ParticleFieldConfig;
use site_fx::core::scroll::{
    active_index, item_transform, ProgressEvent, ScrollBounds, ScrollProgressMapper, SectionLayout,
};
use std::cell::RefCell;
use std::rc::Rc;

// Scroll range 0..1000 for a 600px section at 200px in a 400px viewport.
const LAYOUT: SectionLayout = SectionLayout {
    top: 200.0,
    height: 600.0,
    viewport_height: 400.0,
};

fn mapper() -> ScrollProgressMapper {
    let mut m = ScrollProgressMapper::new(4);
    m.set_layout(LAYOUT);
    m
}

#[test]
fn bounds_extend_half_a_viewport_each_side() {
    let b = ScrollBounds::from_layout(&LAYOUT);
    assert_eq!(b.start, 0.0);
    assert_eq!(b.end, 1000.0);
    assert_eq!(b.range(), 1000.0);
    assert!(!b.is_degenerate());
}

#[test]
fn update_maps_scroll_to_progress_and_index() {
    let mut m = mapper();
    let e = m.update(250.0);
    assert!((e.progress - 0.25).abs() < 1e-6);
    assert_eq!(e.active_index, 0);
    let e = m.update(900.0);
    assert!((e.progress - 0.9).abs() < 1e-6);
    assert_eq!(e.active_index, 2);
    assert_eq!(e.item_count, 4);
}

#[test]
fn update_never_decreases_across_bounds() {
    let mut m = mapper();
    let mut prev = m.update(0.0).progress;
    for step in 1..=1000 {
        let p = m.update(step as f64).progress;
        assert!(p >= prev, "progress fell at {}: {} < {}", step, p, prev);
        prev = p;
    }
    assert_eq!(prev, 1.0);
}

#[test]
fn progress_clamps_outside_bounds() {
    let mut m = mapper();
    assert_eq!(m.update(-50.0).progress, 0.0);
    let e = m.update(5000.0);
    assert_eq!(e.progress, 1.0);
    assert_eq!(e.active_index, 3);
}

#[test]
fn degenerate_bounds_do_not_divide_by_zero() {
    let mut m = ScrollProgressMapper::new(3);
    m.set_layout(SectionLayout::default());
    assert!(m.bounds().is_degenerate());
    assert_eq!(m.update(-1.0).progress, 0.0);
    let e = m.update(0.0);
    assert_eq!(e.progress, 1.0);
    assert!(e.progress.is_finite());
}

#[test]
fn active_index_stays_in_range() {
    assert_eq!(active_index(0.0, 4), 0);
    assert_eq!(active_index(0.999, 4), 2);
    assert_eq!(active_index(1.0, 4), 3);
    assert_eq!(active_index(7.0, 4), 3);
    assert_eq!(active_index(-1.0, 4), 0);
    assert_eq!(active_index(f32::NAN, 4), 0);
    assert_eq!(active_index(0.7, 1), 0);
    assert_eq!(active_index(0.7, 0), 0);
}

#[test]
fn segment_progress_within_transition() {
    let e = ProgressEvent {
        progress: 0.9,
        active_index: 2,
        item_count: 4,
    };
    assert!((e.segment_progress() - 0.7).abs() < 1e-5);
    let single = ProgressEvent {
        progress: 0.3,
        active_index: 0,
        item_count: 1,
    };
    assert_eq!(single.segment_progress(), 1.0);
}

#[test]
fn observers_see_every_update() {
    let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let mut m = mapper();
    let log = seen.clone();
    m.subscribe(move |e: &ProgressEvent| log.borrow_mut().push(e.active_index));
    m.update(100.0);
    m.update(500.0);
    m.update(1000.0);
    assert_eq!(*seen.borrow(), vec![0, 1, 3]);
}

#[test]
fn track_centers_active_item() {
    let t = item_transform(1, 1, 400.0, 100.0, 1200.0);
    assert_eq!(t.translate_x, -100.0);
    assert_eq!(t.scale, 1.0);
    assert_eq!(t.opacity, 1.0);
    assert!(t.active);

    let other = item_transform(0, 1, 400.0, 100.0, 1200.0);
    assert_eq!(other.translate_x, t.translate_x);
    assert_eq!(other.scale, 0.9);
    assert_eq!(other.opacity, 0.6);
    assert!(!other.active);
}

#[test]
fn layout_items_falls_back_to_default_width() {
    let mut m = mapper();
    m.set_item_metrics(0.0, -5.0);
    m.update(0.0);
    let mut out = Vec::new();
    m.layout_items(1000.0, &mut out);
    assert_eq!(out.len(), 4);
    assert_eq!(out[0].translate_x, 300.0);
    assert_eq!(out.iter().filter(|t| t.active).count(), 1);
}

fn orchestrator() -> SectionOrchestrator {
    SectionOrchestrator::new(OrchestratorConfig {
        particles: ParticleFieldConfig {
            count: 64,
            ..Default::default()
        },
        ..Default::default()
    })
}

#[test]
fn activation_is_one_shot_and_thresholded() {
    let mut o = orchestrator();
    assert!(!o.on_visibility(1.0, LAYOUT, 0.0));
    assert_eq!(o.state(), SectionState::Uninitialized);

    o.observe();
    assert_eq!(o.state(), SectionState::Observing);
    assert!(!o.on_visibility(0.05, LAYOUT, 250.0));
    assert!(o.field().is_none());

    assert!(o.on_visibility(0.1, LAYOUT, 250.0));
    assert_eq!(o.state(), SectionState::Active);
    assert_eq!(o.field().map(|f| f.len()), Some(64));
    assert!((o.mapper().progress() - 0.25).abs() < 1e-6);

    assert!(!o.on_visibility(1.0, LAYOUT, 250.0));
    assert_eq!(o.state(), SectionState::Active);
}

#[test]
fn queued_scroll_applies_once_per_frame() {
    let mut o = orchestrator();
    assert!(!o.queue_scroll(100.0));
    o.observe();
    o.on_visibility(0.5, LAYOUT, 250.0);

    assert!(o.queue_scroll(500.0));
    assert!(!o.queue_scroll(900.0));
    assert!(o.has_pending_scroll());
    // nothing moves until the frame
    assert!((o.mapper().progress() - 0.25).abs() < 1e-6);

    o.frame(0.016);
    assert!(!o.has_pending_scroll());
    assert!((o.mapper().progress() - 0.9).abs() < 1e-6);
    assert_eq!(o.mapper().active_index(), 2);
    let field = o.field().unwrap();
    assert_eq!(field.target_index(), 2);
    assert!((field.morph_progress() - 0.7).abs() < 1e-4);

    assert!(o.queue_scroll(100.0));
}

#[test]
fn reentry_reapplies_scroll_on_next_frame() {
    let mut o = orchestrator();
    o.observe();
    o.on_visibility(0.5, LAYOUT, 250.0);
    o.frame(0.016);
    assert!(!o.has_pending_scroll());

    // scrolled away and back without scroll events reaching the section
    assert!(!o.on_visibility(0.3, LAYOUT, 900.0));
    assert!(o.has_pending_scroll());
    o.frame(0.032);
    assert!((o.mapper().progress() - 0.9).abs() < 1e-6);
    assert_eq!(o.mapper().active_index(), 2);
}

#[test]
fn hover_and_pointer_reach_the_field() {
    let mut o = orchestrator();
    o.on_hover(true);
    o.observe();
    o.on_visibility(1.0, LAYOUT, 0.0);
    o.on_hover(true);
    assert_eq!(o.field().unwrap().hover_intensity(), 1.5);
    o.on_hover(false);
    assert_eq!(o.field().unwrap().hover_intensity(), 1.0);
    o.on_pointer(0.5, -0.5);
    assert_eq!(o.field().unwrap().pointer(), glam::Vec2::new(0.5, -0.5));
}

#[test]
fn resize_remeasures_active_section() {
    let mut o = orchestrator();
    o.observe();
    o.on_resize(LAYOUT, 500.0);
    assert_eq!(o.mapper().bounds(), ScrollBounds::default());

    o.on_visibility(1.0, LAYOUT, 0.0);
    let taller = SectionLayout {
        height: 1600.0,
        ..LAYOUT
    };
    o.on_resize(taller, 1000.0);
    assert_eq!(o.mapper().bounds().end, 2000.0);
    assert!((o.mapper().progress() - 0.5).abs() < 1e-6);
}

#[test]
fn teardown_stops_everything() {
    let mut o = orchestrator();
    o.observe();
    o.on_visibility(1.0, LAYOUT, 0.0);
    o.queue_scroll(700.0);
    o.teardown();
    assert_eq!(o.state(), SectionState::TornDown);
    assert!(o.field().is_none());
    assert!(!o.has_pending_scroll());
    assert!(!o.queue_scroll(800.0));
    assert!(!o.on_visibility(1.0, LAYOUT, 0.0));
    o.frame(1.0);
    assert_eq!(o.state(), SectionState::TornDown);
}
