// Host-side tests for the cursor follower, navigation helpers, the research
// node graph, the hero backdrop, the shared camera, and the contact link.

use glam::{Vec3, Vec4Swizzles};
use site_fx::core::backdrop::HeroBackdrop;
use site_fx::core::camera::Camera;
use site_fx::core::contact::{ContactMessage, CONTACT_ADDRESS};
use site_fx::core::cursor::CursorFollower;
use site_fx::core::nav::{anchor_scroll_top, in_page_anchor, in_viewport, is_scrolled};
use site_fx::core::node_graph::{NodeGraph, NodeGraphConfig};

#[test]
fn cursor_only_on_wide_viewports() {
    assert!(!CursorFollower::enabled_for_viewport(767.0));
    assert!(CursorFollower::enabled_for_viewport(768.0));
}

#[test]
fn cursor_dot_leads_and_glow_lags() {
    let mut c = CursorFollower::default();
    c.pointer_moved(100.0, 50.0);
    let f = c.tick();
    assert!((f.dot.x - 15.0).abs() < 1e-4 && (f.dot.y - 7.5).abs() < 1e-4);
    assert!((f.glow.x - 8.0).abs() < 1e-4 && (f.glow.y - 4.0).abs() < 1e-4);
    assert!(f.glow_active);

    for _ in 0..20 {
        let f = c.tick();
        assert!(f.glow.x < f.dot.x);
    }
    for _ in 0..300 {
        c.tick();
    }
    let f = c.frame();
    assert!((f.dot.x - 100.0).abs() < 0.01 && (f.glow.x - 100.0).abs() < 0.01);
}

#[test]
fn cursor_visibility_follows_the_document() {
    let mut c = CursorFollower::default();
    c.pointer_left();
    let f = c.frame();
    assert!(!f.visible && !f.glow_active);
    c.pointer_entered();
    assert!(c.frame().visible);
    assert!(!c.frame().glow_active);
    c.pointer_moved(1.0, 1.0);
    assert!(c.frame().glow_active);
}

#[test]
fn nested_hover_is_counted() {
    let mut c = CursorFollower::default();
    c.hover_leave();
    assert!(!c.frame().hover);
    c.hover_enter();
    c.hover_enter();
    c.hover_leave();
    assert!(c.frame().hover);
    c.hover_leave();
    assert!(!c.frame().hover);
}

#[test]
fn nav_helpers() {
    assert!(!is_scrolled(100.0));
    assert!(is_scrolled(101.0));
    assert_eq!(anchor_scroll_top(500.0, 80.0), 420.0);
    assert_eq!(anchor_scroll_top(50.0, 80.0), 0.0);
    assert_eq!(in_page_anchor("#services"), Some("#services"));
    assert_eq!(in_page_anchor("#"), None);
    assert_eq!(in_page_anchor("/blog"), None);
    assert!(in_viewport(100.0, 300.0, 800.0));
    assert!(!in_viewport(900.0, 1100.0, 800.0));
    assert!(!in_viewport(-300.0, -10.0, 800.0));
}

#[test]
fn edges_only_join_close_nodes() {
    let g = NodeGraph::new(NodeGraphConfig::default());
    assert_eq!(g.positions().len(), 30);
    assert_eq!(g.colors().len(), 30);
    for e in g.edges() {
        assert!(e.a < e.b);
        assert!(g.positions()[e.a].distance(g.positions()[e.b]) < 1.5);
    }
}

#[test]
fn graph_is_seeded() {
    let a = NodeGraph::new(NodeGraphConfig::default());
    let b = NodeGraph::new(NodeGraphConfig::default());
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.edges(), b.edges());
}

#[test]
fn every_close_pair_links_when_chance_is_one() {
    let g = NodeGraph::new(NodeGraphConfig {
        link_chance: 1.0,
        ..Default::default()
    });
    let p = g.positions();
    let close = (0..p.len())
        .flat_map(|a| ((a + 1)..p.len()).map(move |b| (a, b)))
        .filter(|&(a, b)| p[a].distance(p[b]) < 1.5)
        .count();
    assert_eq!(g.edges().len(), close);
}

#[test]
fn hidden_graph_holds_still() {
    let mut g = NodeGraph::new(NodeGraphConfig::default());
    let before = g.positions().to_vec();
    g.tick(0.5);
    assert_eq!(g.positions(), &before[..]);
    assert_eq!(g.time(), 0.0);

    g.set_visible(true);
    for _ in 0..120 {
        g.tick(1.0 / 60.0);
    }
    assert!(g.time() > 0.0);
    assert!(g.positions().iter().all(|p| p.is_finite() && p.length() < 5.0));
    for e in g.edges() {
        let alpha = g.edge_alpha(e);
        assert!((0.0..=0.2 + 1e-6).contains(&alpha));
    }
}

#[test]
fn graph_camera_keeps_its_distance() {
    let g = NodeGraph::new(NodeGraphConfig::default());
    let cam = g.camera(2.0);
    assert_eq!(cam.eye.z, 8.0);
    assert_eq!(cam.aspect, 2.0);
}

#[test]
fn backdrop_fills_and_pulses() {
    let mut b = HeroBackdrop::new(250, 7);
    assert_eq!(b.positions().len(), 250);
    assert!(b.positions().iter().all(|p| p.abs().max_element() <= 10.0));
    for _ in 0..600 {
        b.tick(1.0 / 60.0);
        assert!((0.9..=1.1).contains(&b.pulse()));
    }
    let [halo, core] = b.orbs();
    assert!(halo.radius > core.radius);
    assert!(halo.color[3] < core.color[3]);
}

#[test]
fn backdrop_ignores_huge_steps() {
    let mut b = HeroBackdrop::new(10, 1);
    b.tick(100.0);
    assert!(b.time() <= 0.25 * 0.3 + 1e-6);
    b.tick(-1.0);
    assert!(b.time() <= 0.25 * 0.3 + 1e-6);
}

#[test]
fn camera_projects_origin_to_center() {
    let mut cam = Camera::looking_at_origin(5.0, 75.0);
    cam.set_viewport(0.0, 100.0);
    assert_eq!(cam.aspect, 1.0);
    cam.set_viewport(1600.0, 800.0);
    assert_eq!(cam.aspect, 2.0);
    let clip = cam.view_proj() * Vec3::ZERO.extend(1.0);
    let ndc = clip.xy() / clip.w;
    assert!(ndc.length() < 1e-5);
    assert!(clip.w > 0.0);
}

fn encode_spaces(s: &str) -> String {
    s.replace(' ', "%20").replace('\n', "%0A")
}

#[test]
fn contact_message_builds_mailto() {
    let msg = ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello there".into(),
        message: "Line one\nLine two".into(),
    };
    assert_eq!(
        msg.body(),
        "Name: Ada\nEmail: ada@example.com\n\nMessage:\nLine one\nLine two"
    );
    let link = msg.mailto(CONTACT_ADDRESS, encode_spaces);
    assert!(link.starts_with("mailto:joviantechlabs@gmail.com?subject=Hello%20there&body="));
    assert!(link.ends_with("Line%20one%0ALine%20two"));
    assert!(!link.contains(' '));
}

#[test]
fn empty_contact_form_still_links() {
    let link = ContactMessage::default().mailto("x@y.z", |s| s.to_string());
    assert_eq!(link, "mailto:x@y.z?subject=&body=Name: \nEmail: \n\nMessage:\n");
}
