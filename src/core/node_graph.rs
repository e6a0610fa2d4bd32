//! Research-section network: nodes orbiting on a breathing shell, with
//! edges fixed between nodes that started close together.

use super::camera::Camera;
use super::easing::approach;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct NodeGraphConfig {
    pub node_count: usize,
    pub shell_min: f32,
    pub shell_span: f32,
    pub link_distance: f32,
    /// Probability that a close pair is actually linked.
    pub link_chance: f32,
    pub follow_rate: f32,
    pub time_rate: f32,
    pub seed: u64,
}

impl Default for NodeGraphConfig {
    fn default() -> Self {
        Self {
            node_count: 30,
            shell_min: 2.0,
            shell_span: 2.0,
            link_distance: 1.5,
            link_chance: 0.3,
            follow_rate: 0.1,
            time_rate: 0.6,
            seed: 1273,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

pub struct NodeGraph {
    config: NodeGraphConfig,
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    edges: Vec<Edge>,
    time: f32,
    visible: bool,
}

impl NodeGraph {
    pub fn new(config: NodeGraphConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let positions: Vec<Vec3> = (0..config.node_count)
            .map(|_| {
                let radius = config.shell_min + rng.gen::<f32>() * config.shell_span;
                let theta = rng.gen::<f32>() * TAU;
                let phi = (rng.gen::<f32>() * 2.0 - 1.0).acos();
                spherical(radius, theta, phi)
            })
            .collect();
        let colors = (0..config.node_count)
            .map(|_| {
                if rng.gen::<f32>() > 0.5 {
                    [0.0, 0.83, 1.0]
                } else {
                    [0.48, 0.17, 0.97]
                }
            })
            .collect();

        let mut edges = Vec::new();
        for a in 0..positions.len() {
            for b in (a + 1)..positions.len() {
                let close = positions[a].distance(positions[b]) < config.link_distance;
                if close && rng.gen::<f32>() < config.link_chance {
                    edges.push(Edge { a, b });
                }
            }
        }
        log::debug!(
            "[graph] nodes={} edges={}",
            positions.len(),
            edges.len()
        );

        Self {
            config,
            positions,
            colors,
            edges,
            time: 0.0,
            visible: false,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance the orbit. Hidden graphs hold still.
    pub fn tick(&mut self, dt_sec: f32) {
        if !self.visible {
            return;
        }
        self.time += dt_sec.clamp(0.0, 0.25) * self.config.time_rate;
        let t = self.time;
        let rate = self.config.follow_rate;
        for (i, p) in self.positions.iter_mut().enumerate() {
            let target = orbit_target(i, t);
            *p = Vec3::new(
                approach(p.x, target.x, rate),
                approach(p.y, target.y, rate),
                approach(p.z, target.z, rate),
            );
        }
    }

    /// Pulsing edge alpha, always within \[0, 0.2\].
    pub fn edge_alpha(&self, edge: &Edge) -> f32 {
        0.1 + (self.time + edge.a as f32).sin() * 0.1
    }

    /// Camera circling the origin at a fixed distance.
    pub fn camera(&self, aspect: f32) -> Camera {
        let mut camera = Camera::looking_at_origin(8.0, 50.0);
        camera.eye.x = (self.time * 0.1).sin();
        camera.eye.y = (self.time * 0.1).cos();
        camera.aspect = aspect;
        camera
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
    #[inline]
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }
}

#[inline]
fn spherical(radius: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Where node `i` is heading at scene time `t`.
#[inline]
pub fn orbit_target(i: usize, t: f32) -> Vec3 {
    let fi = i as f32;
    let radius = 2.0 + (t * 0.5 + fi).sin() * 0.5;
    let theta = (t * 0.1 + fi) * 0.5;
    let phi = (t * 0.1 + fi) * 0.3;
    spherical(radius, theta, phi)
}
