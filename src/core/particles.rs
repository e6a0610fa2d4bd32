//! Morphing particle field for the services section.
//!
//! The field keeps one template per [`ShapeId`] and a single reused position
//! buffer. Each [`ParticleField::tick`] rebuilds the buffer from the
//! source/target templates, so frame-to-frame error never accumulates.

use super::constants::*;
use super::easing::{approach, ease_in_out_cubic};
use super::shapes::{generate, ShapeId, ShapeTemplate};
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct ParticleFieldConfig {
    pub count: usize,
    pub pointer_world_scale: f32,
    pub repulsion_radius: f32,
    pub repulsion_force: f32,
    pub drift_amplitude: f32,
    pub drift_freq: [f32; 2],
    pub drift_phase_per_particle: f32,
    /// Full width of the random shimmer applied once the bracket has
    /// almost settled. Zero disables it.
    pub settle_jitter: f32,
    pub settle_threshold: f32,
    pub index_convergence: f32,
    pub index_snap_epsilon: f32,
    pub seed: u64,
}

impl Default for ParticleFieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            pointer_world_scale: POINTER_WORLD_SCALE,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_force: REPULSION_FORCE,
            drift_amplitude: DRIFT_AMPLITUDE,
            drift_freq: [DRIFT_FREQ_X, DRIFT_FREQ_Y],
            drift_phase_per_particle: DRIFT_PHASE_PER_PARTICLE,
            settle_jitter: SETTLE_JITTER,
            settle_threshold: SETTLE_JITTER_THRESHOLD,
            index_convergence: INDEX_CONVERGENCE_RATE,
            index_snap_epsilon: INDEX_SNAP_EPSILON,
            seed: 7,
        }
    }
}

pub struct ParticleField {
    config: ParticleFieldConfig,
    templates: [ShapeTemplate; 4],
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    sizes: Vec<f32>,
    source: usize,
    target: usize,
    morph_progress: f32,
    pointer: Vec2,
    hover_intensity: f32,
    current_index: f32,
    elapsed: f32,
    rng: StdRng,
}

impl ParticleField {
    /// Field with default tuning and `particle_count` particles.
    pub fn initialize(particle_count: usize, initial: ShapeId) -> Self {
        Self::with_config(
            ParticleFieldConfig {
                count: particle_count,
                ..Default::default()
            },
            initial,
        )
    }

    pub fn with_config(config: ParticleFieldConfig, initial: ShapeId) -> Self {
        let n = config.count;
        let templates = ShapeId::ALL.map(|shape| generate(shape, n));
        let positions = templates[initial.index()].points().to_vec();
        let mut rng = StdRng::seed_from_u64(config.seed);
        let colors = (0..n)
            .map(|_| {
                if rng.gen::<f32>() > 0.5 {
                    COLOR_CYAN
                } else {
                    COLOR_PURPLE
                }
            })
            .collect();
        let sizes = (0..n)
            .map(|_| PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN)
            .collect();
        log::debug!("[particles] init count={} shape={:?}", n, initial);
        Self {
            config,
            templates,
            positions,
            colors,
            sizes,
            source: initial.index(),
            target: initial.index(),
            morph_progress: 0.0,
            pointer: Vec2::ZERO,
            hover_intensity: HOVER_RESTING,
            current_index: initial.index() as f32,
            elapsed: 0.0,
            rng,
        }
    }

    /// Start a morph toward `index`. The previous target becomes the new
    /// source, so an interrupted morph continues from what was last shown.
    pub fn set_target_shape(&mut self, index: usize) {
        if index != self.target {
            self.source = self.target;
            self.target = index;
            self.morph_progress = 0.0;
        }
    }

    pub fn set_morph_progress(&mut self, t: f32) {
        self.morph_progress = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    }

    pub fn set_pointer(&mut self, ndc_x: f32, ndc_y: f32) {
        let clamp = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        self.pointer = Vec2::new(clamp(ndc_x), clamp(ndc_y));
    }

    pub fn set_hover_intensity(&mut self, k: f32) {
        self.hover_intensity = k.max(0.0);
    }

    pub fn tick(&mut self, elapsed_sec: f32) {
        self.elapsed = elapsed_sec;
        let cfg = &self.config;
        let eased = ease_in_out_cubic(self.morph_progress);
        let src = template_or_fallback(&self.templates, self.source).points();
        let dst = template_or_fallback(&self.templates, self.target).points();
        let pointer_world = self.pointer * cfg.pointer_world_scale;
        let shimmer = cfg.settle_jitter > 0.0
            && self.target == ShapeId::Bracket.index()
            && self.morph_progress > cfg.settle_threshold;

        for (i, pos) in self.positions.iter_mut().enumerate() {
            let a = src.get(i).copied().unwrap_or(Vec3::ZERO);
            let b = dst.get(i).copied().unwrap_or(Vec3::ZERO);
            let mut p = a.lerp(b, eased);

            let push = repulsion_offset(
                p,
                pointer_world,
                cfg.repulsion_radius,
                cfg.repulsion_force,
            );
            p.x += push.x;
            p.y += push.y;

            let drift = drift_offset(
                i,
                elapsed_sec,
                cfg.drift_amplitude,
                cfg.drift_freq,
                cfg.drift_phase_per_particle,
            );
            p.x += drift.x;
            p.y += drift.y;

            if shimmer {
                p.x += (self.rng.gen::<f32>() - 0.5) * cfg.settle_jitter;
                p.y += (self.rng.gen::<f32>() - 0.5) * cfg.settle_jitter;
            }
            *pos = p;
        }

        self.advance_index();
    }

    fn advance_index(&mut self) {
        let target = self.target as f32;
        if (self.current_index - target).abs() > self.config.index_snap_epsilon {
            self.current_index = approach(self.current_index, target, self.config.index_convergence);
        } else {
            // Morph finished: later morphs start from the displayed shape.
            // A half-finished morph snaps here. Leave it: the source must
            // follow the target the index has settled on.
            self.current_index = target;
            self.source = self.target;
        }
    }

    /// Slow tumble applied to the whole cloud at render time.
    pub fn model_matrix(&self) -> Mat4 {
        let t = self.elapsed;
        Mat4::from_euler(
            EulerRot::XYZ,
            (t * MODEL_PITCH_RATE).sin() * MODEL_PITCH_AMPLITUDE,
            t * MODEL_YAW_RATE,
            0.0,
        )
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
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
    #[inline]
    pub fn source_index(&self) -> usize {
        self.source
    }
    #[inline]
    pub fn target_index(&self) -> usize {
        self.target
    }
    #[inline]
    pub fn morph_progress(&self) -> f32 {
        self.morph_progress
    }
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }
    #[inline]
    pub fn hover_intensity(&self) -> f32 {
        self.hover_intensity
    }
    /// Continuous index trailing the target, for rotation-style consumers.
    #[inline]
    pub fn current_index(&self) -> f32 {
        self.current_index
    }
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
    #[inline]
    pub fn config(&self) -> &ParticleFieldConfig {
        &self.config
    }
    pub fn template(&self, index: usize) -> &ShapeTemplate {
        template_or_fallback(&self.templates, index)
    }
}

/// Unknown shape indices render as the bracket.
#[inline]
fn template_or_fallback(templates: &[ShapeTemplate; 4], index: usize) -> &ShapeTemplate {
    match ShapeId::from_index(index) {
        Some(shape) => &templates[shape.index()],
        None => &templates[ShapeId::Bracket.index()],
    }
}

/// XY push away from `pointer_world`, zero outside `radius`.
#[inline]
pub fn repulsion_offset(p: Vec3, pointer_world: Vec2, radius: f32, force: f32) -> Vec2 {
    let d = pointer_world - Vec2::new(p.x, p.y);
    let dist = d.length();
    if dist < radius && dist > 0.0 {
        let f = (1.0 - dist / radius) * force;
        -d / dist * f
    } else {
        Vec2::ZERO
    }
}

/// Deterministic idle sway, bounded by `amplitude` on each axis.
#[inline]
pub fn drift_offset(
    index: usize,
    elapsed_sec: f32,
    amplitude: f32,
    freq: [f32; 2],
    phase_per_particle: f32,
) -> Vec2 {
    let phase = index as f32 * phase_per_particle;
    Vec2::new(
        (elapsed_sec * freq[0] + phase).sin() * amplitude,
        (elapsed_sec * freq[1] + phase).cos() * amplitude,
    )
}
