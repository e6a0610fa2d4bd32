//! Point-cloud generators for the services particle field.
//!
//! Every generator returns exactly `count` points. Shapes that are built from
//! a fixed number of strokes pad by repeating earlier points with extra depth
//! jitter, and truncate when `count` is smaller than the stroke budget.

use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

const BRACKET_SIZE: f32 = 2.5;
const BRACKET_THICKNESS: f32 = 0.3;
const BRACKET_STROKE_POINTS: usize = 100;
const BRACKET_ARM_OFFSET: f32 = 0.3;
const BRACKET_REFILL_JITTER: f32 = 0.5;

const STAR_ARMS: f32 = 8.0;
const STAR_RADIUS: f32 = 2.0;
const STAR_DEPTH: f32 = 0.5;

const HELIX_HEIGHT: f32 = 4.0;
const HELIX_RADIUS: f32 = 0.8;
const HELIX_TURNS: f32 = 3.0;

const CURVE_WIDTH: f32 = 3.0;
const CURVE_HEIGHT: f32 = 3.0;
const CURVE_Y_JITTER: f32 = 0.5;
const CURVE_Z_JITTER: f32 = 0.8;

/// Base seed for [`generate`]; mixed with the shape index.
const SHAPE_SEED: u64 = 0x5EED_0F_5A_FE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Bracket,
    Star,
    Helix,
    FlowingCurve,
}

impl ShapeId {
    pub const ALL: [ShapeId; 4] = [
        ShapeId::Bracket,
        ShapeId::Star,
        ShapeId::Helix,
        ShapeId::FlowingCurve,
    ];

    #[inline]
    pub fn from_index(index: usize) -> Option<ShapeId> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Ordered, fixed-length point cloud.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeTemplate {
    points: Vec<Vec3>,
}

impl ShapeTemplate {
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)`; `None` for an empty template.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }
}

/// Generate `count` points for `shape` from a fixed per-shape seed, so the
/// same inputs always give the same cloud.
pub fn generate(shape: ShapeId, count: usize) -> ShapeTemplate {
    let mix = SHAPE_SEED ^ (shape.index() as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut rng = StdRng::seed_from_u64(mix);
    generate_with(shape, count, &mut rng)
}

pub fn generate_with<R: Rng + ?Sized>(shape: ShapeId, count: usize, rng: &mut R) -> ShapeTemplate {
    if count == 0 {
        return ShapeTemplate::default();
    }
    let points = match shape {
        ShapeId::Bracket => bracket(count, rng),
        ShapeId::Star => star(count, rng),
        ShapeId::Helix => helix(count),
        ShapeId::FlowingCurve => flowing_curve(count, rng),
    };
    debug_assert_eq!(points.len(), count);
    ShapeTemplate { points }
}

#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() - 0.5
}

fn bracket<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let radius = BRACKET_SIZE * 0.5;
    let stroke_total = BRACKET_STROKE_POINTS * 2;
    let mut points = Vec::with_capacity(count.max(stroke_total));

    // "<" opens to the left, ">" to the right
    for (x_offset, start_angle, sweep) in [
        (-radius * BRACKET_ARM_OFFSET, PI * 0.75, PI * 0.5),
        (radius * BRACKET_ARM_OFFSET, PI * 0.25, -PI * 0.5),
    ] {
        for i in 0..BRACKET_STROKE_POINTS {
            let t = i as f32 / BRACKET_STROKE_POINTS as f32;
            let angle = start_angle + t * sweep;
            points.push(Vec3::new(
                x_offset + angle.cos() * radius * t,
                angle.sin() * radius * t,
                centered(rng) * BRACKET_THICKNESS,
            ));
        }
    }

    while points.len() < count {
        let src = points[points.len() % stroke_total];
        points.push(Vec3::new(
            src.x,
            src.y,
            src.z + centered(rng) * BRACKET_REFILL_JITTER,
        ));
    }
    points.truncate(count);
    points
}

fn star<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = (i as f32 / count as f32) * TAU * STAR_ARMS;
            let r = STAR_RADIUS * (0.3 + (angle * 2.0).sin() * 0.7);
            let rx = 0.5 + rng.gen::<f32>() * 0.5;
            let ry = 0.5 + rng.gen::<f32>() * 0.5;
            Vec3::new(
                angle.cos() * r * rx,
                angle.sin() * r * ry,
                centered(rng) * STAR_DEPTH,
            )
        })
        .collect()
}

fn helix(count: usize) -> Vec<Vec3> {
    let half = count as f32 / 2.0;
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let strand = ((i as f32 / half).floor() as u32 % 2) as f32;
            let angle = t * HELIX_TURNS * TAU + strand * PI;
            Vec3::new(
                angle.cos() * HELIX_RADIUS,
                (t - 0.5) * HELIX_HEIGHT,
                angle.sin() * HELIX_RADIUS,
            )
        })
        .collect()
}

fn flowing_curve<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let wave = (t * PI * 4.0).sin() * CURVE_HEIGHT * 0.3;
            Vec3::new(
                (t - 0.5) * CURVE_WIDTH * 2.0,
                wave + centered(rng) * CURVE_Y_JITTER,
                centered(rng) * CURVE_Z_JITTER,
            )
        })
        .collect()
}
