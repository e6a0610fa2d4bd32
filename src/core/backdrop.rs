//! Hero background: a slowly tumbling cube of particles around a pulsing
//! orb.

use glam::{EulerRot, Mat4, Vec3};
use rand::prelude::*;

pub const BACKDROP_PARTICLES: usize = 1000;
const CUBE_EXTENT: f32 = 20.0;
/// Scene time advanced per second of wall time.
const TIME_RATE: f32 = 0.3;
/// Per-frame wave nudge, scaled by the 60 fps-normalized delta.
const WAVE_STEP: f32 = 0.001;
const WAVE_SPATIAL: f32 = 0.1;

pub const BACKDROP_BLUE: [f32; 3] = [0.0, 0.831, 1.0];
pub const BACKDROP_PURPLE: [f32; 3] = [0.482, 0.173, 0.969];

const CORE_RADIUS: f32 = 0.8;
const CORE_ALPHA: f32 = 0.3;
const HALO_RADIUS: f32 = 1.2;
const HALO_ALPHA: f32 = 0.15;
const HALO_SCALE: f32 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub center: Vec3,
    pub radius: f32,
    pub color: [f32; 4],
}

pub struct HeroBackdrop {
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    time: f32,
}

impl HeroBackdrop {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut axis = || (rng.gen::<f32>() - 0.5) * CUBE_EXTENT;
        let positions: Vec<Vec3> = (0..count)
            .map(|_| Vec3::new(axis(), axis(), axis()))
            .collect();
        let colors = (0..count)
            .map(|_| {
                if rng.gen::<f32>() > 0.5 {
                    BACKDROP_BLUE
                } else {
                    BACKDROP_PURPLE
                }
            })
            .collect();
        Self {
            positions,
            colors,
            time: 0.0,
        }
    }

    pub fn tick(&mut self, dt_sec: f32) {
        let dt = dt_sec.clamp(0.0, 0.25);
        self.time += dt * TIME_RATE;
        let frames = dt * 60.0;
        let t = self.time;
        for p in self.positions.iter_mut() {
            p.y += (t + p.x * WAVE_SPATIAL).sin() * WAVE_STEP * frames;
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let t = self.time;
        Mat4::from_euler(EulerRot::XYZ, (t * 0.1).sin() * 0.2, t * 0.2, 0.0)
    }

    #[inline]
    pub fn pulse(&self) -> f32 {
        1.0 + (self.time * 2.0).sin() * 0.1
    }

    /// Core sphere and its larger halo, in draw order.
    pub fn orbs(&self) -> [Orb; 2] {
        let s = self.pulse();
        [
            Orb {
                center: Vec3::ZERO,
                radius: HALO_RADIUS * s * HALO_SCALE,
                color: [
                    BACKDROP_PURPLE[0],
                    BACKDROP_PURPLE[1],
                    BACKDROP_PURPLE[2],
                    HALO_ALPHA,
                ],
            },
            Orb {
                center: Vec3::ZERO,
                radius: CORE_RADIUS * s,
                color: [BACKDROP_BLUE[0], BACKDROP_BLUE[1], BACKDROP_BLUE[2], CORE_ALPHA],
            },
        ]
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
    pub fn time(&self) -> f32 {
        self.time
    }
}
