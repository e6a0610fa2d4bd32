//! Smoothed cursor dot and trailing glow.

use super::constants::{CURSOR_DOT_FOLLOW, CURSOR_GLOW_FOLLOW, CURSOR_MIN_VIEWPORT_WIDTH};
use super::easing::approach;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFrame {
    pub dot: Vec2,
    pub glow: Vec2,
    pub visible: bool,
    pub glow_active: bool,
    pub hover: bool,
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    target: Vec2,
    dot: Vec2,
    glow: Vec2,
    dot_rate: f32,
    glow_rate: f32,
    visible: bool,
    glow_active: bool,
    hover_depth: u32,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CURSOR_DOT_FOLLOW, CURSOR_GLOW_FOLLOW)
    }
}

impl CursorFollower {
    pub fn new(dot_rate: f32, glow_rate: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            dot: Vec2::ZERO,
            glow: Vec2::ZERO,
            dot_rate: dot_rate.clamp(0.0, 1.0),
            glow_rate: glow_rate.clamp(0.0, 1.0),
            visible: true,
            glow_active: false,
            hover_depth: 0,
        }
    }

    /// Custom cursors only make sense with a mouse-sized viewport.
    #[inline]
    pub fn enabled_for_viewport(width: f32) -> bool {
        width >= CURSOR_MIN_VIEWPORT_WIDTH
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
        self.visible = true;
        self.glow_active = true;
    }

    pub fn pointer_left(&mut self) {
        self.visible = false;
        self.glow_active = false;
    }

    pub fn pointer_entered(&mut self) {
        self.visible = true;
    }

    /// Interactive elements may be nested, so hover is counted.
    pub fn hover_enter(&mut self) {
        self.hover_depth += 1;
    }

    pub fn hover_leave(&mut self) {
        self.hover_depth = self.hover_depth.saturating_sub(1);
    }

    pub fn tick(&mut self) -> CursorFrame {
        self.dot = Vec2::new(
            approach(self.dot.x, self.target.x, self.dot_rate),
            approach(self.dot.y, self.target.y, self.dot_rate),
        );
        self.glow = Vec2::new(
            approach(self.glow.x, self.target.x, self.glow_rate),
            approach(self.glow.y, self.target.y, self.glow_rate),
        );
        self.frame()
    }

    #[inline]
    pub fn frame(&self) -> CursorFrame {
        CursorFrame {
            dot: self.dot,
            glow: self.glow,
            visible: self.visible,
            glow_active: self.glow_active,
            hover: self.hover_depth > 0,
        }
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }
}
