//! Hero tagline sequence: fade out, swap text, hold, repeat.

use super::timer::{Schedule, MAX_STEPS_PER_TICK};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaglineEvent {
    FadeOut,
    Show(usize),
}

#[derive(Clone, Debug)]
pub struct TaglineConfig {
    pub first_fade_ms: f64,
    pub fade_ms: f64,
    pub settle_ms: f64,
    pub pause_ms: f64,
}

impl Default for TaglineConfig {
    fn default() -> Self {
        Self {
            first_fade_ms: 3000.0,
            fade_ms: 600.0,
            settle_ms: 1500.0,
            pause_ms: 2000.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Visible,
    Fading,
}

pub struct TaglineRotator {
    count: usize,
    next: usize,
    phase: Phase,
    config: TaglineConfig,
    schedule: Schedule,
}

impl TaglineRotator {
    pub fn new(count: usize, config: TaglineConfig) -> Self {
        Self {
            count,
            next: 0,
            phase: Phase::Idle,
            config,
            schedule: Schedule::default(),
        }
    }

    /// Show the first line immediately and schedule the first fade.
    pub fn start(&mut self) -> Option<TaglineEvent> {
        if self.phase != Phase::Idle || self.count == 0 {
            return None;
        }
        self.next = 1 % self.count;
        self.phase = Phase::Visible;
        self.schedule.from_now(self.config.first_fade_ms);
        Some(TaglineEvent::Show(0))
    }

    pub fn dispose(&mut self) {
        self.phase = Phase::Idle;
        self.schedule.cancel();
    }

    pub fn tick(&mut self, dt_ms: f64, out: &mut Vec<TaglineEvent>) {
        self.schedule.advance(dt_ms);
        let mut steps = 0;
        while self.phase != Phase::Idle && self.schedule.is_due() && steps < MAX_STEPS_PER_TICK {
            match self.phase {
                Phase::Visible => {
                    out.push(TaglineEvent::FadeOut);
                    self.phase = Phase::Fading;
                    self.schedule.after(self.config.fade_ms);
                }
                Phase::Fading => {
                    out.push(TaglineEvent::Show(self.next));
                    self.next = (self.next + 1) % self.count;
                    self.phase = Phase::Visible;
                    self.schedule
                        .after(self.config.settle_ms + self.config.pause_ms);
                }
                Phase::Idle => {}
            }
            steps += 1;
        }
    }
}

pub const HERO_TAGLINES: [&str; 4] = [
    "We imagine what others ignore.",
    "We build what others won't.",
    "We test. We break. We learn.",
    "Expect the Unthinkable.",
];
