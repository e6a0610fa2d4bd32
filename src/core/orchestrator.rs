//! Coordination between the scroll mapper and the particle field for one
//! section.

use super::constants::{
    HOVER_ELEVATED, HOVER_RESTING, PARTICLE_COUNT, SECTION_VISIBILITY_THRESHOLD,
};
use super::particles::{ParticleField, ParticleFieldConfig};
use super::scroll::{ProgressEvent, ScrollProgressMapper, SectionLayout};
use super::shapes::ShapeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionState {
    Uninitialized,
    Observing,
    Active,
    TornDown,
}

#[derive(Clone, Debug)]
pub struct OrchestratorConfig {
    pub item_count: usize,
    pub initial_shape: ShapeId,
    pub visibility_threshold: f32,
    pub hover_resting: f32,
    pub hover_elevated: f32,
    pub particles: ParticleFieldConfig,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            item_count: ShapeId::ALL.len(),
            initial_shape: ShapeId::Bracket,
            visibility_threshold: SECTION_VISIBILITY_THRESHOLD,
            hover_resting: HOVER_RESTING,
            hover_elevated: HOVER_ELEVATED,
            particles: ParticleFieldConfig {
                count: PARTICLE_COUNT,
                ..Default::default()
            },
        }
    }
}

pub struct SectionOrchestrator {
    config: OrchestratorConfig,
    state: SectionState,
    field: Option<ParticleField>,
    mapper: ScrollProgressMapper,
    pending_scroll: Option<f64>,
}

impl SectionOrchestrator {
    pub fn new(config: OrchestratorConfig) -> Self {
        let mapper = ScrollProgressMapper::new(config.item_count);
        Self {
            config,
            state: SectionState::Uninitialized,
            field: None,
            mapper,
            pending_scroll: None,
        }
    }

    pub fn observe(&mut self) {
        if self.state == SectionState::Uninitialized {
            self.state = SectionState::Observing;
        }
    }

    /// Feed an intersection notification. Returns `true` only on the call
    /// that activates the section.
    pub fn on_visibility(&mut self, ratio: f32, layout: SectionLayout, scroll_y: f64) -> bool {
        match self.state {
            SectionState::Observing if ratio >= self.config.visibility_threshold => {
                self.field = Some(ParticleField::with_config(
                    self.config.particles.clone(),
                    self.config.initial_shape,
                ));
                self.state = SectionState::Active;
                self.mapper.set_layout(layout);
                self.apply_scroll(scroll_y);
                log::debug!("[services] section active");
                true
            }
            SectionState::Active if ratio > 0.0 => {
                // layout may have shifted while off screen
                self.mapper.set_layout(layout);
                self.pending_scroll = Some(scroll_y);
                false
            }
            _ => false,
        }
    }

    pub fn on_resize(&mut self, layout: SectionLayout, scroll_y: f64) {
        if self.state != SectionState::Active {
            return;
        }
        self.mapper.set_layout(layout);
        self.pending_scroll = None;
        self.apply_scroll(scroll_y);
    }

    /// Record the newest scroll position; it is applied once at the start
    /// of the next frame. Returns `true` when this is the first scroll since
    /// the last frame.
    pub fn queue_scroll(&mut self, scroll_y: f64) -> bool {
        if self.state != SectionState::Active {
            return false;
        }
        self.pending_scroll.replace(scroll_y).is_none()
    }

    pub fn on_pointer(&mut self, ndc_x: f32, ndc_y: f32) {
        if let Some(field) = self.active_field() {
            field.set_pointer(ndc_x, ndc_y);
        }
    }

    pub fn on_hover(&mut self, entered: bool) {
        let k = if entered {
            self.config.hover_elevated
        } else {
            self.config.hover_resting
        };
        if let Some(field) = self.active_field() {
            field.set_hover_intensity(k);
        }
    }

    pub fn frame(&mut self, elapsed_sec: f32) {
        if self.state != SectionState::Active {
            return;
        }
        if let Some(y) = self.pending_scroll.take() {
            self.apply_scroll(y);
        }
        if let Some(field) = self.field.as_mut() {
            field.tick(elapsed_sec);
        }
    }

    pub fn teardown(&mut self) {
        self.state = SectionState::TornDown;
        self.field = None;
        self.pending_scroll = None;
        log::debug!("[services] section torn down");
    }

    fn apply_scroll(&mut self, scroll_y: f64) {
        let event = self.mapper.update(scroll_y);
        if let Some(field) = self.field.as_mut() {
            forward_progress(field, &event);
        }
    }

    fn active_field(&mut self) -> Option<&mut ParticleField> {
        match self.state {
            SectionState::Active => self.field.as_mut(),
            _ => None,
        }
    }

    #[inline]
    pub fn state(&self) -> SectionState {
        self.state
    }
    #[inline]
    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }
    #[inline]
    pub fn mapper(&self) -> &ScrollProgressMapper {
        &self.mapper
    }
    #[inline]
    pub fn mapper_mut(&mut self) -> &mut ScrollProgressMapper {
        &mut self.mapper
    }
    #[inline]
    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }
}

fn forward_progress(field: &mut ParticleField, event: &ProgressEvent) {
    field.set_target_shape(event.active_index);
    field.set_morph_progress(event.segment_progress());
}
