//! Vertical scroll → horizontal card track mapping.

use super::constants::{
    DEFAULT_ITEM_SPACING, DEFAULT_ITEM_WIDTH, INACTIVE_OPACITY, INACTIVE_SCALE,
};

/// Document-space measurement of the scroll-mapped container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionLayout {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollBounds {
    pub start: f64,
    pub end: f64,
}

impl ScrollBounds {
    pub fn from_layout(layout: &SectionLayout) -> Self {
        let half = layout.viewport_height * 0.5;
        Self {
            start: layout.top - half,
            end: layout.top + layout.height + half,
        }
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.end - self.start
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.range() > 0.0)
    }

    /// Normalized position of `scroll_y` within the bounds.
    pub fn progress(&self, scroll_y: f64) -> f32 {
        if scroll_y < self.start {
            0.0
        } else if scroll_y > self.end || self.is_degenerate() {
            1.0
        } else {
            ((scroll_y - self.start) / self.range()).clamp(0.0, 1.0) as f32
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressEvent {
    pub progress: f32,
    pub active_index: usize,
    pub item_count: usize,
}

impl ProgressEvent {
    /// Progress inside the current item-to-item transition.
    pub fn segment_progress(&self) -> f32 {
        if self.item_count > 1 {
            (self.progress * (self.item_count - 1) as f32).fract()
        } else {
            1.0
        }
    }
}

/// Receives every progress change computed by a [`ScrollProgressMapper`].
pub trait ProgressObserver {
    fn progress_changed(&mut self, event: &ProgressEvent);
}

impl<F: FnMut(&ProgressEvent)> ProgressObserver for F {
    fn progress_changed(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    pub translate_x: f32,
    pub scale: f32,
    pub opacity: f32,
    pub active: bool,
}

#[inline]
pub fn active_index(progress: f32, item_count: usize) -> usize {
    if item_count <= 1 || progress.is_nan() {
        return 0;
    }
    let last = item_count - 1;
    let raw = (progress.clamp(0.0, 1.0) * last as f32).floor();
    (raw.max(0.0) as usize).min(last)
}

/// Transform for one item on a track that centers `active` in the viewport.
/// The translate is shared by every item, so the row moves as one.
pub fn item_transform(
    index: usize,
    active: usize,
    item_width: f32,
    spacing: f32,
    viewport_width: f32,
) -> ItemTransform {
    let center_x = viewport_width * 0.5 - item_width * 0.5;
    let translate_x = center_x - active as f32 * (item_width + spacing);
    let is_active = index == active;
    ItemTransform {
        translate_x,
        scale: if is_active { 1.0 } else { INACTIVE_SCALE },
        opacity: if is_active { 1.0 } else { INACTIVE_OPACITY },
        active: is_active,
    }
}

pub struct ScrollProgressMapper {
    item_count: usize,
    layout: SectionLayout,
    bounds: ScrollBounds,
    progress: f32,
    active_index: usize,
    item_width: f32,
    item_spacing: f32,
    observers: Vec<Box<dyn ProgressObserver>>,
}

impl ScrollProgressMapper {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            layout: SectionLayout::default(),
            bounds: ScrollBounds::default(),
            progress: 0.0,
            active_index: 0,
            item_width: DEFAULT_ITEM_WIDTH,
            item_spacing: DEFAULT_ITEM_SPACING,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl ProgressObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Store a fresh measurement and derive the scroll range from it.
    pub fn set_layout(&mut self, layout: SectionLayout) {
        self.layout = layout;
        self.recompute_bounds();
    }

    pub fn recompute_bounds(&mut self) {
        self.bounds = ScrollBounds::from_layout(&self.layout);
    }

    /// Item width measured from the DOM; non-positive falls back to the
    /// default.
    pub fn set_item_metrics(&mut self, width: f32, spacing: f32) {
        self.item_width = if width > 0.0 { width } else { DEFAULT_ITEM_WIDTH };
        self.item_spacing = spacing.max(0.0);
    }

    pub fn update(&mut self, scroll_y: f64) -> ProgressEvent {
        if self.bounds.is_degenerate() {
            self.recompute_bounds();
        }
        self.progress = self.bounds.progress(scroll_y);
        self.active_index = active_index(self.progress, self.item_count);
        let event = self.event();
        for observer in self.observers.iter_mut() {
            observer.progress_changed(&event);
        }
        event
    }

    /// Write one transform per item into `out`, reusing its allocation.
    pub fn layout_items(&self, viewport_width: f32, out: &mut Vec<ItemTransform>) {
        out.clear();
        out.extend((0..self.item_count).map(|i| {
            item_transform(
                i,
                self.active_index,
                self.item_width,
                self.item_spacing,
                viewport_width,
            )
        }));
    }

    #[inline]
    pub fn event(&self) -> ProgressEvent {
        ProgressEvent {
            progress: self.progress,
            active_index: self.active_index,
            item_count: self.item_count,
        }
    }
    #[inline]
    pub fn bounds(&self) -> ScrollBounds {
        self.bounds
    }
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }
    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }
}
