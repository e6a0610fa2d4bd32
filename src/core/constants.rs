/// Particle, scroll and cursor tuning constants.
///
/// These are tuned by eye. They carry no physical meaning beyond "looks
/// right at 60 fps", so keep them named here instead of inlined.
// Particle field
pub const PARTICLE_COUNT: usize = 800;
pub const POINTER_WORLD_SCALE: f32 = 5.0; // NDC -> world units at z = 0
pub const REPULSION_RADIUS: f32 = 2.0;
pub const REPULSION_FORCE: f32 = 0.5;
pub const DRIFT_AMPLITUDE: f32 = 0.01;
pub const DRIFT_FREQ_X: f32 = 0.5;
pub const DRIFT_FREQ_Y: f32 = 0.3;
pub const DRIFT_PHASE_PER_PARTICLE: f32 = 0.01;
pub const SETTLE_JITTER: f32 = 0.05; // full width, bracket shape only
pub const SETTLE_JITTER_THRESHOLD: f32 = 0.8;
pub const INDEX_CONVERGENCE_RATE: f32 = 0.1; // fraction of the gap per frame
pub const INDEX_SNAP_EPSILON: f32 = 0.01;
pub const MODEL_YAW_RATE: f32 = 0.1;
pub const MODEL_PITCH_RATE: f32 = 0.05;
pub const MODEL_PITCH_AMPLITUDE: f32 = 0.1;

// Particle palette
pub const COLOR_CYAN: [f32; 3] = [0.0, 0.83, 1.0];
pub const COLOR_PURPLE: [f32; 3] = [0.48, 0.17, 0.97];
pub const PARTICLE_SIZE_MIN: f32 = 0.03;
pub const PARTICLE_SIZE_SPAN: f32 = 0.02;

// Hover intensity
pub const HOVER_RESTING: f32 = 1.0;
pub const HOVER_ELEVATED: f32 = 1.5;

// Scroll mapping
pub const INACTIVE_SCALE: f32 = 0.9;
pub const INACTIVE_OPACITY: f32 = 0.6;
pub const DEFAULT_ITEM_WIDTH: f32 = 400.0;
pub const DEFAULT_ITEM_SPACING: f32 = 100.0;
pub const SECTION_VISIBILITY_THRESHOLD: f32 = 0.1;

// Cursor follower
pub const CURSOR_DOT_FOLLOW: f32 = 0.15;
pub const CURSOR_GLOW_FOLLOW: f32 = 0.08;
pub const CURSOR_MIN_VIEWPORT_WIDTH: f32 = 768.0;

// Navigation
pub const NAV_SCROLLED_OFFSET: f64 = 100.0;
