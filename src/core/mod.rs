pub mod backdrop;
pub mod camera;
pub mod constants;
pub mod contact;
pub mod cursor;
pub mod easing;
pub mod nav;
pub mod node_graph;
pub mod orchestrator;
pub mod particles;
pub mod scroll;
pub mod shapes;
pub mod tagline;
pub mod timer;
pub mod typewriter;

pub use camera::Camera;
pub use easing::ease_in_out_cubic;
pub use orchestrator::{OrchestratorConfig, SectionOrchestrator, SectionState};
pub use particles::{ParticleField, ParticleFieldConfig};
pub use scroll::{ProgressEvent, ProgressObserver, ScrollProgressMapper, SectionLayout};
pub use shapes::{ShapeId, ShapeTemplate};

// Shaders bundled as string constants
pub static SPRITES_WGSL: &str = include_str!("../../shaders/sprites.wgsl");
pub static LINES_WGSL: &str = include_str!("../../shaders/lines.wgsl");
