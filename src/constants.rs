/// Browser-side tuning: cameras, sprite sizing, and the DOM contract.
///
/// Numbers that shape the animation itself live in `core::constants`; these
/// only concern how the page is measured and drawn.
// Rendering
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const SERVICES_CAMERA_Z: f32 = 5.0;
pub const SERVICES_FOV_DEG: f32 = 75.0;
pub const HERO_CAMERA_Z: f32 = 5.0;
pub const HERO_FOV_DEG: f32 = 75.0;

// Sprite half-sizes in world units
pub const SERVICES_SIZE_SCALE: f32 = 0.3; // times the per-particle base size
pub const SERVICES_SIZE_PULSE: f32 = 0.1;
pub const HERO_PARTICLE_SIZE: f32 = 0.025;
pub const HERO_PARTICLE_ALPHA: f32 = 0.8;
pub const GRAPH_NODE_SIZE: f32 = 0.075;
pub const GRAPH_NODE_ALPHA: f32 = 0.8;
pub const GRAPH_EDGE_HALF_WIDTH: f32 = 0.006;
pub const GRAPH_EDGE_COLOR: [f32; 3] = [0.0, 0.83, 1.0];

// Fallback canvas size when layout has not happened yet
pub const FALLBACK_CANVAS_WIDTH_FRACTION: f64 = 0.5;

// Visibility
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "50px 0px";
pub const SERVICES_ROOT_MARGIN: &str = "100px";
pub const TERMINAL_THRESHOLD: f64 = 0.3;
pub const GRAPH_THRESHOLD: f64 = 0.1;

// DOM ids
pub const ID_SERVICES_CANVAS: &str = "services-canvas";
pub const ID_SERVICES_SECTION: &str = "what-we-build";
pub const ID_SERVICES_CARDS: &str = "services-cards-container";
pub const ID_HERO_CANVAS: &str = "hero-canvas";
pub const ID_HERO_TAGLINE: &str = "hero-tagline";
pub const ID_RESEARCH_VISUAL: &str = "research-visual";
pub const ID_RESEARCH_TERMINAL: &str = "terminal-text";
pub const ID_TERMINAL_COMMAND: &str = "terminal-command";
pub const ID_TERMINAL_OUTPUT: &str = "terminal-output";
pub const ID_TERMINAL_CURSOR: &str = "terminal-cursor";
pub const ID_NAV: &str = "main-nav";
pub const ID_NAV_TOGGLE: &str = "nav-toggle";
pub const ID_NAV_LINKS: &str = "nav-links";
pub const ID_CONTACT_FORM: &str = "contact-form";
pub const ID_CONTACT_NAME: &str = "name";
pub const ID_CONTACT_EMAIL: &str = "email";
pub const ID_CONTACT_SUBJECT: &str = "subject";
pub const ID_CONTACT_MESSAGE: &str = "message";

// DOM selectors
pub const SEL_SERVICE_CARD: &str = ".service-card";
pub const SEL_TERMINAL_CONTAINER: &str = ".terminal-container";
pub const SEL_REVEAL: &str = ".fade-in-up";
pub const SEL_SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const SEL_NAV_LINKS: &str = ".nav-link, .nav-cta";
pub const SEL_INTERACTIVE: &str =
    "a, button, .service-card, .btn, .nav-link, .research-statement, canvas";

// CSS classes
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_HOVER: &str = "hover";
pub const CLASS_CANVAS_HOVER: &str = "canvas-hover";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ANIMATE_IN: &str = "animate-in";
pub const CLASS_FADE_OUT: &str = "fade-out";
pub const CLASS_ANIMATING: &str = "animating";
pub const CLASS_CURSOR: &str = "custom-cursor";
pub const CLASS_CURSOR_GLOW: &str = "cursor-glow";
