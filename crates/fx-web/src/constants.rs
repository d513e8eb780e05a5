//! Front-end wiring and rendering constants.

// DOM element ids the page must provide
pub const GRID_CANVAS_ID: &str = "grid-canvas";
pub const VISUALIZER_CANVAS_ID: &str = "visualizer-canvas";
pub const TITLE_ID: &str = "page-title";

// Seed for the frame tracker's RNG; fixed so reloads feel familiar
pub const FRAME_TRACKER_SEED: u64 = 42;

// Point sprite sizes in world units
pub const PARTICLE_SIZE: f32 = 0.08;
pub const FRAME_BASE_SIZE: f32 = 0.1;

// Sprite alpha
pub const PARTICLE_ALPHA: f32 = 0.65;
pub const FRAME_ALPHA: f32 = 0.9;
