//! Simulation tuning constants.
//!
//! Most of these are tuned for visual feel rather than derived from any
//! model; treat them as configuration, not algorithm.

// Pointer idle sentinel (far off-screen so no grid point is in range)
pub const POINTER_OFFSCREEN: f32 = -1000.0;

// Ripple wavefront: radius grows and opacity fades by a fixed step per tick
pub const RIPPLE_SPEED: f32 = 8.0; // px of radius per tick
pub const RIPPLE_DECAY: f32 = 0.02; // opacity lost per tick
pub const RIPPLE_STRENGTH: f32 = 50.0; // peak displacement in px
pub const RIPPLE_BAND_WIDTH: f32 = 60.0; // wavefront thickness in px
pub const RIPPLE_GAUSS_SHARPNESS: f32 = 4.0;

// Force grid lattice
pub const GRID_SPACING: f32 = 40.0;
pub const GRID_MARGIN: usize = 2; // extra cols/rows past the viewport edge
pub const GRID_EASING: f32 = 0.15; // per-tick exponential smoothing factor

// Pointer lens effect (points bulge away from the cursor)
pub const POINTER_RADIUS: f32 = 300.0;
pub const POINTER_STRENGTH: f32 = 0.5; // 0..1
pub const POINTER_MAX_DISPLACEMENT: f32 = 40.0;

// Base line opacity of the grid
pub const SEGMENT_BASE_OPACITY: f32 = 0.04;

// Focus-mode hint: sinusoidal jitter near the title while focus is off
pub const HINT_POINTER_RANGE: f32 = 300.0;
pub const HINT_POINT_RANGE: f32 = 200.0;
pub const HINT_JITTER_AMPLITUDE: f32 = 5.0;
pub const HINT_JITTER_SPATIAL_FREQ: f32 = 0.1;
pub const HINT_JITTER_TIME_FREQ: f32 = 10.0;

// Segment darkening around the cursor when it approaches the title
pub const DARKEN_ACTIVATION_RANGE: f32 = 200.0;
pub const DARKEN_RADIUS: f32 = 350.0;
pub const DARKEN_FALLOFF_EXP: f32 = 2.5;
pub const DARKEN_SPAN: f32 = 0.96; // added on top of the base opacity

// Planar wave field lattice
pub const WAVE_ROWS: usize = 40;
pub const WAVE_SAMPLES_PER_ROW: usize = 100;
pub const WAVE_WIDTH: f32 = 35.0;
pub const WAVE_DEPTH: f32 = 15.0;
pub const WAVE_Z_OFFSET: f32 = -5.0;
pub const WAVE_Y_OFFSET: f32 = -2.0;

// Radial spectrum field lattice
pub const RADIAL_RINGS: usize = 40;
pub const RADIAL_SAMPLES_PER_RING: usize = 100;
pub const RADIAL_INNER_RADIUS: f32 = 2.0;
pub const RADIAL_SPAN: f32 = 12.0;
pub const RADIAL_Z_OFFSET: f32 = -6.0;
pub const RADIAL_Y_OFFSET: f32 = -3.0;

// Focus-mode wave mesh (2D perspective projection)
pub const MESH_GRID_SIZE: usize = 50;
pub const MESH_FOV: f32 = 350.0;
pub const MESH_VIEW_DISTANCE: f32 = 300.0;
pub const MESH_WIDTH: f32 = 2500.0;
pub const MESH_DEPTH: f32 = 2500.0;
pub const MESH_TIME_RATE: f32 = 0.5; // time units per tick
pub const MESH_HEIGHT_OFFSET: f32 = 150.0;
pub const MESH_POINTER_AMP_GAIN: f32 = 2.0;

// Tracked frames
pub const FRAME_COUNT: usize = 10;
pub const REASSIGN_INTERVAL_SEC: f32 = 1.5;
pub const CONNECTION_INTERVAL_SEC: f32 = 0.25;
pub const FRAME_EASING: f32 = 0.12;
pub const FRAME_SCALE_RATE: f32 = 2.2; // rad/sec of the oscillating scale
pub const AMP_MIN: f32 = 1.0;
pub const AMP_MAX: f32 = 5.0;
pub const AMP_GAIN: f32 = 1.6;

// Visualizer camera (fixed view over both particle fields)
pub const CAMERA_EYE: [f32; 3] = [0.0, 2.0, 10.0];
pub const CAMERA_FOVY_DEG: f32 = 55.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
