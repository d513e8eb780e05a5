pub mod camera;
pub mod constants;
pub mod field;
pub mod frames;
pub mod grid;
pub mod mesh;
pub mod mode;
pub mod pointer;

pub use camera::*;
pub use field::{position, total_particle_count, write_positions, FieldKind};
pub use frames::*;
pub use grid::*;
pub use mesh::WaveMesh;
pub use mode::*;
pub use pointer::*;
