pub mod generator;
pub mod sculptor;
pub mod triangulate;

pub use generator::{generate, generate_with, SurfaceGenerator, SEGMENTS};
pub use sculptor::Sculptor;
pub use triangulate::TriangleMesh;
