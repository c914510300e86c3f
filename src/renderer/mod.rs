//! Rendering module
//!
//! `Scene` records what the simulation draws; `shapes` turns it into
//! triangles for the WebGPU pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Item, Scene, TextItem};
pub use vertex::Vertex;
