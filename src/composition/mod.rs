//! # Composition Module
//!
//! The composition pipeline: normalize input images to a common size, then
//! concatenate them along the chosen axis into a single output canvas.

pub mod compositor;
pub mod engine;
pub mod normalizer;

// Re-exports for convenience
pub use compositor::Direction;
pub use engine::StitchEngine;
pub use normalizer::Normalizer;
