//! # Image-Stitcher
//!
//! Stitch two or more images into one by concatenating them horizontally or
//! vertically.
//!
//! Inputs are first normalized to a common size - the minimum width and
//! minimum height across the whole set, resized with a Lanczos filter - and
//! then pasted side by side (or top to bottom) into a freshly allocated
//! output canvas.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use image_stitcher::{
//!     composition::{Direction, StitchEngine},
//!     config::Config,
//!     raster,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let images = vec![
//!     raster::load("left.jpg")?,
//!     raster::load("right.png")?,
//! ];
//!
//! let engine = StitchEngine::new(Config::default());
//! let stitched = engine.compose(&images, Direction::Horizontal)?;
//!
//! raster::save_png(&stitched, "stitched.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into a few key modules:
//!
//! - [`raster`] - Raster image types and the decode/encode boundary
//! - [`composition`] - Normalization and canvas composition
//! - [`config`] - Configuration management

pub mod composition;
pub mod config;
pub mod error;
pub mod raster;

// Re-export commonly used types for convenience
pub use crate::{
    composition::{Direction, StitchEngine},
    config::Config,
    error::{Result, StitcherError},
    raster::Raster,
};
