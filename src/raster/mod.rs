//! # Raster Module
//!
//! Raster image types and the decode/encode boundary around them.

pub mod codec;
pub mod types;

pub use codec::{decode, encode_png, load, save_png};
pub use types::Raster;
