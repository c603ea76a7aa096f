use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CompositionError;
use crate::raster::Raster;

/// Axis along which normalized images are concatenated
///
/// The closed enum makes invalid directions unrepresentable in typed call
/// paths; only string parsing (CLI, config) can produce
/// [`CompositionError::InvalidDirection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Get the canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl FromStr for Direction {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(CompositionError::InvalidDirection {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concatenate a sequence of same-sized rasters along the given axis
///
/// The caller guarantees all inputs share identical dimensions (the
/// normalizer's invariant). The canvas is allocated at the exact combined
/// size and each image is copied at its cumulative offset, so every output
/// pixel is written exactly once. Inputs are never mutated.
pub fn composite(images: &[Raster], direction: Direction) -> Raster {
    let canvas_size = canvas_dimensions(images, direction);
    let mut canvas = image::RgbImage::new(canvas_size.0, canvas_size.1);

    let mut offset = 0u32;
    for (index, raster) in images.iter().enumerate() {
        let (x, y) = match direction {
            Direction::Horizontal => (offset, 0),
            Direction::Vertical => (0, offset),
        };

        debug!("Placing image {} at ({}, {})", index, x, y);
        image::imageops::replace(&mut canvas, raster.as_image(), x as i64, y as i64);

        offset += match direction {
            Direction::Horizontal => raster.width(),
            Direction::Vertical => raster.height(),
        };
    }

    Raster::new(canvas)
}

/// Compute the output canvas dimensions for the given axis
///
/// Horizontal: (sum of widths, shared height). Vertical: (shared width,
/// sum of heights).
pub fn canvas_dimensions(images: &[Raster], direction: Direction) -> (u32, u32) {
    match direction {
        Direction::Horizontal => {
            let width = images.iter().map(Raster::width).sum();
            let height = images.first().map(Raster::height).unwrap_or(0);
            (width, height)
        }
        Direction::Vertical => {
            let width = images.first().map(Raster::width).unwrap_or(0);
            let height = images.iter().map(Raster::height).sum();
            (width, height)
        }
    }
}
