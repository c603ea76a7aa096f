use image::imageops::FilterType;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{CompositionError, Result};
use crate::raster::Raster;

/// Resizes a set of input images to a single common size
///
/// The common size is the minimum width and minimum height across all
/// inputs, each taken independently. Inputs with very different proportions
/// are accepted and will be distorted rather than cropped or letterboxed.
pub struct Normalizer {
    parallel: bool,
}

impl Normalizer {
    pub fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    /// Compute the common target size for a set of inputs
    ///
    /// Fails with `TooFewImages` for fewer than two inputs, mirroring the
    /// validation the compositor would otherwise repeat.
    pub fn common_dimensions(&self, images: &[Raster]) -> Result<(u32, u32)> {
        if images.len() < 2 {
            return Err(CompositionError::TooFewImages {
                count: images.len(),
            }
            .into());
        }

        // Safe to unwrap the iterator minima: length checked above.
        let width = images.iter().map(Raster::width).min().unwrap_or(0);
        let height = images.iter().map(Raster::height).min().unwrap_or(0);

        Ok((width, height))
    }

    /// Produce resized copies of every input at the common size
    ///
    /// Output order matches input order. Each resize is independent, so the
    /// set is resized in parallel when enabled; results are collected back
    /// in order either way.
    pub fn normalize(&self, images: &[Raster]) -> Result<Vec<Raster>> {
        let target = self.common_dimensions(images)?;
        debug!("Normalizing {} images to {}x{}", images.len(), target.0, target.1);

        let resized = if self.parallel {
            images
                .par_iter()
                .map(|raster| Self::resize_to(raster, target))
                .collect()
        } else {
            images
                .iter()
                .map(|raster| Self::resize_to(raster, target))
                .collect()
        };

        Ok(resized)
    }

    /// Resize one raster to the target size with a high-quality filter
    ///
    /// Already-matching inputs are cloned instead of refiltered; the result
    /// is the same image either way since Lanczos at identity scale is a
    /// pass-through of the sample grid.
    fn resize_to(raster: &Raster, target: (u32, u32)) -> Raster {
        if raster.dimensions() == target {
            return raster.clone();
        }

        let resized = image::imageops::resize(
            raster.as_image(),
            target.0,
            target.1,
            FilterType::Lanczos3,
        );

        Raster::new(resized)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(true)
    }
}
