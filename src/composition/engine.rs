use tracing::{debug, info};

use crate::{
    composition::{compositor, normalizer::Normalizer, Direction},
    config::Config,
    error::Result,
    raster::Raster,
};

/// Main engine that turns an ordered set of images into one stitched output
///
/// The engine follows a two-stage pipeline:
/// 1. Normalization - resize every input to the common minimum size
/// 2. Composition - paste the normalized images into one canvas at
///    cumulative offsets along the chosen axis
pub struct StitchEngine {
    config: Config,
}

impl StitchEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Stitch the images together along the given axis
    ///
    /// Order is significant: the first image ends up leftmost (horizontal)
    /// or topmost (vertical). Inputs are read-only; the result is a freshly
    /// allocated raster with no aliasing to the inputs. Composition is
    /// all-or-nothing - any failure aborts without producing a partial
    /// result.
    pub fn compose(&self, images: &[Raster], direction: Direction) -> Result<Raster> {
        info!("Starting composition: {} images, {} layout", images.len(), direction);

        for (index, raster) in images.iter().enumerate() {
            debug!("Input {}: {}x{}", index, raster.width(), raster.height());
        }

        // Stage 1: Normalization
        let normalizer = Normalizer::new(self.config.composition.parallel_normalization);
        let normalized = normalizer.normalize(images)?;

        let common = normalized[0].dimensions();
        info!("   Normalized {} images to {}x{}", normalized.len(), common.0, common.1);

        // Stage 2: Composition
        let output = compositor::composite(&normalized, direction);

        info!(
            "   Composition complete: {}x{} output canvas",
            output.width(),
            output.height()
        );

        Ok(output)
    }
}

impl Default for StitchEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
