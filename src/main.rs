use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber;

use image_stitcher::{
    composition::{Direction, StitchEngine},
    config::Config,
    raster,
};

#[derive(Parser)]
#[command(
    name = "image-stitcher",
    version,
    about = "Stitch two or more images into one",
    long_about = "Image-Stitcher resizes a set of images to a common size and concatenates them horizontally or vertically into a single PNG."
)]
struct Cli {
    /// Input image files in placement order (JPEG or PNG, at least two)
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,

    /// Concatenation axis (horizontal or vertical)
    #[arg(short, long)]
    direction: Option<String>,

    /// Output PNG file path
    #[arg(short, long, default_value = "stitched.png")]
    output: PathBuf,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting Image-Stitcher v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => Config::default(),
    };
    config.validate()?;

    // Size the rayon pool used for parallel normalization. Ignore the
    // error if another component already initialized the global pool.
    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(config.composition.worker_threads)
        .build_global();

    // Direction comes from the CLI, falling back to the configured default
    let direction = match &cli.direction {
        Some(value) => value.parse::<Direction>()?,
        None => config.output.default_direction,
    };

    info!("Inputs: {} files", cli.images.len());
    info!("Direction: {}", direction);
    info!("Output: {:?}", cli.output);

    // Decode all inputs in order
    let mut images = Vec::with_capacity(cli.images.len());
    for path in &cli.images {
        if !raster::codec::is_supported_extension(path) {
            anyhow::bail!("Unsupported input format: {:?} (expected .jpg, .jpeg or .png)", path);
        }

        let raster = raster::load(path)?;
        info!("   Loaded {:?}: {}x{}", path, raster.width(), raster.height());
        images.push(raster);
    }

    // Compose and write out
    let engine = StitchEngine::new(config);
    let stitched = engine.compose(&images, direction)?;

    raster::save_png(&stitched, &cli.output)?;

    info!(
        "Done! {}x{} image saved to: {:?}",
        stitched.width(),
        stitched.height(),
        cli.output
    );
    Ok(())
}
