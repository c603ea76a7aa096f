use thiserror::Error;

/// Main error type for the image-stitcher library
#[derive(Error, Debug)]
pub enum StitcherError {
    #[error("Raster processing error: {0}")]
    Raster(#[from] RasterError),

    #[error("Composition error: {0}")]
    Composition(#[from] CompositionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Raster codec and file errors
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Failed to decode image: {reason}")]
    DecodeFailed { reason: String },

    #[error("Failed to encode image: {reason}")]
    EncodeFailed { reason: String },

    #[error("Failed to load image file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save image file: {path}")]
    SaveFailed { path: String },
}

/// Composition-specific errors
#[derive(Error, Debug)]
pub enum CompositionError {
    #[error("Need at least two images, got {count}")]
    TooFewImages { count: usize },

    #[error("Invalid direction: {value}. Choose 'horizontal' or 'vertical'")]
    InvalidDirection { value: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using StitcherError
pub type Result<T> = std::result::Result<T, StitcherError>;

impl StitcherError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Raster(RasterError::LoadFailed { path }) => {
                format!("Could not load image '{}'. Please check the file exists and is a JPEG or PNG.", path)
            }
            Self::Raster(RasterError::DecodeFailed { reason }) => {
                format!("Could not decode image data: {}", reason)
            }
            Self::Composition(CompositionError::TooFewImages { .. }) => {
                "Need at least two images to stitch.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_images_message() {
        let err: StitcherError = CompositionError::TooFewImages { count: 1 }.into();
        assert!(err.to_string().contains("at least two images"));
    }

    #[test]
    fn test_invalid_direction_message() {
        let err: StitcherError = CompositionError::InvalidDirection {
            value: "diagonal".to_string(),
        }
        .into();
        assert!(err.to_string().contains("diagonal"));
        assert!(err.to_string().contains("horizontal"));
    }

    #[test]
    fn test_user_message_for_load_failure() {
        let err: StitcherError = RasterError::LoadFailed {
            path: "missing.png".to_string(),
        }
        .into();
        assert!(err.user_message().contains("missing.png"));
    }
}
