//! Demo error types.

use starfield_config::ConfigError;

/// Errors that abort a demo run.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Configuration could not be located or loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Png(#[from] png::EncodingError),

    /// Writing the output image failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
