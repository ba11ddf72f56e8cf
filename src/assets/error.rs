use thiserror::Error;

/// Failures while producing image assets
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no usable font found (tried {0})")]
    FontUnavailable(String),

    #[error("could not parse font data from {0}")]
    FontParse(String),

    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
