use std::path::{Path, PathBuf};

/// Failure to produce a source image for the previewer
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The file could not be opened or its format could not be guessed
    #[error("Failed to open image {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file was read but is not a decodable image
    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl PreviewError {
    pub fn path(&self) -> &Path {
        match self {
            PreviewError::Open { path, .. } | PreviewError::Decode { path, .. } => path,
        }
    }
}
