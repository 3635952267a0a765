use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Metadata captured when the source logo is decoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoMetadata {
    pub source: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Decodes a source logo into an RGBA8 buffer and records its metadata.
pub struct LogoReader {
    image: RgbaImage,
    pub metadata: LogoMetadata,
}

impl LogoReader {
    /// Open and decode the image at `path`, converting to RGBA8.
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path)?;
        let image = decoded.to_rgba8();
        let (width, height) = image.dimensions();
        info!("Loaded {:?}: {}x{}", path, width, height);

        Ok(LogoReader {
            image,
            metadata: LogoMetadata {
                source: path.to_path_buf(),
                width,
                height,
            },
        })
    }

    pub fn rgba(&self) -> &RgbaImage {
        &self.image
    }

    pub fn metadata(&self) -> &LogoMetadata {
        &self.metadata
    }
}
