//! High-level, ergonomic library API: process a logo to an in-memory buffer
//! or export the complete favicon asset set to a directory. Prefer these
//! entrypoints over low-level processing modules when integrating FAVGEN.
use std::path::{Path, PathBuf};

use crate::core::params::{DEFAULT_ASSETS, ExportParams};
use crate::core::processing::pipeline::process_logo_pipeline;
use crate::core::processing::save::export_asset_set;
use crate::error::{Error, Result};
use crate::io::reader::{LogoMetadata, LogoReader};

/// Result of in-memory processing: the cropped, chroma-keyed logo.
#[derive(Debug, Clone)]
pub struct ProcessedLogo {
    pub width: u32,
    pub height: u32,
    /// Interleaved RGBA8, row-major
    pub rgba: Vec<u8>,
    pub metadata: LogoMetadata,
}

/// Report of a completed export run.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
}

impl ExportReport {
    pub fn count(&self) -> usize {
        self.written.len()
    }
}

/// Process a source logo to in-memory buffers (no disk output).
pub fn process_logo_to_buffer(input: &Path, params: &ExportParams) -> Result<ProcessedLogo> {
    let reader = LogoReader::open(input)?;
    let metadata = reader.metadata().clone();
    let processed = process_logo_pipeline(reader.rgba(), params)?;
    let (width, height) = processed.dimensions();

    Ok(ProcessedLogo {
        width,
        height,
        rgba: processed.into_raw(),
        metadata,
    })
}

/// Load, process, and export the full asset set into `output_dir`,
/// creating the directory if absent.
pub fn generate_assets_to_dir(
    input: &Path,
    output_dir: &Path,
    params: &ExportParams,
) -> Result<ExportReport> {
    let reader = LogoReader::open(input)?;
    let processed = process_logo_pipeline(reader.rgba(), params)?;
    let written = export_asset_set(&processed, output_dir, DEFAULT_ASSETS, params.compositing)?;
    Ok(ExportReport { written })
}

/// Load `ExportParams` from a JSON preset file.
pub fn load_params_preset(path: &Path) -> Result<ExportParams> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(Error::external)
}
