//! I/O layer for reading source logos and writing favicon assets.
//! Provides the `reader` for decoding input rasters and `writers` for
//! PNG and multi-resolution ICO outputs.
pub mod reader;
pub use reader::{LogoMetadata, LogoReader};

pub mod writers;
