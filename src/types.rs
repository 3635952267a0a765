//! Shared types and enums used across FAVGEN.
//! Includes the background-reference and compositing policies, the asset
//! manifest types, and a small RGB triple used by the chroma-key pass.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Reference color used when deciding whether a pixel is background.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum BackgroundRef {
    /// Fixed black reference; with the default threshold this keys out
    /// every uniformly dark pixel.
    Dark,
    /// Sample the top-left corner pixel of the (cropped) source.
    Corner,
}

impl std::fmt::Display for BackgroundRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackgroundRef::Dark => write!(f, "Dark"),
            BackgroundRef::Corner => write!(f, "Corner"),
        }
    }
}

/// How the favicon-sized assets are composited before resizing.
/// The full-size reference logo always keeps its transparency.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Compositing {
    /// Keep the keyed alpha channel in every output.
    Transparent,
    /// Flatten the favicon set onto an opaque white canvas for better
    /// visibility in browser tabs.
    FlattenWhite,
}

impl std::fmt::Display for Compositing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compositing::Transparent => write!(f, "Transparent"),
            Compositing::FlattenWhite => write!(f, "FlattenWhite"),
        }
    }
}

/// Container format of a single exported asset.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum AssetKind {
    Png,
    /// Multi-resolution icon container (embeds 16x16 and 32x32 renditions).
    Ico,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Png => write!(f, "PNG"),
            AssetKind::Ico => write!(f, "ICO"),
        }
    }
}

/// One entry of the export manifest: filename, square target size, format.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AssetSpec {
    pub filename: &'static str,
    pub size: u32,
    pub kind: AssetKind,
}

/// An RGB triple, channel order R, G, B.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
