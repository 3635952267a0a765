use serde::{Deserialize, Serialize};

use crate::types::{AssetKind, AssetSpec, BackgroundRef, Compositing};

/// Export parameters suitable for config files and CLI presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportParams {
    pub background: BackgroundRef,
    /// Per-channel distance below which a pixel counts as background
    pub threshold: u8,
    /// Pixels cropped off each edge before keying; 0 keeps the full frame
    pub crop_margin: u32,
    pub compositing: Compositing,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            background: BackgroundRef::Corner,
            threshold: 50,
            crop_margin: 0,
            compositing: Compositing::FlattenWhite,
        }
    }
}

/// Name of the full-size transparent reference image, always exported
/// alongside the manifest below.
pub const LOGO_FILENAME: &str = "logo.png";

/// Fixed favicon manifest. `favicon.ico` embeds 16x16 and 32x32 renditions;
/// everything else is a flat PNG at the given square size.
pub const DEFAULT_ASSETS: &[AssetSpec] = &[
    AssetSpec {
        filename: "favicon.ico",
        size: 32,
        kind: AssetKind::Ico,
    },
    AssetSpec {
        filename: "favicon-16x16.png",
        size: 16,
        kind: AssetKind::Png,
    },
    AssetSpec {
        filename: "favicon-32x32.png",
        size: 32,
        kind: AssetKind::Png,
    },
    AssetSpec {
        filename: "apple-touch-icon.png",
        size: 180,
        kind: AssetKind::Png,
    },
    AssetSpec {
        filename: "android-chrome-192x192.png",
        size: 192,
        kind: AssetKind::Png,
    },
    AssetSpec {
        filename: "android-chrome-512x512.png",
        size: 512,
        kind: AssetKind::Png,
    },
];

/// Sizes embedded in the multi-resolution icon container.
pub const ICO_EMBEDDED_SIZES: &[u32] = &[16, 32];
