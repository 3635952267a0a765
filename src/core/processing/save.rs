use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::core::params::{ICO_EMBEDDED_SIZES, LOGO_FILENAME};
use crate::core::processing::flatten::flatten_onto_white;
use crate::core::processing::resize::resize_rgba_image;
use crate::error::Result;
use crate::io::writers::ico::write_multires_ico;
use crate::io::writers::png::write_rgba_png;
use crate::types::{AssetKind, AssetSpec, Compositing};

/// Export the full asset set for a processed (cropped + keyed) logo.
///
/// Always writes the full-size transparent `logo.png` first, then each
/// manifest entry. With `Compositing::FlattenWhite` the favicon set is
/// composited over white before resizing; the reference logo keeps its
/// alpha either way. Returns the written paths in manifest order.
pub fn export_asset_set(
    logo: &RgbaImage,
    output_dir: &Path,
    assets: &[AssetSpec],
    compositing: Compositing,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(assets.len() + 1);

    let logo_path = output_dir.join(LOGO_FILENAME);
    let (cols, rows) = logo.dimensions();
    write_rgba_png(&logo_path, cols, rows, logo.as_raw())?;
    info!("Created: {:?}", logo_path);
    written.push(logo_path);

    let favicon_base = match compositing {
        Compositing::Transparent => logo.clone(),
        Compositing::FlattenWhite => flatten_onto_white(logo),
    };

    for asset in assets {
        let path = output_dir.join(asset.filename);
        match asset.kind {
            AssetKind::Png => {
                let resized = resize_rgba_image(&favicon_base, asset.size)?;
                write_rgba_png(&path, asset.size, asset.size, resized.as_raw())?;
            }
            AssetKind::Ico => {
                let mut entries = Vec::with_capacity(ICO_EMBEDDED_SIZES.len());
                for &size in ICO_EMBEDDED_SIZES {
                    let resized = resize_rgba_image(&favicon_base, size)?;
                    entries.push((size, resized.into_raw()));
                }
                write_multires_ico(&path, &entries)?;
            }
        }
        info!("Created: {:?}", path);
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::DEFAULT_ASSETS;
    use image::Rgba;

    #[test]
    fn all_manifest_files_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let logo = RgbaImage::from_pixel(64, 64, Rgba([90, 120, 240, 255]));

        let written =
            export_asset_set(&logo, dir.path(), DEFAULT_ASSETS, Compositing::Transparent)
                .unwrap();

        assert_eq!(written.len(), DEFAULT_ASSETS.len() + 1);
        for path in &written {
            assert!(path.exists(), "missing {:?}", path);
        }
    }

    #[test]
    fn png_assets_have_manifest_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let logo = RgbaImage::from_pixel(64, 64, Rgba([90, 120, 240, 255]));

        export_asset_set(&logo, dir.path(), DEFAULT_ASSETS, Compositing::FlattenWhite).unwrap();

        for asset in DEFAULT_ASSETS {
            if asset.kind == AssetKind::Png {
                let img = image::open(dir.path().join(asset.filename)).unwrap();
                assert_eq!(
                    (img.width(), img.height()),
                    (asset.size, asset.size),
                    "{}",
                    asset.filename
                );
            }
        }
    }

    #[test]
    fn ico_container_embeds_both_renditions() {
        let dir = tempfile::tempdir().unwrap();
        let logo = RgbaImage::from_pixel(64, 64, Rgba([90, 120, 240, 255]));

        export_asset_set(&logo, dir.path(), DEFAULT_ASSETS, Compositing::Transparent).unwrap();

        let file = std::fs::File::open(dir.path().join("favicon.ico")).unwrap();
        let icon_dir = ico::IconDir::read(file).unwrap();
        let mut sizes: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![16, 32]);
    }

    #[test]
    fn flatten_white_makes_favicons_opaque() {
        let dir = tempfile::tempdir().unwrap();
        // Fully transparent logo: flattened favicons must come out white
        let logo = RgbaImage::from_pixel(64, 64, Rgba([10, 10, 10, 0]));

        export_asset_set(&logo, dir.path(), DEFAULT_ASSETS, Compositing::FlattenWhite).unwrap();

        let img = image::open(dir.path().join("favicon-32x32.png"))
            .unwrap()
            .to_rgba8();
        for pixel in img.pixels() {
            assert_eq!(pixel.0, [255, 255, 255, 255]);
        }

        // The reference logo keeps its transparency regardless of policy
        let logo_out = image::open(dir.path().join(LOGO_FILENAME)).unwrap().to_rgba8();
        assert_eq!(logo_out.get_pixel(0, 0).0[3], 0);
    }
}
