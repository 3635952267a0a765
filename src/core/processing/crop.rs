use image::RgbaImage;
use image::imageops;
use tracing::info;

use crate::error::{Error, Result};

/// Crop `margin` pixels off every edge of the image.
/// A margin of 0 returns the image unchanged.
pub fn center_crop(img: &RgbaImage, margin: u32) -> Result<RgbaImage> {
    if margin == 0 {
        return Ok(img.clone());
    }

    let (width, height) = img.dimensions();
    // Compare against the half-extents so huge margins cannot overflow 2*margin
    if margin >= width.div_ceil(2) || margin >= height.div_ceil(2) {
        return Err(Error::InvalidArgument {
            arg: "crop_margin",
            value: format!("{} (image is {}x{})", margin, width, height),
        });
    }

    let new_width = width - 2 * margin;
    let new_height = height - 2 * margin;
    info!(
        "Cropping {}x{} -> {}x{} (margin {})",
        width, height, new_width, new_height, margin
    );

    Ok(imageops::crop_imm(img, margin, margin, new_width, new_height).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient_image(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn zero_margin_is_identity() {
        let img = gradient_image(8, 6);
        let out = center_crop(&img, 0).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn margin_shrinks_both_edges() {
        let img = gradient_image(10, 10);
        let out = center_crop(&img, 2).unwrap();
        assert_eq!(out.dimensions(), (6, 6));
        // Top-left of the crop is the source pixel at (margin, margin)
        assert_eq!(out.get_pixel(0, 0), img.get_pixel(2, 2));
        assert_eq!(out.get_pixel(5, 5), img.get_pixel(7, 7));
    }

    #[test]
    fn oversized_margin_is_rejected() {
        let img = gradient_image(10, 10);
        assert!(center_crop(&img, 5).is_err());
        assert!(center_crop(&img, 100).is_err());
    }

    #[test]
    fn huge_margin_is_rejected_without_overflow() {
        let img = gradient_image(10, 10);
        for margin in [u32::MAX / 2, u32::MAX / 2 + 1, u32::MAX] {
            assert!(center_crop(&img, margin).is_err());
        }
    }

    #[test]
    fn odd_dimensions_validate_correctly() {
        // 9 wide: margin 4 leaves a 1-pixel column, margin 5 leaves nothing
        let img = gradient_image(9, 9);
        assert_eq!(center_crop(&img, 4).unwrap().dimensions(), (1, 1));
        assert!(center_crop(&img, 5).is_err());
    }
}
