use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::info;

use crate::error::{Error, Result};

/// Resize an interleaved RGBA8 buffer to exact target dimensions using
/// Lanczos3 convolution. Alpha is premultiplied and divided back by the
/// resizer, so keyed-out regions do not bleed color into edges.
pub fn resize_rgba(
    data: &[u8],
    src_cols: u32,
    src_rows: u32,
    dst_cols: u32,
    dst_rows: u32,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(src_cols, src_rows, data.to_vec(), PixelType::U8x4)?;
    let mut dst_image = Image::new(dst_cols, dst_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

/// Resize to a square of side `size`. Target sizes are fixed squares; no
/// aspect ratio is preserved. Resizing to the source's own dimensions is
/// a plain copy so repeated runs stay byte-identical.
pub fn resize_rgba_image(img: &RgbaImage, size: u32) -> Result<RgbaImage> {
    let (cols, rows) = img.dimensions();
    if (cols, rows) == (size, size) {
        return Ok(img.clone());
    }

    info!("Resizing {}x{} -> {}x{}", cols, rows, size, size);
    let resized = resize_rgba(img.as_raw(), cols, rows, size, size)?;
    RgbaImage::from_raw(size, size, resized).ok_or_else(|| {
        Error::Processing(format!("resized buffer does not fit {}x{}", size, size))
    })
}
