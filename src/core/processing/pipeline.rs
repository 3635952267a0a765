use image::RgbaImage;

use crate::core::params::ExportParams;
use crate::core::processing::chroma_key::{key_out_background, resolve_reference};
use crate::core::processing::crop::center_crop;
use crate::error::Result;

/// Run the full in-memory transform: center-crop, resolve the background
/// reference on the cropped frame, key the background out. No disk I/O.
pub fn process_logo_pipeline(img: &RgbaImage, params: &ExportParams) -> Result<RgbaImage> {
    let mut cropped = center_crop(img, params.crop_margin)?;
    let reference = resolve_reference(&cropped, params.background);
    key_out_background(&mut cropped, reference, params.threshold);
    Ok(cropped)
}
