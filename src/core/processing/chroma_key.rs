use image::RgbaImage;
use tracing::info;

use crate::types::{BackgroundRef, Rgb};

/// Resolve the background reference color for an image.
/// `Dark` keys against black; `Corner` samples the top-left pixel.
pub fn resolve_reference(img: &RgbaImage, background: BackgroundRef) -> Rgb {
    match background {
        BackgroundRef::Dark => Rgb::BLACK,
        BackgroundRef::Corner => {
            let p = img.get_pixel(0, 0);
            let reference = Rgb::new(p[0], p[1], p[2]);
            info!("Background color sampled from corner: {}", reference);
            reference
        }
    }
}

/// Rewrite the alpha channel in place: any pixel whose channels are all
/// strictly within `threshold` of `reference` becomes fully transparent.
/// RGB channels are left untouched, matching pixels included.
pub fn key_out_background(img: &mut RgbaImage, reference: Rgb, threshold: u8) {
    let mut keyed: u64 = 0;
    for pixel in img.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if r.abs_diff(reference.r) < threshold
            && g.abs_diff(reference.g) < threshold
            && b.abs_diff(reference.b) < threshold
        {
            pixel.0[3] = 0;
            keyed += 1;
        }
    }
    info!(
        "Chroma key: reference {}, threshold {}, {} pixels keyed",
        reference, threshold, keyed
    );
}
