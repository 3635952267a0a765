use image::{Rgba, RgbaImage};

/// Composite the image over an opaque white canvas ("over" operator).
/// The result is fully opaque; fully transparent pixels become pure white.
pub fn flatten_onto_white(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let mut out = RgbaImage::new(width, height);

    for (src, dst) in img.pixels().zip(out.pixels_mut()) {
        let [r, g, b, a] = src.0;
        let a32 = a as u32;
        let blend = |c: u8| -> u8 { ((c as u32 * a32 + 255 * (255 - a32) + 127) / 255) as u8 };
        *dst = Rgba([blend(r), blend(g), blend(b), 255]);
    }

    out
}
