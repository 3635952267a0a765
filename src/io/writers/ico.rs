use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{Error, Result};

/// Write a multi-resolution ICO container. Each entry is a square RGBA8
/// buffer with its side length; platforms pick a rendition at render time.
pub fn write_multires_ico(output: &Path, entries: &[(u32, Vec<u8>)]) -> Result<()> {
    if entries.is_empty() {
        return Err(Error::Processing(
            "ICO container needs at least one image".to_string(),
        ));
    }

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for (size, rgba) in entries {
        let image = ico::IconImage::from_rgba_data(*size, *size, rgba.clone());
        icon_dir.add_entry(ico::IconDirEntry::encode(&image)?);
    }

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    icon_dir.write(&mut writer)?;
    Ok(())
}
