#![doc = r#"
FAVGEN — crop a logo, key out its background, export a favicon asset set.

This crate provides a typed, ergonomic API for turning a source logo raster
into a complete set of favicon/icon assets: a multi-resolution `favicon.ico`,
flat PNGs from 16x16 up to 512x512, and a full-size transparent reference
logo. It powers the FAVGEN CLI and can be embedded in your own Rust
applications.

Two policies control the visual result (the original asset scripts this tool
replaces disagreed on both, so they are independently configurable):

- `BackgroundRef`: key against a fixed dark reference, or sample the
  top-left corner pixel of the source.
- `Compositing`: keep the keyed transparency in the favicon set, or flatten
  the favicons onto opaque white for better visibility in browser tabs.

Quick start: export the asset set to a directory
------------------------------------------------
```rust,no_run
use std::path::Path;
use favgen::{generate_assets_to_dir, BackgroundRef, Compositing, ExportParams};

fn main() -> favgen::Result<()> {
    let params = ExportParams {
        background: BackgroundRef::Corner,
        threshold: 50,
        crop_margin: 0,
        compositing: Compositing::FlattenWhite,
    };

    let report = generate_assets_to_dir(
        Path::new("logo-source.png"),
        Path::new("public"),
        &params,
    )?;
    println!("wrote {} files", report.count());
    Ok(())
}
```

Process in-memory to `ProcessedLogo`
------------------------------------
```rust,no_run
use std::path::Path;
use favgen::{process_logo_to_buffer, ExportParams};

fn main() -> favgen::Result<()> {
    let logo = process_logo_to_buffer(Path::new("logo-source.png"), &ExportParams::default())?;
    // `logo.rgba` holds the cropped, chroma-keyed RGBA8 buffer.
    println!("{}x{}", logo.width, logo.height);
    Ok(())
}
```

Error handling
--------------
All public functions return `favgen::Result<T>`; match on `favgen::Error` to
handle specific cases, e.g. decode or resize failures.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — policy enums and core types (`BackgroundRef`, `Compositing`, `AssetSpec`).
- [`io`] — logo reader and PNG/ICO writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{DEFAULT_ASSETS, ExportParams, ICO_EMBEDDED_SIZES, LOGO_FILENAME};
pub use error::{Error, Result};
pub use types::{AssetKind, AssetSpec, BackgroundRef, Compositing, Rgb};

// Readers
pub use io::reader::{LogoMetadata, LogoReader};

// High-level API re-exports
pub use api::{
    ExportReport, ProcessedLogo, generate_assets_to_dir, load_params_preset,
    process_logo_to_buffer,
};
