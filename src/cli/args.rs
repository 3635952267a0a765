use clap::Parser;
use std::path::PathBuf;

use favgen::{BackgroundRef, Compositing};

#[derive(Parser)]
#[command(name = "favgen", version, about = "FAVGEN CLI")]
pub struct CliArgs {
    /// Source logo image
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory the asset set is written into (created if absent)
    #[arg(short, long, default_value = "public")]
    pub output_dir: PathBuf,

    /// Background reference policy (dark = key against black,
    /// corner = sample the top-left pixel)
    #[arg(long, value_enum, default_value_t = BackgroundRef::Corner)]
    pub background: BackgroundRef,

    /// Per-channel similarity threshold; pixels with all channels strictly
    /// within this distance of the reference become transparent
    #[arg(long, default_value_t = 50)]
    pub threshold: u8,

    /// Pixels to crop off each edge before keying (0 = no crop)
    #[arg(long, default_value_t = 0)]
    pub crop_margin: u32,

    /// Compositing of the favicon set (the full-size logo.png always
    /// keeps its transparency)
    #[arg(long, value_enum, default_value_t = Compositing::FlattenWhite)]
    pub composite: Compositing,

    /// JSON preset file; overrides the policy flags above
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
