use tracing::info;

use favgen::ExportParams;
use favgen::api::{generate_assets_to_dir, load_params_preset};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let input = args.input.ok_or(AppError::MissingArgument {
        arg: "--input".to_string(),
    })?;

    let params = if let Some(preset) = &args.preset {
        info!("Loading preset: {:?}", preset);
        load_params_preset(preset).map_err(AppError::from)?
    } else {
        ExportParams {
            background: args.background,
            threshold: args.threshold,
            crop_margin: args.crop_margin,
            compositing: args.composite,
        }
    };

    info!(
        "Processing {:?} -> {:?} (background: {}, threshold: {}, crop: {}, composite: {})",
        input,
        args.output_dir,
        params.background,
        params.threshold,
        params.crop_margin,
        params.compositing
    );

    let report = generate_assets_to_dir(&input, &args.output_dir, &params)?;

    for path in &report.written {
        println!("Created: {}", path.display());
    }
    info!("Exported {} files to {:?}", report.count(), args.output_dir);

    Ok(())
}
