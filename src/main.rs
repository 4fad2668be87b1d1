use std::fs;
use std::path::Path;

use fractal_plane::{CliRenderController, FilePresenterPort, PpmFilePresenter, RenderConfig};
use log::info;

const OUTPUT_DIR: &str = "output";
const OUTPUT_STEM: &str = "fractal";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presenter = PpmFilePresenter::new();
    let output_file = Path::new(OUTPUT_DIR)
        .join(OUTPUT_STEM)
        .with_extension(presenter.file_extension());

    let mut controller = CliRenderController::new(presenter, RenderConfig::default());
    controller.generate()?;

    fs::create_dir_all(OUTPUT_DIR)?;
    controller.write(&output_file)?;
    info!("Wrote {}", output_file.display());

    Ok(())
}
