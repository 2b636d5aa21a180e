use super::CliError;
use bandplot_core::domain::{BandPlotError, PlotRequest};
use bandplot_core::modules::ModuleExecutor;
use bandplot_core::modules::bands::BandsModule;
use std::path::PathBuf;
use tracing::info;

pub(super) fn run_plot_command() -> Result<i32, CliError> {
    let working_dir = current_working_dir().map_err(CliError::Compute)?;
    let request = PlotRequest::in_directory(&working_dir);

    info!("plotting bands in '{}'", working_dir.display());
    let artifacts = BandsModule.execute(&request).map_err(CliError::Compute)?;

    for artifact in &artifacts {
        let output_path = request.output_dir.join(&artifact.relative_path);
        info!("wrote '{}'", output_path.display());
        println!("Saved {}", output_path.display());
    }

    Ok(0)
}

fn current_working_dir() -> Result<PathBuf, BandPlotError> {
    std::env::current_dir().map_err(|source| {
        BandPlotError::io_system(
            "IO.CLI_CURRENT_DIR",
            format!("failed to read current working directory: {}", source),
        )
    })
}
