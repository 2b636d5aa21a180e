mod model;
mod parser;
mod render;

use super::ModuleExecutor;
use crate::domain::{BandPlotError, PlotArtifact, PlotRequest, PlotResult};
use std::fs;

pub use model::{DispersionModel, SortedDispersion, wavevector_norm};
pub use parser::{NumericTable, parse_table, parse_wavevectors, read_input_source};

pub const BANDS_REQUIRED_INPUTS: [&str; 2] = ["k_vals.txt", "eig_vals.txt"];
pub const BANDS_REQUIRED_OUTPUTS: [&str; 1] = ["graphene_bands.png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandsContract {
    pub required_inputs: Vec<PlotArtifact>,
    pub expected_outputs: Vec<PlotArtifact>,
}

/// Loads the wavevector and energy tables, sorts both by wavevector
/// magnitude, and renders the band-structure plot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandsModule;

impl BandsModule {
    pub fn contract(&self) -> BandsContract {
        BandsContract {
            required_inputs: artifact_list(&BANDS_REQUIRED_INPUTS),
            expected_outputs: artifact_list(&BANDS_REQUIRED_OUTPUTS),
        }
    }
}

impl ModuleExecutor for BandsModule {
    fn execute(&self, request: &PlotRequest) -> PlotResult<Vec<PlotArtifact>> {
        let k_source = read_input_source(
            &request.input_dir.join(BANDS_REQUIRED_INPUTS[0]),
            BANDS_REQUIRED_INPUTS[0],
        )?;
        let energy_source = read_input_source(
            &request.input_dir.join(BANDS_REQUIRED_INPUTS[1]),
            BANDS_REQUIRED_INPUTS[1],
        )?;

        let wavevectors = parse_wavevectors(
            BANDS_REQUIRED_INPUTS[0],
            parse_table(BANDS_REQUIRED_INPUTS[0], &k_source)?,
        )?;
        let energies = parse_table(BANDS_REQUIRED_INPUTS[1], &energy_source)?;

        let sorted = DispersionModel::from_tables(&wavevectors, energies).into_sorted()?;

        fs::create_dir_all(&request.output_dir).map_err(|source| {
            BandPlotError::io_system(
                "IO.BANDS_OUTPUT_DIRECTORY",
                format!(
                    "failed to create output directory '{}': {}",
                    request.output_dir.display(),
                    source
                ),
            )
        })?;

        let output_path = request.output_dir.join(BANDS_REQUIRED_OUTPUTS[0]);
        render::render_band_plot(&output_path, &sorted)?;

        Ok(artifact_list(&BANDS_REQUIRED_OUTPUTS))
    }
}

fn artifact_list(names: &[&str]) -> Vec<PlotArtifact> {
    names.iter().map(PlotArtifact::new).collect()
}
