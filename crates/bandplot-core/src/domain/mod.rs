pub mod errors;

pub use errors::{BandPlotError, BandPlotErrorCategory, ParserResult, PlotResult};

use std::path::PathBuf;

/// Where the fixed input artifacts are read from and where the image lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotRequest {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl PlotRequest {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Both directories pointed at the same place, the one-shot batch default.
    pub fn in_directory(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            input_dir: dir.clone(),
            output_dir: dir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotArtifact {
    pub relative_path: PathBuf,
}

impl PlotArtifact {
    pub fn new(relative_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
        }
    }
}
