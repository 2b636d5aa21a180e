use super::parser::NumericTable;
use crate::domain::{BandPlotError, PlotResult};

/// Euclidean magnitude of a 2D wavevector.
pub fn wavevector_norm(kx: f64, ky: f64) -> f64 {
    (kx * kx + ky * ky).sqrt()
}

/// Stable ascending permutation over `values`. `total_cmp` keeps the order
/// total even for non-finite entries, so the result is deterministic.
pub(super) fn argsort(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    indices
}

/// Applies `permutation` to both the norm vector and the energy rows.
/// The permutation indexes norm entries, so an energy table with a different
/// row count fails here, before anything is rendered.
pub(super) fn reindex(
    k_norms: &[f64],
    energy_rows: &[Vec<f64>],
    permutation: &[usize],
) -> PlotResult<(Vec<f64>, Vec<Vec<f64>>)> {
    if energy_rows.len() != k_norms.len() {
        return Err(BandPlotError::computation(
            "RUN.BANDS_REINDEX",
            format!(
                "energy table has {} rows but {} wavevectors were loaded",
                energy_rows.len(),
                k_norms.len()
            ),
        ));
    }

    let sorted_norms = permutation.iter().map(|&i| k_norms[i]).collect();
    let sorted_rows = permutation
        .iter()
        .map(|&i| energy_rows[i].clone())
        .collect();
    Ok((sorted_norms, sorted_rows))
}

/// Wavevector norms paired with the as-loaded energy table.
#[derive(Debug, Clone, PartialEq)]
pub struct DispersionModel {
    k_norms: Vec<f64>,
    energy_rows: Vec<Vec<f64>>,
}

impl DispersionModel {
    pub fn from_tables(wavevectors: &[[f64; 2]], energies: NumericTable) -> Self {
        let k_norms = wavevectors
            .iter()
            .map(|&[kx, ky]| wavevector_norm(kx, ky))
            .collect();
        Self {
            k_norms,
            energy_rows: energies.into_rows(),
        }
    }

    pub fn into_sorted(self) -> PlotResult<SortedDispersion> {
        let permutation = argsort(&self.k_norms);
        let (k_norms, energy_rows) = reindex(&self.k_norms, &self.energy_rows, &permutation)?;
        Ok(SortedDispersion {
            k_norms,
            energy_rows,
        })
    }
}

/// Dispersion data reordered so `k_norms` is non-decreasing. Row i of the
/// energy table still belongs to `k_norms[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedDispersion {
    k_norms: Vec<f64>,
    energy_rows: Vec<Vec<f64>>,
}

impl SortedDispersion {
    pub fn k_norms(&self) -> &[f64] {
        &self.k_norms
    }

    pub fn energy_rows(&self) -> &[Vec<f64>] {
        &self.energy_rows
    }

    pub fn k_point_count(&self) -> usize {
        self.k_norms.len()
    }

    pub fn band_count(&self) -> usize {
        self.energy_rows.first().map_or(0, Vec::len)
    }

    /// One (norm, energy) polyline per energy column.
    pub fn band(&self, column: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.k_norms
            .iter()
            .zip(&self.energy_rows)
            .map(move |(&k, row)| (k, row[column]))
    }
}
