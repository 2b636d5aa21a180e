use super::model::SortedDispersion;
use crate::domain::{BandPlotError, PlotResult};
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

// 8 x 6 inches at 300 dpi.
const IMAGE_WIDTH: u32 = 2400;
const IMAGE_HEIGHT: u32 = 1800;

const PLOT_TITLE: &str = "Graphene Energy Bands";
const X_LABEL: &str = "||k||";
const Y_LABEL: &str = "Energy";

pub(super) fn render_band_plot(path: &Path, dispersion: &SortedDispersion) -> PlotResult<()> {
    draw(path, dispersion).map_err(|source| {
        BandPlotError::render(
            "RENDER.BANDS_BACKEND",
            format!("failed to render '{}': {}", path.display(), source),
        )
    })
}

fn draw(path: &Path, dispersion: &SortedDispersion) -> Result<(), Box<dyn Error>> {
    let x_range = padded_range(dispersion.k_norms().iter().copied());
    let y_range = padded_range(dispersion.energy_rows().iter().flatten().copied());

    let root = BitMapBackend::new(path, (IMAGE_WIDTH, IMAGE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(PLOT_TITLE, ("sans-serif", 50))
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(100)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .label_style(("sans-serif", 30))
        .axis_desc_style(("sans-serif", 36))
        .draw()?;

    for band in 0..dispersion.band_count() {
        let color = Palette99::pick(band).to_rgba();
        chart
            .draw_series(LineSeries::new(
                dispersion.band(band),
                color.stroke_width(3),
            ))?
            .label(format!("Band {}", band + 1))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(3))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 30))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Data extent with a 5% margin; degenerate spans are widened so the chart
/// always builds.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    if !min.is_finite() || !max.is_finite() {
        return -1.0..1.0;
    }

    let pad = if max > min { (max - min) * 0.05 } else { 1.0 };
    (min - pad)..(max + pad)
}
