use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::BarChartSpec;

// ---------------------------------------------------------------------------
// Static PNG rendering
// ---------------------------------------------------------------------------

/// Draw `spec` and write it to `path` as a PNG.
pub fn render_png(spec: &BarChartSpec, path: &Path) -> Result<()> {
    let rgb = render_rgb(spec)?;
    rgb.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("Wrote chart '{}' to {}", spec.title, path.display());
    Ok(())
}

/// Draw `spec` into an in-memory RGB image.
pub fn render_rgb(spec: &BarChartSpec) -> Result<RgbImage> {
    let (width, height) = spec.size;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw(&root, spec)?;
        root.present().map_err(drawing_error)?;
    }
    RgbImage::from_raw(width, height, buffer).context("chart buffer has the wrong size")
}

fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, spec: &BarChartSpec) -> Result<()> {
    root.fill(&WHITE).map_err(drawing_error)?;

    let (x_min, x_max) = spec.category_range();
    let (y_min, y_max) = spec.value_range();
    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(drawing_error)?;

    // One key point per category so every tick lands on a category centre.
    let label_at = |x: &f64| spec.category_at(*x).unwrap_or_default().to_string();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(spec.categories.len() + 1)
        .x_label_formatter(&label_at)
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .draw()
        .map_err(drawing_error)?;

    let half = spec.bar_width / 2.0;
    for series in &spec.series {
        let drawn = chart
            .draw_series(series.bars.iter().map(|bar| {
                let color: RGBColor = bar.color.into();
                Rectangle::new(
                    [(bar.center - half, 0.0), (bar.center + half, bar.height)],
                    color.filled(),
                )
            }))
            .map_err(drawing_error)?;
        if let Some(name) = &series.name {
            let color: RGBColor = series.color.into();
            drawn
                .label(name.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 14, y + 5)], color.filled()));
        }
    }

    if spec.has_legend() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(drawing_error)?;
    }
    Ok(())
}

fn drawing_error<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow!("chart drawing failed: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;
    use crate::config::AnalysisConfig;

    #[test]
    fn rendered_image_matches_chart_size() {
        let config = AnalysisConfig::default();
        for kind in [ChartKind::Efflux30, ChartKind::BetaGal] {
            let spec = kind.build(&config).unwrap();
            let rgb = render_rgb(&spec).unwrap();
            assert_eq!(rgb.dimensions(), spec.size, "{}", kind.file_stem());
            // the white background is painted over by at least one bar
            assert!(rgb.pixels().any(|p| p.0 != [255, 255, 255]));
        }
    }

    #[test]
    fn png_is_written_and_decodable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("efflux-42.png");
        let spec = ChartKind::Efflux42.build(&AnalysisConfig::default()).unwrap();
        render_png(&spec, &path).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), spec.size);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("chart.png");
        let spec = ChartKind::Efflux30.build(&AnalysisConfig::default()).unwrap();
        let err = render_png(&spec, &path).unwrap_err();
        assert!(format!("{err:#}").contains("writing"));
    }
}
