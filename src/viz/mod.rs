//! Visualization: render a [`ChartSpec`] to **SVG** or **PNG**.
//!
//! - Title and subtitle above the plot (subtitle carries the latest value)
//! - Date labels on the x axis, at most [`MAX_X_LABELS`] of them
//! - Locale-aware whole-number tick labels (`30,000` vs `30.000`)
//! - Daily charts overlay the moving average as a lighter line with a legend

pub mod fonts;
pub mod types;
pub mod util;

pub use types::{ImageFormat, MAX_X_LABELS, RenderOptions};

use crate::chart::ChartSpec;
use anyhow::{Result, anyhow};
use num_format::Locale;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::LineSeries;
use plotters::style::FontFamily;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::{Path, PathBuf};

use util::{compute_left_label_area_px, format_count, map_locale, office_color, slugify};

const MARGIN: u32 = 16;
const Y_LABELS: usize = 10;

/// Path a chart will be written to under `options`.
pub fn output_path(chart: &ChartSpec, options: &RenderOptions) -> PathBuf {
    options.out_dir.join(format!(
        "{}.{}",
        slugify(&chart.title),
        options.format.extension()
    ))
}

/// Render `chart` into `options.out_dir` and return the file written.
pub fn render(chart: &ChartSpec, options: &RenderOptions) -> Result<PathBuf> {
    fonts::ensure_fonts_registered(options.font.as_deref())?;
    let path = output_path(chart, options);
    render_to(chart, &path, options.width, options.height, &options.locale)?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

/// Render `chart` to `out_path`; `.svg` selects the SVG backend, anything else PNG.
/// Fonts must already be registered (see [`fonts::ensure_fonts_registered`]).
pub fn render_to<P: AsRef<Path>>(
    chart: &ChartSpec,
    out_path: P,
    width: u32,
    height: u32,
    locale_tag: &str,
) -> Result<()> {
    if chart.series.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let num_locale = map_locale(locale_tag);

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, chart, num_locale)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, chart, num_locale)?;
    }
    Ok(())
}

/// Y range covering the values and the moving average, always including zero.
fn value_range(chart: &ChartSpec) -> (f64, f64) {
    let values = chart.series.values.iter().map(|v| *v as f64);
    let averages = chart
        .series
        .moving_average
        .iter()
        .flatten()
        .filter_map(|v| *v);
    let (mut lo, mut hi) = values
        .chain(averages)
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 1.0;
        hi = lo + 2.0;
    }
    // headroom so the peak does not touch the frame
    (lo, hi + (hi - lo) * 0.05)
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, chart: &ChartSpec, num_locale: &Locale) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
    let titled = root
        .titled(&chart.title, (FontFamily::SansSerif, 22))
        .map_err(|e| anyhow!("{:?}", e))?;
    let plot_area = titled
        .titled(&chart.subtitle, (FontFamily::SansSerif, 13))
        .map_err(|e| anyhow!("{:?}", e))?;

    let series = &chart.series;
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;
    let (y_min, y_max) = value_range(chart);
    let left_label_width_px = compute_left_label_area_px(y_min, y_max, Y_LABELS, 12, num_locale);

    let mut cc = ChartBuilder::on(&plot_area)
        .margin(MARGIN)
        .set_label_area_size(LabelAreaPosition::Left, left_label_width_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 56)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |x: &f64| {
        let idx = x.round();
        if idx < 0.0 {
            return String::new();
        }
        series.labels.get(idx as usize).cloned().unwrap_or_default()
    };
    let y_label_fmt = |v: &f64| format_count(*v, num_locale);

    cc.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_labels(MAX_X_LABELS.min(series.len().max(2)))
        .y_labels(Y_LABELS)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let color = office_color(0);
    let points: Vec<(f64, f64)> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v as f64))
        .collect();
    let line = ShapeStyle {
        color,
        filled: false,
        stroke_width: 2,
    };
    let elem = cc
        .draw_series(LineSeries::new(points, line))
        .map_err(|e| anyhow!("{:?}", e))?;

    if let Some(averages) = &series.moving_average {
        elem.label(chart.y_label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], line));

        let avg_color = color.mix(0.5);
        let avg_points: Vec<(f64, f64)> = averages
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i as f64, v)))
            .collect();
        let avg_line = ShapeStyle {
            color: avg_color,
            filled: false,
            stroke_width: 2,
        };
        cc.draw_series(LineSeries::new(avg_points, avg_line))
            .map_err(|e| anyhow!("{:?}", e))?
            .label(format!(
                "{}-day moving average",
                crate::transform::MOVING_AVERAGE_WINDOW
            ))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], avg_line));

        cc.configure_series_labels()
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.85))
            .label_font((FontFamily::SansSerif, 14))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
