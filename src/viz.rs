//! Line charts (with point markers) for a single indicator series, as **SVG** or **PNG**.

use crate::models::{Indicator, IndicatorSeries};
use crate::report::map_locale;
use anyhow::{Result, anyhow};
use num_format::{Locale, ToFormattedString};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;

/// One-time registration of the bundled "sans-serif" font for the `ab_glyph` text path,
/// which does not discover OS fonts. The bitmap backend cannot draw text without it.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        if plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        )
        .is_err()
        {
            log::warn!("bundled chart font failed to load");
        }
    });
}

/// Blue (#4472C4), first colour of the Office chart palette.
const SERIES_COLOR: RGBColor = RGBColor(68, 114, 196);

/// Pick a single Y-axis scale and its human label based on the overall magnitude.
/// Returns (scale, label), e.g. (1e9, "billions").
pub fn choose_axis_scale(max_abs: f64) -> (f64, &'static str) {
    if max_abs >= 1.0e12 {
        (1.0e12, "trillions")
    } else if max_abs >= 1.0e9 {
        (1.0e9, "billions")
    } else if max_abs >= 1.0e6 {
        (1.0e6, "millions")
    } else if max_abs >= 1.0e3 {
        (1.0e3, "thousands")
    } else {
        (1.0, "")
    }
}

/// Chart title, e.g. `GDP Trend - India`.
pub fn chart_title(indicator: Indicator, country_name: &str) -> String {
    format!("{} Trend - {}", indicator.short_name(), country_name)
}

/// Render `series` to `out_path`. `.svg` selects the SVG backend, anything else PNG.
pub fn plot_series<P: AsRef<Path>>(
    series: &IndicatorSeries,
    indicator: Indicator,
    country_name: &str,
    out_path: P,
    width: u32,
    height: u32,
    locale_tag: &str,
) -> Result<()> {
    let first = series.first().ok_or_else(|| anyhow!("no data to plot"))?;
    let last = series.last().ok_or_else(|| anyhow!("no data to plot"))?;

    let (mut min_year, mut max_year) = (first.year, last.year);
    if min_year == max_year {
        min_year -= 1;
        max_year += 1;
    }

    let max_abs = series
        .iter()
        .map(|o| o.value.abs())
        .fold(0.0_f64, f64::max);
    let (scale, scale_label) = choose_axis_scale(max_abs);
    let points: Vec<(i32, f64)> = series.iter().map(|o| (o.year, o.value / scale)).collect();

    let (mut min_val, mut max_val) = (
        points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min),
        points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max),
    );
    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 1.0;
        max_val += 1.0;
    }
    // Headroom so markers at the extremes are not clipped.
    let pad = (max_val - min_val) * 0.05;
    let (min_val, max_val) = (min_val - pad, max_val + pad);

    let y_desc = if scale_label.is_empty() {
        indicator.unit().to_string()
    } else {
        format!("{} ({})", indicator.unit(), scale_label)
    };
    let chart = ChartSpec {
        title: chart_title(indicator, country_name),
        y_desc,
        points,
        years: (min_year, max_year),
        values: (min_val, max_val),
        locale: map_locale(locale_tag).0,
    };

    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, &chart)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, &chart)?;
    }
    log::debug!("wrote chart {}", out_path.display());
    Ok(())
}

struct ChartSpec {
    title: String,
    y_desc: String,
    points: Vec<(i32, f64)>,
    years: (i32, i32),
    values: (f64, f64),
    locale: &'static Locale,
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, spec: &ChartSpec) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(spec.title.as_str(), ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(spec.years.0..spec.years.1, spec.values.0..spec.values.1)
        .map_err(|e| anyhow!("{:?}", e))?;

    // Two decimals for small magnitudes (inflation, scaled GDP), whole numbers otherwise
    let locale = spec.locale;
    let y_label_fmt = |v: &f64| {
        if v.abs() < 100.0 {
            format!("{:.2}", v)
        } else {
            ((*v).round() as i64).to_formatted_string(locale)
        }
    };
    let x_label_fmt = |y: &i32| y.to_string();

    // Limit label counts to avoid overlap
    let x_label_count = ((spec.years.1 - spec.years.0 + 1) as usize).min(12);

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc(spec.y_desc.as_str())
        .x_labels(x_label_count)
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let style = ShapeStyle {
        color: SERIES_COLOR.to_rgba(),
        filled: false,
        stroke_width: 2,
    };
    chart
        .draw_series(LineSeries::new(spec.points.iter().copied(), style))
        .map_err(|e| anyhow!("{:?}", e))?;
    chart
        .draw_series(
            spec.points
                .iter()
                .map(|&p| Circle::new(p, 3, SERIES_COLOR.filled())),
        )
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
