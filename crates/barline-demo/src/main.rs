// File: crates/barline-demo/src/main.rs
// Summary: Demo loads a label/value CSV and renders bar and line charts to PNG and SVG.
// Usage: barline-demo [data.csv] [theme] [width] [height]

use anyhow::{Context, Result};
use barline_core::{to_svg, ApproxTextMeasurer, Chart, Color, DataPoint, RenderConfig, Theme};
use barline_skia::{render_to_png, RasterOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let data_arg = args.next();
    let theme = barline_core::theme::find(&args.next().unwrap_or_else(|| "light".to_string()));
    let width = parse_dim(args.next(), 720)?;
    let height = parse_dim(args.next(), 360)?;

    let points = match &data_arg {
        Some(raw) => {
            let path = Path::new(raw);
            load_points_csv(path, theme.mark)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => sample_points(theme.mark),
    };
    info!(points = points.len(), theme = theme.name, "loaded dataset");
    if points.is_empty() {
        warn!("dataset is empty; only axes and labels will be drawn");
    }

    let max_value = nice_ceiling(points.iter().map(|p| p.value).fold(0.0, f64::max));
    let opts = RasterOptions { width, height, ..RasterOptions::themed(&theme) };

    let bar_config = RenderConfig::themed(&theme)
        .with_range(0, max_value)
        .with_guidelines(3)
        .with_axis_stroke_width(4.0)
        .with_label_size(18.0, 10.0)
        .with_axes(true, false);
    let bar = Chart::bar().with_config(bar_config).with_points(points.clone());

    let line_config = RenderConfig::themed(&theme)
        .with_range(0, max_value)
        .with_axis_stroke_width(3.0)
        .with_point_radius(6.0)
        .with_label_size(18.0, 12.0)
        .with_line_color(secondary(&theme));
    let line = Chart::line().with_config(line_config).with_points(points);

    for (name, chart) in [("bar", &bar), ("line", &line)] {
        let out = out_name_with(data_arg.as_deref(), name);
        render_to_png(chart, &opts, &out).with_context(|| format!("rendering {}", out.display()))?;
        info!(path = %out.display(), "wrote png");

        let svg_out = out.with_extension("svg");
        let list = chart.render(opts.surface(), &ApproxTextMeasurer::default())?;
        std::fs::write(&svg_out, to_svg(&list, opts.surface(), Some(theme.background)))
            .with_context(|| format!("writing {}", svg_out.display()))?;
        info!(path = %svg_out.display(), "wrote svg");
    }
    Ok(())
}

fn parse_dim(arg: Option<String>, default: i32) -> Result<i32> {
    match arg {
        Some(s) => s.trim().parse::<i32>().with_context(|| format!("invalid dimension '{s}'")),
        None => Ok(default),
    }
}

/// Built-in sample set used when no CSV is given.
fn sample_points(color: Color) -> Vec<DataPoint> {
    [60.0, 20.0, 100.0, 200.0, 80.0, 100.0, 500.0, 300.0, 200.0]
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::new(v, (i + 1).to_string(), color))
        .collect()
}

/// Load `label,value[,color]` rows. Rows with an unparsable value are skipped.
fn load_points_csv(path: &Path, default_color: Color) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "name", "x"]).unwrap_or(0);
    let i_value = idx(&["value", "y", "count"]).unwrap_or(1);
    let i_color = idx(&["color", "colour"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(i_label).unwrap_or_default().trim().to_string();
        let Some(value) = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()) else {
            warn!(row = row + 1, "skipping row without a numeric value");
            continue;
        };
        let color = i_color
            .and_then(|i| rec.get(i))
            .and_then(Color::parse_hex)
            .unwrap_or(default_color);
        out.push(DataPoint::try_new(value, label, color)?);
    }
    Ok(out)
}

/// Round up to a multiple of 100 so guideline labels stay whole.
fn nice_ceiling(max: f64) -> i64 {
    let m = (max.max(1.0) / 100.0).ceil() as i64;
    m.max(1) * 100
}

fn secondary(theme: &Theme) -> Color {
    if theme.name == "light" { Color::from_rgb(0x03, 0xda, 0xc5) } else { theme.line_stroke }
}

/// Produce output file name like target/out/chart_<stem>_<kind>.png
fn out_name_with(input: Option<&str>, kind: &str) -> PathBuf {
    let stem = input
        .and_then(|s| Path::new(s).file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("sample");
    let mut out = PathBuf::from("target/out");
    out.push(format!("chart_{}_{}.png", stem, kind));
    out
}
