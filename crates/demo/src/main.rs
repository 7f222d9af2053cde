// File: crates/demo/src/main.rs
// Summary: Demo loads a dataset (JSON or long-form CSV), redraws the chart and writes PNG + SVG.

mod input;

use anyhow::{Context, Result};
use multiline_core::{render_svg, MultiLineChart, RenderOptions, Size};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Usage: `multiline-demo [DATASET] [CONFIG_JSON] [WIDTHxHEIGHT]`
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,multiline_core=debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let data_path = PathBuf::from(
        args.next()
            .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/data/scores.json").to_string()),
    );
    let config_path = args.next().map(PathBuf::from);
    let size = match args.next() {
        Some(s) => parse_size(&s)?,
        None => Size::default(),
    };

    let y_title = data_path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
        .then_some("Value");
    let dataset = input::load_dataset(&data_path, y_title)?;
    let config = input::load_config(config_path.as_deref())?;
    tracing::info!(path = %data_path.display(), categories = dataset.categories.len(), "dataset loaded");

    let mut chart = MultiLineChart::new(config, size)?;
    let report = chart.set_data(dataset)?;
    tracing::info!(?report, "chart drawn");

    let out_png = out_name(&data_path, "png");
    chart.scene().render_to_png(&RenderOptions::default(), &out_png)?;
    tracing::info!("wrote {}", out_png.display());

    let out_svg = out_name(&data_path, "svg");
    std::fs::write(&out_svg, render_svg(chart.scene())).with_context(|| format!("writing {}", out_svg.display()))?;
    tracing::info!("wrote {}", out_svg.display());

    // hover the first marker to show the tooltip in a second pair of files
    let first = chart.scene().markers().next().map(|m| m.point.position());
    if let Some(p) = first {
        let origin = chart.scene().plot_origin;
        chart.pointer_move(origin.x + p.x, origin.y + p.y);
        let out_tip = out_name(&data_path, "tooltip.png");
        chart.scene().render_to_png(&RenderOptions::default(), &out_tip)?;
        std::fs::write(out_tip.with_extension("svg"), render_svg(chart.scene()))?;
        tracing::info!("wrote {}", out_tip.display());
    }
    Ok(())
}

/// `640x320` style size argument.
fn parse_size(s: &str) -> Result<Size> {
    let (w, h) = s.split_once(['x', 'X']).with_context(|| format!("size `{s}` is not WIDTHxHEIGHT"))?;
    let w: f64 = w.trim().parse().with_context(|| format!("bad width in `{s}`"))?;
    let h: f64 = h.trim().parse().with_context(|| format!("bad height in `{s}`"))?;
    Ok(Size::new(w, h))
}

/// Output file name like target/out/chart_<stem>.<ext>
fn out_name(input: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{stem}.{ext}"));
    out
}
