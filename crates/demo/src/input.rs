// File: crates/demo/src/input.rs
// Summary: Dataset and config loading for the demo: JSON datasets or long-form CSV.

use anyhow::{Context, Result};
use multiline_core::{Category, ChartConfig, ChartDataset, SeriesGroup};
use serde::Deserialize;
use std::path::Path;

/// One `category,label,value` row.
#[derive(Debug, Deserialize)]
struct Row {
    category: String,
    #[serde(default)]
    label: String,
    value: f64,
}

pub fn load_dataset(path: &Path, y_title: Option<&str>) -> Result<ChartDataset> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    let dataset = match ext.as_str() {
        "csv" => load_csv(path)?,
        _ => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            ChartDataset::from_json_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
    };
    Ok(match y_title {
        Some(t) => dataset.with_y_axis_title(t),
        None => dataset,
    })
}

pub fn load_config(path: Option<&Path>) -> Result<ChartConfig> {
    let Some(path) = path else { return Ok(ChartConfig::default()) };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ChartConfig::from_json_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Rows are grouped by category in order of first appearance; within a
/// category, row order decides the series index.
fn load_csv(path: &Path) -> Result<ChartDataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut categories: Vec<Category> = Vec::new();
    for (line, rec) in rdr.deserialize::<Row>().enumerate() {
        let row = rec.with_context(|| format!("{}: row {}", path.display(), line + 1))?;
        let idx = match categories.iter().position(|c| c.title == row.category) {
            Some(i) => i,
            None => {
                categories.push(Category::new(row.category, SeriesGroup::default()));
                categories.len() - 1
            }
        };
        let group = &mut categories[idx].series_groups[0];
        group.labels.push(row.label);
        group.values.push(row.value);
    }
    tracing::info!(categories = categories.len(), path = %path.display(), "loaded CSV");
    Ok(ChartDataset::new(categories))
}
