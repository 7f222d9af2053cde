// File: crates/multiline-core/src/normalize.rs
// Summary: Flattens category-major data into one pixel-space point sequence per series.

use crate::dataset::ChartDataset;
use crate::error::{ChartError, Result};
use crate::scale::LinearScale;
use crate::series::{LineSeries, PlottedPoint};

/// Transpose `categories[c].series_groups[0].values[i]` into `series[i].points[c]`.
///
/// Every series shares the same x per category: `c * bar + bar / 2` with
/// `bar = width / K`. The series count `N` comes from category 0; any other
/// count is rejected before a single point is produced.
pub fn normalize(dataset: &ChartDataset, y: &LinearScale, width: f64) -> Result<Vec<LineSeries>> {
    let k = dataset.categories.len();
    if k == 0 {
        return Err(ChartError::EmptyDataset);
    }

    let mut groups = Vec::with_capacity(k);
    for (c, category) in dataset.categories.iter().enumerate() {
        let group = category.primary().ok_or(ChartError::MissingSeriesGroup { category: c })?;
        groups.push(group);
    }
    let n = groups[0].values.len();
    if let Some((c, g)) = groups.iter().enumerate().find(|(_, g)| g.values.len() != n) {
        return Err(ChartError::MismatchedSeriesLength { category: c, expected: n, found: g.values.len() });
    }

    let bar = width / k as f64;
    let mut series: Vec<LineSeries> = (0..n).map(|i| LineSeries::with_capacity(i, k)).collect();
    for (c, group) in groups.iter().enumerate() {
        let x = c as f64 * bar + bar / 2.0;
        for (i, &value) in group.values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ChartError::NonNumericValue { category: c, group: 0, index: i });
            }
            let label = group.label(i).map(str::to_string);
            series[i].points.push(PlottedPoint::new(x, y.to_px(value), label, value));
        }
    }

    tracing::debug!(series = n, categories = k, "normalized");
    Ok(series)
}
