// File: crates/multiline-core/src/layout.rs
// Summary: Margins, drawable area and the x0/x1/y scales derived from surface size and data.

use crate::config::ChartConfig;
use crate::dataset::ChartDataset;
use crate::error::{ChartError, Result};
use crate::scale::{BandScale, LinearScale};
use crate::types::{Margin, Size};

/// Inner padding between category bands (fraction of a step).
pub const BAND_PADDING: f64 = 0.1;

/// Everything a single redraw works from. Built fresh for every pass and
/// never stored between redraws.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub size: Size,
    pub dataset: &'a ChartDataset,
    pub config: &'a ChartConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(size: Size, dataset: &'a ChartDataset, config: &'a ChartConfig) -> Self {
        Self { size, dataset, config }
    }
}

#[derive(Clone, Debug)]
pub struct Layout {
    pub size: Size,
    pub margin: Margin,
    /// Plot-area width (`width'`).
    pub width: f64,
    /// Plot-area height (`height'`).
    pub height: f64,
    /// Category titles → bands across the plot width.
    pub x0: BandScale<String>,
    /// Category index → sub-band within one `x0` band. Not used for placement.
    pub x1: BandScale<usize>,
    /// Value → pixel, `[0, max]` onto `[height, 0]`.
    pub y: LinearScale,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
}

impl Layout {
    pub fn compute(ctx: &RenderContext<'_>) -> Result<Self> {
        let RenderContext { size, dataset, config } = *ctx;
        let has_titles = dataset.has_category_titles();
        let y_title = dataset.y_title();

        let mut margin = Margin {
            top: config.tip_height.max(0.0),
            right: 1.0,
            ..Margin::default()
        };
        if y_title.is_some() {
            margin.y_axis_offset = config.axis_offset_y.max(0.0);
            margin.y_axis_width = config.y_axis_width.max(0.0);
        }
        if has_titles {
            margin.x_axis_offset = config.axis_offset_x.max(0.0);
        }

        let width = (size.width - margin.hsum()).max(0.0);
        let height = (size.height - margin.vsum()).max(0.0);

        let y_max = value_extent(dataset)?;
        let y = LinearScale::new((0.0, y_max), (height, 0.0));

        let x0 = BandScale::round_bands(
            dataset.categories.iter().map(|c| c.title.clone()),
            (0.0, width),
            BAND_PADDING,
            BAND_PADDING,
        );
        let x1 = BandScale::round_bands(0..dataset.categories.len(), (0.0, x0.bandwidth()), 0.0, 0.0);

        let non_empty = !dataset.is_empty();
        tracing::debug!(width, height, y_max, categories = dataset.categories.len(), "layout computed");

        Ok(Self {
            size,
            margin,
            width,
            height,
            x0,
            x1,
            y,
            show_x_axis: non_empty && has_titles,
            show_y_axis: non_empty && y_title.is_some(),
        })
    }

    /// Offset of the plot group from the surface origin.
    pub fn plot_origin(&self) -> (f64, f64) {
        self.margin.plot_origin()
    }
}

/// Largest value over every group of every category (0 for an empty dataset).
/// Values must be finite and non-negative for the zero-based axis.
fn value_extent(dataset: &ChartDataset) -> Result<f64> {
    let mut max = 0.0f64;
    for (category, group, index, value) in dataset.all_values() {
        if !value.is_finite() {
            return Err(ChartError::NonNumericValue { category, group, index });
        }
        if value < 0.0 {
            return Err(ChartError::NegativeValue { category, group, index, value });
        }
        max = max.max(value);
    }
    Ok(max)
}
