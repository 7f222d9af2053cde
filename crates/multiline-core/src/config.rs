// File: crates/multiline-core/src/config.rs
// Summary: Chart options with their defaults, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::color::ColorCycle;
use crate::curve::Interpolation;
use crate::error::{ChartError, Result};

/// Options recognised by the chart. Field names serialize in camelCase
/// (`pointRadius`, `tipHeight`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    /// Marker circle radius.
    pub point_radius: f64,
    /// Stroke width of line paths.
    pub line_width: f64,
    /// Top margin reserved so tooltips and markers near the maximum stay visible.
    pub tip_height: f64,
    #[serde(with = "interpolation_name")]
    pub interpolation: Interpolation,
    /// Style hook for the tooltip box.
    pub tip_class: Option<String>,
    /// Style hook for the tooltip text.
    pub title_tip_class: Option<String>,
    /// Style hook for markers.
    pub point_class: Option<String>,
    /// Room reserved below the plot for the x-axis.
    pub axis_offset_x: f64,
    /// Room reserved left of the y-axis for its tick labels.
    pub axis_offset_y: f64,
    /// Gap between the y-axis and the plot.
    pub y_axis_width: f64,
    /// Palette for the lines, cycled in series order.
    pub line_colors: Option<Vec<String>>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            point_radius: 3.0,
            line_width: 1.5,
            tip_height: 10.0,
            interpolation: Interpolation::Basis,
            tip_class: None,
            title_tip_class: None,
            point_class: None,
            axis_offset_x: 20.0,
            axis_offset_y: 20.0,
            y_axis_width: 10.0,
            line_colors: None,
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        // surface a bad curve name as such rather than as a generic JSON error
        if let Some(name) = value.get("interpolation").and_then(|v| v.as_str()) {
            name.parse::<Interpolation>()?;
        }
        serde_json::from_value(value).map_err(ChartError::from)
    }

    pub fn with_interpolation(mut self, name: &str) -> Result<Self> {
        self.interpolation = name.parse()?;
        Ok(self)
    }

    /// Color service seeded with `line_colors`, or the default palette.
    pub fn color_cycle(&self) -> Result<ColorCycle> {
        match &self.line_colors {
            Some(names) => ColorCycle::from_names(names),
            None => Ok(ColorCycle::default()),
        }
    }
}

mod interpolation_name {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    use crate::curve::Interpolation;

    pub fn serialize<S: Serializer>(i: &Interpolation, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(i.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Interpolation, D::Error> {
        let name = String::deserialize(d)?;
        name.parse().map_err(D::Error::custom)
    }
}
