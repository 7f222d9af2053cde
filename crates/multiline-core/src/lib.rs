// File: crates/multiline-core/src/lib.rs
// Summary: Core library entry point; exports the multi-series line chart API.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod curve;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod normalize;
pub mod raster;
pub mod render;
pub mod resize;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod text;
pub mod tooltip;
pub mod types;

pub use chart::{ContainerSize, MultiLineChart, RedrawReport};
pub use color::ColorCycle;
pub use config::ChartConfig;
pub use curve::{Interpolation, PathData};
pub use dataset::{Category, ChartDataset, SeriesGroup};
pub use error::{ChartError, Result};
pub use geometry::Point;
pub use layout::{Layout, RenderContext};
pub use normalize::normalize;
pub use raster::RenderOptions;
pub use resize::{ResizeNotifier, Subscription};
pub use scene::{Element, Scene};
pub use series::{LineSeries, PlottedPoint};
pub use svg::render_svg;
pub use text::TextShaper;
pub use tooltip::{LabelFormatter, Tooltip};
pub use types::{Margin, Size};
