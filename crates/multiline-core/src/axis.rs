// File: crates/multiline-core/src/axis.rs
// Summary: Axis model (orientation, placement, ticks, optional title) built from the layout scales.

use crate::geometry::Point;
use crate::scale::{BandScale, LinearScale};

/// Number of ticks requested from the value scale.
pub const Y_TICKS: usize = 5;
/// Tick mark length in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between tick mark and tick label.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Offset along the axis, relative to the axis origin.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    /// Surface position of the axis' local origin.
    pub origin: Point,
    /// Extent of the domain line along the axis.
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
    /// Rotated title (y-axis only).
    pub title: Option<String>,
}

impl Axis {
    /// Category axis: one tick per band center, labelled with the band key.
    pub fn bottom(scale: &BandScale<String>, origin: Point) -> Self {
        let ticks = scale
            .domain()
            .iter()
            .filter_map(|key| scale.center(key).map(|offset| Tick { offset, label: key.clone() }))
            .collect();
        Self { orient: Orient::Bottom, origin, extent: scale.range_extent(), ticks, title: None }
    }

    /// Value axis with `count` nice ticks and a rotated title.
    pub fn left(scale: &LinearScale, count: usize, origin: Point, title: impl Into<String>) -> Self {
        let format = scale.tick_format(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { offset: scale.to_px(v), label: format(v) })
            .collect();
        let extent = (scale.range.0.min(scale.range.1), scale.range.0.max(scale.range.1));
        Self { orient: Orient::Left, origin, extent, ticks, title: Some(title.into()) }
    }

    /// CSS class of the axis group.
    pub fn class(&self) -> &'static str {
        match self.orient {
            Orient::Bottom => "x axis",
            Orient::Left => "y axis",
        }
    }

    /// Surface position of the tick mark's outer end for `tick`.
    pub fn tick_end(&self, tick: &Tick) -> Point {
        match self.orient {
            Orient::Bottom => self.origin.offset(tick.offset, TICK_SIZE),
            Orient::Left => self.origin.offset(-TICK_SIZE, tick.offset),
        }
    }

    /// Surface position where the tick label is anchored.
    pub fn label_anchor(&self, tick: &Tick) -> Point {
        match self.orient {
            Orient::Bottom => self.origin.offset(tick.offset, TICK_SIZE + TICK_PADDING),
            Orient::Left => self.origin.offset(-(TICK_SIZE + TICK_PADDING), tick.offset),
        }
    }

    /// Endpoints of the domain line in surface coordinates.
    pub fn domain_line(&self) -> (Point, Point) {
        match self.orient {
            Orient::Bottom => (self.origin.offset(self.extent.0, 0.0), self.origin.offset(self.extent.1, 0.0)),
            Orient::Left => (self.origin.offset(0.0, self.extent.0), self.origin.offset(0.0, self.extent.1)),
        }
    }
}
