// File: crates/multiline-core/src/series.rs
// Summary: Derived per-series point sequences in plot-pixel space.

use crate::geometry::Point;

/// One marker position plus the datum it was derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct PlottedPoint {
    pub x_pixel: f64,
    pub y_pixel: f64,
    pub label: Option<String>,
    pub raw_value: f64,
}

impl PlottedPoint {
    pub fn new(x_pixel: f64, y_pixel: f64, label: Option<String>, raw_value: f64) -> Self {
        Self { x_pixel, y_pixel, label, raw_value }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x_pixel, self.y_pixel)
    }
}

/// All points of series `index`, one per category, in category order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineSeries {
    pub index: usize,
    pub points: Vec<PlottedPoint>,
}

impl LineSeries {
    pub fn with_capacity(index: usize, categories: usize) -> Self {
        Self { index, points: Vec::with_capacity(categories) }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn positions(&self) -> Vec<Point> {
        self.points.iter().map(PlottedPoint::position).collect()
    }
}
