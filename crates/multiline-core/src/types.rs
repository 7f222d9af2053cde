// File: crates/multiline-core/src/types.rs
// Summary: Shared types and constants (surface size, chart margins).

/// Default surface width in pixels.
pub const WIDTH: f64 = 640.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 320.0;

/// Drawing-surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

/// Chart margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    /// Room left of the y-axis for tick labels (only when a y title is set).
    pub y_axis_offset: f64,
    /// Gap between the y-axis and the plot area (only when a y title is set).
    pub y_axis_width: f64,
    /// Room below the plot for the x-axis (only when categories are titled).
    pub x_axis_offset: f64,
}

impl Margin {
    /// Horizontal space not available to the plot.
    pub fn hsum(&self) -> f64 {
        self.left + self.right + self.y_axis_offset + self.y_axis_width
    }
    /// Vertical space not available to the plot.
    pub fn vsum(&self) -> f64 {
        self.top + self.bottom + self.x_axis_offset
    }
    /// Offset of the plot group from the surface origin.
    pub fn plot_origin(&self) -> (f64, f64) {
        (self.left + self.y_axis_offset + self.y_axis_width, self.top)
    }
}
