// File: crates/multiline-core/src/tooltip.rs
// Summary: Tooltip content rule, the label-formatting capability and show/hide state.

use crate::geometry::Point;
use crate::series::PlottedPoint;

/// `[dy, dx]` offset of the tooltip from the top-center of the hovered marker.
pub const TOOLTIP_OFFSET: (f64, f64) = (-10.0, 0.0);

/// Optional capability that overrides the default tooltip text for a point.
/// Returning `None` falls back to the default rule.
pub trait LabelFormatter {
    fn point_to_label(&self, point: &PlottedPoint) -> Option<String>;
}

impl<F> LabelFormatter for F
where
    F: Fn(&PlottedPoint) -> Option<String>,
{
    fn point_to_label(&self, point: &PlottedPoint) -> Option<String> {
        self(point)
    }
}

/// Text shown for `point`: the formatter's answer if any, else `"label: value"`
/// when the point is labelled, else the bare value.
pub fn tooltip_text(point: &PlottedPoint, formatter: Option<&dyn LabelFormatter>) -> String {
    if let Some(text) = formatter.and_then(|f| f.point_to_label(point)) {
        return text;
    }
    match point.label.as_deref().filter(|l| !l.is_empty()) {
        Some(label) => format!("{}: {}", label, point.raw_value),
        None => point.raw_value.to_string(),
    }
}

/// Tooltip currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub text: String,
    /// Bottom-center of the tooltip box, in surface coordinates.
    pub anchor: Point,
    /// (series, point) of the marker that opened it.
    pub target: (usize, usize),
}

/// Show/hide contract of the tooltip widget plus its style hooks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub class: Option<String>,
    pub title_class: Option<String>,
    content: Option<TooltipContent>,
}

impl Tooltip {
    pub fn new(class: Option<String>, title_class: Option<String>) -> Self {
        Self { class, title_class, content: None }
    }

    /// Show `text` above a marker whose top-center is `marker_top`.
    pub fn show(&mut self, text: String, marker_top: Point, target: (usize, usize)) {
        let anchor = marker_top.offset(TOOLTIP_OFFSET.1, TOOLTIP_OFFSET.0);
        self.content = Some(TooltipContent { text, anchor, target });
    }

    pub fn hide(&mut self) {
        self.content = None;
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.content.as_ref().map(|c| c.text.as_str())
    }
}
