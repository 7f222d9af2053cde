// File: crates/multiline-core/src/scene.rs
// Summary: Retained drawing surface: ordered chart elements, marker hit-testing and tooltip state.

use skia_safe as skia;

use crate::axis::Axis;
use crate::curve::PathData;
use crate::geometry::Point;
use crate::series::PlottedPoint;
use crate::tooltip::{tooltip_text, LabelFormatter, Tooltip};
use crate::types::Size;

/// Stroked path of one series, in plot coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct LineElement {
    pub series: usize,
    pub path: PathData,
    pub stroke: skia::Color,
    pub stroke_width: f64,
}

/// Hoverable point marker, in plot coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub series: usize,
    pub index: usize,
    pub radius: f64,
    pub class: Option<String>,
    pub fill: skia::Color,
    pub point: PlottedPoint,
}

impl Marker {
    pub fn center(&self) -> Point {
        self.point.position()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Axis(Axis),
    Line(LineElement),
    Marker(Marker),
}

/// What a redraw leaves behind. Elements are kept in paint order; lines and
/// markers live in the plot group translated by `plot_origin`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub size: Size,
    pub plot_origin: Point,
    pub tooltip: Tooltip,
    elements: Vec<Element>,
}

impl Scene {
    pub fn new(size: Size, plot_origin: Point) -> Self {
        Self { size, plot_origin, tooltip: Tooltip::default(), elements: Vec::new() }
    }

    /// Drop every element and hide the tooltip.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.tooltip.hide();
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.elements.iter().filter_map(|e| match e {
            Element::Axis(a) => Some(a),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineElement> {
        self.elements.iter().filter_map(|e| match e {
            Element::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.elements.iter().filter_map(|e| match e {
            Element::Marker(m) => Some(m),
            _ => None,
        })
    }

    /// Topmost marker under a surface-space position.
    pub fn marker_at(&self, pos: Point) -> Option<&Marker> {
        let local = pos.offset(-self.plot_origin.x, -self.plot_origin.y);
        self.markers()
            .filter(|m| m.center().distance(local) <= m.radius)
            .last()
    }

    /// Pointer moved to `pos`: show the tooltip for the marker under it, or hide
    /// it when the pointer left the marker that opened it. Returns whether the
    /// tooltip changed.
    pub fn hover(&mut self, pos: Point, formatter: Option<&dyn LabelFormatter>) -> bool {
        let hit = self.marker_at(pos).map(|m| {
            let top = Point::new(
                self.plot_origin.x + m.point.x_pixel,
                self.plot_origin.y + m.point.y_pixel - m.radius,
            );
            (tooltip_text(&m.point, formatter), top, (m.series, m.index))
        });
        match hit {
            Some((text, top, target)) => {
                let same = self.tooltip.content().map(|c| c.target) == Some(target);
                if !same {
                    self.tooltip.show(text, top, target);
                }
                !same
            }
            None => self.hover_end(),
        }
    }

    /// Pointer left the markers (or the surface). Returns whether the tooltip was visible.
    pub fn hover_end(&mut self) -> bool {
        let was_visible = self.tooltip.is_visible();
        self.tooltip.hide();
        was_visible
    }
}
