// File: crates/multiline-core/src/render.rs
// Summary: Builds the scene (axes, series paths, markers, tooltip hooks) from layout and derived series.

use crate::axis::{Axis, Y_TICKS};
use crate::color::ColorCycle;
use crate::geometry::Point;
use crate::layout::{Layout, RenderContext};
use crate::scene::{Element, LineElement, Marker, Scene};
use crate::series::LineSeries;
use crate::tooltip::Tooltip;

/// Extra gap between the plot bottom and the x-axis line.
const X_AXIS_GAP: f64 = 2.0;

/// Draw one full chart. Colors are taken from `colors` in series order; the
/// caller rewinds the cycle beforehand so repeated redraws match.
pub fn render(ctx: &RenderContext<'_>, layout: &Layout, series: &[LineSeries], colors: &mut ColorCycle) -> Scene {
    let config = ctx.config;
    let margin = layout.margin;
    let (ox, oy) = layout.plot_origin();

    let mut scene = Scene::new(layout.size, Point::new(ox, oy));
    scene.tooltip = Tooltip::new(config.tip_class.clone(), config.title_tip_class.clone());

    if layout.show_x_axis {
        let origin = Point::new(
            margin.y_axis_offset + margin.y_axis_width,
            layout.height + margin.top + X_AXIS_GAP,
        );
        scene.push(Element::Axis(Axis::bottom(&layout.x0, origin)));
    }
    if let (true, Some(title)) = (layout.show_y_axis, ctx.dataset.y_title()) {
        let origin = Point::new(margin.y_axis_offset, margin.top);
        scene.push(Element::Axis(Axis::left(&layout.y, Y_TICKS, origin, title)));
    }

    for s in series {
        let color = colors.next_color();
        scene.push(Element::Line(LineElement {
            series: s.index,
            path: config.interpolation.path(&s.positions()),
            stroke: color,
            stroke_width: config.line_width,
        }));
        for (index, point) in s.points.iter().enumerate() {
            scene.push(Element::Marker(Marker {
                series: s.index,
                index,
                radius: config.point_radius,
                class: config.point_class.clone(),
                fill: color,
                point: point.clone(),
            }));
        }
    }

    tracing::debug!(series = series.len(), elements = scene.elements().len(), "scene rendered");
    scene
}
