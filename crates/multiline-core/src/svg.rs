// File: crates/multiline-core/src/svg.rs
// Summary: Serializes a scene as standalone SVG, keeping axis/marker/tooltip classes as style hooks.

use crate::axis::{Axis, Orient};
use crate::color::{opacity, to_hex};
use crate::curve::fmt_num;
use crate::scene::{Element, Scene};

const FONT: &str = "sans-serif";
const FONT_SIZE: f64 = 10.0;

/// Standalone SVG document for `scene`. Lines and markers sit inside one
/// group translated to the plot origin.
pub fn render_svg(scene: &Scene) -> String {
    let w = fmt_num(scene.size.width);
    let h = fmt_num(scene.size.height);
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    ));

    for axis in scene.axes() {
        push_axis(&mut svg, axis);
    }

    svg.push_str(&format!(
        "<g transform=\"translate({},{})\">",
        fmt_num(scene.plot_origin.x),
        fmt_num(scene.plot_origin.y)
    ));
    for element in scene.elements() {
        match element {
            Element::Line(line) => {
                if line.path.is_empty() {
                    continue;
                }
                svg.push_str(&format!(
                    "<path class=\"line\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                    line.path.to_svg(),
                    to_hex(line.stroke),
                    fmt_num(line.stroke_width),
                    opacity_attr("stroke-opacity", line.stroke),
                ));
            }
            Element::Marker(marker) => {
                let class = marker
                    .class
                    .as_deref()
                    .map(|c| format!(" class=\"{}\"", escape_xml(c)))
                    .unwrap_or_default();
                svg.push_str(&format!(
                    "<circle{} r=\"{}\" transform=\"translate({},{})\" fill=\"{}\"{}/>",
                    class,
                    fmt_num(marker.radius),
                    fmt_num(marker.point.x_pixel),
                    fmt_num(marker.point.y_pixel),
                    to_hex(marker.fill),
                    opacity_attr("fill-opacity", marker.fill),
                ));
            }
            Element::Axis(_) => {}
        }
    }
    svg.push_str("</g>");

    if let Some(content) = scene.tooltip.content() {
        let class = scene.tooltip.class.as_deref().unwrap_or("tooltip");
        svg.push_str(&format!(
            "<g class=\"{}\" transform=\"translate({},{})\">",
            escape_xml(class),
            fmt_num(content.anchor.x),
            fmt_num(content.anchor.y)
        ));
        let title_class = scene
            .tooltip
            .title_class
            .as_deref()
            .map(|c| format!(" class=\"{}\"", escape_xml(c)))
            .unwrap_or_default();
        svg.push_str(&format!(
            "<text{} text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"12\">{}</text>",
            title_class,
            escape_xml(&content.text)
        ));
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

fn push_axis(svg: &mut String, axis: &Axis) {
    svg.push_str(&format!(
        "<g class=\"{}\" transform=\"translate({},{})\">",
        axis.class(),
        fmt_num(axis.origin.x),
        fmt_num(axis.origin.y)
    ));
    let (a, b) = axis.domain_line();
    let (a, b) = (a.offset(-axis.origin.x, -axis.origin.y), b.offset(-axis.origin.x, -axis.origin.y));
    svg.push_str(&format!(
        "<path class=\"domain\" d=\"M{},{}L{},{}\" fill=\"none\" stroke=\"#000\"/>",
        fmt_num(a.x),
        fmt_num(a.y),
        fmt_num(b.x),
        fmt_num(b.y)
    ));

    for tick in &axis.ticks {
        let end = axis.tick_end(tick).offset(-axis.origin.x, -axis.origin.y);
        let at = axis.label_anchor(tick).offset(-axis.origin.x, -axis.origin.y);
        let (x1, y1, anchor, dy) = match axis.orient {
            Orient::Bottom => (tick.offset, 0.0, "middle", "0.71em"),
            Orient::Left => (0.0, tick.offset, "end", "0.32em"),
        };
        svg.push_str(&format!(
            "<g class=\"tick\"><line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#000\"/>\
             <text x=\"{}\" y=\"{}\" dy=\"{dy}\" text-anchor=\"{anchor}\" font-family=\"{FONT}\" font-size=\"{}\">{}</text></g>",
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(end.x),
            fmt_num(end.y),
            fmt_num(at.x),
            fmt_num(at.y),
            fmt_num(FONT_SIZE),
            escape_xml(&tick.label)
        ));
    }

    if let Some(title) = &axis.title {
        svg.push_str(&format!(
            "<text transform=\"rotate(-90)\" y=\"5\" dy=\".71em\" text-anchor=\"end\" font-family=\"{FONT}\" font-size=\"{}\">{}</text>",
            fmt_num(FONT_SIZE),
            escape_xml(title)
        ));
    }
    svg.push_str("</g>");
}

fn opacity_attr(name: &str, c: skia_safe::Color) -> String {
    let a = opacity(c);
    if a >= 1.0 {
        String::new()
    } else {
        format!(" {name}=\"{}\"", fmt_num(a))
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
