// File: crates/multiline-core/tests/svg.rs
// Purpose: SVG serialization keeps the structure and style hooks of the scene.

use multiline_core::{render_svg, Category, ChartConfig, ChartDataset, MultiLineChart, SeriesGroup, Size};

fn chart(config: ChartConfig) -> MultiLineChart {
    let mut chart = MultiLineChart::new(config, Size::new(200.0, 100.0)).unwrap();
    let data = ChartDataset::new(vec![
        Category::new("R<1>", SeriesGroup::new(["Locke", "Reyes"], vec![4.0, 8.0])),
        Category::new("R2", SeriesGroup::new(["Locke", "Reyes"], vec![2.0, 6.0])),
    ])
    .with_y_axis_title("Score");
    chart.set_data(data).unwrap();
    chart
}

#[test]
fn svg_has_axes_lines_and_markers() {
    let config = ChartConfig { point_class: Some("dot".into()), ..ChartConfig::default() };
    let svg = render_svg(chart(config).scene());
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"100\""));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("<g class=\"x axis\""));
    assert!(svg.contains("<g class=\"y axis\""));
    assert!(svg.contains(">Score</text>"));
    assert!(svg.contains(">R&lt;1&gt;</text>"));
    assert_eq!(svg.matches("<path class=\"line\"").count(), 2);
    assert_eq!(svg.matches("<circle class=\"dot\"").count(), 4);
    assert!(svg.contains("stroke=\"#1f77b4\""));
    assert!(svg.contains("fill=\"none\""));
    // plot group offset: y-axis offset + width, tip height
    assert!(svg.contains("<g transform=\"translate(30,10)\">"));
}

#[test]
fn svg_includes_visible_tooltip() {
    let config = ChartConfig {
        tip_class: Some("tip".into()),
        title_tip_class: Some("tip-title".into()),
        ..ChartConfig::default()
    };
    let mut chart = chart(config);
    assert!(!render_svg(chart.scene()).contains("class=\"tip\""));

    let m = chart.scene().markers().next().unwrap().clone();
    let o = chart.scene().plot_origin;
    chart.pointer_move(o.x + m.point.x_pixel, o.y + m.point.y_pixel);
    let svg = render_svg(chart.scene());
    assert!(svg.contains("<g class=\"tip\""));
    assert!(svg.contains("<text class=\"tip-title\""));
    assert!(svg.contains(">Locke: 4</text>"));
}
